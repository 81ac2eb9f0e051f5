use anyhow::{Context, Result};
use bmiscale::cli::{self, Commands};
use bmiscale::config::{load_config, load_config_file, BmiScaleConfig, PresetLevel};
use bmiscale::observability::{init_tracing, install_panic_hook};
use std::process::ExitCode;

// Main orchestrator function
fn main() -> Result<ExitCode> {
    install_panic_hook();
    init_tracing();

    let cli = cli::parse_args();
    let config = build_config(cli.config.as_deref(), cli.preset.map(PresetLevel::from))?;

    match cli.command.unwrap_or(Commands::Form) {
        Commands::Form => bmiscale::commands::run_form(&config)?,
        Commands::Evaluate {
            weight,
            height,
            format,
        } => {
            let accepted = bmiscale::commands::evaluate(&config, &weight, &height, format)?;
            if !accepted {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Sanitize { text, field } => {
            bmiscale::commands::sanitize(&config, field.into(), &text)?
        }
        Commands::Init { force } => bmiscale::commands::init_config(force)?,
    }
    Ok(ExitCode::SUCCESS)
}

// Config file first, then the preset on top of it
fn build_config(
    path: Option<&std::path::Path>,
    preset: Option<PresetLevel>,
) -> Result<BmiScaleConfig> {
    let mut config = match path {
        Some(path) => load_config_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => load_config(),
    };
    if let Some(preset) = preset {
        preset.apply_to(&mut config);
    }
    tracing::debug!(?config, "effective configuration");
    Ok(config)
}
