use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::PresetLevel;
use crate::core::FieldKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PresetArg {
    /// One digit after the decimal point (default)
    Strict,
    /// Two digits after the decimal point
    Loose,
}

impl From<PresetArg> for PresetLevel {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Strict => PresetLevel::Strict,
            PresetArg::Loose => PresetLevel::Loose,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable labels
    Terminal,
    /// The render instruction as JSON
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FieldArg {
    /// Body mass in kilograms
    Weight,
    /// Body height in centimeters
    Height,
}

impl From<FieldArg> for FieldKind {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Weight => FieldKind::Primary,
            FieldArg::Height => FieldKind::Secondary,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "bmiscale")]
#[command(about = "Body mass index form with live input checking", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Input digit policy; overrides the [input] table of the config file
    #[arg(long, value_enum, global = true, env = "BMISCALE_PRESET")]
    pub preset: Option<PresetArg>,

    /// Config file to use instead of searching for .bmiscale.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive form (default)
    Form,

    /// Submit a weight and a height and print the result
    Evaluate {
        /// Weight as typed, in kilograms
        #[arg(long, allow_hyphen_values = true)]
        weight: String,

        /// Height as typed, in centimeters
        #[arg(long, allow_hyphen_values = true)]
        height: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Run the keystroke pipeline once on a text
    Sanitize {
        /// Text as typed
        #[arg(allow_hyphen_values = true)]
        text: String,

        /// Field the text is typed into
        #[arg(long, value_enum, default_value = "weight")]
        field: FieldArg,
    },

    /// Write a default .bmiscale.toml to the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    Cli::parse()
}
