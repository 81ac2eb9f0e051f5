use colored::*;
use serde::Serialize;
use std::io::{self, Write};

use crate::cli::OutputFormat;
use crate::config::{BmiScaleConfig, RangeLimits};
use crate::core::{FieldKind, Result};
use crate::form::{field_error_text, FormHandlers, FormState, RenderInstruction, BANNER_TEXT};
use crate::metric::Category;

/// Field texts after sanitizing, plus the submit instruction.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluateReport {
    pub weight: String,
    pub height: String,
    pub accepted: bool,
    pub category: Option<Category>,
    pub metric: Option<f64>,
    pub instruction: RenderInstruction,
}

impl EvaluateReport {
    /// Type both texts into a blank form and submit it.
    pub fn build(handlers: &FormHandlers, weight: &str, height: &str) -> (Self, FormState) {
        let mut state = FormState::with_texts(weight, height);
        for kind in FieldKind::ALL {
            handlers.handle_input(&state, kind).apply(&mut state);
        }
        let submission = handlers.evaluate(&state);
        let instruction = RenderInstruction::from_submission(&submission);
        instruction.apply(&mut state);

        let evaluation = submission.outcome.as_ref().ok();
        let report = Self {
            weight: state.primary.raw_text.clone(),
            height: state.secondary.raw_text.clone(),
            accepted: evaluation.is_some(),
            category: evaluation.map(|e| e.category),
            metric: evaluation.map(|e| e.metric),
            instruction,
        };
        (report, state)
    }
}

fn category_color(category: Category) -> Color {
    match category {
        Category::Underweight => Color::Blue,
        Category::Normal => Color::Green,
        Category::Overweight => Color::Yellow,
        Category::Obesity => Color::Red,
    }
}

/// Write the outcome of a submission for a terminal reader.
pub fn write_terminal<W: Write>(
    writer: &mut W,
    report: &EvaluateReport,
    state: &FormState,
    range: &RangeLimits,
) -> io::Result<()> {
    if state.banner_visible {
        writeln!(writer, "{}", BANNER_TEXT.red().bold())?;
        for kind in FieldKind::ALL {
            if state.feedback(kind).error_visible {
                writeln!(
                    writer,
                    "  {}: {}",
                    kind.label(),
                    field_error_text(kind, range).red()
                )?;
            }
        }
        return Ok(());
    }

    let result = &state.result;
    let color = report.category.map(category_color).unwrap_or(Color::White);

    writeln!(writer, "{}", result.category_label.color(color).bold())?;
    writeln!(writer, "{}", result.message_label)?;
    writeln!(
        writer,
        "{} {:.1}%",
        "Scale position:".dimmed(),
        result.indicator_offset
    )?;
    Ok(())
}

/// Write the report as pretty JSON followed by a newline.
pub fn write_json<W: Write>(writer: &mut W, report: &EvaluateReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)?;
    Ok(())
}

/// Evaluate one pair of texts and print the outcome.
///
/// Returns whether the submission was accepted.
pub fn evaluate(
    config: &BmiScaleConfig,
    weight: &str,
    height: &str,
    format: OutputFormat,
) -> Result<bool> {
    let handlers = FormHandlers::new(config);
    let (report, state) = EvaluateReport::build(&handlers, weight, height);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Terminal => write_terminal(&mut out, &report, &state, &config.range)?,
        OutputFormat::Json => write_json(&mut out, &report)?,
    }
    Ok(report.accepted)
}
