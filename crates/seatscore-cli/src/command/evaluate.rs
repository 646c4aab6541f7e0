use std::path::PathBuf;

use chrono::Utc;

use crate::{command::EvaluationInputArg, schema::report::EvaluationReport, util::Output};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum OutputFormat {
    /// Full report with total, layout and breakdown
    #[default]
    Json,
    /// Breakdown only, one row per student
    Csv,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct EvaluateArg {
    #[clap(flatten)]
    input: EvaluationInputArg,
    /// Output format (json or csv)
    #[arg(long, default_value = "json")]
    format: OutputFormat,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &EvaluateArg) -> anyhow::Result<()> {
    let EvaluateArg {
        input,
        format,
        output,
    } = arg;

    let (layout, evaluation) = input.evaluate()?;
    match format {
        OutputFormat::Json => {
            let report = EvaluationReport {
                evaluated_at: Utc::now(),
                instance: input.instance().clone(),
                solution: input.solution().clone(),
                layout,
                total_points: evaluation.total_points(),
                breakdown: evaluation.into_breakdown(),
            };
            Output::save_json(&report, output.clone())?;
        }
        OutputFormat::Csv => Output::save_csv(evaluation.breakdown(), output.clone())?,
    }

    if let Some(path) = output {
        tracing::info!(path = %path.display(), "breakdown saved");
    }

    Ok(())
}
