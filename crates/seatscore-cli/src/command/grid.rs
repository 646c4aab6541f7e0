use std::io::{self, Write as _};

use anyhow::Context as _;

use crate::{command::EvaluationInputArg, heat_grid::ClusterGrid};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GridArg {
    #[clap(flatten)]
    input: EvaluationInputArg,
}

pub(crate) fn run(arg: &GridArg) -> anyhow::Result<()> {
    let (layout, evaluation) = arg.input.evaluate()?;
    let grids = ClusterGrid::from_breakdown(&layout, evaluation.breakdown());

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Total points: {}", evaluation.total_points())
        .context("Failed to write to stdout")?;
    for grid in &grids {
        writeln!(stdout).context("Failed to write to stdout")?;
        write!(stdout, "{grid}").context("Failed to write to stdout")?;
    }
    stdout.flush().context("Failed to flush stdout")?;
    Ok(())
}
