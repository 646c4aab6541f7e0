use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use seatscore_evaluator::{Evaluation, Evaluator};
use seatscore_model::Layout;

use self::{evaluate::EvaluateArg, grid::GridArg};
use crate::{logging, util};

mod evaluate;
mod grid;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Score a solution and write the total and per-student breakdown
    Evaluate(#[clap(flatten)] EvaluateArg),
    /// Score a solution and print a row × seat grid of points for every cluster
    Grid(#[clap(flatten)] GridArg),
}

/// Files shared by every command that evaluates a solution.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct EvaluationInputArg {
    /// Instance CSV file (ID,pc,pr,ps,other_id_1,other_id_2)
    instance: PathBuf,
    /// Solution CSV file (ID,Location)
    solution: PathBuf,
    /// Layout configuration file (JSON). Defaults to 4 clusters of 8 rows × 6 seats, radius 4
    #[arg(long)]
    layout: Option<PathBuf>,
}

impl EvaluationInputArg {
    pub(crate) fn evaluate(&self) -> anyhow::Result<(Layout, Evaluation)> {
        let Self {
            instance,
            solution,
            layout,
        } = self;

        let layout = util::read_layout_file(layout.as_ref())?;
        tracing::debug!(
            clusters = layout.clusters(),
            rows = layout.rows(),
            seats = layout.seats(),
            max_radius = layout.max_radius(),
            "layout loaded"
        );

        let instance_reader = util::open_table_file("instance", instance)?;
        let solution_reader = util::open_table_file("solution", solution)?;
        let evaluation = Evaluator::new(layout)
            .evaluate(instance_reader, solution_reader)
            .with_context(|| format!("Failed to evaluate {}", solution.display()))?;

        let students = evaluation.breakdown().len();
        if u64::try_from(students).is_ok_and(|n| n != layout.capacity()) {
            tracing::warn!(
                students,
                capacity = layout.capacity(),
                "number of students does not match the layout capacity"
            );
        }
        tracing::info!(
            total_points = evaluation.total_points(),
            students,
            "evaluation completed"
        );

        Ok((layout, evaluation))
    }

    pub(crate) fn instance(&self) -> &PathBuf {
        &self.instance
    }

    pub(crate) fn solution(&self) -> &PathBuf {
        &self.solution
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    logging::init(args.verbose)?;
    match args.mode {
        Mode::Evaluate(arg) => evaluate::run(&arg)?,
        Mode::Grid(arg) => grid::run(&arg)?,
    }
    Ok(())
}
