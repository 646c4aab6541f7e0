use std::path::PathBuf;

use chrono::{DateTime, Utc};
use seatscore_evaluator::ScoreBreakdown;
use seatscore_model::Layout;
use serde::{Deserialize, Serialize};

/// Evaluation result as written by `seatscore evaluate`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EvaluationReport {
    /// Timestamp when the evaluation was run (ISO 8601 format)
    pub evaluated_at: DateTime<Utc>,
    pub instance: PathBuf,
    pub solution: PathBuf,
    /// Layout the solution was checked against
    pub layout: Layout,
    pub total_points: i64,
    /// Per-student records, in instance order
    pub breakdown: Vec<ScoreBreakdown>,
}
