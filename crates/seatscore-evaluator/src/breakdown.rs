use seatscore_model::{Location, StudentId};
use serde::{Deserialize, Serialize};

/// Placement and points of one student.
///
/// The flat `(cluster, row, seat, points)` shape is meant to be grouped by cluster downstream,
/// e.g. into a row × seat heat grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub student: StudentId,
    pub cluster: u32,
    pub row: u32,
    pub seat: u32,
    pub points: i64,
}

impl ScoreBreakdown {
    #[must_use]
    pub const fn new(student: StudentId, location: Location, points: i64) -> Self {
        Self {
            student,
            cluster: location.cluster(),
            row: location.row(),
            seat: location.seat(),
            points,
        }
    }

    #[must_use]
    pub const fn location(&self) -> Location {
        Location::new(self.cluster, self.row, self.seat)
    }
}

/// Result of a successful evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    total_points: i64,
    breakdown: Vec<ScoreBreakdown>,
}

impl Evaluation {
    /// Builds an evaluation from per-student records, summing their points.
    #[must_use]
    pub fn from_breakdown(breakdown: Vec<ScoreBreakdown>) -> Self {
        let total_points = breakdown.iter().map(|b| b.points).sum();
        Self {
            total_points,
            breakdown,
        }
    }

    #[must_use]
    pub fn total_points(&self) -> i64 {
        self.total_points
    }

    /// Per-student records, in instance order.
    #[must_use]
    pub fn breakdown(&self) -> &[ScoreBreakdown] {
        &self.breakdown
    }

    #[must_use]
    pub fn into_breakdown(self) -> Vec<ScoreBreakdown> {
        self.breakdown
    }
}
