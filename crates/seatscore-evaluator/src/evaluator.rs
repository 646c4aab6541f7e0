//! The evaluation pipeline: load → validate → index → score → aggregate.

use std::io;

use seatscore_model::{Layout, Location, StudentPreference};

use crate::{
    breakdown::{Evaluation, ScoreBreakdown},
    error::EvaluationError,
    scoring::{self, StudentScore},
    seat_index::SeatIndex,
    table::{Instance, Solution},
};

/// Scores seating solutions against an instance for a fixed [`Layout`].
///
/// The evaluator holds no state besides its layout. Evaluations are pure functions of their
/// inputs, so one evaluator can be shared freely between threads.
///
/// # Example
///
/// ```
/// use seatscore_evaluator::Evaluator;
/// use seatscore_model::Layout;
///
/// let instance = "\
/// ID,pc,pr,ps,other_id_1,other_id_2
/// 1,1,0,0,2,-2
/// 2,0,1,0,1,1
/// ";
/// let solution = "\
/// ID,Location
/// 1,c1r1s1
/// 2,c1r1s2
/// ";
///
/// let evaluator = Evaluator::new(Layout::new(1, 1, 2, 4).unwrap());
/// let evaluation = evaluator
///     .evaluate(instance.as_bytes(), solution.as_bytes())
///     .unwrap();
///
/// // Student 1: cluster matched (1), near 2 at distance 1 (3), far from 2 at distance 1 (0).
/// // Student 2: row matched (1), near 1 twice (3 + 3).
/// assert_eq!(evaluation.breakdown()[0].points, 4);
/// assert_eq!(evaluation.breakdown()[1].points, 7);
/// assert_eq!(evaluation.total_points(), 11);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluator {
    layout: Layout,
}

impl Evaluator {
    #[must_use]
    pub const fn new(layout: Layout) -> Self {
        Self { layout }
    }

    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Reads both tables and evaluates the solution.
    pub fn evaluate<I, S>(&self, instance: I, solution: S) -> Result<Evaluation, EvaluationError>
    where
        I: io::Read,
        S: io::Read,
    {
        let instance =
            Instance::from_reader(instance).map_err(EvaluationError::InstanceUnreadable)?;
        let solution =
            Solution::from_reader(solution).map_err(EvaluationError::SolutionUnreadable)?;
        self.evaluate_tables(&instance, &solution)
    }

    /// Evaluates an already loaded solution.
    ///
    /// Students are scored in instance order and the breakdown follows that order. Solution
    /// rows for students absent from the instance are validated but not scored.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(students = instance.len(), assignments = solution.len())
    )]
    pub fn evaluate_tables(
        &self,
        instance: &Instance,
        solution: &Solution,
    ) -> Result<Evaluation, EvaluationError> {
        let seats = SeatIndex::build(solution)?;
        tracing::debug!(seats = seats.len(), "solution validated");

        let breakdown = instance
            .students()
            .iter()
            .map(|student| {
                let (location, score) = self.score_student(student, &seats)?;
                Ok(ScoreBreakdown::new(student.id, location, score.total()))
            })
            .collect::<Result<Vec<_>, EvaluationError>>()?;

        let evaluation = Evaluation::from_breakdown(breakdown);
        tracing::debug!(
            total_points = evaluation.total_points(),
            "evaluation completed"
        );
        Ok(evaluation)
    }

    /// Scores a single student, returning its validated seat and points.
    pub fn score_student(
        &self,
        student: &StudentPreference,
        seats: &SeatIndex,
    ) -> Result<(Location, StudentScore), EvaluationError> {
        let location = seats
            .get(student.id)
            .ok_or(EvaluationError::StudentNotPlaced { id: student.id })?;
        if !self.layout.contains(location) {
            return Err(EvaluationError::InvalidSeat {
                id: student.id,
                location,
            });
        }

        let max_radius = self.layout.max_radius();
        let mut score = StudentScore {
            own: scoring::own_preference_points(student, location),
            relational: [0; 2],
        };
        for (term, relation) in score.relational.iter_mut().zip(student.relations) {
            let other = seats.get(relation.target()).ok_or(
                EvaluationError::ReferencedStudentNotPlaced {
                    id: relation.target(),
                    referenced_by: student.id,
                },
            )?;
            let distance = scoring::relational_distance(location, other, max_radius);
            *term = scoring::relational_points(relation.polarity(), distance, max_radius);
        }

        Ok((location, score))
    }
}
