//! Evaluation engine for seating-assignment solutions.
//!
//! Given an instance (student preferences) and a solution (a seat for every student), the
//! [`Evaluator`] validates the solution and computes a score for every student, returning the
//! total together with a per-student [`ScoreBreakdown`].
//!
//! # Pipeline
//!
//! ```text
//! instance CSV ─┐
//!               ├─ table ──→ seat_index ──→ scoring (per student) ──→ Evaluation
//! solution CSV ─┘  (load)    (validate)      (instance order)         (total + breakdown)
//! ```
//!
//! - [`table`] - Loads the two CSV tables into fixed-shape records
//! - [`seat_index`] - Rejects duplicate students, duplicate locations and malformed
//!   locations, then indexes seats by student id
//! - [`scoring`] - Own-preference and relational scoring of a single student
//! - [`evaluator`] - Drives the pipeline and checks seat bounds against the [`Layout`]
//!
//! Every failure is an [`EvaluationError`] and aborts the whole evaluation; there is no
//! partial result.
//!
//! # Concurrency
//!
//! Evaluation is synchronous and side-effect free apart from reading the two inputs. Callers
//! that publish results to shared storage are responsible for serializing those writes.
//!
//! [`Layout`]: seatscore_model::Layout

pub use self::{
    breakdown::{Evaluation, ScoreBreakdown},
    error::EvaluationError,
    evaluator::Evaluator,
};

pub mod breakdown;
pub mod error;
pub mod evaluator;
pub mod scoring;
pub mod seat_index;
pub mod table;
