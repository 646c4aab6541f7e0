use seatscore_model::{Location, ParseLocationError, StudentId};

use crate::table::TableError;

/// Reason an evaluation was rejected.
///
/// Every variant is terminal: the evaluation stops at the first problem found and no partial
/// score is produced.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum EvaluationError {
    #[display("instance unreadable: {_0}")]
    InstanceUnreadable(TableError),
    #[display("solution unreadable: {_0}")]
    SolutionUnreadable(TableError),
    #[display("duplicate students in solution: student {id} appears more than once")]
    DuplicateStudents { id: StudentId },
    #[display("duplicate locations in solution: '{location}' is assigned more than once")]
    DuplicateLocations { location: String },
    #[display("{_0}")]
    MalformedLocation(ParseLocationError),
    #[display("student {id} not placed in the solution")]
    StudentNotPlaced { id: StudentId },
    #[display("invalid seat {location} for student {id}")]
    InvalidSeat { id: StudentId, location: Location },
    #[display("referenced student {id} not placed in the solution (referenced by student {referenced_by})")]
    ReferencedStudentNotPlaced {
        id: StudentId,
        referenced_by: StudentId,
    },
}
