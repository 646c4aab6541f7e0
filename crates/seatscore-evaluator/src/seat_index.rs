//! Structural validation of a solution and the resulting id → location lookup.

use std::collections::{HashMap, HashSet};

use seatscore_model::{Location, StudentId};

use crate::{error::EvaluationError, table::Solution};

/// Parsed seat of every student of a solution.
#[derive(Debug, Clone, Default)]
pub struct SeatIndex {
    seats: HashMap<StudentId, Location>,
}

impl SeatIndex {
    /// Validates `solution` and indexes its seats by student id.
    ///
    /// Checks run in this order, and the first failure is returned:
    ///
    /// 1. no student id appears twice ([`EvaluationError::DuplicateStudents`]);
    /// 2. no location string appears twice ([`EvaluationError::DuplicateLocations`]);
    /// 3. every location string parses ([`EvaluationError::MalformedLocation`]).
    ///
    /// Duplicate locations are detected on the raw strings, so `c1r1s1` and `c01r1s1` are
    /// accepted even though they name the same seat. Seat bounds are not checked here.
    pub fn build(solution: &Solution) -> Result<Self, EvaluationError> {
        let assignments = solution.assignments();

        let mut ids = HashSet::with_capacity(assignments.len());
        if let Some(assignment) = assignments.iter().find(|a| !ids.insert(a.id)) {
            return Err(EvaluationError::DuplicateStudents { id: assignment.id });
        }

        let mut locations = HashSet::with_capacity(assignments.len());
        if let Some(assignment) = assignments
            .iter()
            .find(|a| !locations.insert(a.location.as_str()))
        {
            return Err(EvaluationError::DuplicateLocations {
                location: assignment.location.clone(),
            });
        }

        let mut seats = HashMap::with_capacity(assignments.len());
        for assignment in assignments {
            let location = assignment
                .location
                .parse::<Location>()
                .map_err(EvaluationError::MalformedLocation)?;
            seats.insert(assignment.id, location);
        }

        Ok(Self { seats })
    }

    #[must_use]
    pub fn get(&self, id: StudentId) -> Option<Location> {
        self.seats.get(&id).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use seatscore_model::LocationSyntax;

    use super::*;
    use crate::table::SeatAssignment;

    fn solution(rows: &[(u64, &str)]) -> Solution {
        rows.iter()
            .map(|&(id, location)| SeatAssignment::new(StudentId::new(id), location))
            .collect()
    }

    #[test]
    fn test_build_index() {
        let index = SeatIndex::build(&solution(&[(1, "c1r1s1"), (2, "c2r3s4")])).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.get(StudentId::new(1)), Some(Location::new(1, 1, 1)));
        assert_eq!(index.get(StudentId::new(2)), Some(Location::new(2, 3, 4)));
        assert_eq!(index.get(StudentId::new(3)), None);
    }

    #[test]
    fn test_duplicate_students() {
        let err = SeatIndex::build(&solution(&[(1, "c1r1s1"), (2, "c1r1s2"), (1, "c1r1s3")]))
            .unwrap_err();
        assert!(matches!(
            err,
            EvaluationError::DuplicateStudents { id } if id == StudentId::new(1)
        ));
    }

    #[test]
    fn test_duplicate_locations() {
        let err = SeatIndex::build(&solution(&[(1, "c1r1s1"), (2, "c1r1s1")])).unwrap_err();
        assert!(matches!(
            err,
            EvaluationError::DuplicateLocations { ref location } if location == "c1r1s1"
        ));
    }

    #[test]
    fn test_textually_distinct_locations_are_accepted() {
        let index = SeatIndex::build(&solution(&[(1, "c1r1s1"), (2, "c01r1s1")])).unwrap();
        assert_eq!(index.get(StudentId::new(1)), index.get(StudentId::new(2)));
    }

    #[test]
    fn test_malformed_location() {
        let err = SeatIndex::build(&solution(&[(1, "c1r1s1"), (2, "c1r1"), (3, "x")]))
            .unwrap_err();
        let EvaluationError::MalformedLocation(err) = err else {
            panic!("expected malformed location error");
        };
        assert_eq!(err.input(), "c1r1");
        assert_eq!(err.reason(), LocationSyntax::MissingSegment('s'));
    }

    #[test]
    fn test_checks_run_in_order() {
        // Duplicate ids win over duplicate and malformed locations.
        let err = SeatIndex::build(&solution(&[(1, "bad"), (1, "bad")])).unwrap_err();
        assert!(matches!(err, EvaluationError::DuplicateStudents { .. }));

        // Duplicate locations win over malformed ones.
        let err = SeatIndex::build(&solution(&[(1, "bad"), (2, "bad")])).unwrap_err();
        assert!(matches!(err, EvaluationError::DuplicateLocations { .. }));
    }

    #[test]
    fn test_out_of_range_seats_are_indexed() {
        let index = SeatIndex::build(&solution(&[(1, "c0r99s0")])).unwrap();
        assert_eq!(index.get(StudentId::new(1)), Some(Location::new(0, 99, 0)));
    }
}
