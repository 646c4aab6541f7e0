//! Loading of the instance and solution tables.
//!
//! Both tables are CSV files with a header row:
//!
//! ```text
//! instance:  ID,pc,pr,ps,other_id_1,other_id_2
//! solution:  ID,Location
//! ```
//!
//! The `ID` and `Location` columns are found by header name. The five preference columns of
//! the instance are read by position, in the order they appear after removing `ID`, so their
//! header names are free.
//!
//! Loading only checks the table shape and the integer cells. Validation of the solution
//! content (duplicates, location grammar) is done by [`SeatIndex`](crate::seat_index::SeatIndex).

use std::{collections::HashSet, io, str::FromStr};

use csv::StringRecord;
use seatscore_model::{StudentId, StudentPreference};

pub const ID_COLUMN: &str = "ID";
pub const LOCATION_COLUMN: &str = "Location";

const INSTANCE_COLUMNS: usize = 6;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum TableError {
    #[display("{_0}")]
    Csv(csv::Error),
    #[display("missing column '{name}'")]
    MissingColumn { name: &'static str },
    #[display("expected {expected} columns, found {found}")]
    ColumnCount { expected: usize, found: usize },
    #[display("line {line}: column '{column}' is not an integer: '{value}'")]
    InvalidInteger {
        line: u64,
        column: String,
        value: String,
    },
    #[display("student {id} appears more than once")]
    DuplicateStudent { id: StudentId },
}

/// Student preferences, in instance file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    students: Vec<StudentPreference>,
}

impl Instance {
    /// Creates an instance, rejecting repeated student ids.
    pub fn new(students: Vec<StudentPreference>) -> Result<Self, TableError> {
        let mut seen = HashSet::with_capacity(students.len());
        if let Some(student) = students.iter().find(|s| !seen.insert(s.id)) {
            return Err(TableError::DuplicateStudent { id: student.id });
        }
        Ok(Self { students })
    }

    pub fn from_reader<R>(reader: R) -> Result<Self, TableError>
    where
        R: io::Read,
    {
        let mut reader = csv::Reader::from_reader(reader);
        let headers = reader.headers().map_err(TableError::Csv)?.clone();
        let id_column = column_index(&headers, ID_COLUMN)?;
        if headers.len() != INSTANCE_COLUMNS {
            return Err(TableError::ColumnCount {
                expected: INSTANCE_COLUMNS,
                found: headers.len(),
            });
        }
        let value_columns: Vec<usize> = (0..headers.len()).filter(|&i| i != id_column).collect();

        let mut students = vec![];
        for record in reader.records() {
            let record = record.map_err(TableError::Csv)?;
            let cell = |index| parse_cell::<i64>(&headers, &record, index);
            let id = StudentId::new(parse_cell(&headers, &record, id_column)?);
            let preference = StudentPreference::from_signed(
                id,
                [
                    cell(value_columns[0])?,
                    cell(value_columns[1])?,
                    cell(value_columns[2])?,
                ],
                [cell(value_columns[3])?, cell(value_columns[4])?],
            );
            students.push(preference);
        }
        tracing::debug!(students = students.len(), "instance loaded");

        Self::new(students)
    }

    #[must_use]
    pub fn students(&self) -> &[StudentPreference] {
        &self.students
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

/// One solution row: a student and the raw, not yet parsed, location string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatAssignment {
    pub id: StudentId,
    pub location: String,
}

impl SeatAssignment {
    pub fn new<S>(id: StudentId, location: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            id,
            location: location.into(),
        }
    }
}

/// Candidate seating, in solution file order.
///
/// Rows are kept as read; repeated ids and locations are reported when the
/// [`SeatIndex`](crate::seat_index::SeatIndex) is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    assignments: Vec<SeatAssignment>,
}

impl Solution {
    #[must_use]
    pub fn new(assignments: Vec<SeatAssignment>) -> Self {
        Self { assignments }
    }

    pub fn from_reader<R>(reader: R) -> Result<Self, TableError>
    where
        R: io::Read,
    {
        let mut reader = csv::Reader::from_reader(reader);
        let headers = reader.headers().map_err(TableError::Csv)?.clone();
        let id_column = column_index(&headers, ID_COLUMN)?;
        let location_column = column_index(&headers, LOCATION_COLUMN)?;

        let mut assignments = vec![];
        for record in reader.records() {
            let record = record.map_err(TableError::Csv)?;
            let id = StudentId::new(parse_cell(&headers, &record, id_column)?);
            let location = record.get(location_column).unwrap_or_default();
            assignments.push(SeatAssignment::new(id, location));
        }
        tracing::debug!(assignments = assignments.len(), "solution loaded");

        Ok(Self { assignments })
    }

    #[must_use]
    pub fn assignments(&self) -> &[SeatAssignment] {
        &self.assignments
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

impl FromIterator<SeatAssignment> for Solution {
    fn from_iter<T: IntoIterator<Item = SeatAssignment>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

fn column_index(headers: &StringRecord, name: &'static str) -> Result<usize, TableError> {
    headers
        .iter()
        .position(|header| header.trim() == name)
        .ok_or(TableError::MissingColumn { name })
}

fn parse_cell<T>(
    headers: &StringRecord,
    record: &StringRecord,
    index: usize,
) -> Result<T, TableError>
where
    T: FromStr,
{
    let value = record.get(index).unwrap_or_default();
    value.trim().parse().map_err(|_| TableError::InvalidInteger {
        line: record.position().map_or(0, csv::Position::line),
        column: headers.get(index).unwrap_or_default().to_owned(),
        value: value.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use seatscore_model::{AxisPreference, Polarity};

    use super::*;

    #[test]
    fn test_read_instance() {
        let csv = "\
ID,pc,pr,ps,other_id_1,other_id_2
1,2,0,-3,2,-3
2,0,0,0,1,1
3,-1,4,0,0,-1
";
        let instance = Instance::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(instance.len(), 3);

        let first = &instance.students()[0];
        assert_eq!(first.id, StudentId::new(1));
        assert_eq!(first.cluster, AxisPreference::Exactly(2));
        assert_eq!(first.row, AxisPreference::Indifferent);
        assert_eq!(first.seat, AxisPreference::Not(3));
        assert_eq!(first.relations[0].target(), StudentId::new(2));
        assert_eq!(first.relations[0].polarity(), Polarity::Near);
        assert_eq!(first.relations[1].target(), StudentId::new(3));
        assert_eq!(first.relations[1].polarity(), Polarity::Far);

        let ids: Vec<_> = instance.students().iter().map(|s| s.id.get()).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn test_read_instance_id_column_anywhere() {
        let csv = "\
a,b,ID,c,d,e
1,2,7,3,4,-5
";
        let instance = Instance::from_reader(csv.as_bytes()).unwrap();
        let student = &instance.students()[0];
        assert_eq!(student.id, StudentId::new(7));
        assert_eq!(student.cluster, AxisPreference::Exactly(1));
        assert_eq!(student.row, AxisPreference::Exactly(2));
        assert_eq!(student.seat, AxisPreference::Exactly(3));
        assert_eq!(student.relations[0].target(), StudentId::new(4));
        assert_eq!(student.relations[1].target(), StudentId::new(5));
        assert!(student.relations[1].polarity().is_far());
    }

    #[test]
    fn test_read_instance_trims_numbers() {
        let csv = "ID,pc,pr,ps,o1,o2\n 1 , 2,0,0,1,1\n";
        let instance = Instance::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(instance.students()[0].id, StudentId::new(1));
    }

    #[test]
    fn test_read_instance_errors() {
        let missing_id = "id,pc,pr,ps,o1,o2\n1,0,0,0,1,1\n";
        assert!(matches!(
            Instance::from_reader(missing_id.as_bytes()),
            Err(TableError::MissingColumn { name: "ID" })
        ));

        let too_few = "ID,pc,pr,ps,o1\n1,0,0,0,1\n";
        assert!(matches!(
            Instance::from_reader(too_few.as_bytes()),
            Err(TableError::ColumnCount {
                expected: 6,
                found: 5
            })
        ));

        let ragged = "ID,pc,pr,ps,o1,o2\n1,0,0,0,1\n";
        assert!(matches!(
            Instance::from_reader(ragged.as_bytes()),
            Err(TableError::Csv(_))
        ));

        let not_integer = "ID,pc,pr,ps,o1,o2\nx,0,0,0,1,1\n";
        let err = Instance::from_reader(not_integer.as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "line 2: column 'ID' is not an integer: 'x'");

        let negative_id = "ID,pc,pr,ps,o1,o2\n-1,0,0,0,1,1\n";
        assert!(matches!(
            Instance::from_reader(negative_id.as_bytes()),
            Err(TableError::InvalidInteger { .. })
        ));

        let bad_preference = "ID,pc,pr,ps,o1,o2\n1,0,1.5,0,1,1\n";
        let err = Instance::from_reader(bad_preference.as_bytes()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "line 2: column 'pr' is not an integer: '1.5'"
        );

        let duplicate = "ID,pc,pr,ps,o1,o2\n1,0,0,0,1,1\n1,0,0,0,1,1\n";
        assert!(matches!(
            Instance::from_reader(duplicate.as_bytes()),
            Err(TableError::DuplicateStudent { id }) if id == StudentId::new(1)
        ));

        assert!(matches!(
            Instance::from_reader(&b""[..]),
            Err(TableError::MissingColumn { name: "ID" })
        ));
    }

    #[test]
    fn test_read_empty_instance() {
        let instance = Instance::from_reader("ID,pc,pr,ps,o1,o2\n".as_bytes()).unwrap();
        assert!(instance.is_empty());
    }

    #[test]
    fn test_read_solution() {
        let csv = "\
ID,Location
2,c1r1s2
1,c1r1s1
2,c1r1s2
";
        let solution = Solution::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(
            solution.assignments(),
            [
                SeatAssignment::new(StudentId::new(2), "c1r1s2"),
                SeatAssignment::new(StudentId::new(1), "c1r1s1"),
                SeatAssignment::new(StudentId::new(2), "c1r1s2"),
            ]
        );
    }

    #[test]
    fn test_read_solution_keeps_location_verbatim() {
        let csv = "Location,ID,Team\nc1r1s1 ,3,x\n";
        let solution = Solution::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(
            solution.assignments(),
            [SeatAssignment::new(StudentId::new(3), "c1r1s1 ")]
        );
    }

    #[test]
    fn test_read_solution_errors() {
        assert!(matches!(
            Solution::from_reader("ID,Seat\n1,c1r1s1\n".as_bytes()),
            Err(TableError::MissingColumn { name: "Location" })
        ));
        assert!(matches!(
            Solution::from_reader("Location\nc1r1s1\n".as_bytes()),
            Err(TableError::MissingColumn { name: "ID" })
        ));
        assert!(matches!(
            Solution::from_reader("ID,Location\none,c1r1s1\n".as_bytes()),
            Err(TableError::InvalidInteger { .. })
        ));
    }
}
