//! Student preferences as stated in the instance table.
//!
//! Every preference is written as a signed integer in the instance. The sign carries the
//! meaning and the magnitude carries the value:
//!
//! | value | axis preference        | relational preference          |
//! |-------|------------------------|--------------------------------|
//! | `k>0` | wants exactly `k`      | wants to sit near student `k`  |
//! | `-k`  | wants anything but `k` | wants to sit far from `k`      |
//! | `0`   | no preference          | neutral reference to student 0 |

use crate::student::StudentId;

/// Preference on one axis (cluster, row or seat) of a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum AxisPreference {
    /// No preference; never satisfied.
    Indifferent,
    /// Wants exactly this value.
    Exactly(u64),
    /// Wants any value other than this one.
    Not(u64),
}

impl AxisPreference {
    #[must_use]
    pub const fn from_signed(value: i64) -> Self {
        match value {
            0 => Self::Indifferent,
            v if v > 0 => Self::Exactly(v.unsigned_abs()),
            v => Self::Not(v.unsigned_abs()),
        }
    }

    /// Returns `true` if `actual` satisfies this preference.
    ///
    /// Coordinates start at 1, so an [`Indifferent`](Self::Indifferent) preference can never
    /// be satisfied.
    #[must_use]
    pub fn is_satisfied_by(self, actual: u32) -> bool {
        let actual = u64::from(actual);
        match self {
            Self::Indifferent => false,
            Self::Exactly(wanted) => actual == wanted,
            Self::Not(unwanted) => actual != unwanted,
        }
    }
}

/// Whether a student wants to be close to, or away from, another student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Polarity {
    Near,
    Far,
    /// Written as `0` in the instance; contributes nothing to the score.
    Neutral,
}

/// Preference toward one specific other student.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationalPreference {
    target: StudentId,
    polarity: Polarity,
}

impl RelationalPreference {
    #[must_use]
    pub const fn new(target: StudentId, polarity: Polarity) -> Self {
        Self { target, polarity }
    }

    #[must_use]
    pub const fn from_signed(value: i64) -> Self {
        let polarity = match value {
            0 => Polarity::Neutral,
            v if v > 0 => Polarity::Near,
            _ => Polarity::Far,
        };
        Self {
            target: StudentId::new(value.unsigned_abs()),
            polarity,
        }
    }

    #[must_use]
    pub const fn target(self) -> StudentId {
        self.target
    }

    #[must_use]
    pub const fn polarity(self) -> Polarity {
        self.polarity
    }
}

/// Everything one student asked for, as read from one instance row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentPreference {
    pub id: StudentId,
    pub cluster: AxisPreference,
    pub row: AxisPreference,
    pub seat: AxisPreference,
    pub relations: [RelationalPreference; 2],
}

impl StudentPreference {
    /// Builds a preference record from the signed values of an instance row.
    #[must_use]
    pub const fn from_signed(
        id: StudentId,
        [cluster, row, seat]: [i64; 3],
        [other_1, other_2]: [i64; 2],
    ) -> Self {
        Self {
            id,
            cluster: AxisPreference::from_signed(cluster),
            row: AxisPreference::from_signed(row),
            seat: AxisPreference::from_signed(seat),
            relations: [
                RelationalPreference::from_signed(other_1),
                RelationalPreference::from_signed(other_2),
            ],
        }
    }
}
