use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A seat in the room: cluster, row within the cluster, and seat within the row.
///
/// All coordinates are 1-based. The textual form is `c<cluster>r<row>s<seat>`: lowercase
/// prefixes, one or more ASCII digits after each, no separators and nothing else.
///
/// # Example
///
/// ```
/// use seatscore_model::Location;
///
/// let location: Location = "c2r5s3".parse().unwrap();
/// assert_eq!((location.cluster(), location.row(), location.seat()), (2, 5, 3));
///
/// assert!("C2R5S3".parse::<Location>().is_err());
/// assert!("c2r5".parse::<Location>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    cluster: u32,
    row: u32,
    seat: u32,
}

impl Location {
    #[must_use]
    pub const fn new(cluster: u32, row: u32, seat: u32) -> Self {
        Self { cluster, row, seat }
    }

    #[must_use]
    pub const fn cluster(self) -> u32 {
        self.cluster
    }

    #[must_use]
    pub const fn row(self) -> u32 {
        self.row
    }

    #[must_use]
    pub const fn seat(self) -> u32 {
        self.seat
    }

    /// Manhattan distance over `(row, seat)` when both locations share a cluster.
    ///
    /// Returns `None` for locations in different clusters.
    #[must_use]
    pub const fn grid_distance(self, other: Self) -> Option<u32> {
        if self.cluster != other.cluster {
            return None;
        }
        Some(
            self.row
                .abs_diff(other.row)
                .saturating_add(self.seat.abs_diff(other.seat)),
        )
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}r{}s{}", self.cluster, self.row, self.seat)
    }
}

/// Why a location string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum LocationSyntax {
    #[display("expected '{_0}' segment")]
    MissingSegment(char),
    #[display("expected digits after '{_0}'")]
    MissingDigits(char),
    #[display("number after '{_0}' is too large")]
    NumberTooLarge(char),
    #[display("unexpected characters after seat number")]
    TrailingCharacters,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("malformed location '{input}': {reason}, expected 'c<cluster>r<row>s<seat>'")]
pub struct ParseLocationError {
    input: String,
    reason: LocationSyntax,
}

impl ParseLocationError {
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn reason(&self) -> LocationSyntax {
        self.reason
    }
}

impl FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = |reason| ParseLocationError {
            input: s.to_owned(),
            reason,
        };

        let (cluster, rest) = parse_segment(s, 'c').map_err(error)?;
        let (row, rest) = parse_segment(rest, 'r').map_err(error)?;
        let (seat, rest) = parse_segment(rest, 's').map_err(error)?;
        if !rest.is_empty() {
            return Err(error(LocationSyntax::TrailingCharacters));
        }

        Ok(Self { cluster, row, seat })
    }
}

/// Consumes `<prefix><digits>` from the start of `s`.
fn parse_segment(s: &str, prefix: char) -> Result<(u32, &str), LocationSyntax> {
    let rest = s
        .strip_prefix(prefix)
        .ok_or(LocationSyntax::MissingSegment(prefix))?;
    let len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return Err(LocationSyntax::MissingDigits(prefix));
    }
    let (digits, rest) = rest.split_at(len);
    let value = digits
        .parse()
        .map_err(|_| LocationSyntax::NumberTooLarge(prefix))?;
    Ok((value, rest))
}

impl Serialize for Location {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(s: &str) -> LocationSyntax {
        s.parse::<Location>().unwrap_err().reason()
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!("c1r1s1".parse(), Ok(Location::new(1, 1, 1)));
        assert_eq!("c2r5s3".parse(), Ok(Location::new(2, 5, 3)));
        assert_eq!("c12r345s6789".parse(), Ok(Location::new(12, 345, 6789)));
    }

    #[test]
    fn test_parse_leading_zeros() {
        // Textually distinct, same seat.
        assert_eq!("c01r002s3".parse(), Ok(Location::new(1, 2, 3)));
    }

    #[test]
    fn test_parse_missing_segments() {
        assert_eq!(reason(""), LocationSyntax::MissingSegment('c'));
        assert_eq!(reason("r1s1"), LocationSyntax::MissingSegment('c'));
        assert_eq!(reason("c1s1"), LocationSyntax::MissingSegment('r'));
        assert_eq!(reason("c1r1"), LocationSyntax::MissingSegment('s'));
    }

    #[test]
    fn test_parse_missing_digits() {
        assert_eq!(reason("cr1s1"), LocationSyntax::MissingDigits('c'));
        assert_eq!(reason("c1rs1"), LocationSyntax::MissingDigits('r'));
        assert_eq!(reason("c1r1s"), LocationSyntax::MissingDigits('s'));
        assert_eq!(reason("c-1r1s1"), LocationSyntax::MissingDigits('c'));
        assert_eq!(reason("c+1r1s1"), LocationSyntax::MissingDigits('c'));
    }

    #[test]
    fn test_parse_rejects_other_characters() {
        assert_eq!(reason("C1R1S1"), LocationSyntax::MissingSegment('c'));
        assert_eq!(reason(" c1r1s1"), LocationSyntax::MissingSegment('c'));
        assert_eq!(reason("c1 r1s1"), LocationSyntax::MissingSegment('r'));
        assert_eq!(reason("c1r1s1 "), LocationSyntax::TrailingCharacters);
        assert_eq!(reason("c1r1s1x"), LocationSyntax::TrailingCharacters);
        assert_eq!(reason("c1r1s1s1"), LocationSyntax::TrailingCharacters);
        assert_eq!(reason("c1r1sx"), LocationSyntax::MissingDigits('s'));
        assert_eq!(reason("c１r1s1"), LocationSyntax::MissingDigits('c'));
    }

    #[test]
    fn test_parse_number_too_large() {
        assert_eq!(reason("c4294967296r1s1"), LocationSyntax::NumberTooLarge('c'));
        assert_eq!(
            "c4294967295r1s1".parse(),
            Ok(Location::new(u32::MAX, 1, 1))
        );
    }

    #[test]
    fn test_parse_error_message() {
        let err = "c1r1".parse::<Location>().unwrap_err();
        assert_eq!(err.input(), "c1r1");
        assert_eq!(
            err.to_string(),
            "malformed location 'c1r1': expected 's' segment, expected 'c<cluster>r<row>s<seat>'"
        );
    }

    #[test]
    fn test_display_round_trip() {
        let location = Location::new(3, 8, 6);
        assert_eq!(location.to_string(), "c3r8s6");
        assert_eq!(location.to_string().parse(), Ok(location));
    }

    #[test]
    fn test_serialization() {
        let location = Location::new(2, 5, 3);
        let serialized = serde_json::to_string(&location).unwrap();
        assert_eq!(serialized, "\"c2r5s3\"");

        let deserialized: Location = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, location);

        assert!(serde_json::from_str::<Location>("\"c2r5\"").is_err());
    }

    #[test]
    fn test_grid_distance() {
        let a = Location::new(1, 2, 3);
        assert_eq!(a.grid_distance(a), Some(0));
        assert_eq!(a.grid_distance(Location::new(1, 5, 1)), Some(5));
        assert_eq!(Location::new(1, 5, 1).grid_distance(a), Some(5));
        assert_eq!(a.grid_distance(Location::new(2, 2, 3)), None);
    }
}
