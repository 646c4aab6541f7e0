//! Room layout configuration.
//!
//! The layout bounds which locations are valid and caps relational distances. It is plain
//! configuration passed to the evaluator at call time; nothing here is global.

use serde::{Deserialize, Serialize};

use crate::location::Location;

pub const DEFAULT_CLUSTERS: u32 = 4;
pub const DEFAULT_ROWS: u32 = 8;
pub const DEFAULT_SEATS: u32 = 6;
pub const DEFAULT_MAX_RADIUS: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LayoutError {
    #[display("layout dimension '{name}' must be at least 1")]
    ZeroDimension { name: &'static str },
}

/// Dimensions of the room and the maximum relational radius `R`.
///
/// The room has `clusters` clusters, each with `rows` rows of `seats` seats. A relational
/// preference contributes at most `R` points, and students in different clusters are
/// treated as being `R` apart.
///
/// Deserialization validates the dimensions; missing fields take their default value.
///
/// ```
/// use seatscore_model::Layout;
///
/// let layout: Layout = serde_json::from_str(r#"{ "clusters": 2, "max_radius": 3 }"#).unwrap();
/// assert_eq!(layout.clusters(), 2);
/// assert_eq!(layout.rows(), 8);
/// assert_eq!(layout.max_radius(), 3);
///
/// assert!(serde_json::from_str::<Layout>(r#"{ "rows": 0 }"#).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LayoutConfig")]
pub struct Layout {
    clusters: u32,
    rows: u32,
    seats: u32,
    max_radius: u32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            clusters: DEFAULT_CLUSTERS,
            rows: DEFAULT_ROWS,
            seats: DEFAULT_SEATS,
            max_radius: DEFAULT_MAX_RADIUS,
        }
    }
}

impl Layout {
    pub fn new(
        clusters: u32,
        rows: u32,
        seats: u32,
        max_radius: u32,
    ) -> Result<Self, LayoutError> {
        for (name, value) in [("clusters", clusters), ("rows", rows), ("seats", seats)] {
            if value == 0 {
                return Err(LayoutError::ZeroDimension { name });
            }
        }
        Ok(Self {
            clusters,
            rows,
            seats,
            max_radius,
        })
    }

    #[must_use]
    pub const fn clusters(&self) -> u32 {
        self.clusters
    }

    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    #[must_use]
    pub const fn seats(&self) -> u32 {
        self.seats
    }

    #[must_use]
    pub const fn max_radius(&self) -> u32 {
        self.max_radius
    }

    /// Number of seats in the room, which is also the expected number of students.
    #[must_use]
    pub fn capacity(&self) -> u64 {
        u64::from(self.clusters) * u64::from(self.rows) * u64::from(self.seats)
    }

    /// Returns `true` if every coordinate of `location` lies within the room.
    #[must_use]
    pub const fn contains(&self, location: Location) -> bool {
        1 <= location.cluster()
            && location.cluster() <= self.clusters
            && 1 <= location.row()
            && location.row() <= self.rows
            && 1 <= location.seat()
            && location.seat() <= self.seats
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct LayoutConfig {
    clusters: u32,
    rows: u32,
    seats: u32,
    max_radius: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let Layout {
            clusters,
            rows,
            seats,
            max_radius,
        } = Layout::default();
        Self {
            clusters,
            rows,
            seats,
            max_radius,
        }
    }
}

impl TryFrom<LayoutConfig> for Layout {
    type Error = LayoutError;

    fn try_from(config: LayoutConfig) -> Result<Self, Self::Error> {
        Layout::new(
            config.clusters,
            config.rows,
            config.seats,
            config.max_radius,
        )
    }
}
