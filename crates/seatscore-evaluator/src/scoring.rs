//! Per-student scoring.
//!
//! A student's points are the sum of an own-preference score and two relational terms:
//!
//! ```text
//! points = own + relational₁ + relational₂
//!
//! where:
//!   own          = Σ over (cluster, row, seat) of 1 if the axis preference is satisfied
//!   distance     = |Δrow| + |Δseat|   if both students sit in the same cluster
//!                = R                  otherwise
//!   relational   = R - min(distance, R)   if the student wants to be near   (0 ..= R)
//!                = min(distance, R) - 1   if the student wants to be far    (-1 ..= R-1)
//!                = 0                      for a neutral reference
//! ```
//!
//! `R` is the layout's maximum radius. Sitting next to an unwanted student is scored below
//! zero: a far reference at distance 0 yields `-1`, the worst value a single term can take.

use seatscore_model::{Location, Polarity, StudentPreference};

/// Points earned by one student, split by origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StudentScore {
    /// Number of satisfied axis preferences (`0..=3`).
    pub own: u8,
    /// One term per relational preference, in instance column order.
    pub relational: [i64; 2],
}

impl StudentScore {
    #[must_use]
    pub fn total(&self) -> i64 {
        i64::from(self.own) + self.relational.iter().sum::<i64>()
    }
}

/// Counts how many of the cluster, row and seat preferences `location` satisfies.
#[must_use]
pub fn own_preference_points(preference: &StudentPreference, location: Location) -> u8 {
    [
        preference.cluster.is_satisfied_by(location.cluster()),
        preference.row.is_satisfied_by(location.row()),
        preference.seat.is_satisfied_by(location.seat()),
    ]
    .into_iter()
    .map(u8::from)
    .sum()
}

/// Distance used by relational preferences; different clusters count as `max_radius` apart.
#[must_use]
pub fn relational_distance(from: Location, to: Location, max_radius: u32) -> u32 {
    from.grid_distance(to).unwrap_or(max_radius)
}

#[must_use]
pub fn relational_points(polarity: Polarity, distance: u32, max_radius: u32) -> i64 {
    let radius = i64::from(max_radius);
    let capped = i64::from(distance.min(max_radius));
    match polarity {
        Polarity::Near => radius - capped,
        Polarity::Far => capped - 1,
        Polarity::Neutral => 0,
    }
}
