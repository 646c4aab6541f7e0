//! Data model for scoring seating assignments.
//!
//! A seating problem has two sides:
//!
//! - the **instance**, one [`StudentPreference`] per student, stating which cluster, row and
//!   seat the student would like ([`AxisPreference`]) and two other students it wants to sit
//!   near or far from ([`RelationalPreference`]);
//! - the **solution**, which places every student at a [`Location`] of the room described by
//!   a [`Layout`].
//!
//! Locations use a fixed textual form, `c<cluster>r<row>s<seat>` (for example `c2r5s3`).
//! [`Location`] parses, displays and (de)serializes that form.
//!
//! # Example
//!
//! ```
//! use seatscore_model::{Layout, Location};
//!
//! let layout = Layout::default();
//! let location: Location = "c2r5s3".parse().unwrap();
//! assert_eq!(location.cluster(), 2);
//! assert!(layout.contains(location));
//! assert_eq!(location.to_string(), "c2r5s3");
//! ```

pub use self::{layout::*, location::*, preference::*, student::*};

pub mod layout;
pub mod location;
pub mod preference;
pub mod student;
