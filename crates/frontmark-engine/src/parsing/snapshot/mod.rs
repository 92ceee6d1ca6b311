//! # Snapshot Testing Support
//!
//! - **`normalize`**: converts a `ParsedDoc` into a stable `Snap`, either
//!   serialized or rendered as a one-line-per-node outline for `insta`
//! - **`invariants`**: structural checks every parse must satisfy

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
