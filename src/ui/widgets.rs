//! Reusable UI widgets - composable components without business logic
//!
//! Widgets combine primitives and basic iced elements into reusable UI patterns.
//! They should not depend on `crate::app` directly.

pub mod heart_row;
pub mod star_row;

pub use star_row::{Star, StarMetrics};
