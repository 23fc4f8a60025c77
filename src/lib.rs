//! Rustle Rating - a fractional star rating widget for iced
//!
//! Drag across the bar for continuous values, or tap a star to select it.
//! The bar never owns its value: changes are published as messages and the
//! application feeds the new rating back on its next view.

pub mod app;
pub mod features;
pub mod ui;

pub use ui::primitives::rating::{Rating, rating};
