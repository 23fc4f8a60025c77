//! UI layer for the rating widget
//!
//! # Architecture
//!
//! - **Primitives** (`primitives`): Low-level Widget trait implementations
//! - **Widgets** (`widgets`): Composable UI patterns without business logic

pub mod icons;
pub mod primitives;
pub mod theme;
pub mod widgets;
