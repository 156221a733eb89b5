//! Client-side query engine: filter predicates and field sorting.

pub mod filtering;
pub mod sorting;

pub use filtering::{apply_selection, matches_selection, sort_strategy};
