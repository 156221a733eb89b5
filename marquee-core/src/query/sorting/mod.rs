//! Sorting for the catalog grid
//!
//! This module provides:
//! - Core traits for sortable entities
//! - Field marker types for compile-time safe sorting
//! - Sort key extraction and comparison
//! - A stable single-field sort strategy

pub mod fields;
pub mod impls;
pub mod keys;
pub mod strategy;
pub mod traits;
pub mod utils;

#[cfg(test)]
mod tests;

pub use fields::*;
pub use impls::ItemFieldSet;
pub use keys::*;
pub use strategy::*;
pub use traits::*;
