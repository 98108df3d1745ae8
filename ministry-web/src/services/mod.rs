//! Domain services over the store
//!
//! - [`comparison`]: denomination × topic belief matrix
//! - [`importer`]: merge the built-in [`catalogs`] into the library
//! - [`suggestions`]: canned helper content for the JSON endpoints

pub mod catalogs;
pub mod comparison;
pub mod importer;
pub mod suggestions;
