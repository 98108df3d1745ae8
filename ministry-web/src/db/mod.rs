//! Store layer
//!
//! One module per entity group. Functions take the pool (or an executor
//! where a caller needs them inside a transaction) and return
//! `ministry_common::Result`.

pub mod apologetics;
pub mod comparisons;
pub mod counseling;
pub mod doctrine;
pub mod resources;
pub mod sermons;
pub mod sessions;
pub mod users;
