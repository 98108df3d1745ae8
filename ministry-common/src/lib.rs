//! # Ministry Common Library
//!
//! Shared code for the ministry tool binaries:
//! - Database schema creation and entity models
//! - Structured field codecs (outlines, illustrations, scripture lists, tags)
//! - Password hashing and session tokens
//! - Configuration loading and root folder resolution

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod fields;

pub use error::{Error, Result};
