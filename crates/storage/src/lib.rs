//! Storage abstraction and implementations for RelMan.
//!
//! This crate provides a trait-based storage interface with a JSON-file
//! reference implementation. Loads signal "not found" as `Ok(None)` so
//! callers can distinguish an absent project from one with zero records.

#![warn(missing_docs)]

pub mod json_storage;
pub mod trait_;

pub use json_storage::JsonStorage;
pub use trait_::{Result, Storage, StorageError};
