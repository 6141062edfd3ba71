//! Core types and traits for the notes project.
//!
//! Following the Functional Core pattern, this crate holds pure data types,
//! validation and the storage contract. All I/O lives in the `notes` binary.

pub mod note;
pub mod storage;
