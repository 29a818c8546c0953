//! mesmer-core
//!
//! Pure domain types for the Mesmer suggestibility assessment platform.
//! No I/O and no async; this is the shared vocabulary of the Mesmer system.

pub mod models;
