//! mesmer-storage
//!
//! Local JSON persistence for scored assessments. Each assessment is one
//! file under the configured data directory; the layout is defined in
//! [`paths`].

pub mod error;
pub mod paths;
pub mod store;
