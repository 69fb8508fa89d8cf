//! gha-scaleset core: scale set identity, listener state, and the shared
//! error surface.
//!
//! This crate carries no runtime, HTTP, or metrics-library dependency so the
//! same types can be used by a controller that never exports anything.
//!
//! # Guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod labels;

/// Shared result type.
pub use error::{ErrorCode, Result, ScaleSetError};
pub use labels::{CommonLabels, ListenerState, LABEL_NAMES};
