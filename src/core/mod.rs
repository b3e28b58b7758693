//! Core components of the `nsewatch` crate.
//!
//! This module contains the foundational building blocks shared by every
//! outbound call:
//! - The main [`WatchClient`] and its builder.
//! - The primary [`WatchError`] type.
//! - Internal networking helpers.

/// The main client (`WatchClient`), builder, and endpoint configuration.
pub mod client;
/// The primary error type (`WatchError`) for the crate.
pub mod error;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::WatchClient`
pub use client::{WatchClient, WatchClientBuilder};
pub use error::WatchError;
