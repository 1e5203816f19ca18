//! Fetch trait
//!
//! The narrow seam between the pagination loop and the external tool.

use crate::error::Result;
use async_trait::async_trait;

/// Interface over the external query tool.
///
/// The production implementation shells out to `cf curl`; tests
/// substitute an implementation that replays canned response bodies.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Fetch one resource path, returning the tool's raw stdout as text.
    async fn fetch(&self, path: &str) -> Result<String>;
}
