//! # cfcurl
//!
//! Like `cf curl`, but fetches ALL pages instead of just the first one.
//!
//! The Cloud Foundry API paginates list responses, and `cf curl` returns
//! only the page it was asked for. `cfcurl` follows the `next_url` chain
//! across responses, concatenates every page's `resources` array, and
//! prints one merged document that looks like a single big page.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cfcurl::fetch::CfCurl;
//! use cfcurl::pagination::PageWalker;
//!
//! #[tokio::main]
//! async fn main() -> cfcurl::Result<()> {
//!     let walker = PageWalker::new(Box::new(CfCurl::new()));
//!     let aggregate = walker.collect("/v2/apps").await?;
//!     println!("{}", aggregate.to_pretty_json()?);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for cfcurl
pub mod error;

/// Common types and type aliases
pub mod types;

/// External `cf curl` invocation
pub mod fetch;

/// Page walking and aggregation
pub mod pagination;

/// Progress reporting on stderr
pub mod progress;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::JsonValue;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
