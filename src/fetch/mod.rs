//! Fetch module
//!
//! Wraps the external `cf curl` invocation behind a narrow trait so the
//! pagination loop can be driven by a canned double in tests.

mod cf;
mod types;

pub use cf::{CfCurl, CfCurlConfig};
pub use types::Fetch;
