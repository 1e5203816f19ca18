//! Progress reporting
//!
//! A single status line on stderr, rewritten in place with a carriage
//! return as pages are fetched. Human-readable only, never parsed.

use std::io::Write;

/// Writes `fetching page N of M` status lines to stderr.
#[derive(Debug, Clone)]
pub struct Progress {
    enabled: bool,
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress {
    /// Progress reporting on stderr
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Silent progress (tests, non-interactive callers)
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Emit the status line for `page`, overwriting the previous one.
    ///
    /// `total_pages` is the last value reported by the API, unknown
    /// before the first response arrives.
    pub fn report(&self, page: u32, total_pages: Option<u32>) {
        if !self.enabled {
            return;
        }
        let mut stderr = std::io::stderr();
        let _ = write!(stderr, "{}\r", status_line(page, total_pages));
        let _ = stderr.flush();
    }
}

fn status_line(page: u32, total_pages: Option<u32>) -> String {
    match total_pages {
        Some(total) => format!("fetching page {page} of {total}"),
        None => format!("fetching page {page}"),
    }
}
