//! Page walking loop
//!
//! Drives a fetcher from a starting path, following `next_url` links
//! and accumulating every page's resources along the way.

use super::types::{Aggregate, Page};
use crate::error::{Error, Result};
use crate::fetch::Fetch;
use crate::progress::Progress;
use tracing::debug;

/// Sequentially fetches every page of a paginated resource.
///
/// Each fetch is awaited to completion before the next begins; the only
/// mutable state is the local accumulator inside [`collect`].
///
/// [`collect`]: PageWalker::collect
pub struct PageWalker {
    fetcher: Box<dyn Fetch>,
    progress: Progress,
}

impl PageWalker {
    /// Create a walker over the given fetcher, reporting progress to stderr.
    pub fn new(fetcher: Box<dyn Fetch>) -> Self {
        Self {
            fetcher,
            progress: Progress::new(),
        }
    }

    /// Replace the progress reporter.
    #[must_use]
    pub fn with_progress(mut self, progress: Progress) -> Self {
        self.progress = progress;
        self
    }

    /// Fetch all pages starting at `start_path` and merge them.
    ///
    /// Fails on the first empty response, command failure, or
    /// undecodable body; no partial aggregate is returned.
    pub async fn collect(&self, start_path: &str) -> Result<Aggregate> {
        let mut current = Some(start_path.to_string());
        let mut page: u32 = 1;
        let mut total_pages: Option<u32> = None;
        let mut resources = Vec::new();

        self.progress.report(page, total_pages);

        while let Some(path) = current {
            let raw = self.fetcher.fetch(&path).await?;
            if raw.trim().is_empty() {
                return Err(Error::empty_response(path));
            }

            let parsed = Page::parse(&path, &raw)?;
            debug!(%path, page, resources = parsed.len(), "fetched page");

            if let Some(total) = parsed.total_pages {
                total_pages = Some(total);
            }
            current = parsed.next_url;
            resources.extend(parsed.resources);

            page += 1;
            self.progress.report(page, total_pages);
        }

        Ok(Aggregate::from_resources(resources))
    }
}
