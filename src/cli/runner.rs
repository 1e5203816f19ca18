//! CLI runner - executes the pagination loop

use crate::cli::commands::Cli;
use crate::error::Result;
use crate::fetch::{CfCurl, CfCurlConfig};
use crate::pagination::PageWalker;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Walk every page and print the merged document to stdout
    pub async fn run(&self) -> Result<()> {
        let fetcher = CfCurl::with_config(CfCurlConfig {
            binary: self.cli.cf_bin.clone(),
            ..CfCurlConfig::default()
        });

        let walker = PageWalker::new(Box::new(fetcher));
        let aggregate = walker.collect(&self.cli.path).await?;

        println!("{}", aggregate.to_pretty_json()?);
        Ok(())
    }
}
