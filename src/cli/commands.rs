//! CLI arguments

use clap::Parser;

/// Like `cf curl`, but fetches ALL pages instead of just the first one
#[derive(Parser, Debug)]
#[command(name = "cfcurl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Resource path to fetch (e.g. /v2/apps)
    pub path: String,

    /// Cloud Foundry CLI binary to invoke
    #[arg(long, env = "CFCURL_CF_BIN", default_value = "cf")]
    pub cf_bin: String,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
