//! 命令行参数定义

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "zone-sweeper",
    about = "Bulk delete Cloudflare DNS records based on filters",
    version
)]
pub struct Cli {
    #[arg(
        long,
        help = "Cloudflare API token. Falls back to the CLOUDFLARE_API_TOKEN env var."
    )]
    pub token: Option<String>,

    #[arg(long = "zone-id", help = "Cloudflare Zone identifier")]
    pub zone_id: String,

    #[arg(
        long = "name",
        help = "Exact DNS record name to delete. Can be specified multiple times. Mutually exclusive with --names-file."
    )]
    pub names: Vec<String>,

    #[arg(
        long = "names-file",
        conflicts_with = "names",
        help = "Path to a file with one DNS record name per line to delete"
    )]
    pub names_file: Option<PathBuf>,

    #[arg(long, help = "Delete records whose name contains this substring")]
    pub contains: Option<String>,

    #[arg(
        long = "type",
        value_name = "TYPE",
        help = "Optional DNS record type to filter on (e.g., A, CNAME, TXT)"
    )]
    pub record_type: Option<String>,

    #[arg(
        long = "dry-run",
        help = "Show which records would be deleted without performing deletion"
    )]
    pub dry_run: bool,

    #[arg(long, help = "Skip interactive confirmation and proceed with deletion")]
    pub yes: bool,
}
