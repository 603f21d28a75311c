use clap::{Parser, Subcommand};

use crate::core::record::Record;

#[derive(Parser, Debug)]
#[command(name = "dns-sync")]
#[command(about = "List, append, set and delete DNS records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Zone to operate on
    #[arg(short, long, env = "DNS_ZONE", global = true)]
    pub zone: Option<String>,

    /// Print records as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

/// Records are written as `name [ttl] TYPE [priority] value`, one argument
/// each, e.g. `"_acme-challenge 300 TXT token"`.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the records in the zone
    List,
    /// Create records without looking at existing ones
    Append {
        #[arg(required = true)]
        records: Vec<Record>,
    },
    /// Create or replace records so the zone holds them
    Set {
        #[arg(required = true)]
        records: Vec<Record>,
    },
    /// Delete records
    Delete {
        #[arg(required = true)]
        records: Vec<Record>,
    },
}
