use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::model::ThreadOrder;

#[derive(Parser)]
#[command(
    name = "smsthreads",
    version,
    about = "Group an exported SMS inbox into per-contact conversation threads"
)]
pub struct Cli {
    /// Data directory holding the exports and .smsthreads.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OrderArg {
    /// Oldest first
    Asc,
    /// Newest first (bottom-anchored lists)
    Desc,
}

impl From<OrderArg> for ThreadOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Asc => ThreadOrder::Ascending,
            OrderArg::Desc => ThreadOrder::Descending,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a data directory
    Init {
        /// Data directory (default: current directory)
        #[arg(value_name = "PATH", default_value = ".")]
        path: PathBuf,

        /// Country code assumed for national numbers
        #[arg(long, default_value = "33")]
        country_code: String,

        /// Overwrite an existing .smsthreads.toml
        #[arg(long)]
        force: bool,

        /// Do not register the directory as the default
        #[arg(long)]
        no_register: bool,
    },

    /// List conversations, most recent first
    #[command(alias = "list")]
    Conversations {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show one conversation with date separators
    Thread {
        /// Phone number of the conversation partner (any format)
        number: String,

        /// Chronological order (default from settings)
        #[arg(long, value_enum)]
        order: Option<OrderArg>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List or search contacts
    Contacts {
        /// Filter by name or number
        query: Option<String>,
    },

    /// Show canonical form and match key of phone numbers
    Normalize {
        #[arg(required = true)]
        numbers: Vec<String>,
    },
}
