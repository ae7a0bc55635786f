use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use smsthreads::cli::{Cli, Commands};
use smsthreads::commands;
use smsthreads::resolve::DATA_ENV;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Handle --data: point every path lookup at the given directory
    if let Some(ref data) = cli.data {
        // SAFETY: single-threaded here; no runtime or worker threads exist yet.
        unsafe { std::env::set_var(DATA_ENV, data) };
    }

    match cli.command {
        Commands::Init {
            path,
            country_code,
            force,
            no_register,
        } => commands::init::run(&path, &country_code, force, !no_register),
        Commands::Conversations { json } => commands::conversations::run(json),
        Commands::Thread {
            number,
            order,
            json,
        } => commands::thread::run(&number, order.map(Into::into), json),
        Commands::Contacts { query } => commands::contacts::run(query.as_deref()),
        Commands::Normalize { numbers } => commands::normalize::run(&numbers),
    }
}
