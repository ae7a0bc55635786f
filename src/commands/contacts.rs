//! smsthreads contacts [QUERY]

use anyhow::Result;

use super::load_session;
use crate::directory::{build_directory, search};
use crate::render;

pub fn run(query: Option<&str>) -> Result<()> {
    let session = load_session()?;
    let entries = build_directory(&session.contacts);
    let matches = search(&entries, query.unwrap_or(""));
    println!("{}", render::directory_listing(&matches));
    Ok(())
}
