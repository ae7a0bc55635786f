//! smsthreads normalize NUMBER...

use anyhow::Result;

use crate::config::settings::load_settings;

pub fn run(numbers: &[String]) -> Result<()> {
    let plan = load_settings(None)?.numbering;
    for raw in numbers {
        println!(
            "{}\t{}\t{}",
            raw,
            plan.normalize(raw),
            plan.match_key(raw)
        );
    }
    Ok(())
}
