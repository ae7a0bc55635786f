//! Initialize a data directory with settings and empty exports.

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

use crate::app_config;
use crate::config::settings::Settings;

/// Generate .smsthreads.toml content from the defaults.
pub fn generate_settings_toml(country_code: &str) -> String {
    let defaults = Settings::default();
    let mut doc = toml_edit::DocumentMut::new();

    let mut numbering = toml_edit::Table::new();
    numbering.insert("country_code", toml_edit::value(country_code));
    numbering.insert(
        "international_prefix",
        toml_edit::value(defaults.numbering.international_prefix.as_str()),
    );
    numbering.insert(
        "trunk_prefix",
        toml_edit::value(defaults.numbering.trunk_prefix.as_str()),
    );
    numbering.insert(
        "match_digits",
        toml_edit::value(defaults.numbering.match_digits as i64),
    );
    doc.insert("numbering", toml_edit::Item::Table(numbering));

    let mut source = toml_edit::Table::new();
    source.insert("box", toml_edit::value("all"));
    source.insert(
        "max_count",
        toml_edit::value(defaults.source.max_count as i64),
    );
    source.insert(
        "messages_file",
        toml_edit::value(defaults.source.messages_file.as_str()),
    );
    source.insert(
        "contacts_file",
        toml_edit::value(defaults.source.contacts_file.as_str()),
    );
    doc.insert("source", toml_edit::Item::Table(source));

    let mut display = toml_edit::Table::new();
    display.insert("locale", toml_edit::value(defaults.display.locale.as_str()));
    display.insert("thread_order", toml_edit::value("ascending"));
    doc.insert("display", toml_edit::Item::Table(display));

    doc.to_string()
}

pub fn run(path: &Path, country_code: &str, force: bool, register: bool) -> Result<()> {
    if !country_code.chars().all(|c| c.is_ascii_digit()) || country_code.is_empty() {
        bail!("--country-code must be digits only, e.g. 33");
    }

    let path: PathBuf = if path.starts_with("~") {
        crate::resolve::expand_tilde(&path.to_string_lossy())
    } else {
        path.to_path_buf()
    };
    std::fs::create_dir_all(&path)?;
    let path = path.canonicalize()?;

    let settings_path = path.join(".smsthreads.toml");
    if settings_path.exists() && !force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            settings_path.display()
        );
    }
    std::fs::write(&settings_path, generate_settings_toml(country_code))?;
    println!("Created {}", settings_path.display());

    for filename in &["messages.json", "contacts.json"] {
        let p = path.join(filename);
        if !p.exists() {
            std::fs::write(&p, "[]\n")?;
            println!("Created {}", p.display());
        }
    }

    if register {
        app_config::set_default_data_dir(&path.to_string_lossy())?;
        println!("Registered {} as the default data directory", path.display());
    }

    println!();
    println!("Done! Next steps:");
    println!("  - Export your SMS inbox to {}", path.join("messages.json").display());
    println!("  - Export your contacts to {}", path.join("contacts.json").display());
    println!("  - Run: smsthreads conversations");
    Ok(())
}
