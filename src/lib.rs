//! Group an exported SMS inbox into per-contact conversation threads.
//!
//! The core is [`organize`]: it canonicalizes phone numbers with
//! [`phone::NumberingPlan`], groups messages by partner, attaches contact
//! names, and builds separator-annotated thread views. Everything else reads
//! the exports, resolves configuration, or renders text.

pub mod app_config;
pub mod cli;
pub mod commands;
pub mod config;
pub mod directory;
pub mod model;
pub mod organize;
pub mod phone;
pub mod render;
pub mod resolve;
pub mod source;
