//! CLI module for the CLO generator
//!
//! Subcommands:
//! - `page`: print the guide page
//! - `providers`: list providers and their models
//! - `generate`: one-shot outcome generation
//! - `prompt`: print or copy the manual prompt template
//! - `interactive`: line-driven generator session

pub mod generate;
pub mod interactive;
pub mod page;
pub mod prompt;
pub mod providers;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// CLO Generator - PLO-aligned Course Learning Outcomes with your own AI key
#[derive(Parser)]
#[command(name = "clo-generator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the full guide page
    Page,

    /// List AI providers and their models
    Providers,

    /// Generate outcomes for one course
    Generate(generate::GenerateArgs),

    /// Print or copy the DIY prompt template
    Prompt(prompt::PromptArgs),

    /// Start an interactive generator session
    Interactive,
}

/// Load `.env` and configuration, then start logging
pub fn bootstrap() -> AppConfig {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    config
}
