//! CLO Generator
//!
//! A guide to writing PLO-aligned Course Learning Outcomes for design
//! courses, with:
//! - the PLO framework, Bloom's Taxonomy verbs and before/after examples
//! - an outcome generator that calls OpenAI, Anthropic or OpenRouter with
//!   the user's own API key
//! - a copyable prompt template for use in any AI chat tool

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod page;

pub use config::AppConfig;
pub use domain::{GeneratorWidget, PromptTemplateWidget};
pub use page::Page;
