//! Generate command - one-shot outcome generation

use std::io::{self, Write};

use clap::Args;
use tracing::{error, warn};

use crate::domain::curriculum::CourseLevel;
use crate::domain::generation::ProviderId;
use crate::domain::widget::{Clipboard, GeneratorWidget};
use crate::domain::DomainError;
use crate::infrastructure::{HttpClient, OutcomeGenerator, TerminalClipboard};

#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// AI provider (openai, anthropic, openrouter)
    #[arg(long)]
    pub provider: ProviderId,

    /// Model id; defaults to the provider's first model
    #[arg(long)]
    pub model: Option<String>,

    /// Your API key for the provider. Sent only to the provider. Prefer the
    /// CLO_API_KEY environment variable; a flag value shows up in shell
    /// history and process listings.
    #[arg(long, env = "CLO_API_KEY", hide_env_values = true, default_value = "")]
    pub api_key: String,

    #[arg(long, default_value = "")]
    pub course_name: String,

    #[arg(long, default_value = "")]
    pub course_code: String,

    #[arg(long, default_value = "")]
    pub description: String,

    /// foundational, intermediate or advanced
    #[arg(long, default_value_t = CourseLevel::Foundational)]
    pub level: CourseLevel,

    /// PLO to align with; repeat for several. Defaults to 1, 2, 4, 5.
    #[arg(long = "plo")]
    pub plo: Vec<u8>,

    /// Number of outcomes to generate
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(3..=6))]
    pub count: u8,

    /// Print outcomes as JSON
    #[arg(long)]
    pub json: bool,

    /// Copy the numbered outcomes to the clipboard
    #[arg(long)]
    pub copy: bool,
}

pub async fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let config = super::bootstrap();

    let mut widget = GeneratorWidget::new(config.feedback.copied_reset());
    fill_form(&args, &mut widget)?;

    let generator = OutcomeGenerator::new(HttpClient::new(), &config.client);

    if let Err(e) = widget.generate(&generator).await {
        if e.is_validation() {
            warn!(error = %e, "Generation not started");
        } else {
            error!(provider = %args.provider, error = %e, "Generation failed");
        }
        return Err(e.into());
    }

    let clipboard = TerminalClipboard::stderr();
    if emit(&args, &mut widget, &mut io::stdout().lock(), &clipboard)? {
        eprintln!("Copied!");
    }

    Ok(())
}

/// Print the results to `out` and copy them when asked. Returns whether
/// anything was copied. The clipboard writes through its own sink so `out`
/// carries only the results.
pub fn emit(
    args: &GenerateArgs,
    widget: &mut GeneratorWidget,
    out: &mut dyn Write,
    clipboard: &dyn Clipboard,
) -> anyhow::Result<bool> {
    writeln!(out, "{}", render(widget, args.json)?)?;
    out.flush()?;

    if args.copy {
        return Ok(widget.copy_results(clipboard)?);
    }

    Ok(false)
}

/// Apply the arguments to the widget form
pub fn fill_form(args: &GenerateArgs, widget: &mut GeneratorWidget) -> Result<(), DomainError> {
    widget.select_provider(args.provider);
    if let Some(model) = &args.model {
        widget.select_model(model)?;
    }

    widget.set_api_key(args.api_key.as_str());
    widget.set_course_name(args.course_name.as_str());
    widget.set_course_code(args.course_code.as_str());
    widget.set_course_description(args.description.as_str());
    widget.set_course_level(args.level);

    if !args.plo.is_empty() {
        widget.select_plos(&args.plo)?;
    }

    widget.set_outcome_count(args.count)
}

pub fn render(widget: &GeneratorWidget, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(widget.outcomes())?)
    } else {
        Ok(widget.results_text())
    }
}
