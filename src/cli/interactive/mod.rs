//! Interactive command - a line-driven session over the generator widget

use tokio::io::{self, AsyncBufReadExt, BufReader};
use tokio::signal;
use tracing::{info, warn};

use crate::domain::curriculum::CourseLevel;
use crate::domain::generation::{OutcomeService, ProviderId};
use crate::domain::widget::{Clipboard, GeneratorWidget};
use crate::infrastructure::{HttpClient, OutcomeGenerator, TerminalClipboard};
use crate::page::generator_summary;

const HELP: &str = "\
Commands:
  provider <openai|anthropic|openrouter>  select provider (resets model)
  model <id>                              select a model of the provider
  key <api key>                           set your API key
  name <text>                             course name
  code <text>                             course code
  desc <text>                             course description
  level <foundational|intermediate|advanced>
  plo <1-6>                               toggle a PLO
  count <3-6>                             number of outcomes
  generate                                generate outcomes (Ctrl+C cancels)
  copy                                    copy outcomes to the clipboard
  show                                    show the current form and results
  help                                    this text
  quit                                    leave the session (or Ctrl+C)";

/// What the loop should do after a command
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue(String),
    Quit,
}

/// One interactive session
pub struct Session<'a> {
    widget: GeneratorWidget,
    service: &'a dyn OutcomeService,
    clipboard: &'a dyn Clipboard,
}

impl<'a> Session<'a> {
    pub fn new(
        widget: GeneratorWidget,
        service: &'a dyn OutcomeService,
        clipboard: &'a dyn Clipboard,
    ) -> Self {
        Self {
            widget,
            service,
            clipboard,
        }
    }

    pub fn widget(&self) -> &GeneratorWidget {
        &self.widget
    }

    /// Ctrl+C cancels an in-flight generation, otherwise it ends the session
    pub fn interrupt(&mut self) -> Flow {
        if self.widget.is_generating() {
            warn!("Generation interrupted");
            self.widget.cancel_generation();
            Flow::Continue("Cancelled".to_string())
        } else {
            Flow::Quit
        }
    }

    pub async fn handle(&mut self, line: &str) -> Flow {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        let message = match command {
            "" => String::new(),
            "provider" => match rest.parse::<ProviderId>() {
                Ok(provider) => {
                    self.widget.select_provider(provider);
                    format!("Provider: {} ({})", provider.display_name(), self.widget.model())
                }
                Err(e) => e.to_string(),
            },
            "model" => match self.widget.select_model(rest) {
                Ok(()) => format!("Model: {}", self.widget.model()),
                Err(e) => e.to_string(),
            },
            "key" => {
                self.widget.set_api_key(rest);
                "API key set".to_string()
            }
            "name" => {
                self.widget.set_course_name(rest);
                format!("Course name: {}", rest)
            }
            "code" => {
                self.widget.set_course_code(rest);
                format!("Course code: {}", rest)
            }
            "desc" => {
                self.widget.set_course_description(rest);
                "Course description set".to_string()
            }
            "level" => match rest.parse::<CourseLevel>() {
                Ok(level) => {
                    self.widget.set_course_level(level);
                    format!("Level: {} ({})", level, level.bloom_summary())
                }
                Err(e) => e.to_string(),
            },
            "plo" => match rest.parse::<u8>() {
                Ok(id) => match self.widget.toggle_plo(id) {
                    Ok(selected) => format!(
                        "PLO {} {}",
                        id,
                        if selected { "selected" } else { "removed" }
                    ),
                    Err(e) => e.to_string(),
                },
                Err(_) => format!("Not a PLO number: '{}'", rest),
            },
            "count" => match rest.parse::<u8>() {
                Ok(count) => match self.widget.set_outcome_count(count) {
                    Ok(()) => format!("Outcomes: {}", count),
                    Err(e) => e.to_string(),
                },
                Err(_) => format!("Not a number: '{}'", rest),
            },
            "generate" => match self.widget.generate(self.service).await {
                Ok(()) => self.widget.results_text(),
                Err(e) => e.to_string(),
            },
            "copy" => match self.widget.copy_results(self.clipboard) {
                Ok(true) => "Copied!".to_string(),
                Ok(false) => "Nothing to copy yet".to_string(),
                Err(e) => e.to_string(),
            },
            "show" => generator_summary(&self.widget),
            "help" => HELP.to_string(),
            "quit" | "exit" => return Flow::Quit,
            other => format!("Unknown command '{}'. Type 'help' for commands.", other),
        };

        Flow::Continue(message)
    }
}

pub async fn run() -> anyhow::Result<()> {
    let config = super::bootstrap();

    let generator = OutcomeGenerator::new(HttpClient::new(), &config.client);
    let clipboard = TerminalClipboard::stderr();
    let widget = GeneratorWidget::new(config.feedback.copied_reset());
    let mut session = Session::new(widget, &generator, &clipboard);

    info!("Interactive session started");
    println!("{}", HELP);

    let mut lines = BufReader::new(io::stdin()).lines();

    loop {
        let line = tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => Some(line),
                None => break,
            },
            _ = signal::ctrl_c() => None,
        };

        let handled = match line {
            Some(line) => tokio::select! {
                flow = session.handle(&line) => Some(flow),
                _ = signal::ctrl_c() => None,
            },
            None => None,
        };
        let flow = match handled {
            Some(flow) => flow,
            None => session.interrupt(),
        };

        match flow {
            Flow::Continue(message) => {
                if !message.is_empty() {
                    println!("{}", message);
                }
            }
            Flow::Quit => break,
        }
    }

    info!("Interactive session ended");
    Ok(())
}
