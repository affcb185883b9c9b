//! Providers command - lists the provider catalog

use std::fmt::Write;

use crate::domain::generation::PROVIDERS;

pub async fn run() -> anyhow::Result<()> {
    super::bootstrap();
    print!("{}", render());
    Ok(())
}

fn render() -> String {
    let mut out = String::new();

    for provider in PROVIDERS.iter() {
        let _ = writeln!(out, "{} ({})", provider.name, provider.id);
        let _ = writeln!(out, "  endpoint: {}", provider.endpoint);
        for (i, model) in provider.models.iter().enumerate() {
            let marker = if i == 0 { " (default)" } else { "" };
            let _ = writeln!(out, "  - {}{}", model, marker);
        }
    }

    out
}
