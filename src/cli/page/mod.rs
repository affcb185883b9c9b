//! Page command - prints the composed guide

use crate::domain::widget::{GeneratorWidget, PromptTemplateWidget};
use crate::page::Page;

pub async fn run() -> anyhow::Result<()> {
    let config = super::bootstrap();
    let reset = config.feedback.copied_reset();

    let generator = GeneratorWidget::new(reset);
    let prompt = PromptTemplateWidget::new(reset);

    println!("{}", Page::new(&generator, &prompt).render());
    Ok(())
}
