//! Manual prompt template for use in external chat tools

mod template;

pub use template::{
    base_prompt, prompt_with_variation, variation_for, FilledPrompt, PromptVariation,
    ADDITIONAL_CONTEXT_SEPARATOR, PROMPT_VARIATIONS,
};
