//! LLM provider adapters and the HTTP dispatcher

mod anthropic;
mod factory;
mod generator;
mod http_client;
mod openai;
mod openrouter;

pub use anthropic::AnthropicAdapter;
pub use factory::ProviderAdapterFactory;
pub use generator::OutcomeGenerator;
pub use http_client::{HttpClient, HttpClientTrait, HttpResponse};
pub use openai::OpenAiAdapter;
pub use openrouter::{OpenRouterAdapter, DEFAULT_APP_TITLE, DEFAULT_REFERER};
