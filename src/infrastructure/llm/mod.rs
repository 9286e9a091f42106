mod gemini_client;
mod prompt;

pub use gemini_client::GeminiClient;
pub use prompt::{SOAP_PROMPT_TEMPLATE, build_soap_prompt};
