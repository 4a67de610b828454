mod client;
mod definition;
mod runner;

pub use client::ChatCompletionRunner;
pub use definition::{AgentDefinition, TRANSLATOR_INSTRUCTIONS};
pub use runner::AgentRunner;
