//! # tarjuman - Translation over HTTP and the terminal
//!
//! `tarjuman` exposes a single translation operation in two ways: a JSON
//! HTTP endpoint (`POST /translate`) and an interactive one-shot CLI. Both
//! build the same instruction prompt and hand it to a remote
//! OpenAI-compatible chat-completions endpoint.
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive translation in the terminal
//! export GEMINI_API_KEY="your-api-key"
//! tarjuman
//!
//! # Run the HTTP server
//! tarjuman serve
//!
//! # Call the endpoint
//! curl -X POST http://127.0.0.1:8000/translate \
//!   -H 'Content-Type: application/json' \
//!   -d '{"text": "Hello", "language": "Urdu"}'
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/tarjuman/config.toml`; CLI flags take
//! precedence over file values:
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 8000
//!
//! [provider]
//! endpoint = "https://generativelanguage.googleapis.com/v1beta/openai"
//! model = "gemini-2.0-flash"
//! api_key_env = "GEMINI_API_KEY"
//! ```
//!
//! The API key is read from the environment variable named by
//! `api_key_env`, never from source.

/// Agent abstraction over a remote language model.
pub mod agent;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and provider settings.
pub mod config;

/// XDG-style path utilities for configuration.
pub mod paths;

/// HTTP surface for the translation endpoint.
pub mod server;

/// Prompt construction for translation requests.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
