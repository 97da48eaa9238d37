//! Thin LLM service crate.
//!
//! Exposes [`LlmModelConfig`] and the [`OllamaService`] client for
//! single-shot, non-streaming text generation against a local Ollama
//! endpoint.

pub mod config;
pub mod services;

pub use config::LlmModelConfig;
pub use services::ollama_service::{OllamaError, OllamaService};
