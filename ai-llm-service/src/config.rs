/// Configuration for an LLM model invocation.
///
/// # Fields
///
/// - `model`: The model identifier (e.g., `"phi3:mini"`, `"qwen3:14b"`).
/// - `endpoint`: The Ollama endpoint (e.g., `"http://127.0.0.1:11434"`).
/// - `max_tokens`: Maximum number of tokens to generate (if supported).
/// - `temperature`: Controls randomness (0.0 = deterministic, >1.0 = more random).
/// - `timeout_secs`: Optional request timeout in seconds (defaults to 60).
#[derive(Debug, Clone)]
pub struct LlmModelConfig {
    /// Model identifier string.
    pub model: String,

    /// Inference endpoint (local server URL).
    pub endpoint: String,

    /// Maximum number of tokens to generate.
    pub max_tokens: Option<u32>,

    /// Sampling temperature (controls creativity).
    pub temperature: Option<f32>,

    /// Optional request timeout (in seconds).
    pub timeout_secs: Option<u64>,
}
