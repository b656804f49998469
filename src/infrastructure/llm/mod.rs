mod ollama;

pub use ollama::OllamaLlm;
