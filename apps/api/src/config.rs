use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Which LLM backend to use. Selected once at startup via `MODEL_BACKEND`;
/// nothing downstream branches on this after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Anthropic,
    OpenAi,
}

/// Per-backend model identifier, credential and sampling defaults.
#[derive(Debug, Clone)]
pub struct ModelSettings {
    pub model_name: String,
    pub api_key: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Application configuration loaded from environment variables.
/// Constructed once in `main` and injected; core logic never reads env vars.
#[derive(Debug, Clone)]
pub struct Config {
    pub backend: ModelKind,
    pub anthropic: ModelSettings,
    pub openai: ModelSettings,
    pub cache_dir: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let backend = match env_or("MODEL_BACKEND", "openai").to_lowercase().as_str() {
            "openai" => ModelKind::OpenAi,
            "anthropic" => ModelKind::Anthropic,
            other => bail!("unknown MODEL_BACKEND '{other}' (expected 'openai' or 'anthropic')"),
        };

        let config = Config {
            backend,
            anthropic: ModelSettings {
                model_name: env_or("ANTHROPIC_MODEL_NAME", "claude-3-5-haiku-latest"),
                api_key: std::env::var("ANTHROPIC_API_KEY").unwrap_or_default(),
                max_tokens: parse_env("ANTHROPIC_MAX_TOKENS", 2000)?,
                temperature: parse_env("ANTHROPIC_TEMPERATURE", 0.7)?,
            },
            openai: ModelSettings {
                model_name: env_or("OPENAI_MODEL_NAME", "gpt-4o-mini"),
                api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
                max_tokens: parse_env("OPENAI_MAX_TOKENS", 2000)?,
                temperature: parse_env("OPENAI_TEMPERATURE", 0.7)?,
            },
            cache_dir: PathBuf::from(env_or("CACHE_DIR", "cache")),
            port: parse_env("PORT", 8080)?,
            rust_log: env_or("RUST_LOG", "info"),
        };

        if config.backend_settings().api_key.is_empty() {
            let var = match config.backend {
                ModelKind::Anthropic => "ANTHROPIC_API_KEY",
                ModelKind::OpenAi => "OPENAI_API_KEY",
            };
            bail!("Required environment variable '{var}' is not set for the selected backend");
        }

        Ok(config)
    }

    /// Settings for the backend selected by `MODEL_BACKEND`.
    pub fn backend_settings(&self) -> &ModelSettings {
        match self.backend {
            ModelKind::Anthropic => &self.anthropic,
            ModelKind::OpenAi => &self.openai,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("'{key}' has an invalid value")),
        Err(_) => Ok(default),
    }
}
