//! Model and device configuration for collaborator construction.
//!
//! Collaborators receive a [`ModelConfig`] when they are built; nothing in the
//! synthesis core reads it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_BIOMEDICAL_NER_MODEL: &str = "d4data/biomedical-ner-all";
pub const DEFAULT_GENERAL_NER_MODEL: &str = "en_core_web_sm";
pub const DEFAULT_SENTIMENT_MODEL: &str = "distilbert-base-uncased-finetuned-sst-2-english";
pub const DEFAULT_WHISPER_SIZE: &str = "base";

/// Configuration errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid device: {0}")]
    InvalidDevice(String),

    #[error("Empty value for {0}")]
    EmptyValue(&'static str),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Inference device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Device {
    Cuda { ordinal: u32 },
    Mps,
    #[default]
    Cpu,
}

impl Device {
    /// Parse `cpu`, `mps`, `cuda` or `cuda:<ordinal>`.
    pub fn parse(value: &str) -> ConfigResult<Self> {
        let lower = value.trim().to_lowercase();
        match lower.as_str() {
            "cpu" => Ok(Self::Cpu),
            "mps" => Ok(Self::Mps),
            "cuda" => Ok(Self::Cuda { ordinal: 0 }),
            other => other
                .strip_prefix("cuda:")
                .and_then(|n| n.parse().ok())
                .map(|ordinal| Self::Cuda { ordinal })
                .ok_or_else(|| ConfigError::InvalidDevice(value.to_string())),
        }
    }

    /// Device index for transformer pipelines: the CUDA ordinal, or -1 otherwise.
    pub fn pipeline_index(&self) -> i64 {
        match self {
            Self::Cuda { ordinal } => i64::from(*ordinal),
            Self::Mps | Self::Cpu => -1,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Cuda { .. } => "cuda",
            Self::Mps => "mps",
            Self::Cpu => "cpu",
        }
    }
}

/// Models backing each collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ModelConfig {
    pub biomedical_ner_model: String,
    pub general_ner_model: String,
    pub sentiment_model: String,
    /// Whisper checkpoint size (`tiny`, `base`, `small`, ...)
    pub whisper_size: String,
    pub device: Device,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            biomedical_ner_model: DEFAULT_BIOMEDICAL_NER_MODEL.to_string(),
            general_ner_model: DEFAULT_GENERAL_NER_MODEL.to_string(),
            sentiment_model: DEFAULT_SENTIMENT_MODEL.to_string(),
            whisper_size: DEFAULT_WHISPER_SIZE.to_string(),
            device: Device::default(),
        }
    }
}

impl ModelConfig {
    /// Load configuration from `MEDSCRIBE_*` environment variables.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let device = match lookup("MEDSCRIBE_DEVICE") {
            Some(value) => Device::parse(&value)?,
            None => defaults.device,
        };

        Ok(Self {
            biomedical_ner_model: non_empty(&lookup, "MEDSCRIBE_NER_MODEL", defaults.biomedical_ner_model)?,
            general_ner_model: non_empty(&lookup, "MEDSCRIBE_GENERAL_NER_MODEL", defaults.general_ner_model)?,
            sentiment_model: non_empty(&lookup, "MEDSCRIBE_SENTIMENT_MODEL", defaults.sentiment_model)?,
            whisper_size: non_empty(&lookup, "MEDSCRIBE_WHISPER_SIZE", defaults.whisper_size)?,
            device,
        })
    }
}

fn non_empty<F>(lookup: &F, key: &'static str, default: String) -> ConfigResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if value.trim().is_empty() => Err(ConfigError::EmptyValue(key)),
        Some(value) => Ok(value.trim().to_string()),
        None => Ok(default),
    }
}
