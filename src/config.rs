//! Configuration for the provider connection and for code generation

use std::fs;
use std::path::Path;
use std::time::Duration;
use serde::{Deserialize, Serialize};
use log::debug;

pub const DEFAULT_MAX_TOKENS: u32 = 4000;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Connection configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig
{   /// API base URL (if custom)
    pub api_base: Option<String>
  , /// Request timeout in seconds
    pub timeout_secs: Option<u64>
}

impl ClientConfig
{   pub fn api_base(&self) -> &str
    {   self.api_base
          .as_deref()
          .unwrap_or(crate::providers::groq::GROQ_API_BASE)
          .trim_end_matches('/')
    }

    pub fn timeout(&self) -> Duration
    {   Duration::from_secs(
          self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
        )
    }

    /// Chat-completions URL under the base. Only absolute
    /// http(s) bases are accepted.
    pub fn endpoint(&self)
      -> Result<reqwest::Url, crate::error::Error>
    {   let base = self.api_base();
        let url = reqwest::Url::parse(&format!("{}/chat/completions", base))
          .map_err(|e| {
            crate::error::Error::Validation(
              format!("invalid API base '{}': {}", base, e)
            )
          })?;
        if !matches!(url.scheme(), "http" | "https")
        {   return Err(crate::error::Error::Validation(
              format!("API base '{}' is not an http(s) URL", base)
            ));
        }
        Ok(url)
    }

    /// Reject settings that would make every call fail
    pub fn validate(&self) -> Result<(), crate::error::Error>
    {   if self.timeout_secs == Some(0)
        {   return Err(crate::error::Error::Validation(
              "timeout_secs must be positive".to_string()
            ));
        }
        self.endpoint().map(|_| ())
    }

    /// Parse connection settings from JSON text
    pub fn from_json(text: &str)
      -> Result<Self, crate::error::Error>
    {   serde_json::from_str(text).map_err(|e| {
          crate::error::Error::Validation(
            format!("invalid client config: {}", e)
          )
        })
    }
}

/// Every recognized generation option. Unknown keys in an
/// options file are rejected, not ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationOptions
{   /// Target language
    pub language: crate::Language
  , /// Ask for detailed comments
    pub include_comments: bool
  , /// Ask for unit tests
    pub include_tests: bool
  , /// Ask for performance-oriented code
    pub optimize: bool
  , /// Model identifier
    pub model: String
  , /// Max tokens to generate
    pub max_tokens: u32
  , /// Temperature for sampling, within [0, 2]
    pub temperature: f32
}

impl Default for GenerationOptions
{   fn default() -> Self
    {   GenerationOptions
        {   language: crate::Language::default()
          , include_comments: true
          , include_tests: false
          , optimize: false
          , model: crate::providers::groq::default_model().to_string()
          , max_tokens: DEFAULT_MAX_TOKENS
          , temperature: DEFAULT_TEMPERATURE
        }
    }
}

impl GenerationOptions
{   /// Parse options from JSON text
    pub fn from_json(text: &str)
      -> Result<Self, crate::error::Error>
    {   serde_json::from_str(text).map_err(|e| {
          crate::error::Error::Validation(
            format!("invalid generation options: {}", e)
          )
        })
    }

    /// Load options from a JSON file
    pub fn load(path: &Path)
      -> Result<Self, crate::error::Error>
    {   debug!("Loading generation options from {}", path.display());
        let text = fs::read_to_string(path).map_err(|e| {
          crate::error::Error::Validation(
            format!("cannot read {}: {}", path.display(), e)
          )
        })?;
        Self::from_json(&text)
    }
}
