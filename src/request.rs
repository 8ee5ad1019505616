//! Request and response types for code generation

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

/// Message role in a chat-completion exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role
{   System
  , User
}

/// A single role-tagged message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message
{   pub role: Role
  , pub content: String
}

impl Message
{   pub fn system(content: impl Into<String>) -> Self
    {   Message { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self
    {   Message { role: Role::User, content: content.into() }
    }
}

/// What the user asked for, plus how to ask for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest
{   /// Natural-language description of the code
    pub prompt: String
  , pub options: crate::config::GenerationOptions
}

impl GenerationRequest
{   pub fn new(
      prompt: impl Into<String>
    , options: crate::config::GenerationOptions
    ) -> Self
    {   GenerationRequest
        {   prompt: prompt.into()
          , options
        }
    }

    /// Check every request invariant; nothing is sent
    /// for a request that fails here
    pub fn validate(&self) -> Result<(), crate::error::Error>
    {   use crate::error::Error;

        if self.prompt.trim().is_empty()
        {   return Err(Error::Validation(
              "please describe the code you want to generate".to_string()
            ));
        }
        if self.options.language.name().trim().is_empty()
        {   return Err(Error::Validation(
              "target language must not be empty".to_string()
            ));
        }
        if self.options.model.trim().is_empty()
        {   return Err(Error::Validation(
              "model must not be empty".to_string()
            ));
        }
        if self.options.max_tokens == 0
        {   return Err(Error::Validation(
              "max_tokens must be positive".to_string()
            ));
        }
        let t = self.options.temperature;
        if !t.is_finite() || !(0.0..=2.0).contains(&t)
        {   return Err(Error::Validation(
              format!("temperature {} is outside [0, 2]", t)
            ));
        }
        Ok(())
    }
}

/// Generated source, ready to be saved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCode
{   pub code: String
  , pub language: crate::Language
}

impl GeneratedCode
{   /// `generated_code.<ext>`
    pub fn file_name(&self) -> String
    {   format!("generated_code.{}", self.language.extension())
    }

    /// Write the code into `dir` and return the path written
    pub fn save_in(&self, dir: &Path) -> std::io::Result<PathBuf>
    {   let path = dir.join(self.file_name());
        std::fs::write(&path, &self.code)?;
        Ok(path)
    }
}
