//! Target programming languages and their file extensions

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

/// Language the generated code should be written in.
/// Anything outside the known set is carried as `Other`
/// with the name the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Language
{   Python
  , JavaScript
  , Java
  , Cpp
  , CSharp
  , Go
  , Rust
  , TypeScript
  , Html
  , Css
  , Sql
  , Other(String)
}

impl Language
{   /// The known languages, in the order a picker shows them
    pub const KNOWN: [Language; 11] =
      [   Language::Python
        , Language::JavaScript
        , Language::Java
        , Language::Cpp
        , Language::CSharp
        , Language::Go
        , Language::Rust
        , Language::TypeScript
        , Language::Html
        , Language::Css
        , Language::Sql
      ];

    /// Name as it appears in prompts
    pub fn name(&self) -> &str
    {   match self
        {   Language::Python => "Python"
          , Language::JavaScript => "JavaScript"
          , Language::Java => "Java"
          , Language::Cpp => "C++"
          , Language::CSharp => "C#"
          , Language::Go => "Go"
          , Language::Rust => "Rust"
          , Language::TypeScript => "TypeScript"
          , Language::Html => "HTML"
          , Language::Css => "CSS"
          , Language::Sql => "SQL"
          , Language::Other(name) => name
        }
    }

    /// File extension for the downloadable artifact
    pub fn extension(&self) -> &'static str
    {   match self
        {   Language::Python => "py"
          , Language::JavaScript => "js"
          , Language::Java => "java"
          , Language::Cpp => "cpp"
          , Language::CSharp => "cs"
          , Language::Go => "go"
          , Language::Rust => "rs"
          , Language::TypeScript => "ts"
          , Language::Html => "html"
          , Language::Css => "css"
          , Language::Sql => "sql"
          , Language::Other(_) => "txt"
        }
    }

    pub fn is_known(&self) -> bool
    {   !matches!(self, Language::Other(_))
    }
}

impl Default for Language
{   fn default() -> Self
    {   Language::Python
    }
}

impl FromStr for Language
{   type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {   let name = s.trim();
        if name.is_empty()
        {   return Err(crate::error::Error::Validation(
              "target language must not be empty".to_string()
            ));
        }
        let known = Language::KNOWN
          .iter()
          .find(|l| l.name().eq_ignore_ascii_case(name))
          .cloned();
        Ok(known.unwrap_or_else(|| Language::Other(name.to_string())))
    }
}

impl TryFrom<String> for Language
{   type Error = crate::error::Error;

    fn try_from(s: String) -> Result<Self, Self::Error>
    {   s.parse()
    }
}

impl From<Language> for String
{   fn from(l: Language) -> Self
    {   l.name().to_string()
    }
}

impl fmt::Display for Language
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   f.write_str(self.name())
    }
}
