pub mod error;
pub mod config;
pub mod language;
pub mod providers;
pub mod request;
pub mod prompt;
pub mod client;

/*

groq-codegen: describe some code in plain words, pick a
language, get source back from the Groq chat API.

src/
├── lib.rs          # Re-exports and the result type
├── error.rs        # Error kinds and mapping from transport errors
├── config.rs       # Connection config and generation options
├── language.rs     # Target languages and file extensions
├── request.rs      # Messages, requests, generated artifacts
├── prompt.rs       # System/user prompt construction
├── client.rs       # CodeGenerator: prompt -> one call -> code
├── main.rs         # Command-line host
└── providers/
    ├── mod.rs
    └── groq.rs     # Credential, wire types, GroqClient

*/

pub use client::CodeGenerator;
pub use config::{ClientConfig, GenerationOptions};
pub use error::{Error, ErrorKind};
pub use language::Language;
pub use providers::groq::{list_known_models, Credential, GroqClient};
pub use request::{GeneratedCode, GenerationRequest, Message, Role};

/// Outcome of one generation call: the text, or why not
pub type GenerationResult = Result<String, crate::error::Error>;
