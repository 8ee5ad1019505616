use std::fmt;
use serde::{Deserialize, Serialize};
use log::{debug, trace, error};

pub const GROQ_API_BASE: &str
  = "https://api.groq.com/openai/v1";

/// Models the provider is known to serve. There is no
/// discovery endpoint, so this list is maintained by hand.
static KNOWN_MODELS: [&str; 3] =
  [   "llama-3.3-70b-versatile"
    , "llama-3.1-8b-instant"
    , "llama-4-scout-17b-16e-instruct"
  ];

/// Cheapest model, used for the credential probe
const PROBE_MODEL: &str = "llama-3.1-8b-instant";
const PROBE_MAX_TOKENS: u32 = 5;

const KEY_PREFIX: &str = "gsk_";

pub fn list_known_models() -> &'static [&'static str]
{   &KNOWN_MODELS
}

pub fn default_model() -> &'static str
{   KNOWN_MODELS[0]
}

// ===== Credential =====

/// API key. Held in memory only; `Debug` is redacted and
/// there is no `Display`, so it never reaches a log line.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential
{   pub fn new(key: impl Into<String>) -> Self
    {   Credential(key.into())
    }

    /// Check the key against the provider's format
    pub fn check_format(&self) -> Result<(), crate::error::Error>
    {   use crate::error::Error;

        let key = self.0.as_str();
        if key.is_empty()
        {   return Err(Error::AuthConfiguration(
              "API key is missing".to_string()
            ));
        }
        if key.chars().any(|c| c.is_whitespace() || c.is_control())
        {   return Err(Error::AuthConfiguration(
              "API key contains whitespace or control characters"
                .to_string()
            ));
        }
        if !key.starts_with(KEY_PREFIX) || key.len() == KEY_PREFIX.len()
        {   return Err(Error::AuthConfiguration(
              format!("Groq API keys start with '{}'", KEY_PREFIX)
            ));
        }
        Ok(())
    }

    fn expose(&self) -> &str
    {   &self.0
    }
}

impl fmt::Debug for Credential
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   f.write_str("Credential(***)")
    }
}

// ===== Wire Types =====

#[derive(Debug, Clone, Serialize)]
struct ChatRequest<'a>
{   model: &'a str
  , messages: &'a [crate::Message]
  , max_tokens: u32
  , #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>
}

#[derive(Debug, Clone, Deserialize)]
struct ChatResponse
{   choices: Vec<Choice>
}

#[derive(Debug, Clone, Deserialize)]
struct Choice
{   message: Option<ResponseMessage>
}

#[derive(Debug, Clone, Deserialize)]
struct ResponseMessage
{   content: Option<String>
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorEnvelope
{   error: ErrorBody
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorBody
{   message: String
}

/// Pull the generated text out of a response body
fn extract_content(body: &str) -> crate::GenerationResult
{   let response: ChatResponse = serde_json::from_str(body)?;
    let choice = response.choices
      .into_iter()
      .next()
      .ok_or_else(|| {
        crate::error::Error::Protocol(
          "response contained no choices".to_string()
        )
      })?;
    choice.message
      .and_then(|m| m.content)
      .ok_or_else(|| {
        crate::error::Error::Protocol(
          "first choice has no message content".to_string()
        )
      })
}

/// Provider's `error.message` if the body carries one,
/// otherwise the raw body
fn api_error_message(body: &str) -> String
{   match serde_json::from_str::<ErrorEnvelope>(body)
    {   Ok(envelope) => envelope.error.message
      , Err(_) if body.trim().is_empty() => "Unknown error".to_string()
      , Err(_) => body.trim().to_string()
    }
}

// ===== Groq Client =====

/// Connection to the Groq chat-completion endpoint, bound to
/// one credential. Transport resources are released on drop.
#[derive(Debug)]
pub struct GroqClient
{   credential: Credential
  , endpoint: String
  , http_client: reqwest::Client
}

impl GroqClient
{   /// Open a connection for `credential`
    pub fn connect(
      credential: Credential
    , config: &crate::config::ClientConfig
    ) -> Result<Self, crate::error::Error>
    {   credential.check_format()?;
        config.validate()?;
        let endpoint = config.endpoint()?.to_string();
        debug!("Creating GroqClient for {}", endpoint);

        let http_client = reqwest::Client::builder()
          .timeout(config.timeout())
          .build()
          .map_err(|e| {
            error!("Failed to build HTTP client: {}", e);
            crate::error::Error::Network(e.to_string())
          })?;

        Ok(GroqClient
        {   credential
          , endpoint
          , http_client
        })
    }

    pub fn endpoint(&self) -> &str
    {   &self.endpoint
    }

    /// One chat-completion round trip. Returns the first
    /// choice's content untouched.
    pub async fn generate(
      &self
    , messages: &[crate::Message]
    , model: &str
    , max_tokens: u32
    , temperature: f32
    ) -> crate::GenerationResult
    {   self.complete(messages, model, max_tokens, Some(temperature))
          .await
    }

    /// Cheap probe to see whether the credential is accepted.
    /// A `true` here does not promise later calls succeed.
    pub async fn validate_credential(&self) -> bool
    {   debug!("Probing credential with {}", PROBE_MODEL);
        let probe = [crate::Message::user("Hello")];
        match self.complete(&probe, PROBE_MODEL, PROBE_MAX_TOKENS, None)
          .await
        {   Ok(_) => true
          , Err(e) => {
              debug!("Credential probe failed: {}", e);
              false
            }
        }
    }

    async fn complete(
      &self
    , messages: &[crate::Message]
    , model: &str
    , max_tokens: u32
    , temperature: Option<f32>
    ) -> crate::GenerationResult
    {   debug!(
          "Sending {} messages to model {}",
          messages.len(), model
        );

        let request = ChatRequest
        {   model
          , messages
          , max_tokens
          , temperature
        };

        trace!("Groq request: {:?}", request);

        let response = self.http_client
          .post(&self.endpoint)
          .header(
            "Authorization",
            format!("Bearer {}", self.credential.expose())
          )
          .header("Content-Type", "application/json")
          .json(&request)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            crate::error::Error::from(e)
          })?;

        let status = response.status();
        trace!("Groq response status: {}", status);

        let body = response.text().await.map_err(|e| {
          error!("Failed to read response body: {}", e);
          crate::error::Error::from(e)
        })?;

        if !status.is_success()
        {   let message = api_error_message(&body);
            error!("Groq API error {}: {}", status, message);
            return Err(crate::error::Error::Api
            {   status: status.as_u16()
              , message
            });
        }

        extract_content(&body).map_err(|e| {
          error!("Bad response envelope: {}", e);
          e
        })
    }
}
