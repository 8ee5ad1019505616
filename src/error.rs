use std::fmt;

/// Failure category, for callers that branch on the kind
/// of error rather than its message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind
{   Validation
  , AuthConfiguration
  , Network
  , Api
  , Protocol
}

/// Error type for every fallible operation in the crate
/// Implements Clone so results can be handed around freely
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Request rejected before any network activity
    Validation(String)
  , /// Credential missing or not in the provider's format
    AuthConfiguration(String)
  , /// Transport failure (timeout, refused, DNS, broken body)
    Network(String)
  , /// Provider answered with a non-success status
    Api
    {   status: u16
      , message: String
    }
  , /// Response did not match the chat-completion envelope
    Protocol(String)
}

impl Error
{   pub fn kind(&self) -> ErrorKind
    {   match self
        {   Error::Validation(_) => ErrorKind::Validation
          , Error::AuthConfiguration(_) => {
              ErrorKind::AuthConfiguration
            }
          , Error::Network(_) => ErrorKind::Network
          , Error::Api { .. } => ErrorKind::Api
          , Error::Protocol(_) => ErrorKind::Protocol
        }
    }
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::Validation(msg) => {
              write!(f, "Invalid request: {}", msg)
            }
          , Error::AuthConfiguration(msg) => {
              write!(f, "Credential error: {}", msg)
            }
          , Error::Network(msg) => {
              write!(f, "Network error: {}", msg)
            }
          , Error::Api { status, message } => {
              write!(f, "API error ({}): {}", status, message)
            }
          , Error::Protocol(msg) => {
              write!(f,
                "Unexpected response format from API: {}",
                msg
              )
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error
{   fn from(e: reqwest::Error) -> Self
    {   if e.is_builder()
        {   return Error::Validation(
              format!("cannot build request: {}", e)
            );
        }
        let detail = if e.is_timeout()
        {   format!("request timed out: {}", e)
        } else if e.is_connect()
        {   format!("could not connect: {}", e)
        } else
        {   e.to_string()
        };
        Error::Network(detail)
    }
}

impl From<serde_json::Error> for Error
{   fn from(e: serde_json::Error) -> Self
    {   Error::Protocol(e.to_string())
    }
}
