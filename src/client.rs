use log::{debug, info};
use crate::providers::groq::{Credential, GroqClient};
use crate::request::{GeneratedCode, GenerationRequest};

/// Turns generation requests into code: validates, builds
/// the messages, and makes exactly one provider call.
#[derive(Debug)]
pub struct CodeGenerator
{   client: GroqClient
}

impl CodeGenerator
{   pub fn new(client: GroqClient) -> Self
    {   CodeGenerator { client }
    }

    /// Open a connection and wrap it
    pub fn connect(
      credential: Credential
    , config: &crate::config::ClientConfig
    ) -> Result<Self, crate::error::Error>
    {   Ok(Self::new(GroqClient::connect(credential, config)?))
    }

    pub fn client(&self) -> &GroqClient
    {   &self.client
    }

    /// Advisory probe; never consulted by `generate_code`
    pub async fn validate_credential(&self) -> bool
    {   self.client.validate_credential().await
    }

    pub async fn generate_code(
      &self
    , request: &GenerationRequest
    ) -> Result<GeneratedCode, crate::error::Error>
    {   let messages = crate::prompt::build_messages(request)?;
        let opts = &request.options;
        debug!(
          "Generating {} code with {}",
          opts.language, opts.model
        );

        let code = self.client
          .generate(
            &messages,
            &opts.model,
            opts.max_tokens,
            opts.temperature
          )
          .await?;

        info!("Generated {} bytes of {} code", code.len(), opts.language);
        Ok(GeneratedCode
        {   code
          , language: opts.language.clone()
        })
    }
}
