//! Builds the system and user messages for a generation request

use crate::request::{GenerationRequest, Message};

const CLOSING: &str
  = "Provide only the complete code solution without explanations.";
const COMMENTS_LINE: &str
  = "- Include detailed comments explaining the code logic\n";
const TESTS_LINE: &str
  = "- Include unit tests for the generated code\n";
const OPTIMIZE_LINE: &str
  = "- Optimize the code for performance\n";

fn preamble(language: &str) -> String
{   format!(
      "You are a helpful code generation assistant. Generate clean, \
       well-commented, and functional {language} code based on the \
       user's requirements.\n\
       \n\
       Guidelines:\n\
       - Write clean, readable, and maintainable code\n\
       - Follow best practices and conventions for {language}\n\
       - Include proper error handling where applicable\n\
       - Use meaningful variable and function names\n"
    )
}

/// System instruction for the request's options
pub fn system_prompt(request: &GenerationRequest) -> String
{   let opts = &request.options;
    let mut prompt = preamble(opts.language.name());
    if opts.include_comments
    {   prompt.push_str(COMMENTS_LINE);
    }
    if opts.include_tests
    {   prompt.push_str(TESTS_LINE);
    }
    if opts.optimize
    {   prompt.push_str(OPTIMIZE_LINE);
    }
    prompt.push('\n');
    prompt.push_str(CLOSING);
    prompt
}

/// User instruction: language and description, verbatim
pub fn user_prompt(request: &GenerationRequest) -> String
{   format!(
      "Generate {} code for: {}",
      request.options.language.name(),
      request.prompt
    )
}

/// Validate the request, then produce `[system, user]`
pub fn build_messages(
  request: &GenerationRequest
) -> Result<Vec<Message>, crate::error::Error>
{   request.validate()?;
    Ok(vec![
      Message::system(system_prompt(request))
    , Message::user(user_prompt(request))
    ])
}
