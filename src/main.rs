use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error, warn};

use groq_codegen::{
  ClientConfig, CodeGenerator, Credential, GenerationOptions,
  GenerationRequest, Language,
};

#[derive(Parser)]
#[command(name = "groq-codegen")]
#[command(author, version, about = "Generate code from a description with the Groq API", long_about = None)]
struct Cli
{   /// What the code should do; read from stdin when omitted
    prompt: Option<String>

  , /// Target language (Python, JavaScript, Java, C++, C#, Go, Rust,
    /// TypeScript, HTML, CSS, SQL, or any other name)
    #[arg(short, long)]
    language: Option<Language>

  , /// Do not ask for explanatory comments
    #[arg(long)]
    no_comments: bool

  , /// Ask for unit tests
    #[arg(long)]
    tests: bool

  , /// Ask for performance-oriented code
    #[arg(long)]
    optimize: bool

  , #[arg(short, long)]
    model: Option<String>

  , #[arg(long)]
    max_tokens: Option<u32>

  , #[arg(long)]
    temperature: Option<f32>

  , /// JSON file with generation options; flags override it
    #[arg(long)]
    options: Option<PathBuf>

  , #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    api_key: Option<String>

  , #[arg(long)]
    api_base: Option<String>

  , #[arg(long)]
    timeout_secs: Option<u64>

  , /// Directory the generated file is written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf

  , /// Print the code instead of writing a file
    #[arg(long)]
    stdout: bool

  , /// Probe the key first and stop if it is rejected
    #[arg(long)]
    verify_key: bool

  , /// Print the known model identifiers and exit
    #[arg(long)]
    list_models: bool

  , #[arg(short, long)]
    verbose: bool
}

impl Cli
{   fn generation_options(&self)
      -> Result<GenerationOptions, groq_codegen::Error>
    {   let mut opts = match &self.options
        {   Some(path) => GenerationOptions::load(path)?
          , None => GenerationOptions::default()
        };
        if let Some(language) = &self.language
        {   opts.language = language.clone();
        }
        if self.no_comments
        {   opts.include_comments = false;
        }
        if self.tests
        {   opts.include_tests = true;
        }
        if self.optimize
        {   opts.optimize = true;
        }
        if let Some(model) = &self.model
        {   opts.model = model.clone();
        }
        if let Some(max_tokens) = self.max_tokens
        {   opts.max_tokens = max_tokens;
        }
        if let Some(temperature) = self.temperature
        {   opts.temperature = temperature;
        }
        Ok(opts)
    }

    fn client_config(&self) -> ClientConfig
    {   ClientConfig
        {   api_base: self.api_base.clone()
          , timeout_secs: self.timeout_secs
        }
    }

    fn read_prompt(&self) -> std::io::Result<String>
    {   match &self.prompt
        {   Some(prompt) => Ok(prompt.clone())
          , None => {
              let mut buf = String::new();
              std::io::stdin().read_to_string(&mut buf)?;
              Ok(buf)
            }
        }
    }
}

/// Emit the code exactly as the provider sent it
fn write_verbatim(out: &mut impl Write, code: &str) -> std::io::Result<()>
{   out.write_all(code.as_bytes())?;
    out.flush()
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>>
{   if cli.list_models
    {   for model in groq_codegen::list_known_models()
        {   println!("{}", model);
        }
        return Ok(());
    }

    let options = cli.generation_options()?;
    let request = GenerationRequest::new(cli.read_prompt()?, options);
    // Fail on a bad request before touching the credential
    request.validate()?;

    let credential = Credential::new(cli.api_key.clone().unwrap_or_default());
    let generator = CodeGenerator::connect(credential, &cli.client_config())?;
    debug!("Using endpoint {}", generator.client().endpoint());

    if cli.verify_key && !generator.validate_credential().await
    {   return Err("the API key was rejected by the credential probe".into());
    }

    let generated = generator.generate_code(&request).await?;

    if cli.stdout
    {   write_verbatim(&mut std::io::stdout().lock(), &generated.code)?;
    } else
    {   let path = generated.save_in(&cli.output_dir)?;
        eprintln!("Code generated successfully: {}", path.display());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode
{   let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(
      env_logger::Env::default().default_filter_or(default_level)
    ).init();

    if cli.api_key.is_none() && !cli.list_models
    {   warn!("No API key given; set GROQ_API_KEY or pass --api-key");
    }

    match run(cli).await
    {   Ok(()) => ExitCode::SUCCESS
      , Err(e) => {
          error!("{}", e);
          eprintln!("Error: {}", e);
          ExitCode::FAILURE
        }
    }
}
