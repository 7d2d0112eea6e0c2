//! CLI entrypoint for surveyforge
//!
//! Wires the layers together: configuration, the DeepSeek gateway adapter,
//! and the parse/slug use cases.

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::Cli;
use std::io::Read;
use std::sync::Arc;
use surveyforge_application::{AssignSlugUseCase, ParseSurveyUseCase};
use surveyforge_domain::Model;
use surveyforge_infrastructure::{ConfigLoader, DeepSeekGateway, InMemorySurveyStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    let model = Model::from_name(cli.model.as_deref().unwrap_or(&config.provider.model));

    let text = read_input(&cli)?;
    if text.trim().is_empty() {
        bail!("Survey text cannot be empty");
    }

    // === Dependency Injection ===
    let gateway = Arc::new(
        DeepSeekGateway::new(&config.provider)
            .map_err(|e| anyhow::anyhow!("{e}"))
            .context("set SURVEYFORGE_API_KEY or DEEPSEEK_API_KEY")?,
    );
    let use_case = ParseSurveyUseCase::new(gateway).with_model(model);

    info!("parsing survey text ({} bytes)", text.len());

    let survey = match use_case.execute(&text).await {
        Ok(survey) => survey,
        Err(e) => bail!("{e}"),
    };

    let mut output = serde_json::to_value(&survey)?;

    if cli.slug {
        // Fresh in-memory store: the survey is not published anywhere yet,
        // so the probe only guards against repeats within this run.
        let slugs = AssignSlugUseCase::new(Arc::new(InMemorySurveyStore::new()));
        let slug = slugs.execute().await?;
        output["slug"] = serde_json::Value::String(slug);
    }

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn read_input(cli: &Cli) -> Result<String> {
    match &cli.input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}
