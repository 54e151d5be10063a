// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::config::SiteGenConfig;
use crate::orchestrator::{GenerationRequest, ImageChoice, Orchestrator, SiteFeatures};

/// Fabstir site generator CLI
#[derive(Parser, Debug)]
#[command(name = "sitegen-cli")]
#[command(version = crate::version::VERSION_NUMBER)]
#[command(about = "Generate business websites and inspect provider configuration", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a website once and write the HTML
    Generate(GenerateArgs),

    /// Show which provider credentials are configured
    Status,
}

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Free-text business description
    #[arg(long)]
    pub description: String,

    /// Build the site without any images
    #[arg(long)]
    pub no_images: bool,

    /// Leave out the floating WhatsApp button
    #[arg(long)]
    pub no_whatsapp: bool,

    /// Write HTML to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl GenerateArgs {
    pub fn to_request(&self) -> GenerationRequest {
        let image_choice = if self.no_images {
            ImageChoice::None
        } else {
            ImageChoice::Ai
        };
        GenerationRequest::new(self.description.clone())
            .with_image_choice(image_choice)
            .with_features(SiteFeatures {
                whatsapp: !self.no_whatsapp,
            })
    }
}

/// Execute CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    dotenv::dotenv().ok();
    let config = SiteGenConfig::from_env();
    config.validate().map_err(|e| anyhow!(e))?;

    match cli.command {
        Commands::Generate(args) => generate(args, &config).await,
        Commands::Status => status(&config),
    }
}

async fn generate(args: GenerateArgs, config: &SiteGenConfig) -> Result<()> {
    let orchestrator = Orchestrator::from_config(config)?;
    let site = orchestrator
        .generate_within(&args.to_request(), config.request_timeout())
        .await?;

    info!(
        provider = site.text_provider,
        image_source = ?site.image_source,
        "Generated {} bytes of HTML",
        site.html.len()
    );

    match args.output {
        Some(path) => {
            tokio::fs::write(&path, &site.html).await?;
            println!("Wrote {}", path.display());
        }
        None => println!("{}", site.html),
    }
    Ok(())
}

fn status(config: &SiteGenConfig) -> Result<()> {
    let status = config.credential_status();
    let mark = |configured: bool| if configured { "configured" } else { "missing" };

    println!("OpenAI (primary text):     {}", mark(status.openai));
    println!("Anthropic (secondary text): {}", mark(status.anthropic));
    println!("Stability (images):        {}", mark(status.stability));
    if !config.has_text_provider() {
        println!("\nNo text provider configured: generation requests will fail.");
    }
    Ok(())
}
