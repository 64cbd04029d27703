use anyhow::{Context, Result};
use clap::Parser;
use dialoguer::Confirm;
use std::fs;
use std::path::PathBuf;
use tracing::info;

use keycloak2cfn_stack::{
    KeycloakStack, NoopComposer, StackModes, StackProps, DEFAULT_KEYCLOAK_VERSION,
};

mod names;

/// Generate a parameterized CloudFormation template for deploying Keycloak
#[derive(Parser)]
#[command(name = "keycloak2cfn")]
#[command(version)]
#[command(about = "Generate a CloudFormation template for deploying Keycloak", long_about = None)]
struct Cli {
    /// Use Aurora Serverless instead of a provisioned database instance
    #[arg(long)]
    aurora_serverless: bool,

    /// Deploy into an existing VPC instead of creating a new one
    #[arg(long)]
    from_existing_vpc: bool,

    /// CloudFormation stack name (for the printed deploy command)
    #[arg(long)]
    stack_name: Option<String>,

    /// Version tag interpolated into the stack description
    #[arg(long, default_value = DEFAULT_KEYCLOAK_VERSION)]
    version_tag: String,

    /// Output file for the generated template
    #[arg(short, long, value_name = "FILE", default_value = "template.json")]
    output: PathBuf,

    /// Overwrite existing file without asking
    #[arg(long)]
    force: bool,
}

fn main() -> Result<()> {
    init_tracing();
    run(Cli::parse())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing::subscriber::set_global_default(
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer()),
    );
}

fn run(cli: Cli) -> Result<()> {
    let stack_name = cli.stack_name.unwrap_or_else(names::generate);

    if cli.output.exists() && !cli.force {
        let overwrite = Confirm::new()
            .with_prompt(format!("{} already exists. Overwrite?", cli.output.display()))
            .default(false)
            .interact()?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    let modes = StackModes::from_flags(cli.aurora_serverless, cli.from_existing_vpc);
    let mut stack = KeycloakStack::new(StackProps {
        modes,
        version_tag: cli.version_tag.clone(),
    });

    // The parameter surface is this tool's product; the resource graph is
    // contributed by a composer downstream.
    stack.synth(&mut NoopComposer)?;

    let rendered = serde_json::to_string_pretty(&stack.to_value())
        .context("Failed to render template JSON")?;
    fs::write(&cli.output, rendered)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    info!(
        output = %cli.output.display(),
        version = %cli.version_tag,
        "template written"
    );

    println!();
    println!("Created {} (Keycloak {})", cli.output.display(), cli.version_tag);
    println!();
    println!("Next steps:");
    println!("  aws cloudformation deploy \\");
    println!("    --template-file {} \\", cli.output.display());
    println!("    --stack-name {} \\", stack_name);
    println!("    --capabilities CAPABILITY_IAM");
    println!();

    Ok(())
}
