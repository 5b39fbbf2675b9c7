use std::io;

use clap::{Parser, Subcommand};

mod build;
mod docker;
mod dockerfile;
mod generate;
mod gradle;
mod inspect;
mod scan;
mod util;

use build::BuildCommand;
use generate::GenerateCommand;
use inspect::InspectCommand;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.run().await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Disposable Docker build environments for Gradle projects
#[derive(Debug, Parser)]
pub struct Cli {
    /// Directory of the Gradle project
    #[arg(short = 'C', long, default_value = ".")]
    pub dir: String,

    /// Command to run
    #[clap(subcommand)]
    pub command: CliCommand,
}

impl Cli {
    pub async fn run(self) -> io::Result<()> {
        match self.command {
            CliCommand::Inspect(inspect) => inspect.run(&self.dir).await,
            CliCommand::Generate(generate) => generate.run(&self.dir).await,
            CliCommand::Build(build) => build.run(&self.dir).await,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Show the detected project settings
    Inspect(InspectCommand),
    /// Generate a Dockerfile for the project
    Generate(GenerateCommand),
    /// Generate a Dockerfile and build the image
    Build(BuildCommand),
}
