use clap::Parser;
use clo_generator::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Page => cli::page::run().await,
        Command::Providers => cli::providers::run().await,
        Command::Generate(args) => cli::generate::run(args).await,
        Command::Prompt(args) => cli::prompt::run(args).await,
        Command::Interactive => cli::interactive::run().await,
    }
}
