// command line interface

use crate::{Config, Gemini, Moderator, repl};
use clap::Parser;
use miette::Result;

#[derive(Parser)]
#[command(name = "modchat", about = "Moderated AI chat in your terminal", version)]
struct Cli {}

pub async fn run() -> Result<()> {
    // no flags or subcommands; parsing still gives us --help and --version
    let _cli = Cli::parse();

    let config = Config::from_env();
    let moderator = Moderator::new(&config.banned_terms)?;
    let gemini = Gemini::new(&config)?;

    repl::run(&config, &moderator, &gemini).await
}
