use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use spdlog::{info, warn};

use folio::logger::configure_logger;

use crate::check::check_cmd;
use crate::config::open_config;
use crate::list::list_cmd;

mod config;
mod check;
mod list;

const CFG_FILE_NAME: &str = "folio.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path. Defaults to folio.toml next to the executable, in the current dir or in the user config dir
    #[arg(short, long)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Validate the front-matter of every post
    Check,
    /// List the posts that would be published
    List(ListArgs),
}

#[derive(clap::Args, Debug)]
struct ListArgs {
    /// Include drafts and unpublished posts
    #[arg(short, long)]
    drafts: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let config_path = args.config_path.map(PathBuf::from);

    let config = match open_config(config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("Please run folio --help");
            return Ok(ExitCode::FAILURE);
        }
    };

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    info!("Reading posts from {}", config.paths.posts_dir.display());

    match args.command {
        Command::Check => check_cmd(&config),
        Command::List(args) => list_cmd(&config, args.drafts),
    }
}
