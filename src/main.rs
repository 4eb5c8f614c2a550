mod cli;
mod commands;
mod page_groups;
mod pdf;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use commands::split::{self, SplitRequest};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let request = SplitRequest {
        input: cli.input,
        output_dir: cli.output_dir,
        pages: cli.pages,
    };

    split::run(&request)
}
