use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfsplit")]
#[command(about = "Split a PDF into multiple files, one per page or per page range")]
#[command(version)]
pub struct Cli {
    /// PDF file to split
    pub input: PathBuf,

    /// Directory the output files are written to
    #[arg(short, long)]
    pub output_dir: PathBuf,

    /// Page ranges (e.g. "1-3,7"), one output file per range; omit to
    /// split one page per file
    #[arg(short, long)]
    pub pages: Option<String>,
}
