use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "static-scrape")]
#[command(about = "Fetch one web page and extract its title, links and images")]
#[command(version)]
pub struct Args {
    /// URL of the page to scrape (optional when a config file provides one)
    pub url: Option<String>,

    /// Parser name (html.parser, html, document, fragment)
    #[arg(short, long)]
    pub parser: Option<String>,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory under which `images/<date>_/` is created
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Download every image link after extracting them
    #[arg(short, long)]
    pub download_images: bool,

    /// Print the extracted page summary as JSON
    #[arg(long)]
    pub json: bool,
}
