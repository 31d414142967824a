use clap::Parser;
use static_scrape::{PageSession, ScraperConfig};
use std::error::Error;
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ::log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = load_config(&args)?;
    ::log::info!("Scraping {} with parser {}", config.url, config.parser);

    let mut session = PageSession::from_config(&config)?;
    session.fetch_and_parse().await?;

    let summary = session.summarize()?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        match &summary.title {
            Some(title) => println!("Title: {}", title),
            None => println!("Cannot find title."),
        }
        println!("\nLinks ({}):", summary.links.len());
        for link in &summary.links {
            println!("  {}", link);
        }
        println!("\nImage links ({}):", summary.image_links.len());
        for link in &summary.image_links {
            println!("  {}", link);
        }
    }

    if args.download_images {
        // A failed download is reported but doesn't fail the run
        match session.download_images(&summary.image_links).await {
            Ok(batch) => println!(
                "{} images downloaded successfully into '{}'",
                batch.downloaded_count,
                batch.target_directory.display()
            ),
            Err(e) => eprintln!("Error while downloading images: {}", e),
        }
    }

    Ok(())
}

/// Config file (if any), then environment, then command-line flags
fn load_config(args: &Args) -> Result<ScraperConfig, Box<dyn Error>> {
    let mut config = match (&args.config, &args.url) {
        (Some(path), _) => ScraperConfig::from_file(path)?,
        (None, Some(url)) => ScraperConfig::new(url),
        (None, None) => return Err("a URL or --config file is required".into()),
    };
    config = config.apply_env();

    if let Some(url) = &args.url {
        config.url = url.clone();
    }
    if let Some(parser) = &args.parser {
        config.parser = parser.parse()?;
    }
    if let Some(dir) = &args.output_dir {
        config.output_dir = dir.clone();
    }

    Ok(config)
}
