use std::{io, path::PathBuf};

use clap::Parser;
use news_recommender::{
    dataset::{self, DEFAULT_TITLE_COLUMN},
    error::Result,
    recommend::{Outcome, Recommender},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the news dataset
    #[arg(long, default_value = "beritasport.csv")]
    dataset_path: PathBuf,

    /// Name of the column holding item titles
    #[arg(long, default_value = DEFAULT_TITLE_COLUMN)]
    title_column: String,

    /// Print recommendations as JSON instead of plain text
    #[arg(long, default_value = "false")]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let titles = dataset::load_titles(&args.dataset_path, &args.title_column)?;
    info!(
        "Loaded {} items from {}",
        titles.len(),
        args.dataset_path.display()
    );

    let start = std::time::Instant::now();
    let recommender = Recommender::build(titles)?;
    info!("Built similarity matrix in {:?}", start.elapsed());

    let mut buffer = String::new();

    println!("Enter search keyword:");

    loop {
        buffer.clear();
        if io::stdin().read_line(&mut buffer)? == 0 {
            break;
        }

        let keyword = buffer.trim();

        if keyword == "exit" {
            break;
        }

        if keyword.is_empty() {
            continue;
        }

        match recommender.recommend(keyword) {
            Outcome::Ranked(recommendations) => {
                if args.json {
                    println!("{}", serde_json::to_string_pretty(&recommendations)?);
                } else {
                    println!("Recommendations for '{keyword}':");
                    for recommendation in &recommendations {
                        println!("{recommendation}");
                    }
                }
            }
            Outcome::NoMatch(keyword) => {
                println!("No news items match the keyword '{keyword}'.");
            }
        }
    }

    Ok(())
}
