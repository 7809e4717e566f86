//! CLI tool for geo-grouped tweet sentiment trends
//!
//! Provides commands for scoring a phrase word by word, and for printing
//! average sentiment tables grouped by nearest region or by hour of day.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use geo_sentiment::{
    average_sentiments, group_by_hour, group_by_region, load_lexicon, load_regions, load_tweets,
    region_centers, Tokenizer, TweetAnalyzer,
};

#[derive(Parser)]
#[command(name = "geo_sentiment")]
#[command(about = "Sentiment trends for geotagged tweets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print per-word sentiment scores for a phrase
    Sentiment {
        /// Path to the lexicon JSON file
        #[arg(short, long)]
        lexicon: String,

        /// Text to score
        text: Vec<String>,
    },

    /// Print average sentiment per region
    Regions {
        /// Path to the tweets JSON file
        #[arg(short, long)]
        tweets: String,

        /// Path to the lexicon JSON file
        #[arg(short, long)]
        lexicon: String,

        /// Path to the region geometry JSON file
        #[arg(short, long)]
        regions: String,
    },

    /// Print average sentiment per hour of day
    Hourly {
        /// Path to the tweets JSON file
        #[arg(short, long)]
        tweets: String,

        /// Path to the lexicon JSON file
        #[arg(short, long)]
        lexicon: String,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("geo_sentiment=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sentiment { lexicon, text } => print_sentiment(&lexicon, &text.join(" "))?,
        Commands::Regions {
            tweets,
            lexicon,
            regions,
        } => print_region_averages(&tweets, &lexicon, &regions)?,
        Commands::Hourly { tweets, lexicon } => print_hourly_averages(&tweets, &lexicon)?,
    }

    Ok(())
}

/// Print each lexicon-known word of a phrase with its score
fn print_sentiment(lexicon_path: &str, text: &str) -> Result<()> {
    let lexicon = load_lexicon(lexicon_path)?;
    let tokenizer = Tokenizer::new();

    let words = tokenizer.extract_words(&text.to_lowercase());
    anyhow::ensure!(!words.is_empty(), "no words extracted from {text:?}");

    let width = words.iter().map(|w| w.len()).max().unwrap_or(0);
    for word in &words {
        if let Some(score) = lexicon.word_sentiment(word).as_option() {
            println!("{word:>width$}: {score:+}");
        }
    }
    Ok(())
}

/// Print the average sentiment of every region with sentiment data
fn print_region_averages(tweets_path: &str, lexicon_path: &str, regions_path: &str) -> Result<()> {
    let tweets = load_tweets(tweets_path)?;
    let lexicon = load_lexicon(lexicon_path)?;
    let regions = load_regions(regions_path)?;
    info!(tweets = tweets.len(), regions = regions.len(), "computing region averages");

    let analyzer = TweetAnalyzer::new(lexicon);
    let centers = region_centers(&regions)?;
    let groups = group_by_region(&tweets, &centers)?;
    let averages = average_sentiments(&groups, &analyzer);

    for (id, average) in &averages {
        println!("{id}: {average:+.5}  ({} tweets)", groups[id].len());
    }
    if averages.is_empty() {
        println!("no region has tweets with sentiment");
    }
    Ok(())
}

/// Print the average sentiment for each hour of day with sentiment data
fn print_hourly_averages(tweets_path: &str, lexicon_path: &str) -> Result<()> {
    let tweets = load_tweets(tweets_path)?;
    let lexicon = load_lexicon(lexicon_path)?;
    info!(tweets = tweets.len(), "computing hourly averages");

    let analyzer = TweetAnalyzer::new(lexicon);
    let groups = group_by_hour(&tweets);
    let averages = average_sentiments(&groups, &analyzer);

    for (hour, average) in &averages {
        println!("{hour:02}:00-{hour:02}:59  {average:+.5}");
    }
    if averages.is_empty() {
        println!("no hour has tweets with sentiment");
    }
    Ok(())
}
