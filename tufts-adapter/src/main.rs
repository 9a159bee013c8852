use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use language_utils::Homonym;
use tufts_adapter::{AdapterConfig, MorphologyAdapter, TuftsAdapter};

/// Look up words with the Tufts Morphology Service
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Adapter config file (defaults to the bundled config)
    #[arg(long, global = true, env = "TUFTS_ADAPTER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Analyze a word and print the result as JSON
    Lookup {
        /// Language code (lat, grc, ara, per)
        lang: String,
        word: String,
        /// Read the canned test data instead of calling the service
        #[arg(long)]
        offline: bool,
    },
    /// Print the request URL for a word
    Url { lang: String, word: String },
    /// Print the JSON schema of a lookup result
    Schema,
}

/// An unreadable or invalid config file falls back to the bundled config.
fn build_adapter(config: Option<&Path>) -> TuftsAdapter {
    let config = config.and_then(|path| {
        AdapterConfig::load(path)
            .inspect_err(|e| {
                log::warn!(
                    "Failed to load config from {}, using the default: {e:?}",
                    path.display()
                )
            })
            .ok()
    });
    TuftsAdapter::new(config)
}

async fn lookup(
    adapter: &TuftsAdapter,
    lang: &str,
    word: &str,
    offline: bool,
) -> Result<Option<Homonym>, tufts_adapter::Error> {
    if offline {
        let json = adapter.fetch_test_data(lang, word)?;
        adapter.transform(&json, word)
    } else {
        adapter.get_homonym(lang, word).await
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let adapter = build_adapter(args.config.as_deref());

    match args.command {
        Command::Lookup {
            lang,
            word,
            offline,
        } => match lookup(&adapter, &lang, &word, offline).await? {
            Some(homonym) => println!("{}", serde_json::to_string_pretty(&homonym)?),
            None => eprintln!("No analysis found for {word}"),
        },
        Command::Url { lang, word } => {
            let url = adapter
                .prepare_request_url(&lang, &word)
                .ok_or_else(|| anyhow!("No engine configured for {lang}"))?;
            println!("{url}");
        }
        Command::Schema => {
            let schema = schemars::schema_for!(Homonym);
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
    }

    Ok(())
}
