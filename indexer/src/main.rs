use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use search_core::{Occurrence, SearchEngine};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Build a keyword index over a document list and query it", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Corpus {
    /// File listing the documents to index, whitespace separated
    #[arg(long, default_value = "docs.txt")]
    docs: String,
    /// File listing the noise words, whitespace separated
    #[arg(long, default_value = "noisewords.txt")]
    noise: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the index and print its size
    Build {
        #[command(flatten)]
        corpus: Corpus,
    },
    /// Top five documents containing either keyword
    Search {
        #[command(flatten)]
        corpus: Corpus,
        kw1: String,
        #[arg(default_value = "")]
        kw2: String,
        /// Print the result as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the posting list of a keyword
    Postings {
        #[command(flatten)]
        corpus: Corpus,
        keyword: String,
    },
}

#[derive(Serialize)]
struct SearchOutput<'a> {
    kw1: &'a str,
    kw2: &'a str,
    matched: bool,
    results: Vec<String>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { corpus } => {
            let engine = build_engine(&corpus)?;
            let stats = engine.stats();
            println!(
                "indexed {} documents, {} keywords, {} occurrences",
                stats.num_docs, stats.num_keywords, stats.num_occurrences
            );
            Ok(())
        }
        Commands::Search { corpus, kw1, kw2, json } => {
            let engine = build_engine(&corpus)?;
            search(&engine, &kw1, &kw2, json)
        }
        Commands::Postings { corpus, keyword } => {
            let engine = build_engine(&corpus)?;
            let keyword = query_keyword(&engine, &keyword);
            let occs: &[Occurrence] = engine.index().get(&keyword).unwrap_or(&[]);
            for occ in occs {
                println!("{}\t{}", occ.frequency, occ.document);
            }
            Ok(())
        }
    }
}

fn build_engine(corpus: &Corpus) -> Result<SearchEngine> {
    let mut engine = SearchEngine::new();
    engine
        .make_index(&corpus.docs, &corpus.noise)
        .with_context(|| format!("building index from {}", corpus.docs))?;
    Ok(engine)
}

/// The engine looks keywords up verbatim, so user input is normalized here first.
fn query_keyword(engine: &SearchEngine, raw: &str) -> String {
    engine.get_keyword(raw).unwrap_or_else(|| raw.to_string())
}

fn search(engine: &SearchEngine, kw1: &str, kw2: &str, json: bool) -> Result<()> {
    let (kw1, kw2) = (query_keyword(engine, kw1), query_keyword(engine, kw2));
    let hits = engine.top5_search(&kw1, &kw2);
    tracing::debug!(kw1 = %kw1, kw2 = %kw2, matched = hits.is_some(), "search");

    if json {
        let out = SearchOutput { kw1: &kw1, kw2: &kw2, matched: hits.is_some(), results: hits.unwrap_or_default() };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }
    match hits {
        None => println!("no matches for \"{kw1}\" or \"{kw2}\""),
        Some(docs) => {
            for (rank, doc) in docs.iter().enumerate() {
                println!("{}. {doc}", rank + 1);
            }
        }
    }
    Ok(())
}
