//! Command-line interface for the dictionary client.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::cache::{CacheStore, FileCache};
use crate::config::Settings;
use crate::error::{CambError, Result};
use crate::extract::webster::extract_word_of_the_day;
use crate::fetch::{Fetcher, HttpFetcher, RequestDescriptor};
use crate::lookup::{Lookup, LookupOptions, LookupOutcome};
use crate::render::{write_json, Presenter};
use crate::types::{CacheRecord, Source};

/// camb - Look up words in the Cambridge and Merriam-Webster dictionaries.
#[derive(Parser)]
#[command(name = "camb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Print debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Cache directory (default: $XDG_CACHE_HOME/camb)
    #[arg(long, global = true)]
    pub cache_dir: Option<PathBuf>,

    /// Settings file (default: $XDG_CONFIG_HOME/camb/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up a word or phrase.
    Search {
        /// Word or phrase; several words form one phrase
        #[arg(required = true)]
        words: Vec<String>,

        /// Ask Merriam-Webster instead of Cambridge
        #[arg(short, long)]
        webster: bool,

        /// Ignore the cached entry and fetch again
        #[arg(short, long)]
        fresh: bool,

        /// Use the Cambridge English-Chinese dictionary
        #[arg(short, long)]
        chinese: bool,

        /// Do not try the other dictionary when there is no entry
        #[arg(long)]
        no_fallback: bool,

        /// Print the render events as JSON
        #[arg(long, conflicts_with = "plain")]
        json: bool,

        /// Print without colors
        #[arg(long)]
        plain: bool,
    },

    /// List cached words.
    List {
        /// Shuffle the list
        #[arg(short, long)]
        random: bool,

        /// Show at most N words
        #[arg(short = 'n', long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Delete words from the cache.
    Delete {
        /// Word or phrase; several words form one phrase
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Show the Merriam-Webster word of the day.
    Wod {
        /// Print without colors
        #[arg(long)]
        plain: bool,
    },
}

/// Run a parsed command line.
///
/// # Errors
/// Returns the first error of the command. A word without an entry is
/// reported as `NoEntryFound` after the suggestions are printed.
pub fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    let cache_dir = settings.resolve_cache_dir(cli.cache_dir.as_deref());
    tracing::debug!(cache_dir = %cache_dir.display(), "Resolved cache directory");

    match cli.command {
        Commands::Search {
            words,
            webster,
            fresh,
            chinese,
            no_fallback,
            json,
            plain,
        } => {
            let options = LookupOptions {
                source: if webster {
                    Source::Webster
                } else {
                    settings.default_source
                },
                fresh,
                chinese,
                fallback: settings.fallback && !no_fallback,
                translations: settings.translations,
            };
            let output = if json {
                Output::Json
            } else {
                Output::Terminal(Presenter::new(settings.colors && !plain))
            };
            search_command(&words.join(" "), &options, &cache_dir, output)
        }
        Commands::List { random, limit } => list_command(&cache_dir, random, limit),
        Commands::Delete { words } => delete_command(&words.join(" "), &cache_dir),
        Commands::Wod { plain } => wod_command(Presenter::new(settings.colors && !plain)),
    }
}

/// How a found entry is printed.
#[derive(Debug, Clone, Copy)]
enum Output {
    Terminal(Presenter),
    Json,
}

/// Execute the search command.
fn search_command(
    query: &str,
    options: &LookupOptions,
    cache_dir: &Path,
    output: Output,
) -> Result<()> {
    let fetcher = HttpFetcher::new()?;
    let cache = FileCache::new(cache_dir);
    let lookup = Lookup::new(&fetcher, &cache);

    let message = format!("Looking up '{query}' in {}...", options.source);
    let outcome = with_spinner(&message, || lookup.search(query, options))?;

    match outcome {
        LookupOutcome::Found {
            extraction,
            from_cache,
        } => {
            tracing::debug!(word = %extraction.canonical_word, from_cache, "Entry found");
            if extraction.source != options.source {
                eprintln!(
                    "{} {}",
                    style("Found in").yellow(),
                    style(extraction.source).yellow().bold()
                );
            }
            let mut stdout = io::stdout().lock();
            match output {
                Output::Json => write_json(&extraction.events, &mut stdout),
                Output::Terminal(presenter) => presenter.write(&extraction.events, &mut stdout),
            }
        }
        LookupOutcome::NotFound {
            word,
            source,
            suggestions,
        } => {
            if !suggestions.is_empty() {
                println!("{}", style("Did you mean:").bold());
                for suggestion in &suggestions {
                    println!("  {}", style(suggestion).cyan());
                }
            }
            Err(CambError::NoEntryFound {
                word,
                dictionary: source,
            })
        }
    }
}

/// Execute the list command.
fn list_command(cache_dir: &Path, random: bool, limit: Option<usize>) -> Result<()> {
    let cache = FileCache::new(cache_dir);
    let mut records = cache.list()?;
    if random {
        shuffle(&mut records, time_seed());
    }
    if let Some(limit) = limit {
        records.truncate(limit);
    }

    if records.is_empty() {
        println!("{}", style("No cached words.").dim());
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    for record in &records {
        writeln!(stdout, "{}", format_record(record))?;
    }
    Ok(())
}

fn format_record(record: &CacheRecord) -> String {
    let mut line = format!("{}", style(&record.input_word).cyan());
    if !record.canonical_word.eq_ignore_ascii_case(&record.input_word) {
        line.push_str(&format!(" ({})", record.canonical_word));
    }
    line.push_str(&format!(
        "  {} {}",
        style(record.source.as_str()).dim(),
        style(record.created_at.format("%Y-%m-%d")).dim()
    ));
    line
}

/// Execute the delete command.
fn delete_command(query: &str, cache_dir: &Path) -> Result<()> {
    let cache = FileCache::new(cache_dir);
    let deleted = cache.delete(query.trim())?;
    if deleted == 0 {
        println!("{} '{}' is not in the cache", style("Not found:").yellow(), query);
    } else {
        println!(
            "{} '{}' ({deleted} record{})",
            style("Deleted").green().bold(),
            query,
            if deleted == 1 { "" } else { "s" }
        );
    }
    Ok(())
}

/// Execute the word of the day command.
fn wod_command(presenter: Presenter) -> Result<()> {
    let fetcher = HttpFetcher::new()?;
    let page = with_spinner("Fetching the word of the day...", || {
        fetcher.fetch(&RequestDescriptor::word_of_the_day())
    })?;
    let wod = extract_word_of_the_day(&page.body)?;
    tracing::debug!(word = %wod.word, "Word of the day");
    presenter.write(&wod.events, &mut io::stdout().lock())
}

/// Run `task` behind a spinner on stderr.
fn with_spinner<T>(message: &str, task: impl FnOnce() -> Result<T>) -> Result<T> {
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = task();
    pb.finish_and_clear();
    result
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64)
}

/// Fisher-Yates shuffle driven by xorshift64.
fn shuffle<T>(items: &mut [T], seed: u64) {
    let mut state = seed | 1;
    for i in (1..items.len()).rev() {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let j = (state % (i as u64 + 1)) as usize;
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_search() {
        let cli = Cli::parse_from(["camb", "search", "look", "up", "-w", "--fresh"]);

        let Commands::Search {
            words,
            webster,
            fresh,
            chinese,
            no_fallback,
            json,
            plain,
        } = cli.command
        else {
            panic!("expected search");
        };
        assert_eq!(words, ["look", "up"]);
        assert!(webster);
        assert!(fresh);
        assert!(!chinese && !no_fallback && !json && !plain);
    }

    #[test]
    fn test_cli_parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["camb", "list", "-r", "-n", "5", "-v", "--cache-dir", "/tmp/c"]);

        assert!(cli.verbose);
        assert_eq!(cli.cache_dir, Some(PathBuf::from("/tmp/c")));
        let Commands::List { random, limit } = cli.command else {
            panic!("expected list");
        };
        assert!(random);
        assert_eq!(limit, Some(5));
    }

    #[test]
    fn test_cli_rejects_json_with_plain() {
        let result = Cli::try_parse_from(["camb", "search", "example", "--json", "--plain"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_requires_words() {
        assert!(Cli::try_parse_from(["camb", "search"]).is_err());
        assert!(Cli::try_parse_from(["camb", "delete"]).is_err());
    }

    #[test]
    fn test_shuffle_keeps_items() {
        let mut items: Vec<u32> = (0..20).collect();
        shuffle(&mut items, 42);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());

        let mut again: Vec<u32> = (0..20).collect();
        shuffle(&mut again, 42);
        assert_eq!(items, again);
    }
}
