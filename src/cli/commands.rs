//! Command implementations for the Neurospell CLI.

use std::io::{self, BufRead};
use std::time::Instant;

use log::{debug, info, warn};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::spelling::*;

/// Execute a CLI command.
pub fn execute_command(args: NeurospellArgs) -> Result<()> {
    match &args.command {
        Command::Correct(correct_args) => correct_words(correct_args, &args),
        Command::Pair(pair_args) => show_pair(pair_args, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &args),
    }
}

/// Load the dictionary named by the command line.
fn load_dictionary(args: &DictionaryArgs) -> Result<Dictionary> {
    info!("Loading dictionary from: {}", args.dictionary.display());
    let dictionary = Dictionary::load_from_file(&args.dictionary)?;
    if dictionary.is_empty() {
        warn!("Dictionary {} holds no words", args.dictionary.display());
    }
    Ok(dictionary)
}

/// Merge the configuration file, if any, with command line overrides.
fn build_config(args: &CorrectArgs) -> Result<CorrectorConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("Loading corrector configuration from: {}", path.display());
            CorrectorConfig::load_from_file(path)?
        }
        None => CorrectorConfig::default(),
    };

    if args.strict_length {
        config.strict_length = true;
    }
    if let Some(max_results) = args.max_results {
        config.max_results = Some(max_results);
    }
    if let Some(tie_epsilon) = args.tie_epsilon {
        config.tie_epsilon = tie_epsilon;
    }
    config.validate()?;
    Ok(config)
}

/// Read one query per line, skipping blank lines.
fn read_queries<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut queries = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            queries.push(word.to_string());
        }
    }
    Ok(queries)
}

/// Correct words given as arguments or read from stdin.
fn correct_words(args: &CorrectArgs, cli_args: &NeurospellArgs) -> Result<()> {
    let config = build_config(args)?;
    let corrector = SpellingCorrector::with_config(load_dictionary(&args.dictionary)?, config)?;

    let queries = if args.words.is_empty() {
        read_queries(io::stdin().lock())?
    } else {
        args.words.clone()
    };

    let start_time = Instant::now();
    let corrections = corrector.correct_batch(&queries);
    let duration = start_time.elapsed();
    info!(
        "Corrected {} words in {}ms",
        corrections.len(),
        duration.as_millis()
    );

    output_result(
        "Corrections",
        &CorrectionReport {
            corrections,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// Print the candidate list of a character pair.
fn show_pair(args: &PairArgs, cli_args: &NeurospellArgs) -> Result<()> {
    let dictionary = load_dictionary(&args.dictionary)?;
    let words: Vec<String> = dictionary
        .pair_candidates(&args.pair)?
        .iter()
        .map(|w| w.to_string())
        .collect();

    output_result(
        "Pair lookup",
        &PairReport {
            pair: args.pair.clone(),
            size: words.len(),
            words,
        },
        cli_args,
    )
}

/// Show dictionary statistics.
fn show_stats(args: &StatsArgs, cli_args: &NeurospellArgs) -> Result<()> {
    let dictionary = load_dictionary(&args.dictionary)?;
    let report = StatsReport {
        stats: dictionary.stats(),
        cells: if args.detailed {
            Some(dictionary.pair_index().cell_sizes())
        } else {
            None
        },
    };

    output_result("Dictionary statistics", &report, cli_args)
}
