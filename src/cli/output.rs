//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::cli::args::{NeurospellArgs, OutputFormat};
use crate::error::Result;
use crate::spelling::{Correction, DictionaryStats, PairCellSize};

/// Rendering of a result for the human output format.
pub trait HumanOutput {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Result structure for correction runs.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectionReport {
    pub corrections: Vec<Correction>,
    pub duration_ms: u64,
}

/// Result structure for a pair lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct PairReport {
    pub pair: String,
    pub size: usize,
    pub words: Vec<String>,
}

/// Dictionary statistics, optionally with every cell size.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsReport {
    #[serde(flatten)]
    pub stats: DictionaryStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cells: Option<Vec<PairCellSize>>,
}

impl HumanOutput for CorrectionReport {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        for correction in &self.corrections {
            let query = crate::spelling::alphabet::unwrap(&correction.query);
            if correction.suggestions.is_empty() {
                writeln!(
                    out,
                    "{query}: (no suggestions, {} words touched)",
                    correction.words_touched
                )?;
                continue;
            }

            writeln!(out, "{query}: ({} words touched)", correction.words_touched)?;
            for suggestion in &correction.suggestions {
                writeln!(
                    out,
                    "  {:<20} score {:.3}  length difference {}",
                    suggestion.display_word(),
                    suggestion.score,
                    suggestion.length_difference
                )?;
            }
        }
        Ok(())
    }
}

impl HumanOutput for PairReport {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{} => {} words", self.pair, self.size)?;
        for word in &self.words {
            writeln!(out, "  {word}")?;
        }
        Ok(())
    }
}

impl HumanOutput for StatsReport {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Dictionary Statistics:")?;
        writeln!(out, "══════════════════════")?;
        writeln!(out, "Words: {}", self.stats.word_count)?;
        writeln!(out, "Populated pairs: {}", self.stats.populated_cells)?;
        writeln!(out, "Largest pair list: {}", self.stats.max_cell_size)?;

        if let Some(cells) = &self.cells {
            writeln!(out)?;
            for cell in cells {
                writeln!(out, "{}, {} => {}", cell.first, cell.second, cell.size)?;
            }
        }
        Ok(())
    }
}

/// Output a result to stdout in the requested format.
pub fn output_result<T>(message: &str, result: &T, args: &NeurospellArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(message, result, args, &mut out)
}

/// Write a result to `out` in the requested format.
pub fn write_result<T>(
    message: &str,
    result: &T,
    args: &NeurospellArgs,
    out: &mut dyn Write,
) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                writeln!(out, "{message}")?;
                writeln!(out)?;
            }
            result.write_human(out)?;
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            writeln!(out, "{json}")?;
        }
    }
    out.flush()?;
    Ok(())
}
