//! Interactive candidate selection.
//!
//! Catalog candidates are listed with 1-based ordinals and the operator picks
//! one by number, or types the as-is token to keep the cleaned directory name.
//! Invalid answers are reported inline and the prompt repeats.

use std::io::{self, BufRead, Stdin, Stdout, Write};

use thiserror::Error;
use tracing::debug;

use crate::external_catalog::{MediaKind, SeriesCandidate};

/// Token that bypasses the catalog and keeps the cleaned name.
pub const AS_IS_TOKEN: &str = "U";

const PROMPT_LABEL: &str = "What to do?";

/// Line-oriented terminal used for progress output and prompts.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin/stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write one line of text.
    pub fn line(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", text.as_ref())
    }

    /// Write an empty line.
    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    /// Print `label` and read one line of input.
    ///
    /// Returns `None` once the input stream is closed.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{} ", label)?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Ok(None);
        }
        Ok(Some(answer.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// The operator's resolved choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Use this catalog entry's title.
    Candidate(SeriesCandidate),
    /// Keep the cleaned directory name.
    AsIs,
}

/// A validated answer, before it is resolved against the candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionInput {
    /// 1-based position in the displayed list.
    Index(usize),
    AsIs,
}

/// Why an answer was rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid number")]
    NotANumber,

    #[error("Selections start at 1")]
    Zero,

    #[error("{got} is above the number of matches ({max})")]
    OutOfRange { got: u64, max: usize },
}

/// Failures that end the selection for a directory.
#[derive(Debug, Error)]
pub enum PresenterError {
    #[error("Prompt aborted: input closed")]
    Aborted,

    #[error("Prompt failed: {0}")]
    Io(#[from] io::Error),
}

/// Validate a raw answer against the number of displayed candidates.
pub fn parse_selection(input: &str, displayed: usize) -> Result<SelectionInput, ValidationError> {
    let input = input.trim();
    if input.eq_ignore_ascii_case(AS_IS_TOKEN) {
        return Ok(SelectionInput::AsIs);
    }

    let number: u64 = input.parse().map_err(|_| ValidationError::NotANumber)?;
    if number == 0 {
        return Err(ValidationError::Zero);
    }
    if number > displayed as u64 {
        return Err(ValidationError::OutOfRange {
            got: number,
            max: displayed,
        });
    }

    Ok(SelectionInput::Index(number as usize))
}

/// Renders candidates and collects the operator's selection.
#[derive(Debug, Clone, Copy)]
pub struct MatchPresenter {
    filter_non_primary: bool,
}

impl MatchPresenter {
    pub fn new(filter_non_primary: bool) -> Self {
        Self { filter_non_primary }
    }

    /// Candidates that will be listed, in catalog order, plus how many were hidden.
    pub fn displayed<'a>(
        &self,
        candidates: &'a [SeriesCandidate],
    ) -> (Vec<&'a SeriesCandidate>, usize) {
        let shown: Vec<&SeriesCandidate> = candidates
            .iter()
            .filter(|c| !self.filter_non_primary || c.media_kind() == MediaKind::Primary)
            .collect();
        let skipped = candidates.len() - shown.len();
        (shown, skipped)
    }

    /// List `candidates` and block until the operator gives a valid answer.
    ///
    /// Numbers refer to the displayed list, so with filtering on, `1` is the
    /// first primary candidate even if the catalog ranked a novel above it.
    pub fn present<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        candidates: &[SeriesCandidate],
    ) -> Result<Selection, PresenterError> {
        let (shown, skipped) = self.displayed(candidates);

        if shown.is_empty() {
            console.line("No matches found.")?;
        } else {
            console.line("Results:")?;
            for (idx, candidate) in shown.iter().enumerate() {
                let alternate = candidate
                    .alternate_title
                    .as_deref()
                    .map(|t| format!(" | {}", t))
                    .unwrap_or_default();
                console.line(format!("{}. {}{}", idx + 1, candidate.title, alternate))?;
                console.line(format!(
                    "(Volumes: {}, Chapters: {})",
                    candidate.volume_count, candidate.chapter_count
                ))?;
            }
            console.blank()?;
        }

        console.line(format!(
            "Options: # selection (1-{}), {} use as-is",
            shown.len(),
            AS_IS_TOKEN
        ))?;
        if skipped != 0 {
            console.line(format!("Skipped {} non-manga result(s)", skipped))?;
        }

        loop {
            let Some(answer) = console.prompt(PROMPT_LABEL)? else {
                return Err(PresenterError::Aborted);
            };

            match parse_selection(&answer, shown.len()) {
                Ok(SelectionInput::AsIs) => return Ok(Selection::AsIs),
                Ok(SelectionInput::Index(n)) => {
                    let chosen = shown[n - 1].clone();
                    debug!("Selected candidate {} ({})", n, chosen.title);
                    return Ok(Selection::Candidate(chosen));
                }
                Err(e) => {
                    console.line(format!("Invalid selection: {}", e))?;
                }
            }
        }
    }
}
