use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::BoardSize;
use crate::dataset::WordSource;
use crate::language::Language;
use crate::profile::ContentProfile;
use crate::selector::select_entries;

/// Selected across-words for one puzzle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleSeed {
    pub language: Language,
    pub size: BoardSize,
    pub across_words: Vec<String>,
    pub across_clues: Vec<String>,
}

/// A seed together with its derived down-words.
#[derive(Clone, Debug)]
pub struct Grid {
    pub seed: PuzzleSeed,
    pub down_words: Vec<String>,
    pub down_clues: Vec<String>,
    /// Average difficulty weight of the selected entries.
    pub average_weight: f64,
    pub used_fallback: bool,
    /// Both word sets were duplicate-free.
    pub unique: bool,
    /// Seeds generated, including the accepted one.
    pub attempts: u32,
}

/// Down-word `c` is the column-`c` letter of every across-word, top to bottom.
pub fn transpose(across: &[String]) -> Vec<String> {
    let rows: Vec<Vec<char>> = across.iter().map(|w| w.chars().collect()).collect();
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    (0..width)
        .map(|c| rows.iter().filter_map(|row| row.get(c)).collect())
        .collect()
}

pub fn down_clue(word: &str) -> String {
    format!("Build the word {} (Down).", word)
}

pub fn all_distinct(words: &[String]) -> bool {
    let mut seen = HashSet::with_capacity(words.len());
    words.iter().all(|w| seen.insert(w.as_str()))
}

/// Select across-words and derive the down-words, regenerating until both
/// directions are duplicate-free or `max_attempts` seeds have been tried.
///
/// On exhaustion the last seed is returned with `unique == false`.
pub fn assemble_grid<S, R>(
    source: &S,
    language: Language,
    size: BoardSize,
    profile: ContentProfile,
    max_attempts: u32,
    rng: &mut R,
) -> Grid
where
    S: WordSource + ?Sized,
    R: Rng + ?Sized,
{
    let mut attempts = 0;
    loop {
        attempts += 1;
        let selection = select_entries(source, language, size, profile, rng);
        let across_words: Vec<String> = selection.entries.iter().map(|e| e.word.clone()).collect();
        let down_words = transpose(&across_words);
        let unique = all_distinct(&across_words) && all_distinct(&down_words);

        if unique || attempts >= max_attempts.max(1) {
            if !unique {
                log::warn!(
                    "{}/{} grid still has duplicate words after {} attempts",
                    language,
                    size,
                    attempts
                );
            }
            let total: u32 = selection
                .entries
                .iter()
                .map(|e| u32::from(e.difficulty_weight))
                .sum();
            let average_weight = f64::from(total) / selection.entries.len() as f64;
            let down_clues = down_words.iter().map(|w| down_clue(w)).collect();
            let across_clues = selection.entries.into_iter().map(|e| e.clue).collect();

            return Grid {
                seed: PuzzleSeed {
                    language,
                    size,
                    across_words,
                    across_clues,
                },
                down_words,
                down_clues,
                average_weight,
                used_fallback: selection.used_fallback,
                unique,
                attempts,
            };
        }
    }
}
