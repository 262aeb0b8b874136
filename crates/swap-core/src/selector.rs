use rand::{Rng, RngExt};

use crate::board::BoardSize;
use crate::dataset::{synthesize_entry, DatasetEntry, WordSource};
use crate::language::Language;
use crate::profile::ContentProfile;

/// Pads words that are shorter than the board.
pub const FILLER_LETTER: char = 'X';

/// Across-entries picked for one grid.
#[derive(Clone, Debug)]
pub struct Selection {
    /// Exactly `size` entries, words normalized to `size` letters.
    pub entries: Vec<DatasetEntry>,
    /// The safety filter left too few candidates and was bypassed.
    pub used_fallback: bool,
}

/// Truncate or pad `word` to exactly `len` letters.
pub fn normalize_word(word: &str, len: usize) -> String {
    let mut normalized: String = word.chars().take(len).collect();
    while normalized.chars().count() < len {
        normalized.push(FILLER_LETTER);
    }
    normalized
}

/// Draw `size` distinct entries admitted by `profile`.
///
/// When the filtered pool is smaller than the grid, entries are taken from the
/// head of the unfiltered bucket instead. Completeness wins over the safety
/// filter here; callers must not assume a kid/family grid is always filtered.
pub fn select_entries<S, R>(
    source: &S,
    language: Language,
    size: BoardSize,
    profile: ContentProfile,
    rng: &mut R,
) -> Selection
where
    S: WordSource + ?Sized,
    R: Rng + ?Sized,
{
    let n = size.dimension();
    let bucket = source.entries(language, size);
    let mut candidates: Vec<&DatasetEntry> = bucket
        .iter()
        .filter(|e| profile.admits(e.safety_tier))
        .collect();

    let used_fallback = candidates.len() < n;
    let mut picked: Vec<DatasetEntry> = if used_fallback {
        log::warn!(
            "only {} {} entries for {}/{}; using unfiltered bucket head",
            candidates.len(),
            profile,
            language,
            size
        );
        bucket.iter().take(n).cloned().collect()
    } else {
        let mut picked = Vec::with_capacity(n);
        for _ in 0..n {
            let idx = rng.random_range(0..candidates.len());
            picked.push(candidates.remove(idx).clone());
        }
        picked
    };

    // Bucket itself is short: synthesize the missing rows.
    let mut index = bucket.len();
    while picked.len() < n {
        picked.push(synthesize_entry(language, size, index));
        index += 1;
    }

    for entry in picked.iter_mut() {
        entry.word = normalize_word(&entry.word, n);
    }

    Selection {
        entries: picked,
        used_fallback,
    }
}
