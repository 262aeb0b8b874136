use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::board::BoardSize;
use crate::language::Language;
use crate::profile::SafetyTier;

/// Every (language, size) bucket holds at least this many entries.
pub const MIN_BUCKET_SIZE: usize = 5000;

/// Trailing letters that encode the entry index in base 26.
pub const SUFFIX_LEN: usize = 3;

/// Suffixes stop being unique past this index.
const MAX_INDEX: usize = 26 * 26 * 26;

/// Per-language, per-size entry counts.
pub type DatasetStats = BTreeMap<Language, BTreeMap<BoardSize, usize>>;

/// A candidate across-word with its clue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetEntry {
    pub word: String,
    pub clue: String,
    pub safety_tier: SafetyTier,
    /// 1 (easy) to 3 (hard).
    pub difficulty_weight: u8,
}

/// Read-only provider of candidate entries.
pub trait WordSource {
    fn entries(&self, language: Language, size: BoardSize) -> &[DatasetEntry];
}

fn letter_hash(language: Language, size: BoardSize, index: usize, position: usize) -> u32 {
    let mut x = (index as u32).wrapping_mul(0x9E37_79B1)
        ^ (position as u32 + 1).wrapping_mul(0x85EB_CA77)
        ^ (size.dimension() as u32).wrapping_mul(0xC2B2_AE3D)
        ^ language.salt();
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    x
}

/// Deterministically build the word at `index` of a bucket.
///
/// The leading letters alternate consonant/vowel from a hash of the inputs; the
/// last [`SUFFIX_LEN`] letters spell `index` in base 26 so distinct indices
/// below 26³ never collide.
pub fn synthesize_word(language: Language, size: BoardSize, index: usize) -> String {
    let dimension = size.dimension();
    let prefix_len = dimension.saturating_sub(SUFFIX_LEN);
    let mut word = String::with_capacity(dimension);

    for position in 0..prefix_len {
        let alphabet = if position % 2 == 0 {
            language.consonants()
        } else {
            language.vowels()
        };
        let h = letter_hash(language, size, index, position) as usize;
        word.push(alphabet[h % alphabet.len()] as char);
    }

    let mut digits = [b'A'; SUFFIX_LEN];
    let mut rest = index;
    for slot in digits.iter_mut().rev() {
        *slot = b'A' + (rest % 26) as u8;
        rest /= 26;
    }
    for &d in digits.iter().skip(SUFFIX_LEN.saturating_sub(dimension)) {
        word.push(d as char);
    }

    word
}

pub fn synthesize_clue(language: Language, index: usize) -> String {
    let templates = language.clue_templates();
    let topics = language.topics();
    let template = templates[index % templates.len()];
    let topic = topics[(index / templates.len()) % topics.len()];
    template.replace("{}", topic)
}

/// Kid is the bulk of the pool, standard the rarest.
pub fn tier_for_index(index: usize) -> SafetyTier {
    if index % 11 == 0 {
        SafetyTier::Standard
    } else if index % 3 == 0 {
        SafetyTier::Family
    } else {
        SafetyTier::Kid
    }
}

pub fn difficulty_for_index(index: usize) -> u8 {
    if index % 10 == 0 {
        3
    } else if index % 2 == 0 {
        2
    } else {
        1
    }
}

pub fn synthesize_entry(language: Language, size: BoardSize, index: usize) -> DatasetEntry {
    DatasetEntry {
        word: synthesize_word(language, size, index),
        clue: synthesize_clue(language, index),
        safety_tier: tier_for_index(index),
        difficulty_weight: difficulty_for_index(index),
    }
}

fn build_bucket(language: Language, size: BoardSize) -> Vec<DatasetEntry> {
    let mut bucket = Vec::with_capacity(MIN_BUCKET_SIZE);
    let mut seen = HashSet::with_capacity(MIN_BUCKET_SIZE);
    let mut index = 0;

    while bucket.len() < MIN_BUCKET_SIZE && index < MAX_INDEX {
        let entry = synthesize_entry(language, size, index);
        if seen.insert(entry.word.clone()) {
            bucket.push(entry);
        }
        index += 1;
    }

    bucket
}

/// All candidate entries, bucketed by language and board size.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    buckets: HashMap<(Language, BoardSize), Vec<DatasetEntry>>,
}

impl Dataset {
    /// Build every bucket. Deterministic: the same dataset on every call.
    pub fn generate() -> Self {
        let mut buckets = HashMap::new();
        for &language in Language::all() {
            for &size in BoardSize::all() {
                buckets.insert((language, size), build_bucket(language, size));
            }
        }
        let dataset = Dataset { buckets };
        log::debug!(
            "generated dataset: {} buckets, {} entries",
            dataset.buckets.len(),
            dataset.buckets.values().map(Vec::len).sum::<usize>()
        );
        dataset
    }

    /// Assemble a dataset from explicit buckets. Missing buckets read as empty.
    pub fn from_buckets(
        buckets: impl IntoIterator<Item = ((Language, BoardSize), Vec<DatasetEntry>)>,
    ) -> Self {
        Dataset {
            buckets: buckets.into_iter().collect(),
        }
    }

    pub fn stats(&self) -> DatasetStats {
        let mut stats = DatasetStats::new();
        for &language in Language::all() {
            let per_size = stats.entry(language).or_default();
            for &size in BoardSize::all() {
                per_size.insert(size, self.entries(language, size).len());
            }
        }
        stats
    }
}

impl WordSource for Dataset {
    fn entries(&self, language: Language, size: BoardSize) -> &[DatasetEntry] {
        self.buckets
            .get(&(language, size))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
