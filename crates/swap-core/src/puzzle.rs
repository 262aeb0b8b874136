use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::{BoardSize, Tile};
use crate::dataset::WordSource;
use crate::difficulty::{rate, DifficultyRating};
use crate::grid::assemble_grid;
use crate::language::Language;
use crate::profile::ContentProfile;
use crate::tiles::{flatten, shuffle_unsolved};

/// Seeds tried before a grid with duplicate words is accepted.
pub const DEFAULT_UNIQUENESS_ATTEMPTS: u32 = 20;

/// Reshuffles tried before a still-solved board is accepted.
pub const DEFAULT_SHUFFLE_RETRIES: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryLimits {
    pub uniqueness: u32,
    pub shuffle: u32,
}

impl Default for RetryLimits {
    fn default() -> Self {
        RetryLimits {
            uniqueness: DEFAULT_UNIQUENESS_ATTEMPTS,
            shuffle: DEFAULT_SHUFFLE_RETRIES,
        }
    }
}

/// One playable puzzle. Never mutated after construction; play happens on a
/// copy of `shuffled_tiles`, checked against `solution_tiles`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamePuzzle {
    pub language: Language,
    pub size: BoardSize,
    pub profile: ContentProfile,
    pub across_clues: Vec<String>,
    pub down_clues: Vec<String>,
    pub solution_tiles: Vec<Tile>,
    pub shuffled_tiles: Vec<Tile>,
    pub difficulty: DifficultyRating,
}

/// A puzzle plus how its best-effort steps went.
#[derive(Clone, Debug)]
pub struct PuzzleReport {
    pub puzzle: GamePuzzle,
    pub used_fallback: bool,
    pub grid_unique: bool,
    pub grid_attempts: u32,
    pub shuffle_converged: bool,
}

/// Builds puzzles from a shared, read-only word source.
pub struct PuzzleBuilder<'a, S: WordSource + ?Sized> {
    source: &'a S,
    limits: RetryLimits,
}

impl<'a, S: WordSource + ?Sized> PuzzleBuilder<'a, S> {
    pub fn new(source: &'a S) -> Self {
        PuzzleBuilder {
            source,
            limits: RetryLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: RetryLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn build<R: Rng + ?Sized>(
        &self,
        language: Language,
        size: BoardSize,
        profile: ContentProfile,
        rng: &mut R,
    ) -> GamePuzzle {
        self.build_report(language, size, profile, rng).puzzle
    }

    pub fn build_report<R: Rng + ?Sized>(
        &self,
        language: Language,
        size: BoardSize,
        profile: ContentProfile,
        rng: &mut R,
    ) -> PuzzleReport {
        let grid = assemble_grid(
            self.source,
            language,
            size,
            profile,
            self.limits.uniqueness,
            rng,
        );
        let solution_tiles = flatten(&grid.seed.across_words);
        let (shuffled_tiles, shuffle_converged) =
            shuffle_unsolved(&solution_tiles, self.limits.shuffle, rng);
        let difficulty = rate(grid.average_weight, &solution_tiles, size);

        log::debug!(
            "built {}/{}/{} puzzle: {:?}, {} grid attempt(s)",
            language,
            size,
            profile,
            difficulty,
            grid.attempts
        );

        PuzzleReport {
            puzzle: GamePuzzle {
                language,
                size,
                profile,
                across_clues: grid.seed.across_clues,
                down_clues: grid.down_clues,
                solution_tiles,
                shuffled_tiles,
                difficulty,
            },
            used_fallback: grid.used_fallback,
            grid_unique: grid.unique,
            grid_attempts: grid.attempts,
            shuffle_converged,
        }
    }
}

/// Build a puzzle with default retry limits and the thread-local RNG.
pub fn build_puzzle<S: WordSource + ?Sized>(
    source: &S,
    language: Language,
    size: BoardSize,
    profile: ContentProfile,
) -> GamePuzzle {
    PuzzleBuilder::new(source).build(language, size, profile, &mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, DatasetEntry};
    use crate::grid::transpose;
    use crate::profile::SafetyTier;
    use crate::tiles::is_solved;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sorted_values(tiles: &[Tile]) -> Vec<char> {
        let mut v: Vec<char> = tiles.iter().map(|t| t.value).collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn tile_count_matches_every_size() {
        let dataset = Dataset::generate();
        for &size in BoardSize::all() {
            let puzzle = build_puzzle(&dataset, Language::En, size, ContentProfile::Standard);
            assert_eq!(puzzle.shuffled_tiles.len(), size.cells());
            assert_eq!(puzzle.solution_tiles.len(), size.cells());
            assert_eq!(puzzle.across_clues.len(), size.dimension());
            assert_eq!(puzzle.down_clues.len(), size.dimension());
        }
    }

    #[test]
    fn english_five_by_five_end_to_end() {
        let dataset = Dataset::generate();
        let mut rng = StdRng::seed_from_u64(2024);
        let report = PuzzleBuilder::new(&dataset).build_report(
            Language::En,
            BoardSize::Five,
            ContentProfile::Standard,
            &mut rng,
        );
        let puzzle = &report.puzzle;
        assert_eq!(puzzle.solution_tiles.len(), 25);
        assert_eq!(
            sorted_values(&puzzle.shuffled_tiles),
            sorted_values(&puzzle.solution_tiles)
        );
        assert!(report.shuffle_converged);
        assert!(!is_solved(&puzzle.shuffled_tiles, &puzzle.solution_tiles));
        assert!(report.grid_unique);
        assert!(!report.used_fallback);
    }

    #[test]
    fn down_clues_follow_transposed_solution() {
        let dataset = Dataset::generate();
        let mut rng = StdRng::seed_from_u64(5);
        let puzzle = PuzzleBuilder::new(&dataset).build(
            Language::Fr,
            BoardSize::Seven,
            ContentProfile::Family,
            &mut rng,
        );
        let rows: Vec<String> = puzzle
            .solution_tiles
            .chunks(7)
            .map(|row| row.iter().map(|t| t.value).collect())
            .collect();
        for (clue, word) in puzzle.down_clues.iter().zip(transpose(&rows)) {
            assert!(clue.contains(&word));
        }
    }

    #[test]
    fn seeded_builds_are_reproducible() {
        let dataset = Dataset::generate();
        let builder = PuzzleBuilder::new(&dataset);
        let a = builder.build(
            Language::De,
            BoardSize::Nine,
            ContentProfile::Kid,
            &mut StdRng::seed_from_u64(77),
        );
        let b = builder.build(
            Language::De,
            BoardSize::Nine,
            ContentProfile::Kid,
            &mut StdRng::seed_from_u64(77),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn empty_dataset_still_builds() {
        let dataset = Dataset::default();
        let mut rng = StdRng::seed_from_u64(1);
        let report = PuzzleBuilder::new(&dataset).build_report(
            Language::Es,
            BoardSize::Nine,
            ContentProfile::Kid,
            &mut rng,
        );
        assert!(report.used_fallback);
        assert_eq!(report.puzzle.solution_tiles.len(), 81);
    }

    #[test]
    fn custom_limits_bound_the_uniqueness_loop() {
        let bucket = (0..5)
            .map(|_| DatasetEntry {
                word: "EERIE".to_string(),
                clue: "Strange.".to_string(),
                safety_tier: SafetyTier::Kid,
                difficulty_weight: 3,
            })
            .collect();
        let dataset = Dataset::from_buckets([((Language::En, BoardSize::Five), bucket)]);
        let limits = RetryLimits {
            uniqueness: 3,
            shuffle: 1,
        };
        let report = PuzzleBuilder::new(&dataset).with_limits(limits).build_report(
            Language::En,
            BoardSize::Five,
            ContentProfile::Standard,
            &mut StdRng::seed_from_u64(9),
        );
        assert!(!report.grid_unique);
        assert_eq!(report.grid_attempts, 3);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let dataset = Dataset::generate();
        let puzzle = build_puzzle(&dataset, Language::Es, BoardSize::Five, ContentProfile::Kid);
        let json = serde_json::to_value(&puzzle).unwrap();
        assert_eq!(json["language"], "es");
        assert_eq!(json["size"], 5);
        assert_eq!(json["profile"], "kid");
        assert_eq!(json["shuffledTiles"].as_array().unwrap().len(), 25);
        assert_eq!(json["solutionTiles"].as_array().unwrap().len(), 25);
        assert_eq!(json["acrossClues"].as_array().unwrap().len(), 5);
        assert_eq!(json["downClues"].as_array().unwrap().len(), 5);
        assert!(json.get("solution_tiles").is_none());

        let back: GamePuzzle = serde_json::from_value(json).unwrap();
        assert_eq!(back, puzzle);
    }
}
