pub mod board;
pub mod dataset;
pub mod difficulty;
pub mod error;
pub mod grid;
pub mod language;
pub mod profile;
pub mod protocol;
pub mod puzzle;
pub mod selector;
pub mod session;
pub mod tiles;

pub use board::{BoardSize, Tile};
pub use dataset::{Dataset, DatasetEntry, DatasetStats, WordSource};
pub use difficulty::DifficultyRating;
pub use error::ParseError;
pub use language::Language;
pub use profile::{ContentProfile, SafetyTier};
pub use puzzle::{build_puzzle, GamePuzzle, PuzzleBuilder, PuzzleReport, RetryLimits};
pub use session::{BestScores, GameSession, PlayMode, SessionRules};
pub use tiles::{is_solved, is_solved_with_blocked, shuffle_tiles, swap_tiles};
