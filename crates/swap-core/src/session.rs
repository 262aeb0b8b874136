use std::collections::{BTreeMap, HashSet};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::Tile;
use crate::error::ParseError;
use crate::language::Language;
use crate::puzzle::GamePuzzle;
use crate::tiles::{is_solved_with_blocked, swap_tiles};

/// Budget shown for relaxed play; it is never spent.
pub const RELAXED_SWAPS: i32 = 999;

/// Points awarded per unit of board size on a solve.
pub const SIZE_SCORE_FACTOR: i32 = 50;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayMode {
    Relaxed,
    #[default]
    Balanced,
    Challenge,
}

impl PlayMode {
    pub fn swap_budget(&self, dimension: usize) -> i32 {
        let cells = (dimension * dimension) as i32;
        match self {
            PlayMode::Relaxed => RELAXED_SWAPS,
            PlayMode::Balanced => cells * 2,
            PlayMode::Challenge => cells,
        }
    }

    pub fn is_limited(&self) -> bool {
        !matches!(self, PlayMode::Relaxed)
    }
}

impl FromStr for PlayMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relaxed" => Ok(PlayMode::Relaxed),
            "balanced" => Ok(PlayMode::Balanced),
            "challenge" => Ok(PlayMode::Challenge),
            other => Err(ParseError::PlayMode(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRules {
    pub fail_at_zero: bool,
    pub continue_at_zero: bool,
}

impl Default for SessionRules {
    fn default() -> Self {
        SessionRules {
            fail_at_zero: true,
            continue_at_zero: false,
        }
    }
}

/// What a tile click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    Ignored,
    Selected(usize),
    Swapped(usize, usize),
}

/// One player's run at a puzzle: the board copy, budget, and hint cursors.
#[derive(Clone, Debug)]
pub struct GameSession {
    puzzle: GamePuzzle,
    tiles: Vec<Tile>,
    blocked: HashSet<usize>,
    selected: Option<usize>,
    mode: PlayMode,
    rules: SessionRules,
    swaps_left: i32,
    swaps_made: u32,
    across_hint: usize,
    down_hint: usize,
}

impl GameSession {
    pub fn new(puzzle: GamePuzzle, mode: PlayMode, rules: SessionRules) -> Self {
        let tiles = puzzle.shuffled_tiles.clone();
        let swaps_left = mode.swap_budget(puzzle.size.dimension());
        GameSession {
            puzzle,
            tiles,
            blocked: HashSet::new(),
            selected: None,
            mode,
            rules,
            swaps_left,
            swaps_made: 0,
            across_hint: 0,
            down_hint: 0,
        }
    }

    /// Mark cells as non-playable. They cannot be selected and never block a solve.
    pub fn with_blocked(mut self, blocked: impl IntoIterator<Item = usize>) -> Self {
        self.blocked = blocked.into_iter().collect();
        self
    }

    pub fn puzzle(&self) -> &GamePuzzle {
        &self.puzzle
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn mode(&self) -> PlayMode {
        self.mode
    }

    pub fn swaps_left(&self) -> i32 {
        self.swaps_left
    }

    pub fn swaps_made(&self) -> u32 {
        self.swaps_made
    }

    pub fn is_solved(&self) -> bool {
        is_solved_with_blocked(&self.tiles, &self.puzzle.solution_tiles, &self.blocked)
    }

    pub fn is_game_over(&self) -> bool {
        !self.is_solved()
            && self.mode.is_limited()
            && self.rules.fail_at_zero
            && !self.rules.continue_at_zero
            && self.swaps_left <= 0
    }

    fn out_of_swaps(&self) -> bool {
        self.mode.is_limited() && self.swaps_left <= 0 && !self.rules.continue_at_zero
    }

    /// Click a tile: the first click selects it, the second swaps with the selection.
    pub fn select(&mut self, index: usize) -> SelectOutcome {
        if self.is_game_over()
            || self.is_solved()
            || self.out_of_swaps()
            || index >= self.tiles.len()
            || self.blocked.contains(&index)
        {
            return SelectOutcome::Ignored;
        }

        let Some(first) = self.selected.take() else {
            self.selected = Some(index);
            return SelectOutcome::Selected(index);
        };

        self.tiles = swap_tiles(&self.tiles, first, index);
        self.swaps_made += 1;
        if self.mode.is_limited() {
            self.swaps_left -= 1;
        }
        SelectOutcome::Swapped(first, index)
    }

    /// Points for a solved board, `None` while unsolved.
    pub fn score(&self) -> Option<u32> {
        if !self.is_solved() {
            return None;
        }
        let size = self.puzzle.size.dimension() as i32;
        Some((self.swaps_left.max(0) + size * SIZE_SCORE_FACTOR) as u32)
    }

    /// Current across clue, then advance the cursor.
    pub fn next_across_hint(&mut self) -> Option<&str> {
        let clues = &self.puzzle.across_clues;
        if clues.is_empty() {
            return None;
        }
        let idx = self.across_hint % clues.len();
        self.across_hint = (idx + 1) % clues.len();
        Some(clues[idx].as_str())
    }

    pub fn next_down_hint(&mut self) -> Option<&str> {
        let clues = &self.puzzle.down_clues;
        if clues.is_empty() {
            return None;
        }
        let idx = self.down_hint % clues.len();
        self.down_hint = (idx + 1) % clues.len();
        Some(clues[idx].as_str())
    }
}

/// Best score per language. Callers persist it; the engine only keeps the maximum.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScores {
    scores: BTreeMap<Language, u32>,
}

impl BestScores {
    pub fn get(&self, language: Language) -> u32 {
        self.scores.get(&language).copied().unwrap_or(0)
    }

    /// Returns true when `score` beat the stored best.
    pub fn record(&mut self, language: Language, score: u32) -> bool {
        let best = self.scores.entry(language).or_insert(0);
        if score > *best {
            *best = score;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardSize;
    use crate::difficulty::DifficultyRating;
    use crate::profile::ContentProfile;

    fn tiles(letters: &str) -> Vec<Tile> {
        letters
            .chars()
            .enumerate()
            .map(|(i, c)| Tile::new(i, c))
            .collect()
    }

    /// 5x5 puzzle whose shuffled board differs from the solution only at 0 and 1.
    fn puzzle() -> GamePuzzle {
        let solution = tiles("SATORAREPOTENETOPERAROTAS");
        let shuffled = swap_tiles(&solution, 0, 1);
        GamePuzzle {
            language: Language::En,
            size: BoardSize::Five,
            profile: ContentProfile::Standard,
            across_clues: vec!["a1".into(), "a2".into()],
            down_clues: vec!["d1".into()],
            solution_tiles: solution,
            shuffled_tiles: shuffled,
            difficulty: DifficultyRating::Easy,
        }
    }

    #[test]
    fn budgets_per_mode() {
        assert_eq!(PlayMode::Relaxed.swap_budget(5), 999);
        assert_eq!(PlayMode::Balanced.swap_budget(5), 50);
        assert_eq!(PlayMode::Challenge.swap_budget(7), 49);
    }

    #[test]
    fn two_clicks_swap_and_solve() {
        let mut session = GameSession::new(puzzle(), PlayMode::Challenge, SessionRules::default());
        assert!(!session.is_solved());
        assert_eq!(session.select(0), SelectOutcome::Selected(0));
        assert_eq!(session.select(1), SelectOutcome::Swapped(0, 1));
        assert!(session.is_solved());
        assert_eq!(session.swaps_left(), 24);
        assert_eq!(session.score(), Some(24 + 250));
        assert_eq!(session.select(2), SelectOutcome::Ignored);
    }

    #[test]
    fn session_board_is_a_copy() {
        let original = puzzle();
        let mut session = GameSession::new(original.clone(), PlayMode::Balanced, SessionRules::default());
        session.select(0);
        session.select(1);
        assert_eq!(session.puzzle().shuffled_tiles, original.shuffled_tiles);
        assert_eq!(session.puzzle().solution_tiles, original.solution_tiles);
    }

    #[test]
    fn relaxed_mode_never_spends_budget() {
        let mut session = GameSession::new(puzzle(), PlayMode::Relaxed, SessionRules::default());
        session.select(3);
        session.select(4);
        assert_eq!(session.swaps_left(), RELAXED_SWAPS);
        assert_eq!(session.swaps_made(), 1);
    }

    #[test]
    fn running_out_of_swaps_ends_the_game() {
        let mut session = GameSession::new(puzzle(), PlayMode::Challenge, SessionRules::default());
        for _ in 0..25 {
            session.select(10);
            session.select(10);
        }
        assert_eq!(session.swaps_left(), 0);
        assert!(session.is_game_over());
        assert_eq!(session.select(0), SelectOutcome::Ignored);
        assert_eq!(session.score(), None);
    }

    #[test]
    fn continue_at_zero_keeps_playing() {
        let rules = SessionRules {
            fail_at_zero: true,
            continue_at_zero: true,
        };
        let mut session = GameSession::new(puzzle(), PlayMode::Challenge, rules);
        for _ in 0..25 {
            session.select(10);
            session.select(10);
        }
        assert!(!session.is_game_over());
        assert_eq!(session.select(0), SelectOutcome::Selected(0));
        assert_eq!(session.select(1), SelectOutcome::Swapped(0, 1));
        assert!(session.is_solved());
        assert_eq!(session.score(), Some(250));
    }

    #[test]
    fn blocked_cells_are_skipped() {
        let session = GameSession::new(puzzle(), PlayMode::Balanced, SessionRules::default())
            .with_blocked([0, 1]);
        assert!(session.is_solved());

        let mut session = GameSession::new(puzzle(), PlayMode::Balanced, SessionRules::default())
            .with_blocked([7]);
        assert_eq!(session.select(7), SelectOutcome::Ignored);
        assert_eq!(session.select(99), SelectOutcome::Ignored);
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn hints_cycle() {
        let mut session = GameSession::new(puzzle(), PlayMode::Balanced, SessionRules::default());
        assert_eq!(session.next_across_hint(), Some("a1"));
        assert_eq!(session.next_across_hint(), Some("a2"));
        assert_eq!(session.next_across_hint(), Some("a1"));
        assert_eq!(session.next_down_hint(), Some("d1"));
        assert_eq!(session.next_down_hint(), Some("d1"));
    }

    #[test]
    fn best_scores_keep_maximum_per_language() {
        let mut best = BestScores::default();
        assert!(best.record(Language::De, 300));
        assert!(!best.record(Language::De, 200));
        assert!(best.record(Language::De, 310));
        assert_eq!(best.get(Language::De), 310);
        assert_eq!(best.get(Language::Fr), 0);
    }
}
