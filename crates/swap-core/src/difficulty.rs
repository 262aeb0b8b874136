use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::board::{BoardSize, Tile};

/// Advisory label; never used to gate play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyRating {
    Easy,
    Medium,
    Hard,
}

impl DifficultyRating {
    pub fn label(&self) -> &str {
        match self {
            DifficultyRating::Easy => "Easy",
            DifficultyRating::Medium => "Medium",
            DifficultyRating::Hard => "Hard",
        }
    }

    pub fn from_score(score: f64) -> DifficultyRating {
        if score < 2.0 {
            DifficultyRating::Easy
        } else if score < 2.8 {
            DifficultyRating::Medium
        } else {
            DifficultyRating::Hard
        }
    }
}

fn size_bonus(size: BoardSize) -> f64 {
    match size {
        BoardSize::Five => 0.0,
        BoardSize::Seven => 0.3,
        BoardSize::Nine => 0.6,
    }
}

/// `1 - unique/total` over the tile letters; 0 for an empty board.
pub fn repetition_ratio(tiles: &[Tile]) -> f64 {
    if tiles.is_empty() {
        return 0.0;
    }
    let unique: HashSet<char> = tiles.iter().map(|t| t.value).collect();
    1.0 - unique.len() as f64 / tiles.len() as f64
}

pub fn difficulty_score(average_weight: f64, tiles: &[Tile], size: BoardSize) -> f64 {
    average_weight + repetition_ratio(tiles) + size_bonus(size)
}

pub fn rate(average_weight: f64, tiles: &[Tile], size: BoardSize) -> DifficultyRating {
    DifficultyRating::from_score(difficulty_score(average_weight, tiles, size))
}
