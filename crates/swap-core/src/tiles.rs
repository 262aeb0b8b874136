use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Tile;

/// Row-major tiles for a grid of across-words.
pub fn flatten(across: &[String]) -> Vec<Tile> {
    across
        .iter()
        .flat_map(|w| w.chars())
        .enumerate()
        .map(|(idx, value)| Tile::new(idx, value))
        .collect()
}

/// Uniform random permutation of `tiles`. The input is left untouched.
pub fn shuffle_tiles<R: Rng + ?Sized>(tiles: &[Tile], rng: &mut R) -> Vec<Tile> {
    let mut shuffled = tiles.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Shuffle, reshuffling up to `max_retries` times while the result is still solved.
///
/// Returns the board and whether it ended up unsolved.
pub fn shuffle_unsolved<R: Rng + ?Sized>(
    solution: &[Tile],
    max_retries: u32,
    rng: &mut R,
) -> (Vec<Tile>, bool) {
    let mut shuffled = shuffle_tiles(solution, rng);
    let mut retries = 0;
    while is_solved(&shuffled, solution) && retries < max_retries {
        shuffled = shuffle_tiles(solution, rng);
        retries += 1;
    }
    let converged = !is_solved(&shuffled, solution);
    if !converged {
        log::debug!("shuffle still solved after {} retries", retries);
    }
    (shuffled, converged)
}

/// Copy of `tiles` with positions `a` and `b` exchanged.
///
/// Equal or out-of-range indices yield an unchanged copy.
pub fn swap_tiles(tiles: &[Tile], a: usize, b: usize) -> Vec<Tile> {
    let mut next = tiles.to_vec();
    if a != b && a < next.len() && b < next.len() {
        next.swap(a, b);
    }
    next
}

pub fn is_solved(current: &[Tile], solution: &[Tile]) -> bool {
    is_solved_with_blocked(current, solution, &HashSet::new())
}

/// Compare tile values position by position, skipping blocked indices.
pub fn is_solved_with_blocked(
    current: &[Tile],
    solution: &[Tile],
    blocked: &HashSet<usize>,
) -> bool {
    if current.len() != solution.len() {
        return false;
    }
    current
        .iter()
        .zip(solution)
        .enumerate()
        .all(|(idx, (cur, sol))| blocked.contains(&idx) || cur.value == sol.value)
}
