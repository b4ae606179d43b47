//! Deterministic leaderboard generation from seed definitions.
//!
//! The same seed value always produces an identical board: names, ids,
//! experience totals, and streaks all come from one ChaCha8 stream.

use std::collections::HashSet;

use fake::Fake;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

use crate::catalogue::LeaderboardSeedDefinition;
use crate::error::GenerationError;
use crate::seed::LeaderboardEntrySeed;

/// Maximum number of attempts to draw a name not already on the board.
const MAX_NAME_ATTEMPTS: usize = 100;

/// Experience range for generated learners.
const MIN_XP: u64 = 1_500;
const MAX_XP: u64 = 15_000;

/// Longest generated streak in days.
const MAX_STREAK: u32 = 60;

/// Experience points per level.
const XP_PER_LEVEL: u64 = 1_000;

/// Generates a leaderboard from a seed definition.
///
/// Rows are ordered by experience, highest first, and ranked from one.
/// Names are unique within a board.
///
/// # Errors
///
/// Returns [`GenerationError::NameGenerationFailed`] if a unique name
/// cannot be drawn within the retry budget.
///
/// # Example
///
/// ```
/// use seed_data::{LeaderboardSeedDefinition, generate_leaderboard};
///
/// let seed_def = LeaderboardSeedDefinition::new("demo", 42, 5);
/// let board = generate_leaderboard(&seed_def).expect("generated");
///
/// assert_eq!(board.len(), 5);
/// assert_eq!(board.first().map(|e| e.rank), Some(1));
/// assert_eq!(board, generate_leaderboard(&seed_def).expect("generated"));
/// ```
pub fn generate_leaderboard(
    seed_def: &LeaderboardSeedDefinition,
) -> Result<Vec<LeaderboardEntrySeed>, GenerationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed_def.seed());
    let mut taken = HashSet::with_capacity(seed_def.entry_count());
    let mut entries = Vec::with_capacity(seed_def.entry_count());

    for _ in 0..seed_def.entry_count() {
        let id = Uuid::from_u128(rng.random());
        let name = generate_unique_name(&mut rng, &mut taken)?;
        let xp = rng.random_range(MIN_XP..=MAX_XP);
        let streak = rng.random_range(0..=MAX_STREAK);
        entries.push(LeaderboardEntrySeed {
            id,
            rank: 0,
            name,
            xp,
            level: xp.div_euclid(XP_PER_LEVEL) + 1,
            streak,
        });
    }

    entries.sort_by(|a, b| b.xp.cmp(&a.xp));
    for (rank, entry) in (1_u32..).zip(entries.iter_mut()) {
        entry.rank = rank;
    }

    Ok(entries)
}

fn generate_unique_name(
    rng: &mut ChaCha8Rng,
    taken: &mut HashSet<String>,
) -> Result<String, GenerationError> {
    for _ in 0..MAX_NAME_ATTEMPTS {
        let first: String = FirstName(EN).fake_with_rng(rng);
        let last: String = LastName(EN).fake_with_rng(rng);
        let candidate = format!("{first} {last}");
        if taken.insert(candidate.clone()) {
            return Ok(candidate);
        }
    }

    Err(GenerationError::NameGenerationFailed {
        max_attempts: MAX_NAME_ATTEMPTS,
    })
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn seed_def() -> LeaderboardSeedDefinition {
        LeaderboardSeedDefinition::new("test-seed", 42, 25)
    }

    #[rstest]
    fn generates_requested_entry_count(seed_def: LeaderboardSeedDefinition) {
        let board = generate_leaderboard(&seed_def).expect("generated");
        assert_eq!(board.len(), 25);
    }

    #[rstest]
    fn generation_is_deterministic(seed_def: LeaderboardSeedDefinition) {
        let first = generate_leaderboard(&seed_def).expect("generated");
        let second = generate_leaderboard(&seed_def).expect("generated");
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_produce_different_boards() {
        let a = generate_leaderboard(&LeaderboardSeedDefinition::new("a", 1, 5)).expect("a");
        let b = generate_leaderboard(&LeaderboardSeedDefinition::new("b", 2, 5)).expect("b");
        assert_ne!(a.first().map(|e| e.id), b.first().map(|e| e.id));
    }

    #[rstest]
    fn entries_are_ranked_by_descending_xp(seed_def: LeaderboardSeedDefinition) {
        let board = generate_leaderboard(&seed_def).expect("generated");
        for pair in board.windows(2) {
            let [higher, lower] = pair else {
                panic!("windows(2) yields pairs");
            };
            assert!(higher.xp >= lower.xp);
            assert_eq!(higher.rank + 1, lower.rank);
        }
        assert_eq!(board.first().map(|e| e.rank), Some(1));
    }

    #[rstest]
    fn levels_follow_xp(seed_def: LeaderboardSeedDefinition) {
        let board = generate_leaderboard(&seed_def).expect("generated");
        for entry in &board {
            assert_eq!(entry.level, entry.xp.div_euclid(XP_PER_LEVEL) + 1);
            assert!((MIN_XP..=MAX_XP).contains(&entry.xp));
            assert!(entry.streak <= MAX_STREAK);
        }
    }

    #[rstest]
    fn names_are_unique(seed_def: LeaderboardSeedDefinition) {
        let board = generate_leaderboard(&seed_def).expect("generated");
        let names: HashSet<_> = board.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names.len(), board.len());
    }

    #[test]
    fn empty_seed_yields_empty_board() {
        let board =
            generate_leaderboard(&LeaderboardSeedDefinition::new("empty", 9, 0)).expect("empty");
        assert!(board.is_empty());
    }
}
