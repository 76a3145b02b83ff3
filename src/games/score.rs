//! Score bookkeeping and the bonus formulas shared by the puzzles.

use serde::Serialize;
use tracing::instrument;

/// Smallest bonus any completion can award.
pub const MIN_BONUS: u32 = 10;

/// A per-game score. Never drops below zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Score(u32);

impl Score {
    /// Current value.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Adds points.
    pub fn award(&mut self, points: u32) {
        self.0 = self.0.saturating_add(points);
    }

    /// Subtracts points, clamping at zero.
    pub fn penalize(&mut self, points: u32) {
        self.0 = self.0.saturating_sub(points);
    }
}

/// `max(100 − floor(elapsed / per), 10)`.
#[instrument]
pub fn time_bonus(elapsed_secs: u64, per: u64) -> u32 {
    let steps = elapsed_secs / per.max(1);
    let bonus = 100i64 - i64::try_from(steps).unwrap_or(i64::MAX);
    clamp_bonus(bonus)
}

/// `max(100 − (moves − 2 × pairs) × 5, 10)`.
///
/// Perfect play takes `pairs` moves, so a clean run lands above 100.
#[instrument]
pub fn move_bonus(moves: u32, pairs: u32) -> u32 {
    let excess = i64::from(moves) - 2 * i64::from(pairs);
    clamp_bonus(100 - excess * 5)
}

fn clamp_bonus(bonus: i64) -> u32 {
    u32::try_from(bonus.max(i64::from(MIN_BONUS))).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_penalty_clamps_at_zero() {
        let mut score = Score::default();
        score.award(3);
        score.penalize(5);
        assert_eq!(score.value(), 0);
    }

    #[test]
    fn test_time_bonus_floors_at_minimum() {
        assert_eq!(time_bonus(0, 10), 100);
        assert_eq!(time_bonus(59, 10), 95);
        assert_eq!(time_bonus(900, 10), MIN_BONUS);
        assert_eq!(time_bonus(24, 5), 96);
    }

    #[test]
    fn test_move_bonus_rewards_short_runs() {
        // 8 pairs cleared in 8 moves: excess is -8.
        assert_eq!(move_bonus(8, 8), 140);
        assert_eq!(move_bonus(16, 8), 100);
        assert_eq!(move_bonus(40, 8), MIN_BONUS);
    }
}
