//! Display score for successful scenarios.
//!
//! Not part of the outcome decision: purely a number to show the user.

const BASE_SCORE: u32 = 1000;
const SECOND_PENALTY: u32 = 5;
const EXCHANGE_PENALTY: u32 = 10;
const MIN_SCORE: u32 = 100;

/// Base 1000, minus 5 per whole elapsed second and 10 per completed
/// exchange, floored at 100.
pub fn compute(elapsed_secs: u64, exchanges: u32) -> u32 {
    let time_penalty = SECOND_PENALTY.saturating_mul(elapsed_secs.min(u32::MAX as u64) as u32);
    let move_penalty = EXCHANGE_PENALTY.saturating_mul(exchanges);
    BASE_SCORE
        .saturating_sub(time_penalty)
        .saturating_sub(move_penalty)
        .max(MIN_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_win_is_base_minus_moves() {
        assert_eq!(compute(0, 0), 1000);
        assert_eq!(compute(0, 4), 960);
    }

    #[test]
    fn test_time_penalty() {
        assert_eq!(compute(10, 2), 1000 - 50 - 20);
    }

    #[test]
    fn test_floor() {
        assert_eq!(compute(10_000, 0), 100);
        assert_eq!(compute(0, 1_000), 100);
        assert_eq!(compute(u64::MAX, u32::MAX), 100);
    }
}
