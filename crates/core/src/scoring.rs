//! Scoring module - line clear points, leveling and gravity speed
//!
//! - A lock that clears `n` rows awards `LINE_SCORES[min(n, 4) - 1] * level`.
//! - The level is `lines / 10 + 1` and never decreases.
//! - The fall interval shrinks by 50ms per level from 500ms, floored at 50ms.

use crate::types::{
    BASE_FALL_MS, FALL_STEP_MS, LINES_PER_LEVEL, LINE_SCORES, MIN_FALL_MS, START_LEVEL,
};

/// Points for clearing `lines` rows at once on `level`.
///
/// Clearing more than four rows is scored like four.
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    if lines == 0 {
        return 0;
    }
    let base = LINE_SCORES[lines.min(LINE_SCORES.len()) - 1];
    base.saturating_mul(level)
}

/// Level reached after clearing `lines` rows in total.
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL + START_LEVEL
}

/// Milliseconds between gravity steps on `level`.
pub fn fall_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(START_LEVEL).saturating_mul(FALL_STEP_MS);
    BASE_FALL_MS.saturating_sub(speedup).max(MIN_FALL_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_score_level_1() {
        assert_eq!(line_clear_score(0, 1), 0);
        assert_eq!(line_clear_score(1, 1), 100);
        assert_eq!(line_clear_score(2, 1), 300);
        assert_eq!(line_clear_score(3, 1), 500);
        assert_eq!(line_clear_score(4, 1), 800);
    }

    #[test]
    fn test_line_clear_score_scales_with_level() {
        assert_eq!(line_clear_score(1, 2), 200);
        assert_eq!(line_clear_score(4, 3), 2400);
    }

    #[test]
    fn test_more_than_four_lines_scores_as_four() {
        assert_eq!(line_clear_score(5, 1), 800);
        assert_eq!(line_clear_score(20, 2), 1600);
    }

    #[test]
    fn test_level_for_lines() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(29), 3);
        assert_eq!(level_for_lines(30), 4);
    }

    #[test]
    fn test_fall_interval_by_level() {
        assert_eq!(fall_interval_ms(1), 500);
        assert_eq!(fall_interval_ms(2), 450);
        assert_eq!(fall_interval_ms(5), 300);
        assert_eq!(fall_interval_ms(9), 100);
        assert_eq!(fall_interval_ms(10), 50);
        assert_eq!(fall_interval_ms(50), 50);
    }

    #[test]
    fn test_fall_interval_level_zero_is_clamped() {
        assert_eq!(fall_interval_ms(0), 500);
    }
}
