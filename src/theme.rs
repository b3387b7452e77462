//! Per-round background themes

/// CSS backgrounds, one per round
pub const BACKGROUNDS: [&str; 6] = [
    "linear-gradient(135deg, #A8E6CF, #DCEDC1)",
    "linear-gradient(135deg, #FFD3B6, #FFAAA5)",
    "linear-gradient(135deg, #FF8C94, #D291BC)",
    "linear-gradient(135deg, #957DAD, #D5AAFF)",
    "linear-gradient(135deg, #88E1F2, #55C1FF)",
    "linear-gradient(135deg, #83D475, #2EB872)",
];

/// Used if an index ever falls outside the table
pub const FALLBACK_BACKGROUND: &str = "#ffffff";

/// Theme index for a 1-based round, clamped to the table
pub fn index_for_round(round: u32) -> usize {
    (round.saturating_sub(1) as usize).min(BACKGROUNDS.len() - 1)
}

pub fn background(index: usize) -> &'static str {
    BACKGROUNDS.get(index).copied().unwrap_or(FALLBACK_BACKGROUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_clamps() {
        assert_eq!(index_for_round(0), 0);
        assert_eq!(index_for_round(1), 0);
        assert_eq!(index_for_round(6), 5);
        assert_eq!(index_for_round(9), 5);
    }

    #[test]
    fn test_background_fallback() {
        assert_eq!(background(2), BACKGROUNDS[2]);
        assert_eq!(background(42), FALLBACK_BACKGROUND);
    }
}
