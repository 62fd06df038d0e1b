use serde::{Deserialize, Serialize};

/// Coverage above which a candidate is a strong match, in percent
const STRONG_THRESHOLD: u64 = 70;
/// Coverage above which a candidate is a good match, in percent
const GOOD_THRESHOLD: u64 = 50;

/// Calculate the coverage score in hundredths (0-100)
///
/// Coverage is `matched / required` rounded half-up to two decimals. The
/// rounding is done in integer arithmetic so ratios that land exactly on a
/// half (137/200 = 0.685) always round up, independent of how the ratio
/// would be represented as a float.
///
/// An empty requirement scores 0.
#[inline]
pub fn coverage_hundredths(matched: usize, required: usize) -> u32 {
    if required == 0 {
        return 0;
    }

    let matched = matched.min(required) as u64;
    let required = required as u64;

    // floor(100 * m / r + 1/2) == floor((200 * m + r) / (2 * r))
    ((200 * matched + required) / (2 * required)) as u32
}

/// Coverage score as a float in [0.0, 1.0] with two decimals
#[inline]
pub fn calculate_coverage_score(matched: usize, required: usize) -> f64 {
    coverage_hundredths(matched, required) as f64 / 100.0
}

/// Guidance tier a match falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    /// coverage > 0.7
    Strong,
    /// 0.5 < coverage <= 0.7
    Good,
    /// coverage <= 0.5
    Focus,
}

impl MatchTier {
    /// Tier for `matched / required`, compared on the exact ratio
    ///
    /// The unrounded ratio decides the tier, so 281/401 (0.7007, shown as
    /// 0.70) is still strong. An empty requirement is `Focus`.
    pub fn from_ratio(matched: usize, required: usize) -> Self {
        if required == 0 {
            return MatchTier::Focus;
        }

        let matched = matched.min(required) as u64 * 100;
        let required = required as u64;

        if matched > STRONG_THRESHOLD * required {
            MatchTier::Strong
        } else if matched > GOOD_THRESHOLD * required {
            MatchTier::Good
        } else {
            MatchTier::Focus
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            MatchTier::Strong => "Strong match! Apply with confidence.",
            MatchTier::Good => "Good match. Highlight your transferable skills.",
            MatchTier::Focus => "Focus on building required skills first.",
        }
    }
}
