// Core algorithm exports
pub mod matcher;
pub mod scoring;
pub mod skills;

pub use matcher::{SkillMatcher, DEFAULT_GAP_ADVICE_LIMIT};
pub use scoring::{calculate_coverage_score, coverage_hundredths, MatchTier};
pub use skills::SkillSet;
