//! Centralized scoring and pacing constants for the Stable Manager state model.
//!
//! These values define the exact point economy and step budget of the
//! questionnaire. Keeping them together ensures they can only be adjusted via
//! code changes reviewed in version control, rather than through external
//! assets.

// Scoring ------------------------------------------------------------------
/// Points awarded for every answer, including edits and post-completion answers.
pub const POINTS_PER_ANSWER: u32 = 10;
/// One-time bonus for completing a section.
pub const SECTION_COMPLETION_BONUS: u32 = 100;
/// Expertise points per expertise level.
pub const POINTS_PER_EXPERTISE_LEVEL: u32 = 500;

// Step budget --------------------------------------------------------------
pub const OFFICE_QUESTION_COUNT: u32 = 10;
pub const EXAMINATION_QUESTION_COUNT: u32 = 7;
pub const FEED_QUESTION_COUNT: u32 = 7;
pub const TRAINING_QUESTION_COUNT: u32 = 7;
pub const VETERINARY_QUESTION_COUNT: u32 = 4;
/// Sum of every section's full question list.
pub const TOTAL_STEPS: u32 = OFFICE_QUESTION_COUNT
    + EXAMINATION_QUESTION_COUNT
    + FEED_QUESTION_COUNT
    + TRAINING_QUESTION_COUNT
    + VETERINARY_QUESTION_COUNT;
pub const FIRST_STEP: u32 = 1;

// Dashboard ----------------------------------------------------------------
/// Number of recent unlocks shown next to the current area.
pub const RECENT_ACHIEVEMENTS_SHOWN: usize = 2;

// Achievement ids ----------------------------------------------------------
pub const ACH_STABLE_MANAGER_NOVICE: &str = "stable_manager_novice";
pub const ACH_DETAILED_EXAMINER: &str = "detailed_examiner";
pub const ACH_TRAINING_MASTER: &str = "training_master";
pub const ACH_HEALTH_GUARDIAN: &str = "health_guardian";
pub const ACH_NUTRITION_EXPERT: &str = "nutrition_expert";
pub const ACH_PERFECT_CARETAKER: &str = "perfect_caretaker";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_budget_matches_question_lists() {
        assert_eq!(TOTAL_STEPS, 35);
        assert_eq!(FIRST_STEP, 1);
    }
}
