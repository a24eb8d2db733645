//! Stable Manager state model
//!
//! Platform-agnostic core of the stable manager questionnaire: the horse
//! profile, progress and expertise points, achievements, per-section question
//! lists and the area gate. This crate has no UI or platform-specific
//! dependencies.

pub mod achievements;
pub mod area;
pub mod constants;
pub mod error;
pub mod field;
pub mod navigation;
pub mod options;
pub mod profile;
pub mod progress;
pub mod questions;
pub mod section;
pub mod session;

// Re-export commonly used types
pub use achievements::{
    Achievement, AchievementCatalog, AchievementCategory, AchievementRegistry,
    UnlockedAchievement,
};
pub use area::Area;
pub use error::{AnswerError, CatalogError, SnapshotError};
pub use field::{Field, FieldKind, FieldValue};
pub use navigation::{AreaStatus, area_status, is_unlocked, unlocked_areas};
pub use options::{
    ActivityType, BcsGrade, CoatChange, CoatQuality, Gender, HayAccess, HayQuality,
    HealthCondition, HoofCondition, HoofGrowth, Muscling, Region, Temperament, WaterAccess,
    WaterSource, YesNo,
};
pub use profile::{
    Activity, ActivityPatch, Environment, EnvironmentPatch, Health, HealthPatch, Horse,
    HorsePatch, Owner, OwnerPatch, PhysicalCondition, PhysicalConditionPatch, Profile,
    ProfileUpdate,
};
pub use progress::Progress;
pub use questions::{InputKind, Question, Validation, ValidationIssue, active_questions, questions};
pub use section::SectionCursor;
pub use session::{AnswerOutcome, StableSession};

/// Trait for abstracting where extra achievement definitions come from.
/// Platform-specific implementations should provide this
pub trait CatalogSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load additional achievement definitions
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read or parsed.
    fn load_catalog(&self) -> Result<AchievementCatalog, Self::Error>;
}

impl CatalogSource for AchievementCatalog {
    type Error = std::convert::Infallible;

    fn load_catalog(&self) -> Result<AchievementCatalog, Self::Error> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Default)]
    struct EmptySource;

    impl CatalogSource for EmptySource {
        type Error = CatalogError;

        fn load_catalog(&self) -> Result<AchievementCatalog, Self::Error> {
            AchievementCatalog::from_json("[]")
        }
    }

    #[test]
    fn empty_source_keeps_default_catalog() {
        let session = StableSession::with_catalog(&EmptySource).unwrap();
        assert_eq!(session.achievements().total_count(), 6);
    }

    #[test]
    fn in_memory_catalog_is_a_source() {
        let extra = AchievementCatalog(vec![Achievement::new(
            "hoof_whisperer",
            "Zaklinacz Kopyt",
            "Opisz stan kopyt",
            "hoof",
            AchievementCategory::Examination,
        )]);
        let mut session = StableSession::with_catalog(&extra).unwrap();
        assert!(session.unlock_achievement("hoof_whisperer"));
        assert!(!session.unlock_achievement("hoof_whisperer"));
        assert_eq!(session.achievements().unlocked_count(), 1);
    }
}
