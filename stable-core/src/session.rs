//! The questionnaire session.
//!
//! `StableSession` owns the profile, the progress tracker, the achievement
//! registry and one question cursor per section. Presentation layers borrow
//! it for reads and go through its methods for every write.
use serde::{Deserialize, Serialize};

use crate::CatalogSource;
use crate::achievements::AchievementRegistry;
use crate::area::Area;
use crate::constants::{
    ACH_DETAILED_EXAMINER, ACH_HEALTH_GUARDIAN, ACH_NUTRITION_EXPERT, ACH_PERFECT_CARETAKER,
    ACH_STABLE_MANAGER_NOVICE, ACH_TRAINING_MASTER, POINTS_PER_ANSWER, SECTION_COMPLETION_BONUS,
};
use crate::error::{AnswerError, SnapshotError};
use crate::field::{Field, FieldValue};
use crate::navigation::{self, AreaStatus};
use crate::profile::{Profile, ProfileUpdate};
use crate::progress::Progress;
use crate::questions::{Question, active_questions};
use crate::section::SectionCursor;

/// Everything one answer changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub area: Area,
    /// Answer points plus any completion bonus.
    pub points_awarded: u32,
    pub section_completed: Option<Area>,
    pub unlocked_achievements: Vec<String>,
    pub newly_unlocked_areas: Vec<Area>,
}

impl AnswerOutcome {
    const fn new(area: Area) -> Self {
        Self {
            area,
            points_awarded: 0,
            section_completed: None,
            unlocked_achievements: Vec::new(),
            newly_unlocked_areas: Vec::new(),
        }
    }
}

/// Achievement awarded for completing `area`, if any.
const fn section_achievement(area: Area) -> Option<&'static str> {
    match area {
        Area::Office => None,
        Area::Examination => Some(ACH_DETAILED_EXAMINER),
        Area::Feed => Some(ACH_NUTRITION_EXPERT),
        Area::Training => Some(ACH_TRAINING_MASTER),
        Area::Veterinary => Some(ACH_HEALTH_GUARDIAN),
    }
}

const fn cursor_slot(area: Area) -> usize {
    match area {
        Area::Office => 0,
        Area::Examination => 1,
        Area::Feed => 2,
        Area::Training => 3,
        Area::Veterinary => 4,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionSnapshot")]
pub struct StableSession {
    profile: Profile,
    progress: Progress,
    achievements: AchievementRegistry,
    cursors: [SectionCursor; 5],
}

#[derive(Deserialize)]
struct SessionSnapshot {
    profile: Profile,
    progress: Progress,
    achievements: AchievementRegistry,
    cursors: [SectionCursor; 5],
}

impl TryFrom<SessionSnapshot> for StableSession {
    type Error = SnapshotError;

    /// Cursors must sit in area order; their indices are clamped to the
    /// questions the restored profile shows.
    fn try_from(snapshot: SessionSnapshot) -> Result<Self, Self::Error> {
        let SessionSnapshot {
            profile,
            progress,
            achievements,
            mut cursors,
        } = snapshot;
        for (slot, cursor) in cursors.iter_mut().enumerate() {
            if cursor_slot(cursor.area()) != slot {
                return Err(SnapshotError::CursorSlot {
                    slot,
                    area: cursor.area(),
                });
            }
            cursor.clamp(&profile);
        }
        Ok(Self {
            profile,
            progress,
            achievements,
            cursors,
        })
    }
}

impl Default for StableSession {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            progress: Progress::default(),
            achievements: AchievementRegistry::default(),
            cursors: Area::ALL.map(SectionCursor::new),
        }
    }
}

impl StableSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// New session whose catalog is extended with the definitions of `source`.
    /// Ids already in the default catalog are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot produce a catalog.
    pub fn with_catalog<S>(source: &S) -> Result<Self, S::Error>
    where
        S: CatalogSource,
    {
        let extra = source.load_catalog()?;
        let mut session = Self::new();
        let mut added = 0_usize;
        for achievement in extra.0 {
            let id = achievement.id.clone();
            if session.achievements.add_custom(achievement) {
                added += 1;
            } else {
                log::debug!("catalog entry {id} already defined");
            }
        }
        log::debug!("loaded {added} custom achievements");
        Ok(session)
    }

    #[must_use]
    pub const fn profile(&self) -> &Profile {
        &self.profile
    }

    #[must_use]
    pub const fn progress(&self) -> &Progress {
        &self.progress
    }

    #[must_use]
    pub const fn achievements(&self) -> &AchievementRegistry {
        &self.achievements
    }

    /// Jump the global step; out-of-range requests are ignored.
    pub fn set_step(&mut self, step: u32) {
        self.progress.set_step(step);
    }

    /// Award points outside the answer pipeline.
    pub fn add_expertise_points(&mut self, points: u32) {
        self.progress.add_expertise_points(points);
    }

    /// Direct access to the registry operations (manual unlocks, custom entries).
    pub fn achievements_mut(&mut self) -> &mut AchievementRegistry {
        &mut self.achievements
    }

    /// Answer one question by field.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` has the wrong kind for `field` or names an
    /// option outside the field's option set. The session is left untouched.
    pub fn answer(&mut self, field: Field, value: FieldValue) -> Result<AnswerOutcome, AnswerError> {
        let update = field.to_update(value)?;
        Ok(self.answer_update(update))
    }

    /// Record a typed answer: write it, award points, then settle section
    /// completion, achievements and area unlocks on the updated profile.
    ///
    /// Every field the patch sets scores as one answer, so an empty patch
    /// awards nothing and does not count as the first answer.
    pub fn answer_update(&mut self, update: ProfileUpdate) -> AnswerOutcome {
        let area = update.area();
        let answered = update.answered_fields();
        let unlocked_before = navigation::unlocked_areas(&self.progress);
        let mut outcome = AnswerOutcome::new(area);

        self.write(update);
        let points = POINTS_PER_ANSWER.saturating_mul(answered);
        self.progress.add_expertise_points(points);
        outcome.points_awarded += points;

        if answered > 0 && self.achievements.unlock(ACH_STABLE_MANAGER_NOVICE) {
            outcome
                .unlocked_achievements
                .push(ACH_STABLE_MANAGER_NOVICE.to_string());
        }

        if self.profile.is_section_complete(area) && self.progress.complete_section(area) {
            log::debug!("section {area} completed");
            outcome.points_awarded += SECTION_COMPLETION_BONUS;
            outcome.section_completed = Some(area);

            let mut earned: Vec<&str> = section_achievement(area).into_iter().collect();
            if self.progress.all_sections_complete() {
                earned.push(ACH_PERFECT_CARETAKER);
            }
            for id in earned {
                if self.achievements.unlock(id) {
                    outcome.unlocked_achievements.push(id.to_string());
                }
            }

            outcome.newly_unlocked_areas = navigation::unlocked_areas(&self.progress)
                .into_iter()
                .filter(|area| !unlocked_before.contains(area))
                .collect();
        }
        outcome
    }

    /// Store a profile edit without scoring it.
    pub fn update_profile(&mut self, update: ProfileUpdate) {
        self.write(update);
    }

    fn write(&mut self, update: ProfileUpdate) {
        let area = update.area();
        self.profile.update(update);
        let profile = &self.profile;
        self.cursors[cursor_slot(area)].clamp(profile);
    }

    /// Switch areas when the gate allows it; locked areas are ignored.
    pub fn request_area(&mut self, area: Area) -> bool {
        navigation::request_area(&mut self.progress, area)
    }

    #[must_use]
    pub fn unlocked_areas(&self) -> Vec<Area> {
        navigation::unlocked_areas(&self.progress)
    }

    #[must_use]
    pub fn area_status(&self, area: Area) -> AreaStatus {
        navigation::area_status(&self.progress, area)
    }

    #[must_use]
    pub const fn cursor(&self, area: Area) -> &SectionCursor {
        &self.cursors[cursor_slot(area)]
    }

    #[must_use]
    pub fn active_questions(&self, area: Area) -> Vec<&'static Question> {
        active_questions(area, &self.profile)
    }

    /// Question under the cursor of the current area.
    #[must_use]
    pub fn current_question(&self) -> Option<&'static Question> {
        self.cursor(self.progress.current_area())
            .current(&self.profile)
    }

    /// One-based position and active question count within `area`.
    #[must_use]
    pub fn section_position(&self, area: Area) -> (usize, usize) {
        self.cursor(area).position(&self.profile)
    }

    /// Move to the next question of the current area and advance the global
    /// step. Returns `false` when the move is blocked.
    pub fn next_question(&mut self) -> bool {
        let slot = cursor_slot(self.progress.current_area());
        if !self.cursors[slot].next(&self.profile) {
            return false;
        }
        self.progress.increment_step();
        true
    }

    /// Move to the previous question of the current area and step the global
    /// counter back. Returns `false` on the first question.
    pub fn previous_question(&mut self) -> bool {
        let slot = cursor_slot(self.progress.current_area());
        if !self.cursors[slot].previous(&self.profile) {
            return false;
        }
        self.progress.decrement_step();
        true
    }

    /// Unlock an achievement by id; unknown and repeated ids are ignored.
    pub fn unlock_achievement(&mut self, id: &str) -> bool {
        self.achievements.unlock(id)
    }

    /// Restore the initial profile, progress, registry and cursors.
    pub fn reset_all(&mut self) {
        log::info!(
            "resetting session ({} points, {} sections complete)",
            self.progress.expertise_points(),
            self.progress.completed_sections().len()
        );
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::{Achievement, AchievementCatalog, AchievementCategory};
    use crate::error::CatalogError;
    use crate::profile::OwnerPatch;

    fn office_answers() -> Vec<(Field, FieldValue)> {
        vec![
            (Field::OwnerName, FieldValue::text("Jan Kowalski")),
            (Field::OwnerPhone, FieldValue::text("600 100 200")),
            (Field::OwnerEmail, FieldValue::text("jan@example.pl")),
            (Field::HorseName, FieldValue::text("Iskra")),
            (Field::HorseHeight, FieldValue::Number(160)),
            (Field::HorseBreed, FieldValue::text("Małopolska")),
            (Field::HorseAge, FieldValue::Number(9)),
            (Field::HorseWeight, FieldValue::Number(520)),
            (Field::HorseLocation, FieldValue::text("Mazowieckie")),
            (Field::HorseGender, FieldValue::text("klacz")),
        ]
    }

    #[test]
    fn each_answer_scores_ten() {
        let mut session = StableSession::new();
        let outcome = session
            .answer(Field::OwnerName, FieldValue::text("Jan"))
            .unwrap();
        assert_eq!(outcome.points_awarded, 10);
        assert_eq!(outcome.section_completed, None);
        assert_eq!(
            outcome.unlocked_achievements,
            vec![ACH_STABLE_MANAGER_NOVICE.to_string()]
        );
        let again = session
            .answer(Field::OwnerName, FieldValue::text("Jan K."))
            .unwrap();
        assert!(again.unlocked_achievements.is_empty());
        assert_eq!(session.progress().expertise_points(), 20);
    }

    #[test]
    fn office_completion_awards_bonus_once_and_opens_areas() {
        let mut session = StableSession::new();
        let mut completions = Vec::new();
        for (field, value) in office_answers() {
            let outcome = session.answer(field, value).unwrap();
            if outcome.section_completed.is_some() {
                completions.push(outcome);
            }
        }
        assert_eq!(completions.len(), 1);
        assert_eq!(
            completions[0].newly_unlocked_areas,
            vec![
                Area::Examination,
                Area::Feed,
                Area::Training,
                Area::Veterinary
            ]
        );
        assert_eq!(session.progress().expertise_points(), 200);
        assert_eq!(session.progress().completed_sections(), &[Area::Office]);
        assert_eq!(session.unlocked_areas(), Area::ALL.to_vec());
    }

    #[test]
    fn rejected_answer_leaves_session_untouched() {
        let mut session = StableSession::new();
        let err = session
            .answer(Field::HorseGender, FieldValue::text("koń"))
            .unwrap_err();
        assert!(matches!(err, AnswerError::UnknownOption { .. }));
        assert_eq!(session, StableSession::new());
    }

    #[test]
    fn update_profile_does_not_score() {
        let mut session = StableSession::new();
        session.update_profile(Field::OwnerName.to_update(FieldValue::text("Ala")).unwrap());
        assert_eq!(session.profile().owner().name, "Ala");
        assert_eq!(session.progress().expertise_points(), 0);
        assert_eq!(session.achievements().unlocked_count(), 0);
    }

    #[test]
    fn locked_area_request_keeps_office() {
        let mut session = StableSession::new();
        assert!(!session.request_area(Area::Training));
        assert_eq!(session.progress().current_area(), Area::Office);
        assert_eq!(session.area_status(Area::Training), AreaStatus::Locked);
    }

    #[test]
    fn navigation_moves_cursor_and_global_step() {
        let mut session = StableSession::new();
        assert!(!session.next_question());
        assert!(!session.previous_question());
        session
            .answer(Field::OwnerName, FieldValue::text("Jan"))
            .unwrap();
        assert!(session.next_question());
        assert_eq!(session.progress().current_step(), 2);
        assert_eq!(
            session.current_question().map(|q| q.field),
            Some(Field::OwnerPhone)
        );
        assert!(session.previous_question());
        assert_eq!(session.progress().current_step(), 1);
        assert_eq!(session.section_position(Area::Office), (1, 10));
    }

    #[test]
    fn training_cursor_clamps_after_follow_up_hides() {
        let mut session = StableSession::new();
        for (field, value) in office_answers() {
            session.answer(field, value).unwrap();
        }
        assert!(session.request_area(Area::Training));
        session
            .answer(Field::ActivityType, FieldValue::text("skoki"))
            .unwrap();
        session
            .answer(Field::TrainingDaysPerWeek, FieldValue::Number(5))
            .unwrap();
        session
            .answer(Field::HoursPerDay, FieldValue::Number(2))
            .unwrap();
        session
            .answer(Field::CompetitionParticipation, FieldValue::Flag(false))
            .unwrap();
        session
            .answer(Field::CarouselTraining, FieldValue::Flag(true))
            .unwrap();
        while session.next_question() {}
        assert_eq!(session.section_position(Area::Training), (6, 6));

        session
            .answer(Field::CarouselTraining, FieldValue::Flag(false))
            .unwrap();
        assert_eq!(session.cursor(Area::Training).index(), 4);
        assert_eq!(
            session.current_question().map(|q| q.field),
            Some(Field::CarouselTraining)
        );
    }

    #[test]
    fn section_achievements_unlock_on_completion() {
        let mut session = StableSession::new();
        let outcome = session.answer_update(ProfileUpdate::Environment(
            crate::profile::EnvironmentPatch {
                current_diet: Some("siano, owies".to_string()),
                ..Default::default()
            },
        ));
        assert_eq!(outcome.section_completed, None);
        let outcome = session
            .answer(Field::HayQuality, FieldValue::text("dobra"))
            .unwrap();
        assert_eq!(outcome.section_completed, Some(Area::Feed));
        assert_eq!(outcome.points_awarded, 110);
        assert_eq!(
            outcome.unlocked_achievements,
            vec![ACH_NUTRITION_EXPERT.to_string()]
        );
        assert!(outcome.newly_unlocked_areas.is_empty());
    }

    #[test]
    fn reset_all_restores_initial_state() {
        let mut session = StableSession::new();
        for (field, value) in office_answers() {
            session.answer(field, value).unwrap();
        }
        session.request_area(Area::Feed);
        session.reset_all();
        assert_eq!(session, StableSession::new());
        assert_eq!(session.progress().current_area(), Area::Office);
        assert_eq!(session.progress().current_step(), 1);
        assert_eq!(session.progress().expertise_points(), 0);
    }

    struct FixtureCatalog(&'static str);

    impl CatalogSource for FixtureCatalog {
        type Error = CatalogError;

        fn load_catalog(&self) -> Result<AchievementCatalog, Self::Error> {
            AchievementCatalog::from_json(self.0)
        }
    }

    #[test]
    fn with_catalog_skips_known_ids() {
        let json = r#"[
            {"id": "night_rider", "name": "Nocny Jeździec", "description": "", "icon": "moon", "category": "training"},
            {"id": "training_master", "name": "x", "description": "", "icon": "", "category": "training"}
        ]"#;
        let session = StableSession::with_catalog(&FixtureCatalog(json)).unwrap();
        assert_eq!(session.achievements().total_count(), 7);
        assert_eq!(
            session
                .achievements()
                .by_category(AchievementCategory::Training)
                .len(),
            2
        );
        assert!(StableSession::with_catalog(&FixtureCatalog("{")).is_err());
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let mut session = StableSession::new();
        session
            .answer(Field::HorseName, FieldValue::text("Iskra"))
            .unwrap();
        session.achievements_mut().add_custom(Achievement::new(
            "early_bird",
            "Ranny Ptaszek",
            "",
            "sun",
            AchievementCategory::General,
        ));
        let json = serde_json::to_string(&session).unwrap();
        let back: StableSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn multi_field_patch_scores_each_field() {
        let mut session = StableSession::new();
        let outcome = session.answer_update(ProfileUpdate::Owner(OwnerPatch {
            name: Some("Jan Kowalski".to_string()),
            phone: Some("600 100 200".to_string()),
            email: Some("jan@example.pl".to_string()),
        }));
        assert_eq!(outcome.points_awarded, 30);
        assert_eq!(session.progress().expertise_points(), 30);

        let mut empty = StableSession::new();
        let outcome = empty.answer_update(ProfileUpdate::Owner(OwnerPatch::default()));
        assert_eq!(outcome.points_awarded, 0);
        assert!(outcome.unlocked_achievements.is_empty());
        assert_eq!(empty.achievements().unlocked_count(), 0);
    }

    #[test]
    fn step_and_points_are_the_only_direct_progress_writes() {
        let mut session = StableSession::new();
        session.set_step(12);
        session.set_step(0);
        session.set_step(99);
        assert_eq!(session.progress().current_step(), 12);
        session.add_expertise_points(40);
        assert_eq!(session.progress().expertise_points(), 40);
        assert_eq!(session.progress().current_area(), Area::Office);
        assert!(session.progress().completed_sections().is_empty());
    }

    #[test]
    fn snapshot_with_swapped_cursors_is_rejected() {
        let mut json = serde_json::to_value(StableSession::new()).unwrap();
        json["cursors"].as_array_mut().unwrap().swap(0, 1);
        let err = serde_json::from_value::<StableSession>(json).unwrap_err();
        assert!(
            err.to_string()
                .contains("cursor slot 0 holds the examination cursor"),
            "{err}"
        );
    }

    #[test]
    fn snapshot_cursor_clamps_to_restored_profile() {
        let mut json = serde_json::to_value(StableSession::new()).unwrap();
        json["cursors"][3]["index"] = 6.into();
        let session: StableSession = serde_json::from_value(json).unwrap();
        // competition and carousel follow-ups are hidden
        assert_eq!(session.cursor(Area::Training).index(), 4);

        let mut json = serde_json::to_value(StableSession::new()).unwrap();
        json["progress"]["current_step"] = 0.into();
        assert!(serde_json::from_value::<StableSession>(json).is_err());
    }
}
