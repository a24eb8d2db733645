//! Per-section question cursor.
//!
//! A cursor only stores an index into the active question list of its area.
//! The active list depends on the profile, so every query takes the profile
//! and the index is clamped whenever the list shrinks under it.
use serde::{Deserialize, Serialize};

use crate::area::Area;
use crate::error::SnapshotError;
use crate::profile::Profile;
use crate::questions::{Question, active_questions, questions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CursorSnapshot")]
pub struct SectionCursor {
    area: Area,
    index: usize,
}

#[derive(Deserialize)]
struct CursorSnapshot {
    area: Area,
    index: usize,
}

impl TryFrom<CursorSnapshot> for SectionCursor {
    type Error = SnapshotError;

    /// Rejects indices past the full question list of the area; the active
    /// list is only known once the profile is, see [`Self::clamp`].
    fn try_from(snapshot: CursorSnapshot) -> Result<Self, Self::Error> {
        let count = questions(snapshot.area).len();
        if snapshot.index >= count {
            return Err(SnapshotError::CursorOutOfRange {
                area: snapshot.area,
                index: snapshot.index,
                count,
            });
        }
        Ok(Self {
            area: snapshot.area,
            index: snapshot.index,
        })
    }
}

impl SectionCursor {
    #[must_use]
    pub const fn new(area: Area) -> Self {
        Self { area, index: 0 }
    }

    #[must_use]
    pub const fn area(&self) -> Area {
        self.area
    }

    /// Raw index; may point past the active list until [`Self::clamp`] runs.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Keep the index inside the active list after a profile change.
    pub fn clamp(&mut self, profile: &Profile) {
        let count = self.active_count(profile);
        self.index = self.index.min(count.saturating_sub(1));
    }

    #[must_use]
    pub fn active_count(&self, profile: &Profile) -> usize {
        active_questions(self.area, profile).len()
    }

    /// The question under the cursor, with the index clamped to the active list.
    #[must_use]
    pub fn current(&self, profile: &Profile) -> Option<&'static Question> {
        let active = active_questions(self.area, profile);
        let last = active.len().checked_sub(1)?;
        active.get(self.index.min(last)).copied()
    }

    /// One-based position and active count, e.g. `(3, 7)`.
    #[must_use]
    pub fn position(&self, profile: &Profile) -> (usize, usize) {
        let count = self.active_count(profile);
        let index = self.index.min(count.saturating_sub(1));
        (index + 1, count)
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    #[must_use]
    pub fn is_last(&self, profile: &Profile) -> bool {
        self.index + 1 >= self.active_count(profile)
    }

    #[must_use]
    pub fn can_go_next(&self, profile: &Profile) -> bool {
        !self.is_last(profile)
            && self
                .current(profile)
                .is_some_and(|question| question.allows_next(profile))
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        !self.is_first()
    }

    /// Advance one question. Returns `false` when the move is not allowed.
    pub fn next(&mut self, profile: &Profile) -> bool {
        self.clamp(profile);
        if !self.can_go_next(profile) {
            return false;
        }
        self.index += 1;
        true
    }

    /// Step back one question. Returns `false` on the first question.
    pub fn previous(&mut self, profile: &Profile) -> bool {
        self.clamp(profile);
        if !self.can_go_previous() {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Field, FieldValue};
    use crate::options::{BcsGrade, Temperament};
    use crate::profile::{ActivityPatch, ProfileUpdate};

    fn answer(profile: &mut Profile, field: Field, value: FieldValue) {
        profile.update(field.to_update(value).unwrap());
    }

    #[test]
    fn next_blocked_until_required_answer_given() {
        let mut profile = Profile::new();
        let mut cursor = SectionCursor::new(Area::Office);
        assert!(!cursor.next(&profile));
        assert_eq!(cursor.index(), 0);

        answer(&mut profile, Field::OwnerName, FieldValue::text("Jan Kowalski"));
        assert!(cursor.next(&profile));
        assert_eq!(cursor.current(&profile).unwrap().field, Field::OwnerPhone);
        assert_eq!(cursor.position(&profile), (2, 10));
    }

    #[test]
    fn previous_blocked_on_first_question() {
        let profile = Profile::new();
        let mut cursor = SectionCursor::new(Area::Feed);
        assert!(!cursor.previous(&profile));
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn next_blocked_on_last_question() {
        let profile = Profile::new();
        let mut cursor = SectionCursor::new(Area::Feed);
        // Feed questions past the diet prompt carry defaults or flags.
        cursor.index = 6;
        assert!(cursor.is_last(&profile));
        assert!(!cursor.next(&profile));
        assert!(cursor.previous(&profile));
        assert_eq!(cursor.current(&profile).unwrap().field, Field::PaddockAccess);
    }

    #[test]
    fn flag_questions_never_block() {
        let profile = Profile::new();
        let mut cursor = SectionCursor::new(Area::Training);
        cursor.index = 3;
        assert_eq!(
            cursor.current(&profile).unwrap().field,
            Field::CompetitionParticipation
        );
        assert!(cursor.next(&profile));
        assert_eq!(cursor.current(&profile).unwrap().field, Field::CarouselTraining);
    }

    #[test]
    fn empty_coat_and_hoof_lists_do_not_block_next() {
        let mut profile = Profile::new();
        answer(&mut profile, Field::BcsScore, FieldValue::text(BcsGrade::Normal.label()));
        answer(
            &mut profile,
            Field::Temperament,
            FieldValue::text(Temperament::ALL[0].label()),
        );
        let mut cursor = SectionCursor::new(Area::Examination);
        while cursor.next(&profile) {}
        assert_eq!(cursor.position(&profile), (7, 7));
        assert_eq!(cursor.current(&profile).unwrap().field, Field::HoofGrowth);
        assert!(!profile.is_section_complete(Area::Examination));
    }

    #[test]
    fn index_clamps_when_follow_up_disappears() {
        let mut profile = Profile::new();
        profile.update(ProfileUpdate::Activity(ActivityPatch {
            competition_participation: Some(true),
            carousel_training: Some(true),
            ..ActivityPatch::default()
        }));
        let mut cursor = SectionCursor::new(Area::Training);
        cursor.index = 6;
        assert_eq!(cursor.current(&profile).unwrap().field, Field::CarouselDetails);

        profile.update(ProfileUpdate::Activity(ActivityPatch {
            competition_participation: Some(false),
            carousel_training: Some(false),
            ..ActivityPatch::default()
        }));
        cursor.clamp(&profile);
        assert_eq!(cursor.index(), 4);
        assert_eq!(cursor.current(&profile).unwrap().field, Field::CarouselTraining);
        assert_eq!(cursor.position(&profile), (5, 5));
    }

    #[test]
    fn current_clamps_without_mutation() {
        let profile = Profile::new();
        let mut cursor = SectionCursor::new(Area::Veterinary);
        cursor.index = 42;
        assert_eq!(
            cursor.current(&profile).unwrap().field,
            Field::ExistingConditions
        );
        assert_eq!(cursor.index(), 42);
        cursor.reset();
        assert!(cursor.is_first());
    }

    #[test]
    fn snapshot_index_past_questions_is_rejected() {
        let err = serde_json::from_str::<SectionCursor>(r#"{"area":"veterinary","index":4}"#)
            .unwrap_err();
        assert!(err.to_string().contains("veterinary cursor index 4"), "{err}");

        let cursor: SectionCursor =
            serde_json::from_str(r#"{"area":"training","index":6}"#).unwrap();
        assert_eq!(cursor.index(), 6);
    }
}
