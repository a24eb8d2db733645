//! Horse profile store.
//!
//! The profile is split into six independent sub-records. Each sub-record is
//! updated through a patch: fields present in the patch replace the stored
//! value, absent fields keep their prior value. The store never validates;
//! range and required checks are advisory metadata on the questions.
use serde::{Deserialize, Serialize};

use crate::area::Area;
use crate::options::{
    ActivityType, BcsGrade, CoatChange, CoatQuality, Gender, HayAccess, HayQuality,
    HealthCondition, HoofCondition, HoofGrowth, Muscling, Region, Temperament, WaterAccess,
    WaterSource, YesNo,
};

fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

fn count_set(present: &[bool]) -> u32 {
    present.iter().map(|set| u32::from(*set)).sum()
}

fn merge_choice<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Owner {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Owner {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.phone.is_empty() && !self.email.is_empty()
    }

    fn apply(&mut self, patch: OwnerPatch) {
        merge(&mut self.name, patch.name);
        merge(&mut self.phone, patch.phone);
        merge(&mut self.email, patch.email);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OwnerPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Horse {
    pub name: String,
    /// Height at the withers in centimetres (100-200).
    pub height: u32,
    pub breed: String,
    /// Age in years (0-40).
    pub age: u32,
    /// Body weight in kilograms (200-1000).
    pub weight: u32,
    pub location: Option<Region>,
    pub gender: Gender,
}

impl Horse {
    /// Every text field non-empty, every number non-zero and a region chosen.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && self.height != 0
            && !self.breed.is_empty()
            && self.age != 0
            && self.weight != 0
            && self.location.is_some()
    }

    fn apply(&mut self, patch: HorsePatch) {
        merge(&mut self.name, patch.name);
        merge(&mut self.height, patch.height);
        merge(&mut self.breed, patch.breed);
        merge(&mut self.age, patch.age);
        merge(&mut self.weight, patch.weight);
        merge_choice(&mut self.location, patch.location);
        merge(&mut self.gender, patch.gender);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HorsePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Region>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PhysicalCondition {
    pub bcs_score: Option<BcsGrade>,
    pub muscling: Muscling,
    pub temperament: Option<Temperament>,
    pub coat_change: CoatChange,
    pub coat_quality: Vec<CoatQuality>,
    pub hoof_condition: Vec<HoofCondition>,
    pub hoof_growth: HoofGrowth,
}

impl PhysicalCondition {
    /// Scalars answered and both tag lists non-empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.bcs_score.is_some()
            && self.temperament.is_some()
            && !self.coat_quality.is_empty()
            && !self.hoof_condition.is_empty()
    }

    fn apply(&mut self, patch: PhysicalConditionPatch) {
        merge_choice(&mut self.bcs_score, patch.bcs_score);
        merge(&mut self.muscling, patch.muscling);
        merge_choice(&mut self.temperament, patch.temperament);
        merge(&mut self.coat_change, patch.coat_change);
        merge(&mut self.coat_quality, patch.coat_quality);
        merge(&mut self.hoof_condition, patch.hoof_condition);
        merge(&mut self.hoof_growth, patch.hoof_growth);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PhysicalConditionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bcs_score: Option<BcsGrade>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscling: Option<Muscling>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperament: Option<Temperament>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coat_change: Option<CoatChange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coat_quality: Option<Vec<CoatQuality>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hoof_condition: Option<Vec<HoofCondition>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hoof_growth: Option<HoofGrowth>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Activity {
    pub activity_type: Option<ActivityType>,
    /// Training days per week (0-7).
    pub training_days_per_week: u32,
    /// Working hours per training day (0-8).
    pub hours_per_day: u32,
    pub competition_participation: bool,
    pub competition_frequency: String,
    pub carousel_training: bool,
    pub carousel_details: String,
}

impl Activity {
    /// Booleans always satisfy; the two follow-up texts count only when their
    /// controlling flag is set.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.activity_type.is_some()
            && self.training_days_per_week != 0
            && self.hours_per_day != 0
            && (!self.competition_participation || !self.competition_frequency.is_empty())
            && (!self.carousel_training || !self.carousel_details.is_empty())
    }

    fn apply(&mut self, patch: ActivityPatch) {
        merge_choice(&mut self.activity_type, patch.activity_type);
        merge(&mut self.training_days_per_week, patch.training_days_per_week);
        merge(&mut self.hours_per_day, patch.hours_per_day);
        merge(
            &mut self.competition_participation,
            patch.competition_participation,
        );
        merge(&mut self.competition_frequency, patch.competition_frequency);
        merge(&mut self.carousel_training, patch.carousel_training);
        merge(&mut self.carousel_details, patch.carousel_details);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ActivityPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<ActivityType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_days_per_week: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_per_day: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competition_participation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competition_frequency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carousel_training: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carousel_details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Health {
    /// Bloodwork, hair, hoof and faecal analysis within the last year.
    pub last_bloodwork: Option<YesNo>,
    /// Dewormings per year (0-12).
    pub deworming_count: u32,
    pub last_dental_check: String,
    pub existing_conditions: Vec<HealthCondition>,
}

impl Health {
    /// The condition list may legitimately stay empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.last_bloodwork.is_some()
            && self.deworming_count != 0
            && !self.last_dental_check.is_empty()
    }

    fn apply(&mut self, patch: HealthPatch) {
        merge_choice(&mut self.last_bloodwork, patch.last_bloodwork);
        merge(&mut self.deworming_count, patch.deworming_count);
        merge(&mut self.last_dental_check, patch.last_dental_check);
        merge(&mut self.existing_conditions, patch.existing_conditions);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HealthPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_bloodwork: Option<YesNo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deworming_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_dental_check: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub existing_conditions: Option<Vec<HealthCondition>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Environment {
    pub water_access: WaterAccess,
    pub water_source: WaterSource,
    pub current_diet: String,
    pub hay_access: HayAccess,
    pub hay_quality: Option<HayQuality>,
    pub paddock_access: bool,
    pub pasture_access: bool,
}

impl Environment {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.current_diet.is_empty() && self.hay_quality.is_some()
    }

    fn apply(&mut self, patch: EnvironmentPatch) {
        merge(&mut self.water_access, patch.water_access);
        merge(&mut self.water_source, patch.water_source);
        merge(&mut self.current_diet, patch.current_diet);
        merge(&mut self.hay_access, patch.hay_access);
        merge_choice(&mut self.hay_quality, patch.hay_quality);
        merge(&mut self.paddock_access, patch.paddock_access);
        merge(&mut self.pasture_access, patch.pasture_access);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EnvironmentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_access: Option<WaterAccess>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_source: Option<WaterSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_diet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hay_access: Option<HayAccess>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hay_quality: Option<HayQuality>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paddock_access: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pasture_access: Option<bool>,
}

/// A partial update targeting exactly one sub-record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "record", content = "fields", rename_all = "snake_case")]
pub enum ProfileUpdate {
    Owner(OwnerPatch),
    Horse(HorsePatch),
    PhysicalCondition(PhysicalConditionPatch),
    Activity(ActivityPatch),
    Health(HealthPatch),
    Environment(EnvironmentPatch),
}

impl ProfileUpdate {
    /// Area whose completion predicate depends on this sub-record.
    #[must_use]
    pub const fn area(&self) -> Area {
        match self {
            Self::Owner(_) | Self::Horse(_) => Area::Office,
            Self::PhysicalCondition(_) => Area::Examination,
            Self::Activity(_) => Area::Training,
            Self::Health(_) => Area::Veterinary,
            Self::Environment(_) => Area::Feed,
        }
    }

    /// Number of fields the patch sets; each one scores as an answer.
    #[must_use]
    pub fn answered_fields(&self) -> u32 {
        match self {
            Self::Owner(p) => count_set(&[p.name.is_some(), p.phone.is_some(), p.email.is_some()]),
            Self::Horse(p) => count_set(&[
                p.name.is_some(),
                p.height.is_some(),
                p.breed.is_some(),
                p.age.is_some(),
                p.weight.is_some(),
                p.location.is_some(),
                p.gender.is_some(),
            ]),
            Self::PhysicalCondition(p) => count_set(&[
                p.bcs_score.is_some(),
                p.muscling.is_some(),
                p.temperament.is_some(),
                p.coat_change.is_some(),
                p.coat_quality.is_some(),
                p.hoof_condition.is_some(),
                p.hoof_growth.is_some(),
            ]),
            Self::Activity(p) => count_set(&[
                p.activity_type.is_some(),
                p.training_days_per_week.is_some(),
                p.hours_per_day.is_some(),
                p.competition_participation.is_some(),
                p.competition_frequency.is_some(),
                p.carousel_training.is_some(),
                p.carousel_details.is_some(),
            ]),
            Self::Health(p) => count_set(&[
                p.last_bloodwork.is_some(),
                p.deworming_count.is_some(),
                p.last_dental_check.is_some(),
                p.existing_conditions.is_some(),
            ]),
            Self::Environment(p) => count_set(&[
                p.water_access.is_some(),
                p.water_source.is_some(),
                p.current_diet.is_some(),
                p.hay_access.is_some(),
                p.hay_quality.is_some(),
                p.paddock_access.is_some(),
                p.pasture_access.is_some(),
            ]),
        }
    }
}

/// The horse profile: owner, horse and care data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Profile {
    owner: Owner,
    horse: Horse,
    physical_condition: PhysicalCondition,
    activity: Activity,
    health: Health,
    environment: Environment,
}

impl Profile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn owner(&self) -> &Owner {
        &self.owner
    }

    #[must_use]
    pub const fn horse(&self) -> &Horse {
        &self.horse
    }

    #[must_use]
    pub const fn physical_condition(&self) -> &PhysicalCondition {
        &self.physical_condition
    }

    #[must_use]
    pub const fn activity(&self) -> &Activity {
        &self.activity
    }

    #[must_use]
    pub const fn health(&self) -> &Health {
        &self.health
    }

    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Merge a partial update into its sub-record.
    pub fn update(&mut self, update: ProfileUpdate) {
        match update {
            ProfileUpdate::Owner(patch) => self.owner.apply(patch),
            ProfileUpdate::Horse(patch) => self.horse.apply(patch),
            ProfileUpdate::PhysicalCondition(patch) => self.physical_condition.apply(patch),
            ProfileUpdate::Activity(patch) => self.activity.apply(patch),
            ProfileUpdate::Health(patch) => self.health.apply(patch),
            ProfileUpdate::Environment(patch) => self.environment.apply(patch),
        }
    }

    /// Restore every sub-record to its initial value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Completion predicate of the section hosted by `area`.
    ///
    /// The office covers both the owner and the horse records.
    #[must_use]
    pub fn is_section_complete(&self, area: Area) -> bool {
        match area {
            Area::Office => self.owner.is_complete() && self.horse.is_complete(),
            Area::Examination => self.physical_condition.is_complete(),
            Area::Feed => self.environment.is_complete(),
            Area::Training => self.activity.is_complete(),
            Area::Veterinary => self.health.is_complete(),
        }
    }
}
