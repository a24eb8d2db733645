//! Field bindings between questions and the profile.
//!
//! A [`Field`] names one profile value. Questions read it through
//! [`Profile::value`] and write it by converting a loosely-typed
//! [`FieldValue`] into a single-field [`ProfileUpdate`].
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::area::Area;
use crate::error::AnswerError;
use crate::options::{
    ActivityType, BcsGrade, CoatChange, CoatQuality, Gender, HayAccess, HayQuality,
    HealthCondition, HoofCondition, HoofGrowth, Muscling, Region, Temperament, WaterAccess,
    WaterSource, YesNo, parse_labels,
};
use crate::profile::{
    ActivityPatch, EnvironmentPatch, HealthPatch, HorsePatch, OwnerPatch, PhysicalConditionPatch,
    Profile, ProfileUpdate,
};

/// Shape of a field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Choice,
    Flag,
    Tags,
}

impl FieldKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Choice => "choice",
            Self::Flag => "flag",
            Self::Tags => "tags",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field value as exchanged with the presentation layer.
///
/// Single choices travel as their option label (empty when unanswered), tag
/// lists as lists of labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum FieldValue {
    Text(String),
    Number(u32),
    Flag(bool),
    Tags(Vec<String>),
}

impl FieldValue {
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    #[must_use]
    pub fn tags<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Tags(labels.into_iter().map(Into::into).collect())
    }

    /// Shape of the value; labels report as text.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Number(_) => FieldKind::Number,
            Self::Flag(_) => FieldKind::Flag,
            Self::Tags(_) => FieldKind::Tags,
        }
    }

    /// Whether the value counts as filled in.
    ///
    /// Flags always pass: a yes/no radio always shows one of its answers.
    #[must_use]
    pub fn is_answered(&self) -> bool {
        match self {
            Self::Text(text) => !text.is_empty(),
            Self::Number(number) => *number != 0,
            Self::Flag(_) => true,
            Self::Tags(tags) => !tags.is_empty(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
            Self::Flag(flag) => f.write_str(YesNo::from(*flag).label()),
            Self::Tags(tags) => f.write_str(&tags.join(", ")),
        }
    }
}

fn label_of<T: fmt::Display>(choice: Option<&T>) -> FieldValue {
    FieldValue::Text(choice.map(ToString::to_string).unwrap_or_default())
}

fn labels_of<T: fmt::Display>(choices: &[T]) -> FieldValue {
    FieldValue::Tags(choices.iter().map(ToString::to_string).collect())
}

/// Every profile value a question can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    OwnerName,
    OwnerPhone,
    OwnerEmail,
    HorseName,
    HorseHeight,
    HorseBreed,
    HorseAge,
    HorseWeight,
    HorseLocation,
    HorseGender,
    BcsScore,
    Muscling,
    Temperament,
    CoatChange,
    CoatQuality,
    HoofCondition,
    HoofGrowth,
    ActivityType,
    TrainingDaysPerWeek,
    HoursPerDay,
    CompetitionParticipation,
    CompetitionFrequency,
    CarouselTraining,
    CarouselDetails,
    LastBloodwork,
    DewormingCount,
    LastDentalCheck,
    ExistingConditions,
    WaterAccess,
    WaterSource,
    CurrentDiet,
    HayAccess,
    HayQuality,
    PaddockAccess,
    PastureAccess,
}

impl Field {
    pub const ALL: [Self; 35] = [
        Self::OwnerName,
        Self::OwnerPhone,
        Self::OwnerEmail,
        Self::HorseName,
        Self::HorseHeight,
        Self::HorseBreed,
        Self::HorseAge,
        Self::HorseWeight,
        Self::HorseLocation,
        Self::HorseGender,
        Self::BcsScore,
        Self::Muscling,
        Self::Temperament,
        Self::CoatChange,
        Self::CoatQuality,
        Self::HoofCondition,
        Self::HoofGrowth,
        Self::ActivityType,
        Self::TrainingDaysPerWeek,
        Self::HoursPerDay,
        Self::CompetitionParticipation,
        Self::CompetitionFrequency,
        Self::CarouselTraining,
        Self::CarouselDetails,
        Self::LastBloodwork,
        Self::DewormingCount,
        Self::LastDentalCheck,
        Self::ExistingConditions,
        Self::WaterAccess,
        Self::WaterSource,
        Self::CurrentDiet,
        Self::HayAccess,
        Self::HayQuality,
        Self::PaddockAccess,
        Self::PastureAccess,
    ];

    /// Dotted `record.field` key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::OwnerName => "owner.name",
            Self::OwnerPhone => "owner.phone",
            Self::OwnerEmail => "owner.email",
            Self::HorseName => "horse.name",
            Self::HorseHeight => "horse.height",
            Self::HorseBreed => "horse.breed",
            Self::HorseAge => "horse.age",
            Self::HorseWeight => "horse.weight",
            Self::HorseLocation => "horse.location",
            Self::HorseGender => "horse.gender",
            Self::BcsScore => "physical_condition.bcs_score",
            Self::Muscling => "physical_condition.muscling",
            Self::Temperament => "physical_condition.temperament",
            Self::CoatChange => "physical_condition.coat_change",
            Self::CoatQuality => "physical_condition.coat_quality",
            Self::HoofCondition => "physical_condition.hoof_condition",
            Self::HoofGrowth => "physical_condition.hoof_growth",
            Self::ActivityType => "activity.activity_type",
            Self::TrainingDaysPerWeek => "activity.training_days_per_week",
            Self::HoursPerDay => "activity.hours_per_day",
            Self::CompetitionParticipation => "activity.competition_participation",
            Self::CompetitionFrequency => "activity.competition_frequency",
            Self::CarouselTraining => "activity.carousel_training",
            Self::CarouselDetails => "activity.carousel_details",
            Self::LastBloodwork => "health.last_bloodwork",
            Self::DewormingCount => "health.deworming_count",
            Self::LastDentalCheck => "health.last_dental_check",
            Self::ExistingConditions => "health.existing_conditions",
            Self::WaterAccess => "environment.water_access",
            Self::WaterSource => "environment.water_source",
            Self::CurrentDiet => "environment.current_diet",
            Self::HayAccess => "environment.hay_access",
            Self::HayQuality => "environment.hay_quality",
            Self::PaddockAccess => "environment.paddock_access",
            Self::PastureAccess => "environment.pasture_access",
        }
    }

    #[must_use]
    pub const fn area(self) -> Area {
        match self {
            Self::OwnerName
            | Self::OwnerPhone
            | Self::OwnerEmail
            | Self::HorseName
            | Self::HorseHeight
            | Self::HorseBreed
            | Self::HorseAge
            | Self::HorseWeight
            | Self::HorseLocation
            | Self::HorseGender => Area::Office,
            Self::BcsScore
            | Self::Muscling
            | Self::Temperament
            | Self::CoatChange
            | Self::CoatQuality
            | Self::HoofCondition
            | Self::HoofGrowth => Area::Examination,
            Self::ActivityType
            | Self::TrainingDaysPerWeek
            | Self::HoursPerDay
            | Self::CompetitionParticipation
            | Self::CompetitionFrequency
            | Self::CarouselTraining
            | Self::CarouselDetails => Area::Training,
            Self::LastBloodwork
            | Self::DewormingCount
            | Self::LastDentalCheck
            | Self::ExistingConditions => Area::Veterinary,
            Self::WaterAccess
            | Self::WaterSource
            | Self::CurrentDiet
            | Self::HayAccess
            | Self::HayQuality
            | Self::PaddockAccess
            | Self::PastureAccess => Area::Feed,
        }
    }

    #[must_use]
    pub const fn kind(self) -> FieldKind {
        match self {
            Self::OwnerName
            | Self::OwnerPhone
            | Self::OwnerEmail
            | Self::HorseName
            | Self::HorseBreed
            | Self::CompetitionFrequency
            | Self::CarouselDetails
            | Self::LastDentalCheck
            | Self::CurrentDiet => FieldKind::Text,
            Self::HorseHeight
            | Self::HorseAge
            | Self::HorseWeight
            | Self::TrainingDaysPerWeek
            | Self::HoursPerDay
            | Self::DewormingCount => FieldKind::Number,
            Self::HorseLocation
            | Self::HorseGender
            | Self::BcsScore
            | Self::Muscling
            | Self::Temperament
            | Self::CoatChange
            | Self::HoofGrowth
            | Self::ActivityType
            | Self::LastBloodwork
            | Self::WaterAccess
            | Self::WaterSource
            | Self::HayAccess
            | Self::HayQuality => FieldKind::Choice,
            Self::CompetitionParticipation
            | Self::CarouselTraining
            | Self::PaddockAccess
            | Self::PastureAccess => FieldKind::Flag,
            Self::CoatQuality | Self::HoofCondition | Self::ExistingConditions => FieldKind::Tags,
        }
    }

    /// Option labels offered for choice, tag and flag fields; empty otherwise.
    #[must_use]
    pub fn options(self) -> Vec<&'static str> {
        match self {
            Self::HorseLocation => Region::labels(),
            Self::HorseGender => Gender::labels(),
            Self::BcsScore => BcsGrade::labels(),
            Self::Muscling => Muscling::labels(),
            Self::Temperament => Temperament::labels(),
            Self::CoatChange => CoatChange::labels(),
            Self::CoatQuality => CoatQuality::labels(),
            Self::HoofCondition => HoofCondition::labels(),
            Self::HoofGrowth => HoofGrowth::labels(),
            Self::ActivityType => ActivityType::labels(),
            Self::ExistingConditions => HealthCondition::labels(),
            Self::WaterAccess => WaterAccess::labels(),
            Self::WaterSource => WaterSource::labels(),
            Self::HayAccess => HayAccess::labels(),
            Self::HayQuality => HayQuality::labels(),
            Self::LastBloodwork
            | Self::CompetitionParticipation
            | Self::CarouselTraining
            | Self::PaddockAccess
            | Self::PastureAccess => YesNo::labels(),
            _ => Vec::new(),
        }
    }

    fn text(self, value: FieldValue) -> Result<String, AnswerError> {
        match value {
            FieldValue::Text(text) => Ok(text),
            other => Err(self.mismatch(&other)),
        }
    }

    fn number(self, value: FieldValue) -> Result<u32, AnswerError> {
        match value {
            FieldValue::Number(number) => Ok(number),
            other => Err(self.mismatch(&other)),
        }
    }

    fn choice<T: FromStr>(self, value: FieldValue) -> Result<T, AnswerError> {
        let label = self.text(value)?;
        label
            .parse::<T>()
            .map_err(|_| AnswerError::UnknownOption { field: self, value: label })
    }

    /// Flags accept either a boolean or a yes/no radio label.
    fn flag(self, value: FieldValue) -> Result<bool, AnswerError> {
        match value {
            FieldValue::Flag(flag) => Ok(flag),
            FieldValue::Text(label) => label
                .parse::<YesNo>()
                .map(bool::from)
                .map_err(|()| AnswerError::UnknownOption { field: self, value: label }),
            other => Err(self.mismatch(&other)),
        }
    }

    fn tags<T: FromStr>(self, value: FieldValue) -> Result<Vec<T>, AnswerError> {
        match value {
            FieldValue::Tags(labels) => parse_labels(&labels)
                .map_err(|label| AnswerError::UnknownOption { field: self, value: label }),
            other => Err(self.mismatch(&other)),
        }
    }

    fn mismatch(self, value: &FieldValue) -> AnswerError {
        AnswerError::KindMismatch {
            field: self,
            expected: self.kind(),
            got: value.kind(),
        }
    }

    /// Convert an answer into a single-field update of this field's record.
    ///
    /// # Errors
    ///
    /// Returns [`AnswerError::KindMismatch`] when the value has the wrong shape
    /// and [`AnswerError::UnknownOption`] when a label is not in the option set.
    #[allow(clippy::too_many_lines)]
    pub fn to_update(self, value: FieldValue) -> Result<ProfileUpdate, AnswerError> {
        let update = match self {
            Self::OwnerName => ProfileUpdate::Owner(OwnerPatch {
                name: Some(self.text(value)?),
                ..OwnerPatch::default()
            }),
            Self::OwnerPhone => ProfileUpdate::Owner(OwnerPatch {
                phone: Some(self.text(value)?),
                ..OwnerPatch::default()
            }),
            Self::OwnerEmail => ProfileUpdate::Owner(OwnerPatch {
                email: Some(self.text(value)?),
                ..OwnerPatch::default()
            }),
            Self::HorseName => ProfileUpdate::Horse(HorsePatch {
                name: Some(self.text(value)?),
                ..HorsePatch::default()
            }),
            Self::HorseHeight => ProfileUpdate::Horse(HorsePatch {
                height: Some(self.number(value)?),
                ..HorsePatch::default()
            }),
            Self::HorseBreed => ProfileUpdate::Horse(HorsePatch {
                breed: Some(self.text(value)?),
                ..HorsePatch::default()
            }),
            Self::HorseAge => ProfileUpdate::Horse(HorsePatch {
                age: Some(self.number(value)?),
                ..HorsePatch::default()
            }),
            Self::HorseWeight => ProfileUpdate::Horse(HorsePatch {
                weight: Some(self.number(value)?),
                ..HorsePatch::default()
            }),
            Self::HorseLocation => ProfileUpdate::Horse(HorsePatch {
                location: Some(self.choice(value)?),
                ..HorsePatch::default()
            }),
            Self::HorseGender => ProfileUpdate::Horse(HorsePatch {
                gender: Some(self.choice(value)?),
                ..HorsePatch::default()
            }),
            Self::BcsScore => ProfileUpdate::PhysicalCondition(PhysicalConditionPatch {
                bcs_score: Some(self.choice(value)?),
                ..PhysicalConditionPatch::default()
            }),
            Self::Muscling => ProfileUpdate::PhysicalCondition(PhysicalConditionPatch {
                muscling: Some(self.choice(value)?),
                ..PhysicalConditionPatch::default()
            }),
            Self::Temperament => ProfileUpdate::PhysicalCondition(PhysicalConditionPatch {
                temperament: Some(self.choice(value)?),
                ..PhysicalConditionPatch::default()
            }),
            Self::CoatChange => ProfileUpdate::PhysicalCondition(PhysicalConditionPatch {
                coat_change: Some(self.choice(value)?),
                ..PhysicalConditionPatch::default()
            }),
            Self::CoatQuality => ProfileUpdate::PhysicalCondition(PhysicalConditionPatch {
                coat_quality: Some(self.tags(value)?),
                ..PhysicalConditionPatch::default()
            }),
            Self::HoofCondition => ProfileUpdate::PhysicalCondition(PhysicalConditionPatch {
                hoof_condition: Some(self.tags(value)?),
                ..PhysicalConditionPatch::default()
            }),
            Self::HoofGrowth => ProfileUpdate::PhysicalCondition(PhysicalConditionPatch {
                hoof_growth: Some(self.choice(value)?),
                ..PhysicalConditionPatch::default()
            }),
            Self::ActivityType => ProfileUpdate::Activity(ActivityPatch {
                activity_type: Some(self.choice(value)?),
                ..ActivityPatch::default()
            }),
            Self::TrainingDaysPerWeek => ProfileUpdate::Activity(ActivityPatch {
                training_days_per_week: Some(self.number(value)?),
                ..ActivityPatch::default()
            }),
            Self::HoursPerDay => ProfileUpdate::Activity(ActivityPatch {
                hours_per_day: Some(self.number(value)?),
                ..ActivityPatch::default()
            }),
            Self::CompetitionParticipation => ProfileUpdate::Activity(ActivityPatch {
                competition_participation: Some(self.flag(value)?),
                ..ActivityPatch::default()
            }),
            Self::CompetitionFrequency => ProfileUpdate::Activity(ActivityPatch {
                competition_frequency: Some(self.text(value)?),
                ..ActivityPatch::default()
            }),
            Self::CarouselTraining => ProfileUpdate::Activity(ActivityPatch {
                carousel_training: Some(self.flag(value)?),
                ..ActivityPatch::default()
            }),
            Self::CarouselDetails => ProfileUpdate::Activity(ActivityPatch {
                carousel_details: Some(self.text(value)?),
                ..ActivityPatch::default()
            }),
            Self::LastBloodwork => ProfileUpdate::Health(HealthPatch {
                last_bloodwork: Some(self.choice(value)?),
                ..HealthPatch::default()
            }),
            Self::DewormingCount => ProfileUpdate::Health(HealthPatch {
                deworming_count: Some(self.number(value)?),
                ..HealthPatch::default()
            }),
            Self::LastDentalCheck => ProfileUpdate::Health(HealthPatch {
                last_dental_check: Some(self.text(value)?),
                ..HealthPatch::default()
            }),
            Self::ExistingConditions => ProfileUpdate::Health(HealthPatch {
                existing_conditions: Some(self.tags(value)?),
                ..HealthPatch::default()
            }),
            Self::WaterAccess => ProfileUpdate::Environment(EnvironmentPatch {
                water_access: Some(self.choice(value)?),
                ..EnvironmentPatch::default()
            }),
            Self::WaterSource => ProfileUpdate::Environment(EnvironmentPatch {
                water_source: Some(self.choice(value)?),
                ..EnvironmentPatch::default()
            }),
            Self::CurrentDiet => ProfileUpdate::Environment(EnvironmentPatch {
                current_diet: Some(self.text(value)?),
                ..EnvironmentPatch::default()
            }),
            Self::HayAccess => ProfileUpdate::Environment(EnvironmentPatch {
                hay_access: Some(self.choice(value)?),
                ..EnvironmentPatch::default()
            }),
            Self::HayQuality => ProfileUpdate::Environment(EnvironmentPatch {
                hay_quality: Some(self.choice(value)?),
                ..EnvironmentPatch::default()
            }),
            Self::PaddockAccess => ProfileUpdate::Environment(EnvironmentPatch {
                paddock_access: Some(self.flag(value)?),
                ..EnvironmentPatch::default()
            }),
            Self::PastureAccess => ProfileUpdate::Environment(EnvironmentPatch {
                pasture_access: Some(self.flag(value)?),
                ..EnvironmentPatch::default()
            }),
        };
        Ok(update)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Profile {
    /// Current value of `field`, as the presentation layer displays it.
    #[must_use]
    pub fn value(&self, field: Field) -> FieldValue {
        let owner = self.owner();
        let horse = self.horse();
        let physical = self.physical_condition();
        let activity = self.activity();
        let health = self.health();
        let environment = self.environment();
        match field {
            Field::OwnerName => FieldValue::text(&owner.name),
            Field::OwnerPhone => FieldValue::text(&owner.phone),
            Field::OwnerEmail => FieldValue::text(&owner.email),
            Field::HorseName => FieldValue::text(&horse.name),
            Field::HorseHeight => FieldValue::Number(horse.height),
            Field::HorseBreed => FieldValue::text(&horse.breed),
            Field::HorseAge => FieldValue::Number(horse.age),
            Field::HorseWeight => FieldValue::Number(horse.weight),
            Field::HorseLocation => label_of(horse.location.as_ref()),
            Field::HorseGender => label_of(Some(&horse.gender)),
            Field::BcsScore => label_of(physical.bcs_score.as_ref()),
            Field::Muscling => label_of(Some(&physical.muscling)),
            Field::Temperament => label_of(physical.temperament.as_ref()),
            Field::CoatChange => label_of(Some(&physical.coat_change)),
            Field::CoatQuality => labels_of(&physical.coat_quality),
            Field::HoofCondition => labels_of(&physical.hoof_condition),
            Field::HoofGrowth => label_of(Some(&physical.hoof_growth)),
            Field::ActivityType => label_of(activity.activity_type.as_ref()),
            Field::TrainingDaysPerWeek => FieldValue::Number(activity.training_days_per_week),
            Field::HoursPerDay => FieldValue::Number(activity.hours_per_day),
            Field::CompetitionParticipation => FieldValue::Flag(activity.competition_participation),
            Field::CompetitionFrequency => FieldValue::text(&activity.competition_frequency),
            Field::CarouselTraining => FieldValue::Flag(activity.carousel_training),
            Field::CarouselDetails => FieldValue::text(&activity.carousel_details),
            Field::LastBloodwork => label_of(health.last_bloodwork.as_ref()),
            Field::DewormingCount => FieldValue::Number(health.deworming_count),
            Field::LastDentalCheck => FieldValue::text(&health.last_dental_check),
            Field::ExistingConditions => labels_of(&health.existing_conditions),
            Field::WaterAccess => label_of(Some(&environment.water_access)),
            Field::WaterSource => label_of(Some(&environment.water_source)),
            Field::CurrentDiet => FieldValue::text(&environment.current_diet),
            Field::HayAccess => label_of(Some(&environment.hay_access)),
            Field::HayQuality => label_of(environment.hay_quality.as_ref()),
            Field::PaddockAccess => FieldValue::Flag(environment.paddock_access),
            Field::PastureAccess => FieldValue::Flag(environment.pasture_access),
        }
    }
}
