//! Question descriptors for every section.
//!
//! The question lists are static content. Conditional questions carry a
//! visibility predicate over the profile; [`active_questions`] is the pure
//! filter the section cursors navigate.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::area::Area;
use crate::field::{Field, FieldValue};
use crate::profile::Profile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputKind {
    FreeText,
    Numeric,
    SingleSelect,
    MultiSelect,
    Radio,
}

/// Advisory validation metadata. The profile store never enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Validation {
    pub required: bool,
    pub min: Option<u32>,
    pub max: Option<u32>,
}

impl Validation {
    #[must_use]
    pub const fn required() -> Self {
        Self {
            required: true,
            min: None,
            max: None,
        }
    }

    #[must_use]
    pub const fn range(min: u32, max: u32) -> Self {
        Self {
            required: true,
            min: Some(min),
            max: Some(max),
        }
    }

    /// Problems with `value`, in the order the form shows them.
    #[must_use]
    pub fn check(&self, value: &FieldValue) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        if self.required && !value.is_answered() {
            issues.push(ValidationIssue::Missing);
        }
        if let FieldValue::Number(number) = value {
            if let Some(min) = self.min.filter(|min| number < min) {
                issues.push(ValidationIssue::BelowMin { min, value: *number });
            }
            if let Some(max) = self.max.filter(|max| number > max) {
                issues.push(ValidationIssue::AboveMax { max, value: *number });
            }
        }
        issues
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum ValidationIssue {
    Missing,
    BelowMin { min: u32, value: u32 },
    AboveMax { max: u32, value: u32 },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("answer required"),
            Self::BelowMin { min, value } => write!(f, "{value} is below the minimum of {min}"),
            Self::AboveMax { max, value } => write!(f, "{value} is above the maximum of {max}"),
        }
    }
}

/// One question of a section.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    /// Heading of the question group within the section.
    pub group: &'static str,
    pub prompt: &'static str,
    pub tooltip: &'static str,
    pub input: InputKind,
    pub field: Field,
    pub validation: Validation,
    pub visible_when: Option<fn(&Profile) -> bool>,
}

impl Question {
    const fn new(
        group: &'static str,
        prompt: &'static str,
        tooltip: &'static str,
        input: InputKind,
        field: Field,
        validation: Validation,
    ) -> Self {
        Self {
            group,
            prompt,
            tooltip,
            input,
            field,
            validation,
            visible_when: None,
        }
    }

    const fn shown_when(mut self, predicate: fn(&Profile) -> bool) -> Self {
        self.visible_when = Some(predicate);
        self
    }

    #[must_use]
    pub fn is_visible(&self, profile: &Profile) -> bool {
        self.visible_when.is_none_or(|visible| visible(profile))
    }

    /// Option labels for select, multi-select and radio inputs.
    #[must_use]
    pub fn options(&self) -> Vec<&'static str> {
        self.field.options()
    }

    /// Forward navigation is allowed past non-required questions and past
    /// required questions holding an answer.
    ///
    /// A tag list always counts here, even when empty; only the section
    /// completion predicates require at least one tag.
    #[must_use]
    pub fn allows_next(&self, profile: &Profile) -> bool {
        if !self.validation.required {
            return true;
        }
        match profile.value(self.field) {
            FieldValue::Tags(_) => true,
            value => value.is_answered(),
        }
    }
}

const fn competes(profile: &Profile) -> bool {
    profile.activity().competition_participation
}

const fn uses_carousel(profile: &Profile) -> bool {
    profile.activity().carousel_training
}

static OFFICE: [Question; 10] = [
    Question::new(
        "Dane Właściciela",
        "Imię i Nazwisko",
        "Podaj pełne imię i nazwisko właściciela",
        InputKind::FreeText,
        Field::OwnerName,
        Validation::required(),
    ),
    Question::new(
        "Dane Właściciela",
        "Numer Telefonu",
        "Numer telefonu do kontaktu",
        InputKind::FreeText,
        Field::OwnerPhone,
        Validation::required(),
    ),
    Question::new(
        "Dane Właściciela",
        "Adres E-mail",
        "Adres email do kontaktu i przesyłania zaleceń",
        InputKind::FreeText,
        Field::OwnerEmail,
        Validation::required(),
    ),
    Question::new(
        "Dane Konia",
        "Imię Konia",
        "Podaj imię konia",
        InputKind::FreeText,
        Field::HorseName,
        Validation::required(),
    ),
    Question::new(
        "Dane Konia",
        "Wzrost (cm)",
        "Wzrost konia w centymetrach",
        InputKind::Numeric,
        Field::HorseHeight,
        Validation::range(100, 200),
    ),
    Question::new(
        "Dane Konia",
        "Rasa",
        "Podaj rasę konia",
        InputKind::FreeText,
        Field::HorseBreed,
        Validation::required(),
    ),
    Question::new(
        "Dane Konia",
        "Wiek",
        "Wiek konia w latach",
        InputKind::Numeric,
        Field::HorseAge,
        Validation::range(0, 40),
    ),
    Question::new(
        "Dane Konia",
        "Masa Ciała (kg)",
        "Masa ciała konia w kilogramach",
        InputKind::Numeric,
        Field::HorseWeight,
        Validation::range(200, 1000),
    ),
    Question::new(
        "Dane Konia",
        "Województwo",
        "Wybierz województwo, w którym przebywa koń",
        InputKind::SingleSelect,
        Field::HorseLocation,
        Validation::required(),
    ),
    Question::new(
        "Dane Konia",
        "Płeć",
        "Wybierz płeć konia",
        InputKind::SingleSelect,
        Field::HorseGender,
        Validation::required(),
    ),
];

static EXAMINATION: [Question; 7] = [
    Question::new(
        "Ocena Kondycji",
        "Kondycja według skali BCS",
        "Body Condition Score - skala oceny kondycji konia",
        InputKind::SingleSelect,
        Field::BcsScore,
        Validation::required(),
    ),
    Question::new(
        "Ocena Kondycji",
        "Umięśnienie",
        "Ocena rozwoju masy mięśniowej konia",
        InputKind::SingleSelect,
        Field::Muscling,
        Validation::required(),
    ),
    Question::new(
        "Ocena Zachowania",
        "Temperament konia",
        "Charakterystyka zachowania i usposobienia konia",
        InputKind::SingleSelect,
        Field::Temperament,
        Validation::required(),
    ),
    Question::new(
        "Stan Fizyczny",
        "Wymiana okrywy włosowej",
        "Ocena procesu wymiany sierści",
        InputKind::SingleSelect,
        Field::CoatChange,
        Validation::required(),
    ),
    Question::new(
        "Stan Fizyczny",
        "Jakość sierści i włosa",
        "Stan okrywy włosowej jest wskaźnikiem ogólnego zdrowia",
        InputKind::MultiSelect,
        Field::CoatQuality,
        Validation::required(),
    ),
    Question::new(
        "Stan Fizyczny",
        "Jakość rogu kopytowego",
        "Stan kopyt jest kluczowy dla zdrowia i użytkowania konia",
        InputKind::MultiSelect,
        Field::HoofCondition,
        Validation::required(),
    ),
    Question::new(
        "Stan Fizyczny",
        "Tempo wzrostu rogu kopytowego",
        "Ocena tempa wzrostu rogu kopytowego",
        InputKind::SingleSelect,
        Field::HoofGrowth,
        Validation::required(),
    ),
];

static FEED: [Question; 7] = [
    Question::new(
        "Dostęp do Wody",
        "Dostęp do wody",
        "Odpowiedni dostęp do wody jest kluczowy dla zdrowia konia",
        InputKind::Radio,
        Field::WaterAccess,
        Validation::required(),
    ),
    Question::new(
        "Dostęp do Wody",
        "Źródło wody",
        "Rodzaj źródła wody może wpływać na jej jakość i dostępność",
        InputKind::Radio,
        Field::WaterSource,
        Validation::required(),
    ),
    Question::new(
        "Żywienie",
        "Obecna dieta konia (rodzaje stosowanych pasz i suplementów)",
        "Opisz szczegółowo wszystkie składniki diety",
        InputKind::FreeText,
        Field::CurrentDiet,
        Validation::required(),
    ),
    Question::new(
        "Siano",
        "Dostęp do siana",
        "Siano powinno stanowić podstawę diety konia",
        InputKind::Radio,
        Field::HayAccess,
        Validation::required(),
    ),
    Question::new(
        "Siano",
        "Jakość siana",
        "Jakość siana ma kluczowe znaczenie dla zdrowia układu pokarmowego",
        InputKind::SingleSelect,
        Field::HayQuality,
        Validation::required(),
    ),
    Question::new(
        "Ruch",
        "Czy koń jest padokowany?",
        "Regularne padokowanie wspiera zdrowie fizyczne i psychiczne konia",
        InputKind::Radio,
        Field::PaddockAccess,
        Validation::required(),
    ),
    Question::new(
        "Pastwisko",
        "Czy koń ma dostęp do pastwiska w sezonie?",
        "Pastwisko dostarcza naturalnego ruchu i świeżej paszy",
        InputKind::Radio,
        Field::PastureAccess,
        Validation::required(),
    ),
];

static TRAINING: [Question; 7] = [
    Question::new(
        "Użytkowanie",
        "Sposób użytkowania",
        "Wybierz główny rodzaj aktywności konia",
        InputKind::SingleSelect,
        Field::ActivityType,
        Validation::required(),
    ),
    Question::new(
        "Harmonogram",
        "Ilość dni treningowych w tygodniu",
        "Podaj liczbę dni w tygodniu, w których koń jest trenowany",
        InputKind::Numeric,
        Field::TrainingDaysPerWeek,
        Validation::range(0, 7),
    ),
    Question::new(
        "Harmonogram",
        "Ilość godzin pracy w ciągu dnia",
        "Średnia liczba godzin treningu w dniu treningowym",
        InputKind::Numeric,
        Field::HoursPerDay,
        Validation::range(0, 8),
    ),
    Question::new(
        "Zawody",
        "Czy koń startuje w zawodach?",
        "Informacja o udziale w zawodach",
        InputKind::Radio,
        Field::CompetitionParticipation,
        Validation::required(),
    ),
    Question::new(
        "Zawody",
        "Z jaką częstotliwością startuje w zawodach?",
        "Opisz częstotliwość startów w zawodach",
        InputKind::FreeText,
        Field::CompetitionFrequency,
        Validation::required(),
    )
    .shown_when(competes),
    Question::new(
        "Karuzela",
        "Czy stajnia dysponuje karuzelą?",
        "Informacja o dostępności karuzeli treningowej",
        InputKind::Radio,
        Field::CarouselTraining,
        Validation::required(),
    ),
    Question::new(
        "Karuzela",
        "Szczegóły treningu na karuzeli",
        "Opisz jak często i w jaki sposób koń korzysta z karuzeli",
        InputKind::FreeText,
        Field::CarouselDetails,
        Validation::required(),
    )
    .shown_when(uses_carousel),
];

static VETERINARY: [Question; 4] = [
    Question::new(
        "Badania",
        "Czy w ciągu ostatniego roku wykonywane było badanie krwi, analiza włosa, rogu kopytowego i kału?",
        "Regularne badania pomagają w monitorowaniu zdrowia konia",
        InputKind::Radio,
        Field::LastBloodwork,
        Validation::required(),
    ),
    Question::new(
        "Profilaktyka",
        "Liczba odrobaczeń w ciągu roku",
        "Standardowo zaleca się 2-4 odrobaczenia rocznie",
        InputKind::Numeric,
        Field::DewormingCount,
        Validation::range(0, 12),
    ),
    Question::new(
        "Profilaktyka",
        "Termin ostatniego tarnikowania zębów",
        "Regularne kontrole stomatologiczne są kluczowe dla zdrowia konia",
        InputKind::FreeText,
        Field::LastDentalCheck,
        Validation::required(),
    ),
    Question::new(
        "Stan Zdrowia",
        "Występujące problemy zdrowotne",
        "Zaznacz wszystkie występujące problemy zdrowotne",
        InputKind::MultiSelect,
        Field::ExistingConditions,
        Validation::required(),
    ),
];

/// Full question list of `area`, conditional questions included.
#[must_use]
pub fn questions(area: Area) -> &'static [Question] {
    match area {
        Area::Office => &OFFICE,
        Area::Examination => &EXAMINATION,
        Area::Feed => &FEED,
        Area::Training => &TRAINING,
        Area::Veterinary => &VETERINARY,
    }
}

/// Questions of `area` currently shown for `profile`, in order.
#[must_use]
pub fn active_questions(area: Area, profile: &Profile) -> Vec<&'static Question> {
    questions(area)
        .iter()
        .filter(|question| question.is_visible(profile))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldKind;
    use crate::profile::{ActivityPatch, ProfileUpdate};

    fn fields(list: &[&Question]) -> Vec<Field> {
        list.iter().map(|q| q.field).collect()
    }

    #[test]
    fn full_lists_match_step_budget() {
        for area in Area::ALL {
            assert_eq!(
                questions(area).len(),
                area.question_count() as usize,
                "{area}"
            );
            for question in questions(area) {
                assert_eq!(question.field.area(), area, "{}", question.field);
            }
        }
    }

    #[test]
    fn input_kinds_agree_with_field_kinds() {
        for area in Area::ALL {
            for question in questions(area) {
                let ok = match question.input {
                    InputKind::FreeText => question.field.kind() == FieldKind::Text,
                    InputKind::Numeric => question.field.kind() == FieldKind::Number,
                    InputKind::SingleSelect => question.field.kind() == FieldKind::Choice,
                    InputKind::MultiSelect => question.field.kind() == FieldKind::Tags,
                    InputKind::Radio => matches!(
                        question.field.kind(),
                        FieldKind::Choice | FieldKind::Flag
                    ),
                };
                assert!(ok, "{} uses {:?}", question.field, question.input);
                if !matches!(question.input, InputKind::FreeText | InputKind::Numeric) {
                    assert!(!question.options().is_empty(), "{}", question.field);
                }
            }
        }
    }

    #[test]
    fn training_hides_follow_ups_by_default() {
        let profile = Profile::new();
        let active = active_questions(Area::Training, &profile);
        assert_eq!(active.len(), 5);
        assert!(!fields(&active).contains(&Field::CompetitionFrequency));
        assert!(!fields(&active).contains(&Field::CarouselDetails));
    }

    #[test]
    fn competition_toggle_shows_and_hides_frequency() {
        let mut profile = Profile::new();
        profile.update(ProfileUpdate::Activity(ActivityPatch {
            competition_participation: Some(true),
            ..ActivityPatch::default()
        }));
        let active = active_questions(Area::Training, &profile);
        assert_eq!(
            fields(&active),
            vec![
                Field::ActivityType,
                Field::TrainingDaysPerWeek,
                Field::HoursPerDay,
                Field::CompetitionParticipation,
                Field::CompetitionFrequency,
                Field::CarouselTraining,
            ]
        );

        profile.update(ProfileUpdate::Activity(ActivityPatch {
            competition_participation: Some(false),
            ..ActivityPatch::default()
        }));
        let active = active_questions(Area::Training, &profile);
        assert!(!fields(&active).contains(&Field::CompetitionFrequency));
    }

    #[test]
    fn other_sections_have_no_conditional_questions() {
        let profile = Profile::new();
        for area in [Area::Office, Area::Examination, Area::Feed, Area::Veterinary] {
            assert_eq!(
                active_questions(area, &profile).len(),
                questions(area).len()
            );
        }
    }

    #[test]
    fn validation_reports_range_and_missing() {
        let rule = Validation::range(100, 200);
        assert_eq!(rule.check(&FieldValue::Number(0)), vec![
            ValidationIssue::Missing,
            ValidationIssue::BelowMin { min: 100, value: 0 }
        ]);
        assert_eq!(
            rule.check(&FieldValue::Number(250)),
            vec![ValidationIssue::AboveMax { max: 200, value: 250 }]
        );
        assert!(rule.check(&FieldValue::Number(160)).is_empty());
        assert!(Validation::default().check(&FieldValue::text("")).is_empty());
    }

    #[test]
    fn next_gate_uses_current_answer() {
        let mut profile = Profile::new();
        let name = &questions(Area::Office)[0];
        assert!(!name.allows_next(&profile));
        profile.update(
            Field::OwnerName
                .to_update(FieldValue::text("Anna"))
                .unwrap(),
        );
        assert!(name.allows_next(&profile));

        let gender = &questions(Area::Office)[9];
        assert!(gender.allows_next(&Profile::new()), "gender has a default");
    }

    #[test]
    fn empty_tag_lists_do_not_block_next() {
        let profile = Profile::new();
        for question in questions(Area::Examination)
            .iter()
            .chain(questions(Area::Veterinary))
            .filter(|q| q.input == InputKind::MultiSelect)
        {
            assert!(question.allows_next(&profile), "{}", question.field);
            assert_eq!(
                question.validation.check(&profile.value(question.field)),
                vec![ValidationIssue::Missing]
            );
        }
        assert!(!profile.is_section_complete(Area::Examination));
    }
}
