//! Option sets offered by the questionnaire.
//!
//! Every enumerated profile value is a closed set of labelled choices. The
//! label is the exact text shown to (and sent back by) the presentation layer;
//! the variant name is the stable serialized identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declares a closed option set with its display labels.
///
/// Generates `ALL`, `label`, `labels`, `Display` (label) and `FromStr`
/// (exact label match).
macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            #[must_use]
            pub fn labels() -> Vec<&'static str> {
                Self::ALL.iter().map(|choice| choice.label()).collect()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|choice| choice.label() == s)
                    .ok_or(())
            }
        }
    };
}

choice_enum! {
    /// Voivodeship the horse is kept in.
    Region {
        LowerSilesian => "Dolnośląskie",
        KuyavianPomeranian => "Kujawsko-pomorskie",
        Lublin => "Lubelskie",
        Lubusz => "Lubuskie",
        Lodz => "Łódzkie",
        LesserPoland => "Małopolskie",
        Masovian => "Mazowieckie",
        Opole => "Opolskie",
        Subcarpathian => "Podkarpackie",
        Podlaskie => "Podlaskie",
        Pomeranian => "Pomorskie",
        Silesian => "Śląskie",
        HolyCross => "Świętokrzyskie",
        WarmianMasurian => "Warmińsko-mazurskie",
        GreaterPoland => "Wielkopolskie",
        WestPomeranian => "Zachodniopomorskie",
    }
}

choice_enum! {
    #[derive(Default)]
    Gender {
        #[default]
        Gelding => "walach",
        Mare => "klacz",
        Stallion => "ogier",
    }
}

choice_enum! {
    /// Body condition score grades, ordered from thinnest to heaviest.
    BcsGrade {
        ExtremelyThin => "ekstremalnie chudy",
        VeryThin => "bardzo chudy",
        Thin => "chudy",
        SlightlyUnderweight => "lekka niedowaga",
        Normal => "normalna kondycja",
        SlightlyOverweight => "lekka nadwaga",
        Obese => "otyłość",
        ExtremelyObese => "ekstremalna otyłość",
    }
}

impl BcsGrade {
    /// Ordinal position on the 0-7 scale.
    #[must_use]
    pub fn ordinal(self) -> u8 {
        Self::ALL
            .iter()
            .position(|grade| *grade == self)
            .and_then(|idx| u8::try_from(idx).ok())
            .unwrap_or(0)
    }

    #[must_use]
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(usize::from(ordinal)).copied()
    }
}

choice_enum! {
    #[derive(Default)]
    Muscling {
        VeryPoor => "bardzo słabo umięśniony",
        Poor => "słabo umięśniony",
        #[default]
        Good => "dobrze umięśniony",
        VeryGood => "bardzo dobrze umięśniony",
    }
}

choice_enum! {
    Temperament {
        Phlegmatic => "flegmatyczny / niechętny do ruchu",
        Calm => "spokojny",
        Sensitive => "wrażliwy",
        Balanced => "zrównoważony",
        Energetic => "energiczny",
        Nervous => "nerwowy",
        Skittish => "płochliwy",
        Hyperactive => "nadpobudliwy",
    }
}

choice_enum! {
    /// Course of the seasonal coat change.
    #[derive(Default)]
    CoatChange {
        #[default]
        Normal => "Przebieg prawidłowy",
        Problematic => "Przebieg problematyczny",
    }
}

choice_enum! {
    CoatQuality {
        Glossy => "prawidłowa / błyszcząca",
        Dull => "matowa",
        Brittle => "krucha",
        TooLong => "zbyt długa",
        Curly => "skręcająca się",
        Shedding => "wypadająca",
    }
}

choice_enum! {
    HoofCondition {
        Healthy => "prawidłowy/sprężysty",
        Fragile => "kruchy",
        Brittle => "łamliwy",
        GrowthRings => "obrączki kopytowe",
        FrogInfection => "infekcje strzałki",
        WhiteLineDisease => "choroba linii białej",
    }
}

choice_enum! {
    #[derive(Default)]
    HoofGrowth {
        #[default]
        Normal => "prawidłowe",
        Slow => "wolne",
    }
}

choice_enum! {
    /// Main way the horse is used.
    ActivityType {
        Recreation => "rekreacja",
        ShowJumping => "skoki",
        Dressage => "ujeżdżenie",
        Eventing => "WKKW",
        Endurance => "rajdy",
        Racing => "wyścigi",
        Western => "western",
        Driving => "zaprzęgi",
        Breeding => "hodowla",
        Rehabilitation => "rekonwalescencja",
        NotWorking => "niepracujący",
    }
}

choice_enum! {
    HealthCondition {
        RecurrentColic => "nawracające kolki",
        GastricUlcers => "choroba wrzodowa",
        PastLaminitis => "przebyty ochwat",
        MetabolicSyndrome => "zespół metaboliczny",
        Cushings => "zespół Cushinga",
        FoodIntolerance => "alergie i nietolerancje pokarmowe",
        OtherDigestive => "inne choroby układu pokarmowego",
        Eotrh => "syndrom EORTH",
        RaoCopd => "RAO/COPD",
        Dental => "problemy z uzębieniem",
        LooseManure => "zbyt luźny kał",
        FecalWater => "woda kałowa",
        Neurological => "choroby neurologiczne",
        Orthopedic => "choroby ortopedyczne",
        Other => "inne choroby",
    }
}

choice_enum! {
    #[derive(Default)]
    WaterAccess {
        #[default]
        Continuous => "ciągły",
        Regulated => "regulowany",
    }
}

choice_enum! {
    #[derive(Default)]
    WaterSource {
        #[default]
        Running => "bieżące",
        Standing => "stałe",
    }
}

choice_enum! {
    #[derive(Default)]
    HayAccess {
        #[default]
        Continuous => "dostępne ciągle",
        Regulated => "regulowane",
    }
}

choice_enum! {
    HayQuality {
        VeryGood => "bardzo dobra",
        Good => "dobra",
        Average => "średnia",
        Poor => "słaba",
        Bad => "zła",
    }
}

choice_enum! {
    /// Radio answer for yes/no questions.
    YesNo {
        Yes => "Tak",
        No => "Nie",
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value { Self::Yes } else { Self::No }
    }
}

impl From<YesNo> for bool {
    fn from(value: YesNo) -> Self {
        matches!(value, YesNo::Yes)
    }
}

/// Parses a list of labels, returning the first label that is not an option.
pub(crate) fn parse_labels<T: FromStr>(labels: &[String]) -> Result<Vec<T>, String> {
    labels
        .iter()
        .map(|label| label.parse::<T>().map_err(|_| label.clone()))
        .collect()
}
