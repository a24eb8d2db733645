//! Stable areas. Each area hosts exactly one questionnaire section.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    EXAMINATION_QUESTION_COUNT, FEED_QUESTION_COUNT, OFFICE_QUESTION_COUNT,
    TRAINING_QUESTION_COUNT, VETERINARY_QUESTION_COUNT,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Area {
    #[default]
    Office,
    Examination,
    Feed,
    Training,
    Veterinary,
}

impl Area {
    pub const ALL: [Self; 5] = [
        Self::Office,
        Self::Examination,
        Self::Feed,
        Self::Training,
        Self::Veterinary,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Office => "office",
            Self::Examination => "examination",
            Self::Feed => "feed",
            Self::Training => "training",
            Self::Veterinary => "veterinary",
        }
    }

    /// Display name of the area on the stable map.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Office => "Biuro",
            Self::Examination => "Strefa Badań",
            Self::Feed => "Paszarnia",
            Self::Training => "Arena Treningowa",
            Self::Veterinary => "Stacja Weterynaryjna",
        }
    }

    /// Length of the area's full (unfiltered) question list.
    #[must_use]
    pub const fn question_count(self) -> u32 {
        match self {
            Self::Office => OFFICE_QUESTION_COUNT,
            Self::Examination => EXAMINATION_QUESTION_COUNT,
            Self::Feed => FEED_QUESTION_COUNT,
            Self::Training => TRAINING_QUESTION_COUNT,
            Self::Veterinary => VETERINARY_QUESTION_COUNT,
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Area {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "office" => Ok(Self::Office),
            "examination" => Ok(Self::Examination),
            "feed" => Ok(Self::Feed),
            "training" => Ok(Self::Training),
            "veterinary" => Ok(Self::Veterinary),
            _ => Err(()),
        }
    }
}

impl From<Area> for String {
    fn from(value: Area) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TOTAL_STEPS;

    #[test]
    fn area_ids_round_trip_through_strings() {
        for area in Area::ALL {
            assert_eq!(area.as_str().parse::<Area>(), Ok(area));
            assert_eq!(area.to_string(), area.as_str());
        }
        assert!("stable".parse::<Area>().is_err());
    }

    #[test]
    fn question_counts_sum_to_total_steps() {
        let sum: u32 = Area::ALL.iter().map(|area| area.question_count()).sum();
        assert_eq!(sum, TOTAL_STEPS);
    }

    #[test]
    fn office_is_default_area() {
        assert_eq!(Area::default(), Area::Office);
    }
}
