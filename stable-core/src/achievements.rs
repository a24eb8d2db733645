//! Achievement catalog and unlock registry.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::constants::{
    ACH_DETAILED_EXAMINER, ACH_HEALTH_GUARDIAN, ACH_NUTRITION_EXPERT, ACH_PERFECT_CARETAKER,
    ACH_STABLE_MANAGER_NOVICE, ACH_TRAINING_MASTER,
};
use crate::error::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    Examination,
    Training,
    Health,
    Nutrition,
    General,
}

impl AchievementCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Examination => "examination",
            Self::Training => "training",
            Self::Health => "health",
            Self::Nutrition => "nutrition",
            Self::General => "general",
        }
    }
}

impl fmt::Display for AchievementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub category: AchievementCategory,
}

impl Achievement {
    #[must_use]
    pub fn new(
        id: &str,
        name: &str,
        description: &str,
        icon: &str,
        category: AchievementCategory,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            category,
        }
    }
}

/// A catalog entry copied at unlock time, stamped once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockedAchievement {
    #[serde(flatten)]
    pub achievement: Achievement,
    pub unlocked_at: DateTime<Utc>,
}

/// Ordered list of achievement definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementCatalog(pub Vec<Achievement>);

impl Default for AchievementCatalog {
    fn default() -> Self {
        Self(vec![
            Achievement::new(
                ACH_STABLE_MANAGER_NOVICE,
                "Początkujący Zarządca Stajni",
                "Rozpocznij swoją przygodę jako zarządca stajni",
                "stable",
                AchievementCategory::General,
            ),
            Achievement::new(
                ACH_DETAILED_EXAMINER,
                "Dokładny Obserwator",
                "Wypełnij wszystkie pola w sekcji badania konia",
                "magnifier",
                AchievementCategory::Examination,
            ),
            Achievement::new(
                ACH_TRAINING_MASTER,
                "Mistrz Treningu",
                "Uzupełnij szczegółowy plan treningowy",
                "training",
                AchievementCategory::Training,
            ),
            Achievement::new(
                ACH_HEALTH_GUARDIAN,
                "Strażnik Zdrowia",
                "Zapisz kompletną historię zdrowia",
                "health",
                AchievementCategory::Health,
            ),
            Achievement::new(
                ACH_NUTRITION_EXPERT,
                "Ekspert Żywienia",
                "Stwórz zbilansowany plan żywieniowy",
                "nutrition",
                AchievementCategory::Nutrition,
            ),
            Achievement::new(
                ACH_PERFECT_CARETAKER,
                "Perfekcyjny Opiekun",
                "Ukończ wszystkie sekcje z najwyższą dokładnością",
                "star",
                AchievementCategory::General,
            ),
        ])
    }
}

impl AchievementCatalog {
    /// Load a catalog from a JSON array of definitions.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed, an id is empty, or an id
    /// appears twice.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<Achievement> = serde_json::from_str(json)?;
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if entry.id.trim().is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(CatalogError::DuplicateId(entry.id.clone()));
            }
        }
        Ok(Self(entries))
    }

    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&Achievement> {
        self.0.iter().find(|a| a.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Achievement> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a AchievementCatalog {
    type Item = &'a Achievement;
    type IntoIter = std::slice::Iter<'a, Achievement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Available achievements plus the unlocked subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AchievementRegistry {
    available: AchievementCatalog,
    unlocked: Vec<UnlockedAchievement>,
}

impl AchievementRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn available(&self) -> &AchievementCatalog {
        &self.available
    }

    /// Unlocked achievements in unlock order.
    #[must_use]
    pub fn unlocked(&self) -> &[UnlockedAchievement] {
        &self.unlocked
    }

    /// Unlock `id` now. Unknown or already unlocked ids are ignored.
    ///
    /// Returns `true` when a new unlock was recorded.
    pub fn unlock(&mut self, id: &str) -> bool {
        self.unlock_at(id, Utc::now())
    }

    /// Unlock `id` with an explicit timestamp; the first unlock wins.
    pub fn unlock_at(&mut self, id: &str, at: DateTime<Utc>) -> bool {
        if self.is_unlocked(id) {
            return false;
        }
        let Some(achievement) = self.available.get_by_id(id) else {
            log::debug!("ignoring unlock of unknown achievement {id}");
            return false;
        };
        log::debug!("achievement unlocked: {id}");
        self.unlocked.push(UnlockedAchievement {
            achievement: achievement.clone(),
            unlocked_at: at,
        });
        true
    }

    /// Append a definition unless its id is already in the catalog.
    pub fn add_custom(&mut self, achievement: Achievement) -> bool {
        if self.available.get_by_id(&achievement.id).is_some() {
            return false;
        }
        self.available.0.push(achievement);
        true
    }

    /// Clear unlocks and restore the default catalog.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_unlocked(&self, id: &str) -> bool {
        self.unlocked.iter().any(|u| u.achievement.id == id)
    }

    #[must_use]
    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }

    #[must_use]
    pub fn total_count(&self) -> usize {
        self.available.len()
    }

    /// Share of the catalog unlocked, in percent. An empty catalog reports 0.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_percentage(&self) -> f64 {
        if self.available.is_empty() {
            return 0.0;
        }
        self.unlocked.len() as f64 / self.available.len() as f64 * 100.0
    }

    #[must_use]
    pub fn by_category(&self, category: AchievementCategory) -> Vec<&Achievement> {
        self.available
            .iter()
            .filter(|a| a.category == category)
            .collect()
    }

    #[must_use]
    pub fn unlocked_by_category(&self, category: AchievementCategory) -> Vec<&UnlockedAchievement> {
        self.unlocked
            .iter()
            .filter(|u| u.achievement.category == category)
            .collect()
    }

    /// The `count` most recent unlocks, oldest first.
    #[must_use]
    pub fn recent(&self, count: usize) -> &[UnlockedAchievement] {
        let start = self.unlocked.len().saturating_sub(count);
        &self.unlocked[start..]
    }
}
