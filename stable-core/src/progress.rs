//! Progress tracking: current area, global step and expertise points.
use serde::{Deserialize, Serialize};

use crate::area::Area;
use crate::constants::{
    FIRST_STEP, POINTS_PER_EXPERTISE_LEVEL, SECTION_COMPLETION_BONUS, TOTAL_STEPS,
};
use crate::error::SnapshotError;

/// Session progress. Fields are private; every change goes through the
/// methods below so points and completions stay consistent.
///
/// Deserialization goes through [`ProgressSnapshot`]: `total_steps` is fixed
/// by the question lists, repeated completions collapse and a step outside
/// the range is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProgressSnapshot")]
pub struct Progress {
    current_area: Area,
    completed_sections: Vec<Area>,
    expertise_points: u32,
    current_step: u32,
    total_steps: u32,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            current_area: Area::Office,
            completed_sections: Vec::new(),
            expertise_points: 0,
            current_step: FIRST_STEP,
            total_steps: TOTAL_STEPS,
        }
    }
}

/// Serialized form of [`Progress`]. A stored `total_steps` is ignored.
#[derive(Deserialize)]
struct ProgressSnapshot {
    current_area: Area,
    #[serde(default)]
    completed_sections: Vec<Area>,
    #[serde(default)]
    expertise_points: u32,
    current_step: u32,
}

impl TryFrom<ProgressSnapshot> for Progress {
    type Error = SnapshotError;

    fn try_from(snapshot: ProgressSnapshot) -> Result<Self, Self::Error> {
        if !(FIRST_STEP..=TOTAL_STEPS).contains(&snapshot.current_step) {
            return Err(SnapshotError::StepOutOfRange {
                step: snapshot.current_step,
                total: TOTAL_STEPS,
            });
        }
        let mut completed_sections = Vec::with_capacity(snapshot.completed_sections.len());
        for area in snapshot.completed_sections {
            if !completed_sections.contains(&area) {
                completed_sections.push(area);
            }
        }
        Ok(Self {
            current_area: snapshot.current_area,
            completed_sections,
            expertise_points: snapshot.expertise_points,
            current_step: snapshot.current_step,
            total_steps: TOTAL_STEPS,
        })
    }
}

impl Progress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn current_area(&self) -> Area {
        self.current_area
    }

    /// Completed sections in completion order.
    #[must_use]
    pub fn completed_sections(&self) -> &[Area] {
        &self.completed_sections
    }

    #[must_use]
    pub const fn expertise_points(&self) -> u32 {
        self.expertise_points
    }

    #[must_use]
    pub const fn current_step(&self) -> u32 {
        self.current_step
    }

    #[must_use]
    pub const fn total_steps(&self) -> u32 {
        self.total_steps
    }

    /// Switch areas without any gating; see [`crate::navigation`] for the gate.
    pub fn set_current_area(&mut self, area: Area) {
        self.current_area = area;
    }

    /// Mark `area` complete and award the completion bonus once.
    ///
    /// Returns `true` only on the first completion.
    pub fn complete_section(&mut self, area: Area) -> bool {
        if self.completed_sections.contains(&area) {
            return false;
        }
        self.completed_sections.push(area);
        self.add_expertise_points(SECTION_COMPLETION_BONUS);
        true
    }

    pub fn add_expertise_points(&mut self, points: u32) {
        self.expertise_points = self.expertise_points.saturating_add(points);
    }

    pub fn increment_step(&mut self) {
        if self.current_step < self.total_steps {
            self.current_step += 1;
        }
    }

    pub fn decrement_step(&mut self) {
        if self.current_step > FIRST_STEP {
            self.current_step -= 1;
        }
    }

    /// Jump to `step`; out-of-range requests are ignored.
    pub fn set_step(&mut self, step: u32) {
        if (FIRST_STEP..=self.total_steps).contains(&step) {
            self.current_step = step;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Overall progress in percent (current step over total steps).
    #[must_use]
    pub fn percent_complete(&self) -> f64 {
        f64::from(self.current_step) / f64::from(self.total_steps) * 100.0
    }

    #[must_use]
    pub const fn expertise_level(&self) -> u32 {
        self.expertise_points / POINTS_PER_EXPERTISE_LEVEL
    }

    #[must_use]
    pub fn is_area_complete(&self, area: Area) -> bool {
        self.completed_sections.contains(&area)
    }

    #[must_use]
    pub fn all_sections_complete(&self) -> bool {
        Area::ALL.iter().all(|area| self.is_area_complete(*area))
    }
}
