//! Area unlock gate.
//!
//! Office is always reachable. The remaining areas open together once the
//! office section has been completed.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::area::Area;
use crate::progress::Progress;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaStatus {
    Locked,
    Unlocked,
    Completed,
}

impl AreaStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Locked => "locked",
            Self::Unlocked => "unlocked",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for AreaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[must_use]
pub fn is_unlocked(progress: &Progress, area: Area) -> bool {
    area == Area::Office || progress.is_area_complete(Area::Office)
}

/// Reachable areas in map order.
#[must_use]
pub fn unlocked_areas(progress: &Progress) -> Vec<Area> {
    Area::ALL
        .into_iter()
        .filter(|area| is_unlocked(progress, *area))
        .collect()
}

#[must_use]
pub fn area_status(progress: &Progress, area: Area) -> AreaStatus {
    if progress.is_area_complete(area) {
        AreaStatus::Completed
    } else if is_unlocked(progress, area) {
        AreaStatus::Unlocked
    } else {
        AreaStatus::Locked
    }
}

/// Switch to `area` when it is unlocked. Returns whether the switch happened.
pub fn request_area(progress: &mut Progress, area: Area) -> bool {
    if !is_unlocked(progress, area) {
        log::debug!("ignored request for locked area {area}");
        return false;
    }
    if progress.current_area() != area {
        log::debug!("area {} -> {area}", progress.current_area());
    }
    progress.set_current_area(area);
    true
}
