//! Errors raised at the loosely-typed edges of the state model.
//!
//! The state model itself never fails: duplicate completions, unknown
//! achievements, locked areas and out-of-range steps are silent no-ops. These
//! errors only cover answers and catalogs that cannot be mapped onto the typed
//! profile in the first place, plus snapshots that break the model's
//! invariants.
use thiserror::Error;

use crate::area::Area;
use crate::field::{Field, FieldKind};

/// An answer that does not fit the field it targets.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnswerError {
    #[error("{field} expects a {expected} answer (got {got})")]
    KindMismatch {
        field: Field,
        expected: FieldKind,
        got: FieldKind,
    },
    #[error("{value:?} is not an option of {field}")]
    UnknownOption { field: Field, value: String },
}

/// An achievement catalog that cannot be loaded.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read achievement catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("achievement catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("achievement catalog repeats id {0:?}")]
    DuplicateId(String),
    #[error("achievement catalog entry has an empty id")]
    EmptyId,
}

/// A serialized session whose state could not have come from the public API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("step {step} is outside 1..={total}")]
    StepOutOfRange { step: u32, total: u32 },
    #[error("{area} cursor index {index} is past its {count} questions")]
    CursorOutOfRange {
        area: Area,
        index: usize,
        count: usize,
    },
    #[error("cursor slot {slot} holds the {area} cursor")]
    CursorSlot { slot: usize, area: Area },
}
