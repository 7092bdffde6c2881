//! Static structure elements: places, transitions and the three arc kinds.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::net::ids::{PlaceId, TransitionId};

/// Arc weights and markings as stored. Signed: NDR allows a sign on the
/// weight token, and the t→p convention keeps non-positive weights as-is.
pub type Weight = i64;

#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct Place {
    pub name: String,
    /// Initial marking.
    pub tokens: Weight,
}

impl Place {
    pub fn new(name: impl Into<String>, tokens: Weight) -> Self {
        Self {
            name: name.into(),
            tokens,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Transition {
    pub name: String,
    /// Raw substitution-label text, stripped of its `{*HSN(`…`)}` wrapper.
    pub label: Option<String>,
}

impl Transition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
        }
    }

    pub fn new_with_label(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: Some(label.into()),
        }
    }
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Transition").field(&self.name).finish()
    }
}

/// Regular input arc, place → transition.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct InputArc {
    pub place: PlaceId,
    pub transition: TransitionId,
    pub weight: Weight,
}

/// Output arc, transition → place.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct OutputArc {
    pub transition: TransitionId,
    pub place: PlaceId,
    pub weight: Weight,
}

/// Priority (or inhibitor-between-transitions) arc, transition → transition.
/// Carries no weight; the LSN encoding fixes it at zero.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct PriorityArc {
    pub source: TransitionId,
    pub target: TransitionId,
}
