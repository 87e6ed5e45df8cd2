//! The delivery allow-list.

use serde::{Deserialize, Serialize};

/// Localities the Pune operation delivers to.
///
/// Order matters: matching is first-match-wins over this declaration order,
/// so keep it stable.
const PUNE_SERVICE_AREAS: &[&str] = &[
    "Koregaon Park",
    "Kalyani Nagar",
    "Viman Nagar",
    "Kharadi",
    "Baner",
    "Aundh",
    "Pashan",
    "Wakad",
    "Hinjewadi",
    "Pimple Saudagar",
    "Kothrud",
    "Deccan Gymkhana",
    "Shivajinagar",
    "Camp",
    "Hadapsar",
    "Magarpatta",
];

/// Ordered, immutable allow-list of serviceable area names.
///
/// Effectively a process-start constant: `Default` is the built-in city list,
/// and a custom list can be injected (tests, another city). Never mutated
/// after construction, so it is safe to share across request contexts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceAreaDirectory {
    areas: Vec<String>,
}

impl ServiceAreaDirectory {
    /// Directory over a custom allow-list; declaration order is preserved.
    pub fn new(areas: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            areas: areas.into_iter().map(Into::into).collect(),
        }
    }

    /// The full list, in declared order.
    pub fn areas(&self) -> &[String] {
        &self.areas
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

impl Default for ServiceAreaDirectory {
    fn default() -> Self {
        Self::new(PUNE_SERVICE_AREAS.iter().copied())
    }
}
