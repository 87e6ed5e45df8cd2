use serde::{Deserialize, Serialize};
use tracing::debug;

use kirana_core::Pincode;

use crate::area::ServiceAreaDirectory;

/// Delivery-time estimate shown at checkout.
///
/// One citywide value today; a pincode-keyed table can replace it without an
/// API break since callers already pass the pincode.
const DEFAULT_DELIVERY_ESTIMATE: &str = "8-15 minutes";

/// Outcome of a serviceability check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceabilityResult {
    pub is_serviceable: bool,
    /// The allow-list entry that matched, verbatim (not the caller's input).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_area: Option<String>,
}

impl ServiceabilityResult {
    fn matched(area: String) -> Self {
        Self {
            is_serviceable: true,
            matched_area: Some(area),
        }
    }

    fn unserviceable() -> Self {
        Self {
            is_serviceable: false,
            matched_area: None,
        }
    }
}

/// Address components extracted by a reverse-geocoding collaborator.
///
/// Fields are tried in declaration order; the first serviceable one decides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodedAddress {
    pub suburb: Option<String>,
    pub neighbourhood: Option<String>,
    pub locality: Option<String>,
    pub city_district: Option<String>,
}

impl GeocodedAddress {
    fn locality_fields(&self) -> impl Iterator<Item = &str> {
        [
            self.suburb.as_deref(),
            self.neighbourhood.as_deref(),
            self.locality.as_deref(),
            self.city_district.as_deref(),
        ]
        .into_iter()
        .flatten()
    }
}

/// Stateless classifier over the service-area allow-list.
#[derive(Debug, Clone, Default)]
pub struct ServiceabilityResolver {
    directory: ServiceAreaDirectory,
}

impl ServiceabilityResolver {
    pub fn new(directory: ServiceAreaDirectory) -> Self {
        Self { directory }
    }

    /// Classify a free-text area name.
    ///
    /// Both sides are normalized (trim, lowercase); an input is serviceable
    /// if it contains an allow-list name or is contained by one. Substring in
    /// either direction is deliberate typo tolerance ("Koregaon" matches
    /// "Koregaon Park", "Baner Gaon Road" matches "Baner"). First match in
    /// declaration order wins. Empty input never matches.
    pub fn check_area(&self, input: &str) -> ServiceabilityResult {
        let needle = normalize(input);
        if needle.is_empty() {
            return ServiceabilityResult::unserviceable();
        }

        for area in self.directory.areas() {
            let candidate = normalize(area);
            if needle.contains(&candidate) || candidate.contains(&needle) {
                return ServiceabilityResult::matched(area.clone());
            }
        }

        debug!(input, "area not in service list");
        ServiceabilityResult::unserviceable()
    }

    /// Boolean-only variant used by the reverse-geocoding flow.
    ///
    /// Same matcher as [`check_area`](Self::check_area) — the two must never
    /// disagree.
    pub fn is_area_serviceable(&self, input: &str) -> bool {
        self.check_area(input).is_serviceable
    }

    /// Classify a reverse-geocoded address by its locality fields.
    pub fn check_address(&self, address: &GeocodedAddress) -> ServiceabilityResult {
        for field in address.locality_fields() {
            let result = self.check_area(field);
            if result.is_serviceable {
                return result;
            }
        }
        ServiceabilityResult::unserviceable()
    }

    /// Delivery-time estimate for a pincode.
    ///
    /// Constant lookup with a single default value; the pincode does not vary
    /// the estimate today.
    pub fn delivery_time_estimate(&self, _pincode: &Pincode) -> &'static str {
        DEFAULT_DELIVERY_ESTIMATE
    }

    /// The full allow-list, in declared order, for UI enumeration.
    pub fn service_areas(&self) -> &[String] {
        self.directory.areas()
    }

    /// The storefront's confirmation/rejection copy for an area check.
    pub fn availability_message(&self, input: &str) -> String {
        match self.check_area(input).matched_area {
            Some(area) => format!("Great! We deliver to {area}"),
            None => format!("Sorry, we don't deliver to {} yet.", input.trim()),
        }
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
