use crate::models::{DistrictId, StateId};
use std::collections::HashMap;

/// Read-only access to the host platform's geography reference tables.
///
/// The lookup handler only ever needs exact-name resolution; names are
/// expected unique, so the first match wins. Hosts back this with their own
/// tables; [`InMemoryDirectory`] covers tests and embedded use.
pub trait ReferenceDirectory {
    /// Find a state/province by exact name within a country.
    fn state_by_name(&self, country_code: &str, name: &str) -> Option<StateId>;

    /// Find a district by exact name.
    fn district_by_name(&self, name: &str) -> Option<DistrictId>;
}

/// In-memory reference directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    states: HashMap<(String, String), StateId>,
    districts: HashMap<String, DistrictId>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a state/province under a country.
    pub fn insert_state(
        &mut self,
        country_code: impl Into<String>,
        name: impl Into<String>,
        id: StateId,
    ) {
        self.states.insert((country_code.into(), name.into()), id);
    }

    /// Register a district.
    pub fn insert_district(&mut self, name: impl Into<String>, id: DistrictId) {
        self.districts.insert(name.into(), id);
    }
}

impl ReferenceDirectory for InMemoryDirectory {
    fn state_by_name(&self, country_code: &str, name: &str) -> Option<StateId> {
        self.states
            .get(&(country_code.to_string(), name.to_string()))
            .copied()
    }

    fn district_by_name(&self, name: &str) -> Option<DistrictId> {
        self.districts.get(name).copied()
    }
}
