// src/domain/filter.rs

use crate::domain::property::Property;

/// The two user-controlled inputs of the filtered view. Empty strings mean
/// "not active".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewFilter {
    pub type_filter: String,
    pub search_term: String,
}

impl ViewFilter {
    pub fn new(type_filter: impl Into<String>, search_term: impl Into<String>) -> Self {
        Self {
            type_filter: type_filter.into(),
            search_term: search_term.into(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.type_filter.is_empty() || !self.search_term.is_empty()
    }

    /// Type: case-insensitive equality. Term: case-insensitive substring of
    /// name or location. Both must hold when both are set.
    pub fn matches(&self, property: &Property) -> bool {
        let type_ok = self.type_filter.is_empty()
            || property.property_type.to_lowercase() == self.type_filter.to_lowercase();
        if !type_ok {
            return false;
        }

        if self.search_term.is_empty() {
            return true;
        }
        let term = self.search_term.to_lowercase();
        property.name.to_lowercase().contains(&term)
            || property.location.to_lowercase().contains(&term)
    }
}

/// Stable filter over the full list; never reorders.
pub fn derive_view(properties: &[Property], filter: &ViewFilter) -> Vec<Property> {
    properties
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect()
}
