//! Unit-scoped records shown on the unit pages
//!
//! There is no backend yet: records come from a bundled JSON document and
//! every load waits a short, fixed delay so the loading states are exercised.

use std::collections::HashMap;

use dioxus::logger::tracing;
use serde::Deserialize;
use unit_tree::tabs::UnitTab;

use crate::browser;

const MOCK_RECORDS: &str = include_str!("../assets/mock/records.json");

/// Simulated network latency
pub const LOAD_DELAY_MS: i32 = 350;

#[derive(Debug, thiserror::Error)]
pub enum MockDataError {
    #[error("failed to parse mock records: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("timer failed: {0}")]
    Timer(String),
}

/// One line of a tab: a role, an attribution, a member, a course...
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    pub title: String,
    #[serde(default)]
    pub detail: String,
    /// User the record belongs to, for "own" scoped lists
    #[serde(default)]
    pub owner: String,
}

/// Records per tab, per unit id
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct MockRecords(HashMap<String, HashMap<UnitTab, Vec<Record>>>);

impl MockRecords {
    pub fn parse(json: &str) -> Result<Self, MockDataError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn bundled() -> Result<Self, MockDataError> {
        Self::parse(MOCK_RECORDS)
    }

    /// Records of one tab; unknown units and empty tabs yield nothing
    pub fn records(&self, unit_id: &str, tab: UnitTab) -> Vec<Record> {
        self.0
            .get(unit_id)
            .and_then(|tabs| tabs.get(&tab))
            .cloned()
            .unwrap_or_default()
    }
}

/// Load the records of `tab` for `unit_id` after the simulated delay
pub async fn load_records(unit_id: &str, tab: UnitTab) -> Result<Vec<Record>, MockDataError> {
    browser::sleep(LOAD_DELAY_MS)
        .await
        .map_err(|err| MockDataError::Timer(format!("{err:?}")))?;
    let records = MockRecords::bundled()?.records(unit_id, tab);
    tracing::debug!("loaded {} {:?} records for {unit_id}", records.len(), tab);
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_records_parse() {
        let records = MockRecords::bundled().unwrap();
        assert!(!records.records("cls-phys-l1a", UnitTab::Members).is_empty());
        assert!(!records.records("dep-phys", UnitTab::Roles).is_empty());
    }

    #[test]
    fn test_missing_unit_or_tab_is_empty() {
        let records = MockRecords::parse(r#"{"c1": {"members": [{"title": "Ada"}]}}"#).unwrap();
        assert_eq!(records.records("c1", UnitTab::Members).len(), 1);
        assert_eq!(records.records("c1", UnitTab::Members)[0].owner, "");
        assert!(records.records("c1", UnitTab::Exams).is_empty());
        assert!(records.records("c2", UnitTab::Members).is_empty());
    }
}
