use serde::{Deserialize, Serialize};
use std::fmt;

/// Fulfillment status of an obligation as reported by SW360
///
/// Unknown values are kept verbatim in `Other` so they survive into the
/// report; they never count as fulfilled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ObligationStatus {
    #[default]
    Open,
    AcknowledgedOrFulfilled,
    WillBeFulfilledBeforeRelease,
    NotApplicable,
    DeferredToParentProject,
    FulfilledAndParentMustAlsoFulfill,
    Escalated,
    Other(String),
}

impl ObligationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ObligationStatus::Open => "OPEN",
            ObligationStatus::AcknowledgedOrFulfilled => "ACKNOWLEDGED_OR_FULFILLED",
            ObligationStatus::WillBeFulfilledBeforeRelease => "WILL_BE_FULFILLED_BEFORE_RELEASE",
            ObligationStatus::NotApplicable => "NOT_APPLICABLE",
            ObligationStatus::DeferredToParentProject => "DEFERRED_TO_PARENT_PROJECT",
            ObligationStatus::FulfilledAndParentMustAlsoFulfill => {
                "FULFILLED_AND_PARENT_MUST_ALSO_FULFILL"
            }
            ObligationStatus::Escalated => "ESCALATED",
            ObligationStatus::Other(raw) => raw,
        }
    }

    /// One of the two statuses that make an obligation count as fulfilled
    pub fn is_fulfilled(&self) -> bool {
        matches!(
            self,
            ObligationStatus::AcknowledgedOrFulfilled
                | ObligationStatus::FulfilledAndParentMustAlsoFulfill
        )
    }
}

impl From<String> for ObligationStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "OPEN" => ObligationStatus::Open,
            "ACKNOWLEDGED_OR_FULFILLED" => ObligationStatus::AcknowledgedOrFulfilled,
            "WILL_BE_FULFILLED_BEFORE_RELEASE" => ObligationStatus::WillBeFulfilledBeforeRelease,
            "NOT_APPLICABLE" => ObligationStatus::NotApplicable,
            "DEFERRED_TO_PARENT_PROJECT" => ObligationStatus::DeferredToParentProject,
            "FULFILLED_AND_PARENT_MUST_ALSO_FULFILL" => {
                ObligationStatus::FulfilledAndParentMustAlsoFulfill
            }
            "ESCALATED" => ObligationStatus::Escalated,
            _ => ObligationStatus::Other(value),
        }
    }
}

impl From<ObligationStatus> for String {
    fn from(status: ObligationStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for ObligationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A release an obligation applies to
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReleaseRef {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
}

impl fmt::Display for ReleaseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.version.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} ({})", self.name, self.version)
        }
    }
}

/// One license obligation of one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObligationRecord {
    pub title: String,
    pub status: ObligationStatus,
    pub obligation_type: String,
    pub obligation_level: String,
    pub license_ids: Vec<String>,
    pub releases: Vec<ReleaseRef>,
    pub comment: String,
}

impl ObligationRecord {
    /// Creates a record with only a title and status; the remaining fields are empty
    pub fn new(title: impl Into<String>, status: ObligationStatus) -> Self {
        Self {
            title: title.into(),
            status,
            obligation_type: String::new(),
            obligation_level: String::new(),
            license_ids: Vec::new(),
            releases: Vec::new(),
            comment: String::new(),
        }
    }
}

/// The obligations of a single project, keyed by title, in server order
///
/// Inserting a title that already exists replaces the record in place,
/// so a title appears at most once and keeps its first position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ObligationSet {
    records: Vec<ObligationRecord>,
}

impl ObligationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: ObligationRecord) {
        match self.records.iter_mut().find(|r| r.title == record.title) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    pub fn get(&self, title: &str) -> Option<&ObligationRecord> {
        self.records.iter().find(|r| r.title == title)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObligationRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<ObligationRecord> for ObligationSet {
    fn from_iter<I: IntoIterator<Item = ObligationRecord>>(iter: I) -> Self {
        let mut set = ObligationSet::new();
        for record in iter {
            set.insert(record);
        }
        set
    }
}
