use crate::obligation_report::domain::{ObligationRecord, ObligationSet, ObligationStatus};

/// FulfillmentPolicy decides whether an obligation belongs in the report
///
/// Rules, in order:
/// 1. The obligation must be fulfilled (`ACKNOWLEDGED_OR_FULFILLED` or
///    `FULFILLED_AND_PARENT_MUST_ALSO_FULFILL`).
/// 2. A `FULFILLED_AND_PARENT_MUST_ALSO_FULFILL` obligation additionally needs
///    the report's root project to hold the same title with a fulfilled status.
///    The root is checked, not the immediate tree parent.
pub struct FulfillmentPolicy;

impl FulfillmentPolicy {
    /// Returns true when `record` should appear in the report
    ///
    /// # Arguments
    /// * `record` - The obligation being evaluated
    /// * `root_obligations` - Obligations of the report's root project, if they were fetched
    pub fn is_included(record: &ObligationRecord, root_obligations: Option<&ObligationSet>) -> bool {
        match record.status {
            ObligationStatus::AcknowledgedOrFulfilled => true,
            ObligationStatus::FulfilledAndParentMustAlsoFulfill => {
                Self::root_fulfills(&record.title, root_obligations)
            }
            _ => false,
        }
    }

    fn root_fulfills(title: &str, root_obligations: Option<&ObligationSet>) -> bool {
        root_obligations
            .and_then(|set| set.get(title))
            .map(|root_record| root_record.status.is_fulfilled())
            .unwrap_or(false)
    }
}
