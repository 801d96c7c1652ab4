use std::borrow::Cow;

use crate::domain::entities::history::HistoryItem;
use crate::domain::value_objects::severity_tag::{SeverityTag, ALL_TAGS};

/// Message shown instead of an empty list.
pub const EMPTY_STATE_MESSAGE: &str = "No analyses found for this filter";

/// Select the history items matching `tag`, preserving their order.
///
/// `All` borrows the input untouched; any other tag builds the matching
/// subsequence.
#[must_use]
pub fn filter_history(items: &[HistoryItem], tag: SeverityTag) -> Cow<'_, [HistoryItem]> {
    if tag == SeverityTag::All {
        return Cow::Borrowed(items);
    }
    Cow::Owned(
        items
            .iter()
            .filter(|item| tag.matches(&item.severity))
            .cloned()
            .collect(),
    )
}

#[must_use]
pub fn empty_state_message(tag: SeverityTag) -> String {
    match tag {
        SeverityTag::All => "No analyses recorded yet".to_owned(),
        other => format!("{EMPTY_STATE_MESSAGE} ({other})"),
    }
}

/// Item count per filter tag, in filter bar order.
#[must_use]
pub fn count_by_tag(items: &[HistoryItem]) -> [(SeverityTag, usize); 5] {
    ALL_TAGS.map(|tag| {
        (
            tag,
            items.iter().filter(|item| tag.matches(&item.severity)).count(),
        )
    })
}
