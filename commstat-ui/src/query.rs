//! Sort selection as carried in a listing page URL.
//!
//! `sort_by=<field id>` names the sort key and a present, truthy `inverse`
//! requests descending order, matching what the filter form submits.

use commstat_model::{FormState, ModelResult, SortKey};
use url::form_urlencoded;

pub const SORT_BY_KEY: &str = "sort_by";
pub const INVERSE_KEY: &str = "inverse";
/// Page number; dropped when the sort changes so results start at page one.
pub const PAGE_KEY: &str = "p";

/// Value a checked checkbox submits.
const CHECKED_VALUE: &str = "on";

/// Reads the sort selection from a query string (leading `?` optional).
///
/// A missing or empty `sort_by` yields the page's default sort, whatever
/// `inverse` says. Repeated keys resolve to their last value.
pub fn read_sort_query<K: SortKey>(query: &str) -> ModelResult<FormState<K>> {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut sort_by = None;
    let mut inverse = None;
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            SORT_BY_KEY => sort_by = Some(value.into_owned()),
            INVERSE_KEY => inverse = Some(value.into_owned()),
            _ => {}
        }
    }

    match sort_by.as_deref().map(str::trim) {
        None | Some("") => Ok(K::default_sort()),
        Some(id) => {
            let field = K::parse(id)?;
            Ok(FormState::new(field, checkbox_value(inverse.as_deref())))
        }
    }
}

/// Replaces the sort keys of `existing` with `state`, keeping every other
/// parameter in order and dropping the page number.
pub fn write_sort_query<K: SortKey>(
    existing: &str,
    state: FormState<K>,
) -> String {
    let existing = existing.strip_prefix('?').unwrap_or(existing);

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in form_urlencoded::parse(existing.as_bytes()) {
        if matches!(key.as_ref(), SORT_BY_KEY | INVERSE_KEY | PAGE_KEY) {
            continue;
        }
        serializer.append_pair(&key, &value);
    }
    serializer.append_pair(SORT_BY_KEY, state.sort_by.as_str());
    if state.inverse {
        serializer.append_pair(INVERSE_KEY, CHECKED_VALUE);
    }
    serializer.finish()
}

// Absent or "false" (any case) is unchecked; any other non-empty value is
// checked.
fn checkbox_value(value: Option<&str>) -> bool {
    match value {
        None => false,
        Some(raw) => !(raw.is_empty() || raw.eq_ignore_ascii_case("false")),
    }
}
