//! Search Operations
//!
//! Case-insensitive name filtering over the stored logins.

use super::LoginRecord;

fn name_matches(record: &LoginRecord, query_lower: &str) -> bool {
    record.name.to_lowercase().contains(query_lower)
}

/// Positions of the records whose name contains `query`, ignoring case.
/// An empty query matches everything.
pub fn filter_indices(records: &[LoginRecord], query: &str) -> Vec<usize> {
    let query_lower = query.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| name_matches(r, &query_lower))
        .map(|(i, _)| i)
        .collect()
}

/// Records whose name contains `query`, ignoring case, in stored order
pub fn filter<'a>(records: &'a [LoginRecord], query: &str) -> Vec<&'a LoginRecord> {
    let query_lower = query.to_lowercase();
    records.iter().filter(|r| name_matches(r, &query_lower)).collect()
}
