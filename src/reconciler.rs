use crate::types::{Dataset, JobRecord};

/// Merges freshly fetched candidates into the accumulated dataset and
/// reports which of them are genuinely new.
///
/// Pure function over its two inputs. The union is first-seen-wins by link:
/// a candidate whose link already exists never displaces the stored record's
/// field values, and a link repeated within `candidates` contributes only its
/// first occurrence. `new_ones` is exactly the deduplicated candidates whose
/// link was absent from `existing`, in original candidate order.
///
/// Every link present in either input is present in `merged`; nothing is
/// dropped except duplicate links.
pub fn reconcile(existing: &Dataset, candidates: &[JobRecord]) -> (Dataset, Vec<JobRecord>) {
    let mut merged = existing.clone();
    let mut new_ones = Vec::new();

    for candidate in candidates {
        let known = existing.contains_link(&candidate.link);
        if merged.insert(candidate.clone()) && !known {
            new_ones.push(candidate.clone());
        }
    }

    (merged, new_ones)
}
