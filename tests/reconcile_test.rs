use jobwatch::{reconcile, Dataset, JobRecord};

fn record(link: &str) -> JobRecord {
    JobRecord {
        company: "Acme Health".to_string(),
        role: "Registered Nurse".to_string(),
        location: "Remote".to_string(),
        link: link.to_string(),
        date_posted: "Just posted".to_string(),
    }
}

#[test]
fn empty_existing_dedups_candidates() {
    let existing = Dataset::new();
    let candidates = vec![record("a"), record("b"), record("a")];

    let (merged, new_ones) = reconcile(&existing, &candidates);

    assert_eq!(merged.len(), 2);
    assert_eq!(new_ones.len(), 2);
    assert_eq!(new_ones[0].link, "a");
    assert_eq!(new_ones[1].link, "b");
}

#[test]
fn no_new_when_all_candidates_known() {
    let existing = Dataset::from_records(vec![record("a")]);

    let (merged, new_ones) = reconcile(&existing, &[record("a")]);

    assert_eq!(merged.len(), 1);
    assert!(new_ones.is_empty());
}

#[test]
fn growth_reports_only_the_unseen_candidate() {
    let existing = Dataset::from_records(vec![record("a")]);

    let (merged, new_ones) = reconcile(&existing, &[record("a"), record("b")]);

    assert_eq!(merged.len(), 2);
    assert_eq!(new_ones.len(), 1);
    assert_eq!(new_ones[0].link, "b");
}

#[test]
fn empty_candidates_leave_dataset_untouched() {
    let existing = Dataset::from_records(vec![record("a")]);

    let (merged, new_ones) = reconcile(&existing, &[]);

    assert_eq!(merged.len(), 1);
    assert!(new_ones.is_empty());
}

#[test]
fn union_loses_no_links_and_stays_unique() {
    let existing = Dataset::from_records(vec![record("a"), record("b")]);
    let candidates = vec![record("c"), record("b"), record("d")];

    let (merged, new_ones) = reconcile(&existing, &candidates);

    for link in ["a", "b", "c", "d"] {
        assert!(merged.contains_link(link), "merged lost link {link}");
    }
    assert_eq!(merged.len(), 4, "merged must hold each link exactly once");
    assert_eq!(
        new_ones.iter().map(|r| r.link.as_str()).collect::<Vec<_>>(),
        vec!["c", "d"],
        "new set must be the unseen candidates in original order"
    );
}

#[test]
fn existing_field_values_win_over_changed_candidates() {
    let mut stale = record("a");
    stale.location = "Minneapolis, MN".to_string();
    let existing = Dataset::from_records(vec![stale]);

    let mut refreshed = record("a");
    refreshed.location = "Duluth, MN".to_string();

    let (merged, new_ones) = reconcile(&existing, &[refreshed]);

    assert!(new_ones.is_empty());
    assert_eq!(merged.records()[0].location, "Minneapolis, MN");
}

#[test]
fn reconcile_is_idempotent_for_identical_inputs() {
    let existing = Dataset::from_records(vec![record("a"), record("b")]);
    let candidates = vec![record("b"), record("c"), record("c")];

    let (merged1, new1) = reconcile(&existing, &candidates);
    let (merged2, new2) = reconcile(&existing, &candidates);

    assert_eq!(merged1.records(), merged2.records());
    assert_eq!(new1, new2);
}

#[test]
fn new_count_matches_candidates_minus_seen_again() {
    let existing = Dataset::from_records(vec![record("a"), record("b")]);
    let candidates = vec![record("a"), record("c"), record("d"), record("b")];

    let (_, new_ones) = reconcile(&existing, &candidates);

    let seen_again = candidates
        .iter()
        .filter(|c| existing.contains_link(&c.link))
        .count();
    assert_eq!(new_ones.len(), candidates.len() - seen_again);
}
