use jobwatch::{CsvStore, Dataset, JobRecord};
use std::fs;
use tempfile::TempDir;

fn record(link: &str, company: &str) -> JobRecord {
    JobRecord {
        company: company.to_string(),
        role: "Physical Therapist".to_string(),
        location: "Bloomington, MN".to_string(),
        link: link.to_string(),
        date_posted: "2 days ago".to_string(),
    }
}

#[test]
fn missing_file_loads_as_empty_dataset() {
    let temp = TempDir::new().unwrap();
    let store = CsvStore::new(temp.path().join("jobs.csv"));

    let dataset = store.load().unwrap();
    assert!(dataset.is_empty());
}

#[test]
fn save_then_load_round_trips_records_in_order() {
    let temp = TempDir::new().unwrap();
    let store = CsvStore::new(temp.path().join("jobs.csv"));

    let dataset = Dataset::from_records(vec![
        record("https://jobs.example/1", "Mercy"),
        record("https://jobs.example/2", "Allina"),
    ]);
    store.save(&dataset).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.records(), dataset.records());
}

#[test]
fn saved_file_carries_the_compatible_header() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("jobs.csv");
    let store = CsvStore::new(&path);

    store
        .save(&Dataset::from_records(vec![record("https://jobs.example/1", "Mercy")]))
        .unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let header = contents.lines().next().unwrap();
    assert_eq!(header, "Company,Role,Location,Link,Date Posted");
}

#[test]
fn save_overwrites_instead_of_appending() {
    let temp = TempDir::new().unwrap();
    let store = CsvStore::new(temp.path().join("jobs.csv"));

    store
        .save(&Dataset::from_records(vec![
            record("https://jobs.example/1", "Mercy"),
            record("https://jobs.example/2", "Allina"),
        ]))
        .unwrap();
    store
        .save(&Dataset::from_records(vec![record("https://jobs.example/3", "Fairview")]))
        .unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert!(loaded.contains_link("https://jobs.example/3"));
}

#[test]
fn duplicate_rows_in_the_file_are_dropped_first_seen_wins() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("jobs.csv");
    fs::write(
        &path,
        "Company,Role,Location,Link,Date Posted\n\
         Mercy,Nurse,St. Paul,https://jobs.example/1,Today\n\
         Fairview,Nurse,Edina,https://jobs.example/1,Yesterday\n",
    )
    .unwrap();

    let loaded = CsvStore::new(&path).load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.records()[0].company, "Mercy");
}
