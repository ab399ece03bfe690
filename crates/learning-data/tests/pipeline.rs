//! End-to-end tests for dataset generation and CSV output.
//!
//! These tests write real files into a temporary directory and read them
//! back, checking the properties downstream consumers rely on.

use std::collections::HashSet;
use std::path::Path;

use learning_data::prelude::*;
use time::OffsetDateTime;

fn read_rows<T: serde::de::DeserializeOwned>(path: &Path) -> Vec<T> {
    csv::Reader::from_path(path)
        .unwrap()
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .unwrap()
}

fn read_column(path: &Path, column: &str) -> Vec<String> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let idx = reader
        .headers()
        .unwrap()
        .iter()
        .position(|h| h == column)
        .unwrap();
    reader
        .records()
        .map(|r| r.unwrap()[idx].to_string())
        .collect()
}

fn header(path: &Path) -> String {
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader.headers().unwrap().iter().collect::<Vec<_>>().join(",")
}

#[test]
fn test_full_run_writes_three_tables() {
    let dir = tempfile::tempdir().unwrap();
    let config = GenerationConfig {
        output_dir: dir.path().to_path_buf(),
        ..Default::default()
    };

    let result = DatasetBuilder::from_config(config.clone())
        .with_users(500)
        .with_content(60)
        .with_engagements(8_000)
        .with_seed(2024)
        .build()
        .unwrap();

    assert_eq!(
        header(&config.users_path()),
        "user_id,title,seniority_level,department,learning_style"
    );
    assert_eq!(
        header(&config.content_path()),
        "content_id,title,domain,subtopic,difficulty_level,content_type"
    );
    assert_eq!(
        header(&config.engagements_path()),
        "user_id,content_id,timestamp,duration_seconds,liked,engagement_type"
    );

    let users: Vec<GeneratedUser> = read_rows(&config.users_path());
    let content: Vec<GeneratedContent> = read_rows(&config.content_path());
    let engagements: Vec<GeneratedEngagement> = read_rows(&config.engagements_path());

    assert_eq!(users.len(), 500);
    assert_eq!(content.len(), 60);
    assert_eq!(engagements.len(), 8_000);
    assert_eq!(users.len(), result.users.len());
    assert_eq!(engagements.len(), result.engagements.len());
}

#[test]
fn test_written_rows_hold_invariants() {
    let dir = tempfile::tempdir().unwrap();
    DatasetBuilder::new()
        .with_users(400)
        .with_content(50)
        .with_engagements(10_000)
        .with_output_dir(dir.path())
        .build()
        .unwrap();

    let catalog = JobCatalog::builtin().unwrap();
    let users: Vec<GeneratedUser> = read_rows(&dir.path().join("users.csv"));
    for user in &users {
        assert_eq!(catalog.seniority_of(&user.title), Some(user.seniority_level));
        assert_eq!(department_for(&user.title), user.department);
    }

    let engagements_path = dir.path().join("engagements.csv");
    let engagements: Vec<GeneratedEngagement> = read_rows(&engagements_path);
    for e in &engagements {
        assert!((1..=400).contains(&e.user_id));
        assert!((1..=50).contains(&e.content_id));
        assert!((30..=3600).contains(&e.duration_seconds));
        assert_ne!(e.liked, Some(false));
    }

    // The raw column only ever holds "true" or nothing
    let liked: HashSet<String> = read_column(&engagements_path, "liked").into_iter().collect();
    assert_eq!(
        liked,
        HashSet::from(["true".to_string(), String::new()])
    );

    // Second resolution, UTC
    let timestamps = read_column(&engagements_path, "timestamp");
    assert!(timestamps.iter().all(|t| t.len() == "2025-01-01 00:00:00".len()));
}

#[test]
fn test_two_step_run_reads_users_back() {
    let dir = tempfile::tempdir().unwrap();
    let builder = DatasetBuilder::new()
        .with_users(120)
        .with_content(30)
        .with_engagements(3_000)
        .with_output_dir(dir.path());

    // Step one: users only
    let users = builder.generate_users().unwrap();
    let writer = CsvWriter::new(dir.path());
    let users_path = writer.write_users(&users).unwrap();

    // Step two: content and engagements against the persisted users
    let user_ids = read_user_ids(&users_path).unwrap();
    assert_eq!(user_ids, (1..=120).collect::<Vec<u32>>());

    let (content, engagements) = builder.generate_content_and_engagements(&user_ids).unwrap();
    writer.write_content(&content).unwrap();
    writer.write_engagements(&engagements).unwrap();

    let known: HashSet<u32> = user_ids.into_iter().collect();
    let written: Vec<GeneratedEngagement> = read_rows(&dir.path().join("engagements.csv"));
    assert_eq!(written.len(), 3_000);
    assert!(written.iter().all(|e| known.contains(&e.user_id)));
}

#[test]
fn test_fixed_reference_time_reproduces_files() {
    let now = OffsetDateTime::now_utc();
    let run = |dir: &Path| {
        DatasetBuilder::new()
            .with_users(100)
            .with_content(20)
            .with_engagements(2_000)
            .with_seed(99)
            .with_reference_time(now)
            .with_output_dir(dir)
            .build()
            .unwrap();
        std::fs::read_to_string(dir.join("engagements.csv")).unwrap()
    };

    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    assert_eq!(run(a.path()), run(b.path()));
}

#[test]
fn test_engagements_need_users() {
    let dir = tempfile::tempdir().unwrap();
    let result = DatasetBuilder::new()
        .with_users(0)
        .with_content(10)
        .with_engagements(100)
        .with_output_dir(dir.path())
        .build();

    assert!(matches!(
        result,
        Err(DatasetError::EmptyReference { table: "users" })
    ));
    // Nothing is written when generation fails
    assert!(!dir.path().join("users.csv").exists());
}
