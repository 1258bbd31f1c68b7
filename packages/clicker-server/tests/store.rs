use clicker_server::*;
use pretty_assertions::assert_eq;
use std::{collections::BTreeSet, sync::Arc};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_records_get_distinct_totals() {
    let log = Arc::new(MemoryClickLog::new());

    let tasks: Vec<_> = (0..64)
        .map(|_| {
            let log = log.clone();
            tokio::spawn(async move { log.record().await.unwrap() })
        })
        .collect();

    let mut totals = BTreeSet::new();
    let mut ids = BTreeSet::new();
    for task in tasks {
        let recorded = task.await.unwrap();
        totals.insert(recorded.total);
        ids.insert(recorded.entry.id);
    }

    assert_eq!(totals, (1..=64).collect::<BTreeSet<u64>>());
    assert_eq!(ids, (1..=64).collect::<BTreeSet<u64>>());
    assert_eq!(log.stats().await.unwrap().total_clicks, 64);
}

#[tokio::test]
async fn file_log_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("clicks.jsonl");

    {
        let log = JsonLinesClickLog::open(&path).await.unwrap();
        assert_eq!(log.record().await.unwrap().total, 1);
        assert_eq!(log.record().await.unwrap().total, 2);
    }

    let log = JsonLinesClickLog::open(&path).await.unwrap();
    let stats = log.stats().await.unwrap();
    assert_eq!(stats.total_clicks, 2);
    assert!(stats.latest_click.is_some());

    let third = log.record().await.unwrap();
    assert_eq!(third.total, 3);
    assert_eq!(third.entry.id, 3);

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 3);
}

#[tokio::test]
async fn file_log_rejects_corrupt_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clicks.jsonl");
    std::fs::write(
        &path,
        "{\"id\":1,\"clicked_at\":\"2024-01-01T00:00:00Z\"}\nnot json\n",
    )
    .unwrap();

    let err = JsonLinesClickLog::open(&path).await.unwrap_err();
    assert!(matches!(err, StoreError::Corrupt { line: 2, .. }));
}

#[tokio::test]
async fn open_log_follows_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clicks.jsonl");

    let config = ServerConfig {
        data_file: Some(path.clone()),
        ..Default::default()
    };
    let log = open_log(&config).await.unwrap();
    log.record().await.unwrap();
    assert!(path.exists());

    let memory = open_log(&ServerConfig::default()).await.unwrap();
    assert_eq!(memory.stats().await.unwrap().total_clicks, 0);
}
