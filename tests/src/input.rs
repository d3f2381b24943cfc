use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use sweepr_common::error::InputError;
use sweepr_core::loader;

use crate::utils;

/// Counts connections so a test can prove nothing was probed.
async fn counting_listener() -> (String, Arc<AtomicUsize>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    tokio::spawn(async move {
        while listener.accept().await.is_ok() {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    });
    (addr, hits)
}

#[tokio::test]
async fn blank_file_stops_before_probing() {
    let (_addr, hits) = counting_listener().await;
    let file = utils::input_file("\n \n\t\n\n");

    let err = loader::load_addresses(file.path()).unwrap_err();
    assert!(matches!(err, InputError::EmptyInput { .. }), "got {err:?}");
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn missing_file_stops_before_probing() {
    let (_addr, hits) = counting_listener().await;
    let dir = tempfile::tempdir().unwrap();

    let err = loader::load_addresses(dir.path().join("ips.txt")).unwrap_err();
    assert!(matches!(err, InputError::FileNotFound { .. }), "got {err:?}");
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[test]
fn addresses_match_trimmed_lines() {
    let file = utils::input_file("  10.1.1.1\n\n10.1.1.2   \n\t\n   10.1.1.3\t\n");
    let addresses = loader::load_addresses(file.path()).unwrap();
    let raw: Vec<&str> = addresses.iter().map(|a| a.as_str()).collect();
    assert_eq!(raw, ["10.1.1.1", "10.1.1.2", "10.1.1.3"]);
}
