use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use sweepr_common::config::Config;
use sweepr_common::probe::{Address, Classification, ProbeOutcome};
use sweepr_core::engine::ProbeEngine;
use sweepr_core::loader;
use sweepr_core::prober::HttpProber;

use crate::utils;

const TEST_TIMEOUT: Duration = Duration::from_millis(400);

fn config(concurrency: usize) -> Config {
    Config {
        concurrency,
        timeout: TEST_TIMEOUT,
        ..Config::default()
    }
}

async fn sweep(addresses: Vec<Address>, cfg: &Config) -> Vec<ProbeOutcome> {
    let prober = HttpProber::new(cfg.timeout).unwrap();
    let engine = ProbeEngine::new(Arc::new(prober), cfg);
    engine.run(addresses).collect().await
}

/// Loads a file mixing every kind of host and checks the whole pipeline.
#[tokio::test]
async fn file_to_outcomes_end_to_end() {
    let ok = utils::stub_host(200, Duration::ZERO).await;
    let moved = utils::stub_host(301, Duration::ZERO).await;
    let see_other = utils::stub_host(303, Duration::ZERO).await;
    let forbidden = utils::stub_host(403, Duration::ZERO).await;
    let not_found = utils::stub_host(404, Duration::ZERO).await;
    let broken = utils::stub_host(500, Duration::ZERO).await;
    let silent = utils::silent_host().await;
    let closed = utils::closed_host().await;

    let contents = format!(
        "{ok}\n\n  {moved}\n{see_other}  \n\n\t{forbidden}\n{not_found}\n{broken}\n   \n{silent}\n{closed}\n"
    );
    let file = utils::input_file(&contents);

    let addresses = loader::load_addresses(file.path()).unwrap();
    assert_eq!(addresses.len(), 8);

    let outcomes = sweep(addresses, &config(8)).await;
    assert_eq!(outcomes.len(), 8);

    let by_address: HashMap<Address, ProbeOutcome> = outcomes
        .into_iter()
        .map(|o| (o.address.clone(), o))
        .collect();
    assert_eq!(by_address.len(), 8, "an address was reported twice");

    let expect = |addr: &Address, status: Option<u16>, class: Classification| {
        let outcome = by_address
            .get(addr)
            .unwrap_or_else(|| panic!("{addr} missing from outcomes"));
        assert_eq!(outcome.status(), status, "{addr}");
        assert_eq!(outcome.classification(), class, "{addr}");
    };

    expect(&ok, Some(200), Classification::Success);
    expect(&moved, Some(301), Classification::Redirect);
    expect(&see_other, Some(303), Classification::Redirect);
    expect(&forbidden, Some(403), Classification::Forbidden);
    expect(&not_found, Some(404), Classification::Other);
    expect(&broken, Some(500), Classification::ServerError);
    expect(&silent, None, Classification::Unreachable);
    expect(&closed, None, Classification::Unreachable);
}

#[tokio::test]
async fn random_latencies_still_yield_each_address_once() {
    let mut addresses = Vec::new();
    for _ in 0..40 {
        let delay = Duration::from_millis(rand::random_range(0..150));
        addresses.push(utils::stub_host(200, delay).await);
    }

    let outcomes = sweep(addresses.clone(), &config(12)).await;
    assert_eq!(outcomes.len(), addresses.len());

    let mut counts: HashMap<&Address, usize> = HashMap::new();
    for outcome in &outcomes {
        *counts.entry(&outcome.address).or_default() += 1;
        assert_eq!(outcome.status(), Some(200), "{}", outcome.address);
    }
    for address in &addresses {
        assert_eq!(counts.get(address), Some(&1), "{address}");
    }
}

#[tokio::test]
async fn silent_hosts_time_out_in_parallel() {
    let mut addresses = Vec::new();
    for _ in 0..16 {
        addresses.push(utils::silent_host().await);
    }

    let start = Instant::now();
    let outcomes = sweep(addresses, &config(16)).await;
    let elapsed = start.elapsed();

    assert_eq!(outcomes.len(), 16);
    assert!(outcomes.iter().all(|o| o.status().is_none()));
    assert!(
        elapsed < TEST_TIMEOUT * 6,
        "16 timeouts took {elapsed:?}, probes look serialized"
    );
}

#[tokio::test]
async fn first_result_arrives_before_slow_hosts_finish() {
    let slow = utils::stub_host(200, Duration::from_millis(1_500)).await;
    let fast = utils::stub_host(403, Duration::ZERO).await;

    let cfg = Config {
        concurrency: 4,
        timeout: Duration::from_secs(3),
        ..Config::default()
    };
    let prober = HttpProber::new(cfg.timeout).unwrap();
    let engine = ProbeEngine::new(Arc::new(prober), &cfg);

    let start = Instant::now();
    let mut stream = engine.run(vec![slow.clone(), fast.clone()]);

    let first = stream.next().await.unwrap();
    assert_eq!(first.address, fast);
    assert_eq!(first.status(), Some(403));
    assert!(start.elapsed() < Duration::from_millis(1_000));

    let second = stream.next().await.unwrap();
    assert_eq!(second.address, slow);
    assert!(stream.next().await.is_none());
}
