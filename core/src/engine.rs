//! # Probe Engine
//!
//! Dispatches one probe per address over a fixed-size pool of tokio tasks and
//! hands outcomes back the moment they are ready.
//!
//! Workers pull addresses from a shared queue until it runs dry, so the pool
//! size caps the number of requests in flight no matter how long the input is.
//! Each worker owns a clone of the outcome sender. The channel closes once the
//! last worker exits, which is exactly when every address has produced its
//! outcome.

use std::any::Any;
use std::cell::Cell;
use std::collections::VecDeque;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::pin::pin;
use std::sync::{Arc, Mutex, Once, PoisonError};

use futures::FutureExt;
use sweepr_common::config::Config;
use sweepr_common::error::ProbeError;
use sweepr_common::probe::{Address, ProbeOutcome};
use sweepr_common::{debug, error};
use tokio::sync::mpsc;

use crate::prober::Prober;

type WorkQueue = Arc<Mutex<VecDeque<Address>>>;

thread_local! {
    /// Set while this thread polls a request under `catch_unwind`.
    static GUARDED: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

pub struct ProbeEngine {
    prober: Arc<dyn Prober>,
    concurrency: usize,
}

impl ProbeEngine {
    pub fn new(prober: Arc<dyn Prober>, cfg: &Config) -> Self {
        Self {
            prober,
            concurrency: cfg.concurrency.max(1),
        }
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Starts probing every address and returns the stream of their outcomes.
    ///
    /// Must be called from within a tokio runtime. Dropping the returned stream
    /// early stops workers after their current probe.
    pub fn run(&self, addresses: Vec<Address>) -> OutcomeStream {
        let expected = addresses.len();
        let workers = self.concurrency.min(expected);
        let queue: WorkQueue = Arc::new(Mutex::new(VecDeque::from(addresses)));
        let (tx, rx) = mpsc::channel(self.concurrency);

        debug!("Dispatching {expected} probes over {workers} workers");
        silence_guarded_panics();

        for _ in 0..workers {
            tokio::spawn(worker(queue.clone(), self.prober.clone(), tx.clone()));
        }

        OutcomeStream {
            rx,
            expected,
            received: 0,
        }
    }
}

async fn worker(queue: WorkQueue, prober: Arc<dyn Prober>, tx: mpsc::Sender<ProbeOutcome>) {
    while let Some(address) = next_address(&queue) {
        let outcome = probe_guarded(prober.as_ref(), address).await;
        if tx.send(outcome).await.is_err() {
            debug!("Outcome stream dropped, worker stopping");
            break;
        }
    }
}

fn next_address(queue: &Mutex<VecDeque<Address>>) -> Option<Address> {
    queue
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .pop_front()
}

/// Runs a single probe, turning a panic inside the prober into an
/// [`ProbeError::Unexpected`] outcome for that address only.
async fn probe_guarded(prober: &dyn Prober, address: Address) -> ProbeOutcome {
    let polled = {
        let mut caught = pin!(AssertUnwindSafe(prober.probe(&address)).catch_unwind());
        futures::future::poll_fn(|cx| {
            GUARDED.set(true);
            let poll = caught.as_mut().poll(cx);
            GUARDED.set(false);
            poll
        })
        .await
    };

    let result = match polled {
        Ok(result) => result,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            error!("Probe for {address} failed unexpectedly: {message}");
            Err(ProbeError::Unexpected(message))
        }
    };

    ProbeOutcome::new(address, result)
}

/// Wraps the process panic hook once so panics the engine catches are
/// reported only as outcomes. Every other panic still reaches the previous hook.
fn silence_guarded_panics() {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !GUARDED.get() {
                previous(info);
            }
        }));
    });
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        String::from("probe task panicked")
    }
}

/// Outcomes in completion order. Ends after the last outcome is delivered.
pub struct OutcomeStream {
    rx: mpsc::Receiver<ProbeOutcome>,
    expected: usize,
    received: usize,
}

impl OutcomeStream {
    pub async fn next(&mut self) -> Option<ProbeOutcome> {
        let outcome = self.rx.recv().await;
        if outcome.is_some() {
            self.received += 1;
        }
        outcome
    }

    /// Number of addresses submitted.
    pub fn expected(&self) -> usize {
        self.expected
    }

    pub fn received(&self) -> usize {
        self.received
    }

    /// Drains the stream. Only useful where ordering and latency don't matter.
    pub async fn collect(mut self) -> Vec<ProbeOutcome> {
        let mut outcomes = Vec::with_capacity(self.expected);
        while let Some(outcome) = self.next().await {
            outcomes.push(outcome);
        }
        outcomes
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
