use super::{Classification, ProbeOutcome};

/// Running count of outcomes per classification, kept for the end-of-run summary.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tally {
    counts: [usize; Classification::ALL.len()],
    unexpected: usize,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: &ProbeOutcome) {
        self.counts[outcome.classification().index()] += 1;
        if matches!(&outcome.result, Err(e) if e.is_unexpected()) {
            self.unexpected += 1;
        }
    }

    pub fn count(&self, class: Classification) -> usize {
        self.counts[class.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Hosts that answered with any status code.
    pub fn responsive(&self) -> usize {
        self.total() - self.count(Classification::Unreachable)
    }

    /// Outcomes whose result could not be retrieved at all.
    pub fn unexpected(&self) -> usize {
        self.unexpected
    }

    /// Classes seen at least once, in display order.
    pub fn non_zero(&self) -> impl Iterator<Item = (Classification, usize)> + '_ {
        Classification::ALL
            .into_iter()
            .map(|class| (class, self.count(class)))
            .filter(|(_, n)| *n > 0)
    }
}
