use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use thiserror::Error;

use crate::game::roller::DIE_SIDES;
use crate::game::RollOutcome;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetricsError {
    #[error("instrument name must not be empty")]
    EmptyName,

    #[error("instrument {0:?} is already registered")]
    AlreadyRegistered(String),
}

/// Hands out process-local counters. Registration happens once, before the
/// server accepts traffic; duplicate names are rejected so two call sites
/// cannot silently share an instrument.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    registered: HashSet<String>,
}

impl MetricsRegistry {
    pub fn roll_counter(&mut self, name: &str, description: &str) -> Result<RollCounter, MetricsError> {
        if name.is_empty() {
            return Err(MetricsError::EmptyName);
        }
        if !self.registered.insert(name.to_string()) {
            return Err(MetricsError::AlreadyRegistered(name.to_string()));
        }
        tracing::debug!(instrument = name, description = description, "registered roll counter");

        Ok(RollCounter {
            inner: Arc::new(CounterInner {
                name: name.to_string(),
                by_value: Default::default(),
                total: AtomicU64::new(0),
            }),
        })
    }
}

/// Counts completed rolls, keyed by face value. Increments are lock-free
/// and infallible, so a roll response never waits on or fails from metrics.
#[derive(Debug, Clone)]
pub struct RollCounter {
    inner: Arc<CounterInner>,
}

#[derive(Debug)]
struct CounterInner {
    name: String,
    by_value: [AtomicU64; DIE_SIDES as usize],
    total: AtomicU64,
}

impl RollCounter {
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Called exactly once per completed roll evaluation. Single and battle
    /// rolls count per face value; best-of-three contributes its roll count.
    pub fn record(&self, outcome: &RollOutcome) {
        match outcome {
            RollOutcome::Single { roll, .. } => self.add(*roll),
            RollOutcome::BestOfThree { rolls, .. } => self.add_batch(rolls.len() as u64),
            RollOutcome::Battle {
                player_roll,
                opponent_roll,
                ..
            } => {
                self.add(*player_roll);
                self.add(*opponent_roll);
            }
        }
    }

    pub fn add(&self, roll: u8) {
        if let Some(slot) = self.slot(roll) {
            slot.fetch_add(1, Ordering::Relaxed);
        }
        self.inner.total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_batch(&self, count: u64) {
        self.inner.total.fetch_add(count, Ordering::Relaxed);
    }

    pub fn count_for(&self, roll: u8) -> u64 {
        self.slot(roll).map(|slot| slot.load(Ordering::Relaxed)).unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.inner.total.load(Ordering::Relaxed)
    }

    fn slot(&self, roll: u8) -> Option<&AtomicU64> {
        roll.checked_sub(1)
            .and_then(|index| self.inner.by_value.get(index as usize))
    }
}
