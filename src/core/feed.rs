//! TTL-cached suggestion source.
//!
//! Stands in for the remote suggestion endpoint: batches rotate out of a
//! fixed pool, but only when the previous batch's time-to-live has lapsed
//! or the user forces a refresh.  The cache is an explicit object with its
//! TTL carried alongside the value — no ambient storage.

use std::time::{Duration, Instant};

use crate::core::catalog::Suggestion;

// ───────────────────────────────────────── ttl cache ─────────

/// A single cached value with a fixed time-to-live.
#[derive(Debug, Clone)]
pub struct TtlCache<T> {
    ttl: Duration,
    entry: Option<(Instant, T)>,
}

impl<T> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entry: None }
    }

    /// Store a value stamped at `now`.
    pub fn put(&mut self, now: Instant, value: T) {
        self.entry = Some((now, value));
    }

    /// The cached value, unless it has aged out.
    pub fn get(&self, now: Instant) -> Option<&T> {
        match &self.entry {
            Some((stored, value)) if now.duration_since(*stored) < self.ttl => Some(value),
            _ => None,
        }
    }

    /// Drop the cached value immediately.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

// ───────────────────────────────────────── feed ──────────────

/// Rotating suggestion batches behind a [`TtlCache`].
#[derive(Debug)]
pub struct SuggestionFeed {
    pool: Vec<Vec<Suggestion>>,
    next_batch: usize,
    cache: TtlCache<Vec<Suggestion>>,
}

impl SuggestionFeed {
    pub fn new(ttl: Duration) -> Self {
        Self {
            pool: sample_batches(),
            next_batch: 0,
            cache: TtlCache::new(ttl),
        }
    }

    /// Return a fresh batch when the cached one has lapsed (or was
    /// invalidated), `None` while the cache is still warm.  The caller
    /// reconfigures its carousel with every `Some`.
    pub fn poll(&mut self, now: Instant) -> Option<Vec<Suggestion>> {
        if self.cache.get(now).is_some() {
            return None;
        }
        let batch = self.pool[self.next_batch % self.pool.len()].clone();
        self.next_batch += 1;
        self.cache.put(now, batch.clone());
        Some(batch)
    }

    /// Force the next poll to produce a fresh batch.
    pub fn refresh(&mut self) {
        self.cache.invalidate();
    }
}

fn suggestion(headline: &str, blurb: &str) -> Suggestion {
    Suggestion {
        headline: headline.into(),
        blurb: blurb.into(),
    }
}

fn sample_batches() -> Vec<Vec<Suggestion>> {
    vec![
        vec![
            suggestion("Monsoon escapes", "Five stays where the rain is the main event"),
            suggestion("Under ₹8k", "Budget farmhouses with full kitchens"),
            suggestion("Pet friendly", "Bring the dog — these hosts insist"),
            suggestion("Harvest season", "Pick your own dinner in Nashik"),
            suggestion("Stargazer picks", "Zero light pollution, verified"),
            suggestion("Work-from-farm", "Fibre internet and veranda desks"),
        ],
        vec![
            suggestion("Weekend-able", "Under three hours from the city"),
            suggestion("Heritage homes", "Century-old tharavads and wadas"),
            suggestion("Big groups", "Six bedrooms and a courtyard to fill"),
            suggestion("Coffee country", "Wake up inside a working estate"),
            suggestion("Riverside", "Fall asleep to running water"),
            suggestion("First-time hosts", "New on farmstay, already loved"),
        ],
        vec![
            suggestion("Winter sun", "South-facing verandas for the season"),
            suggestion("Orchard stays", "Mango, chikoo and guava at arm's reach"),
            suggestion("Silent retreats", "No neighbours for a kilometre"),
            suggestion("Family kitchens", "Hosts who teach the house recipes"),
            suggestion("Bird corridors", "Checklists run past a hundred species"),
            suggestion("Rainy-day ready", "Board games, libraries and tin roofs"),
        ],
    ]
}
