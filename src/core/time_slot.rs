//! Half-open time intervals and their decomposition into schedulable blocks.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// An immutable half-open interval `[from, to)`.
///
/// The empty sentinel (`from == to == epoch`) stands in for "no slot declared".
/// Equality and hashing are by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    from: DateTime<Utc>,
    to: DateTime<Utc>,
}

impl TimeSlot {
    /// Create a slot from two instants. Callers are expected to pass
    /// `from < to`; a reversed pair is kept as given and behaves as empty
    /// coverage in block arithmetic.
    pub const fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to }
    }

    /// The empty sentinel slot.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            from: DateTime::UNIX_EPOCH,
            to: DateTime::UNIX_EPOCH,
        }
    }

    /// One calendar day `[00:00, 24:00)` at UTC. `None` for an invalid date.
    #[must_use]
    pub fn create_daily_time_slot_utc(year: i32, month: u32, day: u32) -> Option<Self> {
        let from = Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single()?;
        Some(Self::new(from, from + TimeDelta::days(1)))
    }

    /// One calendar month at UTC. `None` for an invalid year/month pair.
    #[must_use]
    pub fn create_monthly_time_slot_utc(year: i32, month: u32) -> Option<Self> {
        let from = Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).single()?;
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let to = Utc.with_ymd_and_hms(next_year, next_month, 1, 0, 0, 0).single()?;
        Some(Self::new(from, to))
    }

    /// Start of the interval (inclusive).
    #[must_use]
    pub const fn from(&self) -> DateTime<Utc> {
        self.from
    }

    /// End of the interval (exclusive).
    #[must_use]
    pub const fn to(&self) -> DateTime<Utc> {
        self.to
    }

    /// Whether this slot is the empty sentinel (or otherwise has no extent).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.from >= self.to
    }

    /// Interval containment: this slot lies fully inside `other`.
    #[must_use]
    pub fn within(&self, other: &Self) -> bool {
        self.from >= other.from && self.to <= other.to
    }

    /// Whether the two slots share any instant.
    #[must_use]
    pub fn overlaps_with(&self, other: &Self) -> bool {
        self.from < other.to && self.to > other.from
    }

    /// Length of the interval.
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.to - self.from
    }

    /// Stretch the slot outward to the epoch-aligned grid of `block`-sized
    /// boundaries. A slot already aligned on both ends is returned unchanged.
    #[must_use]
    pub fn normalized_to_blocks(&self, block: TimeDelta) -> Self {
        let block_secs = block.num_seconds();
        if self.is_empty() || block_secs <= 0 {
            return *self;
        }
        let from = Self::floor_to_grid(self.from, block_secs);
        let to = Self::ceil_to_grid(self.to, block_secs);
        Self::new(from, to)
    }

    /// Split the normalized slot into contiguous block-sized sub-slots. The
    /// blocks exactly cover the normalized interval; when the slot is already
    /// grid-aligned they exactly reconstruct it.
    #[must_use]
    pub fn split_to_blocks(&self, block: TimeDelta) -> Vec<Self> {
        let normalized = self.normalized_to_blocks(block);
        if normalized.is_empty() || block.num_seconds() <= 0 {
            return Vec::new();
        }
        let mut blocks = Vec::with_capacity(normalized.block_count(block));
        let mut cursor = normalized.from;
        while cursor < normalized.to {
            blocks.push(Self::new(cursor, cursor + block));
            cursor += block;
        }
        blocks
    }

    /// Number of block rows expected to cover this slot. Pure function of the
    /// normalized duration and the block size.
    #[must_use]
    pub fn block_count(&self, block: TimeDelta) -> usize {
        let block_secs = block.num_seconds();
        if block_secs <= 0 {
            return 0;
        }
        let normalized = self.normalized_to_blocks(block);
        if normalized.is_empty() {
            return 0;
        }
        usize::try_from(normalized.duration().num_seconds() / block_secs).unwrap_or(0)
    }

    fn floor_to_grid(instant: DateTime<Utc>, block_secs: i64) -> DateTime<Utc> {
        let rem = instant.timestamp().rem_euclid(block_secs);
        let subsec = i64::from(instant.timestamp_subsec_nanos());
        instant - TimeDelta::seconds(rem) - TimeDelta::nanoseconds(subsec)
    }

    fn ceil_to_grid(instant: DateTime<Utc>, block_secs: i64) -> DateTime<Utc> {
        let rem = instant.timestamp().rem_euclid(block_secs);
        let subsec = i64::from(instant.timestamp_subsec_nanos());
        if rem == 0 && subsec == 0 {
            instant
        } else {
            instant - TimeDelta::seconds(rem) - TimeDelta::nanoseconds(subsec)
                + TimeDelta::seconds(block_secs)
        }
    }
}
