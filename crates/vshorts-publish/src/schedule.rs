//! Publish slot computation.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Default offset of the first slot from the start of a run.
pub const DEFAULT_INITIAL_OFFSET_SECS: i64 = 2 * 3600;

/// Default interval between successive slots.
pub const DEFAULT_SLOT_INTERVAL_SECS: i64 = 2 * 3600;

/// Default minimum lead time the hosting service accepts.
pub const DEFAULT_MIN_LEAD_SECS: i64 = 15 * 60;

/// Timing knobs for a scheduler run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// First slot: run start + this offset
    pub initial_offset_secs: i64,
    /// Distance between successive slots
    pub slot_interval_secs: i64,
    /// Minimum gap between "now" and any assigned slot
    pub min_lead_secs: i64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            initial_offset_secs: DEFAULT_INITIAL_OFFSET_SECS,
            slot_interval_secs: DEFAULT_SLOT_INTERVAL_SECS,
            min_lead_secs: DEFAULT_MIN_LEAD_SECS,
        }
    }
}

impl ScheduleConfig {
    /// First slot offset as a duration.
    pub fn initial_offset(&self) -> Duration {
        Duration::seconds(self.initial_offset_secs)
    }

    /// Slot interval as a duration.
    pub fn slot_interval(&self) -> Duration {
        Duration::seconds(self.slot_interval_secs)
    }

    /// Minimum lead as a duration.
    pub fn min_lead(&self) -> Duration {
        Duration::seconds(self.min_lead_secs)
    }
}

/// Floor a candidate slot to the minimum lead from "now".
///
/// `now` is read at submission time, not at list time, so a candidate
/// pushed into the past by slow earlier uploads still lands at least
/// `min_lead` in the future.
pub fn next_publish_slot(
    candidate: DateTime<Utc>,
    now: DateTime<Utc>,
    min_lead: Duration,
) -> DateTime<Utc> {
    let floor = now + min_lead;
    if candidate < floor {
        floor
    } else {
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_future_candidate_kept() {
        let slot = next_publish_slot(t(7200), t(0), Duration::minutes(15));
        assert_eq!(slot, t(7200));
    }

    #[test]
    fn test_stale_candidate_floored() {
        // Candidate fell behind (long prior iteration); floor to now + 15m
        let slot = next_publish_slot(t(-100), t(0), Duration::minutes(15));
        assert_eq!(slot, t(900));
    }

    #[test]
    fn test_candidate_inside_lead_window_floored() {
        let slot = next_publish_slot(t(600), t(0), Duration::minutes(15));
        assert_eq!(slot, t(900));
    }

    #[test]
    fn test_default_config() {
        let config = ScheduleConfig::default();
        assert_eq!(config.initial_offset(), Duration::hours(2));
        assert_eq!(config.slot_interval(), Duration::hours(2));
        assert_eq!(config.min_lead(), Duration::minutes(15));
    }
}
