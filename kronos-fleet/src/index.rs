//! Day-keyed index over the loaded simulation log.

use crate::data::{DayRecord, TrainRecord};
use crate::status::OperationalStatus;
use std::collections::HashMap;
use thiserror::Error;

/// Load-time failures. Fatal to the dashboard until a fresh load succeeds.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LogError {
    #[error("simulation log contains no day records")]
    EmptyLog,
}

/// One row of a train's monthly trajectory, in log order.
#[derive(Debug, Clone, PartialEq)]
pub struct JourneyDay {
    pub day: u32,
    pub scenario: String,
    pub status: OperationalStatus,
    pub health_score: f64,
    pub current_km: f64,
    pub consecutive_service_days: u32,
}

/// Headline figures for one day: bucket sizes and mean fleet health.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaySummary {
    pub service: usize,
    pub maintenance: usize,
    pub standby: usize,
    pub fleet_size: usize,
    pub mean_health: f64,
}

/// Immutable, day-keyed view of the simulation log.
///
/// Owns the loaded records for the process lifetime. Lookup is by the logical
/// `day` field; position-based access is kept separate so a host can drive a
/// slider over `1..=day_count()` without assuming the `day` values are dense.
#[derive(Debug, Clone, PartialEq)]
pub struct LogIndex {
    days: Vec<DayRecord>,
    by_day: HashMap<u32, usize>,
}

impl LogIndex {
    /// Build the index from the parsed log.
    ///
    /// Duplicate `day` keys keep the first occurrence, matching the producer's
    /// append order.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::EmptyLog`] for an empty sequence. The caller must
    /// surface this as a visible load failure; an empty dashboard is not an
    /// acceptable rendering of a log that never arrived.
    pub fn load(days: Vec<DayRecord>) -> Result<Self, LogError> {
        if days.is_empty() {
            return Err(LogError::EmptyLog);
        }
        let mut by_day = HashMap::with_capacity(days.len());
        for (position, record) in days.iter().enumerate() {
            by_day.entry(record.day).or_insert(position);
        }
        log::info!("simulation log indexed: {} day records", days.len());
        Ok(Self { days, by_day })
    }

    /// Number of day records; the day-selection slider runs over
    /// `1..=day_count()`.
    #[must_use]
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// All records in production order.
    #[must_use]
    pub fn days(&self) -> &[DayRecord] {
        &self.days
    }

    /// Record whose logical `day` field equals `day`.
    ///
    /// `None` means "no data for this day", an expected terminal condition
    /// the presentation layer renders as an empty state, never as an error.
    #[must_use]
    pub fn record_for_day(&self, day: u32) -> Option<&DayRecord> {
        self.by_day.get(&day).map(|&position| &self.days[position])
    }

    /// Record at a 1-based slider position, independent of `day` values.
    #[must_use]
    pub fn record_at(&self, position: usize) -> Option<&DayRecord> {
        position.checked_sub(1).and_then(|p| self.days.get(p))
    }

    /// Record with the highest logical `day` value.
    #[must_use]
    pub fn last_day(&self) -> Option<&DayRecord> {
        self.days.iter().max_by_key(|record| record.day)
    }

    /// Status of one train under a day's plan.
    #[must_use]
    pub fn status_of(&self, record: &DayRecord, train_id: &str) -> OperationalStatus {
        OperationalStatus::classify(&record.plan, train_id)
    }

    /// The day's fleet snapshot, order untouched. Consumers needing a stable
    /// display order sort it themselves; see [`display_order`].
    #[must_use]
    pub fn fleet_for_day<'a>(&self, record: &'a DayRecord) -> &'a [TrainRecord] {
        &record.fleet_status_today
    }

    /// The per-day trajectory of one train across the whole log, skipping days
    /// it does not appear in. Empty when the train is unknown.
    #[must_use]
    pub fn train_journey(&self, train_id: &str) -> Vec<JourneyDay> {
        self.days
            .iter()
            .filter_map(|record| {
                let train = record
                    .fleet_status_today
                    .iter()
                    .find(|t| t.train_id == train_id)?;
                Some(JourneyDay {
                    day: record.day,
                    scenario: record.scenario.clone(),
                    status: self.status_of(record, train_id),
                    health_score: train.health_score,
                    current_km: train.current_km,
                    consecutive_service_days: train.consecutive_service_days,
                })
            })
            .collect()
    }

    /// Bucket counts and mean fleet health for one day.
    #[must_use]
    pub fn day_summary(&self, record: &DayRecord) -> DaySummary {
        let fleet = &record.fleet_status_today;
        let mut summary = DaySummary {
            service: 0,
            maintenance: 0,
            standby: 0,
            fleet_size: fleet.len(),
            mean_health: 0.0,
        };
        for train in fleet {
            match self.status_of(record, &train.train_id) {
                OperationalStatus::Service => summary.service += 1,
                OperationalStatus::Maintenance => summary.maintenance += 1,
                OperationalStatus::Standby => summary.standby += 1,
            }
        }
        if !fleet.is_empty() {
            let total: f64 = fleet.iter().map(|t| t.health_score).sum();
            summary.mean_health = total / summary.fleet_size as f64;
        }
        summary
    }
}

/// Fleet rows sorted for display: by the numeric suffix of the train ID, with
/// non-conforming IDs falling back to lexicographic order at the end.
#[must_use]
pub fn display_order(fleet: &[TrainRecord]) -> Vec<&TrainRecord> {
    let mut rows: Vec<&TrainRecord> = fleet.iter().collect();
    rows.sort_by(|a, b| {
        match (numeric_suffix(&a.train_id), numeric_suffix(&b.train_id)) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.train_id.cmp(&b.train_id),
        }
    });
    rows
}

fn numeric_suffix(train_id: &str) -> Option<u32> {
    train_id.rsplit('-').next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DayPlan;

    fn train(id: &str, health: f64) -> TrainRecord {
        TrainRecord {
            train_id: id.to_string(),
            health_score: health,
            current_km: 0.0,
            current_hours: 0.0,
            consecutive_service_days: 0,
            job_card_priority: "NONE".to_string(),
            is_cert_expired: false,
            branding_sla_active: false,
            target_hours: 0.0,
        }
    }

    fn record(day: u32, service: &[&str], maintenance: &[&str]) -> DayRecord {
        DayRecord {
            day,
            scenario: "NORMAL".to_string(),
            plan: DayPlan {
                service: service.iter().map(|s| (*s).to_string()).collect(),
                maintenance: maintenance.iter().map(|s| (*s).to_string()).collect(),
                standby: Default::default(),
            },
            fleet_status_today: vec![train("TS-01", 95.0), train("TS-02", 40.0)],
        }
    }

    #[test]
    fn empty_log_is_rejected() {
        assert_eq!(LogIndex::load(Vec::new()), Err(LogError::EmptyLog));
    }

    #[test]
    fn one_record_log_loads() {
        let index = LogIndex::load(vec![record(1, &["TS-01"], &[])]).unwrap();
        assert_eq!(index.day_count(), 1);
    }

    #[test]
    fn missing_day_is_none_not_error() {
        let index = LogIndex::load(vec![
            record(1, &[], &[]),
            record(2, &[], &[]),
            record(3, &[], &[]),
        ])
        .unwrap();
        assert!(index.record_for_day(2).is_some());
        assert!(index.record_for_day(4).is_none());
    }

    #[test]
    fn lookup_is_day_keyed_not_positional() {
        // Sparse, unsorted day values: lookup follows the logical key while
        // record_at follows the sequence position.
        let index = LogIndex::load(vec![record(7, &[], &[]), record(2, &[], &[])]).unwrap();
        assert_eq!(index.record_for_day(7).unwrap().day, 7);
        assert_eq!(index.record_at(1).unwrap().day, 7);
        assert_eq!(index.record_at(2).unwrap().day, 2);
        assert!(index.record_at(0).is_none());
        assert!(index.record_at(3).is_none());
        assert_eq!(index.last_day().unwrap().day, 7);
    }

    #[test]
    fn duplicate_day_keys_keep_first_record() {
        let mut second = record(5, &["TS-02"], &[]);
        second.scenario = "FESTIVAL_SURGE".to_string();
        let index = LogIndex::load(vec![record(5, &["TS-01"], &[]), second]).unwrap();
        assert_eq!(index.record_for_day(5).unwrap().scenario, "NORMAL");
    }

    #[test]
    fn every_fleet_row_gets_exactly_one_status() {
        let rec = record(1, &["TS-01"], &["TS-02"]);
        let index = LogIndex::load(vec![rec]).unwrap();
        let rec = index.record_for_day(1).unwrap();
        for t in index.fleet_for_day(rec) {
            // classify is total; the match proves exactly one variant applies
            let status = index.status_of(rec, &t.train_id);
            match status {
                OperationalStatus::Service
                | OperationalStatus::Maintenance
                | OperationalStatus::Standby => {}
            }
        }
        let summary = index.day_summary(rec);
        assert_eq!(
            summary.service + summary.maintenance + summary.standby,
            summary.fleet_size
        );
    }

    #[test]
    fn day_summary_counts_and_mean() {
        let index = LogIndex::load(vec![record(1, &["TS-01"], &["TS-02"])]).unwrap();
        let rec = index.record_for_day(1).unwrap();
        let summary = index.day_summary(rec);
        assert_eq!(summary.service, 1);
        assert_eq!(summary.maintenance, 1);
        assert_eq!(summary.standby, 0);
        assert!((summary.mean_health - 67.5).abs() < f64::EPSILON);
    }

    #[test]
    fn journey_follows_log_order_and_skips_absent_days() {
        let mut day2 = record(2, &[], &["TS-01"]);
        day2.fleet_status_today = vec![train("TS-01", 80.0)];
        let mut day3 = record(3, &[], &[]);
        day3.fleet_status_today = vec![train("TS-02", 70.0)];
        let index = LogIndex::load(vec![record(1, &["TS-01"], &[]), day2, day3]).unwrap();

        let journey = index.train_journey("TS-01");
        assert_eq!(journey.len(), 2);
        assert_eq!(journey[0].day, 1);
        assert_eq!(journey[0].status, OperationalStatus::Service);
        assert_eq!(journey[1].day, 2);
        assert_eq!(journey[1].status, OperationalStatus::Maintenance);

        assert!(index.train_journey("TS-99").is_empty());
    }

    #[test]
    fn display_order_sorts_by_numeric_suffix() {
        let fleet = vec![train("TS-14", 0.0), train("TS-02", 0.0), train("TS-8", 0.0)];
        let ordered: Vec<&str> = display_order(&fleet)
            .iter()
            .map(|t| t.train_id.as_str())
            .collect();
        assert_eq!(ordered, vec!["TS-02", "TS-8", "TS-14"]);
    }
}
