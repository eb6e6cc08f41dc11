//! Plain-text report builders, kept free of terminal styling so they can be
//! asserted against directly.

use kronos_fleet::{DayRecord, LogIndex, display_order};

/// End-of-month fleet table: one row per train on the final logged day.
#[must_use]
pub fn final_status_table(index: &LogIndex) -> String {
    let Some(record) = index.last_day() else {
        return String::new();
    };
    let mut out = format!("Final fleet status (day {})\n", record.day);
    out.push_str(&fleet_table(index, record));
    out.push('\n');
    out.push_str(&summary_line(index, record));
    out
}

/// One logical day's plan and headline figures, or `None` when the log has no
/// record for that day.
#[must_use]
pub fn day_report(index: &LogIndex, day: u32) -> Option<String> {
    let record = index.record_for_day(day)?;
    let mut out = format!("Day {} | scenario: {}\n", record.day, record.scenario);
    for (label, bucket) in [
        ("SERVICE", &record.plan.service),
        ("MAINTENANCE", &record.plan.maintenance),
        ("STANDBY", &record.plan.standby),
    ] {
        let ids: Vec<&str> = bucket.iter().map(String::as_str).collect();
        out.push_str(&format!("  {label} ({}): {}\n", ids.len(), ids.join(", ")));
    }
    out.push_str(&fleet_table(index, record));
    out.push('\n');
    out.push_str(&summary_line(index, record));
    Some(out)
}

/// A single train's journey across the whole log, or `None` when the train
/// never appears.
#[must_use]
pub fn journey_table(index: &LogIndex, train_id: &str) -> Option<String> {
    let journey = index.train_journey(train_id);
    if journey.is_empty() {
        return None;
    }
    let mut out = format!("Monthly journey for {train_id}\n");
    out.push_str(&format!(
        "{:>4}  {:<12} {:>7} {:>9} {:>10}  {}\n",
        "day", "status", "health", "km", "svc-days", "scenario"
    ));
    for row in journey {
        out.push_str(&format!(
            "{:>4}  {:<12} {:>7.1} {:>9.0} {:>10}  {}\n",
            row.day,
            row.status.to_string(),
            row.health_score,
            row.current_km,
            row.consecutive_service_days,
            row.scenario
        ));
    }
    Some(out)
}

fn fleet_table(index: &LogIndex, record: &DayRecord) -> String {
    let mut out = format!(
        "{:<8} {:<12} {:>7} {:>9} {:>7} {:>9}  {:<9} {}\n",
        "train", "status", "health", "km", "hours", "svc-days", "job-card", "cert"
    );
    for train in display_order(index.fleet_for_day(record)) {
        out.push_str(&format!(
            "{:<8} {:<12} {:>7.1} {:>9.0} {:>7.1} {:>9}  {:<9} {}\n",
            train.train_id,
            index.status_of(record, &train.train_id).to_string(),
            train.health_score,
            train.current_km,
            train.current_hours,
            train.consecutive_service_days,
            train.job_card_priority,
            if train.is_cert_expired { "EXPIRED" } else { "valid" }
        ));
    }
    out
}

fn summary_line(index: &LogIndex, record: &DayRecord) -> String {
    let summary = index.day_summary(record);
    format!(
        "{} in service, {} in maintenance, {} on standby | mean health {:.1}\n",
        summary.service, summary.maintenance, summary.standby, summary.mean_health
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use kronos_fleet::parse_log;

    fn sample_index() -> LogIndex {
        let days = parse_log(include_str!(
            "../../kronos-web/static/assets/data/simulation_log.json"
        ))
        .unwrap();
        LogIndex::load(days).unwrap()
    }

    #[test]
    fn final_table_uses_the_last_logged_day() {
        let report = final_status_table(&sample_index());
        assert!(report.starts_with("Final fleet status (day 5)"));
        assert!(report.contains("TS-01"));
        assert!(report.contains("mean health"));
    }

    #[test]
    fn day_report_lists_plan_buckets() {
        let report = day_report(&sample_index(), 3).unwrap();
        assert!(report.contains("HEAVY_MONSOON"));
        assert!(report.contains("MAINTENANCE (2)"));
        assert!(day_report(&sample_index(), 42).is_none());
    }

    #[test]
    fn journey_table_covers_each_logged_day() {
        let report = journey_table(&sample_index(), "TS-05").unwrap();
        assert_eq!(report.lines().count(), 2 + 5);
        assert!(report.contains("MAINTENANCE"));
        assert!(journey_table(&sample_index(), "TS-99").is_none());
    }
}
