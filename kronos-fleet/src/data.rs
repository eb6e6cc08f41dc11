use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Job-card marker meaning no open maintenance job.
pub const JOB_CARD_NONE: &str = "NONE";

/// Per-day partition of the fleet into the three operational buckets.
///
/// The buckets are pairwise disjoint in well-formed input. A train listed in
/// none of them is treated as standby downstream; that is a tolerated gap in
/// the producer's output, not a validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DayPlan {
    #[serde(rename = "SERVICE", default)]
    pub service: BTreeSet<String>,
    #[serde(rename = "MAINTENANCE", default)]
    pub maintenance: BTreeSet<String>,
    #[serde(rename = "STANDBY", default)]
    pub standby: BTreeSet<String>,
}

/// Health snapshot for one trainset as of a simulated day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainRecord {
    pub train_id: String,
    pub health_score: f64,
    pub current_km: f64,
    #[serde(default)]
    pub current_hours: f64,
    #[serde(default)]
    pub consecutive_service_days: u32,
    #[serde(default = "default_job_card_priority")]
    pub job_card_priority: String,
    #[serde(default)]
    pub is_cert_expired: bool,
    #[serde(default)]
    pub branding_sla_active: bool,
    #[serde(default)]
    pub target_hours: f64,
}

fn default_job_card_priority() -> String {
    JOB_CARD_NONE.to_string()
}

impl TrainRecord {
    /// Whether the train carries an open maintenance job card.
    #[must_use]
    pub fn has_open_job(&self) -> bool {
        self.job_card_priority != JOB_CARD_NONE
    }
}

/// One simulated day: scenario label, induction plan and fleet snapshot.
///
/// `day` is the logical key. The log is ordinarily dense and 1-indexed but the
/// format does not guarantee it, so `day` must never be assumed to equal the
/// record's position in the sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    pub day: u32,
    #[serde(default)]
    pub scenario: String,
    #[serde(default)]
    pub plan: DayPlan,
    #[serde(default)]
    pub fleet_status_today: Vec<TrainRecord>,
}

/// Parse a raw simulation log document: a JSON array of day records.
///
/// # Errors
///
/// Returns an error if the document is not a JSON array of well-formed day
/// records. Emptiness is not checked here; `LogIndex::load` owns that rule.
pub fn parse_log(json: &str) -> Result<Vec<DayRecord>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_day_record() {
        let json = r#"[
            {
                "day": 1,
                "scenario": "NORMAL",
                "plan": {
                    "SERVICE": ["TS-01", "TS-05"],
                    "MAINTENANCE": ["TS-02"],
                    "STANDBY": ["TS-08"]
                },
                "fleet_status_today": [
                    {
                        "train_id": "TS-01",
                        "health_score": 95.5,
                        "current_km": 200.0,
                        "job_card_priority": "NONE",
                        "is_cert_expired": false
                    }
                ]
            }
        ]"#;

        let days = parse_log(json).unwrap();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].day, 1);
        assert!(days[0].plan.service.contains("TS-05"));
        let train = &days[0].fleet_status_today[0];
        assert_eq!(train.train_id, "TS-01");
        assert!(!train.has_open_job());
        assert_eq!(train.current_hours, 0.0);
        assert_eq!(train.consecutive_service_days, 0);
        assert!(!train.branding_sla_active);
    }

    #[test]
    fn missing_plan_buckets_default_to_empty() {
        let json = r#"[{ "day": 3, "scenario": "", "plan": {}, "fleet_status_today": [] }]"#;
        let days = parse_log(json).unwrap();
        assert!(days[0].plan.service.is_empty());
        assert!(days[0].plan.maintenance.is_empty());
        assert!(days[0].plan.standby.is_empty());
    }

    #[test]
    fn open_job_card_detected_for_any_non_none_priority() {
        let json = r#"[{
            "day": 1,
            "plan": {},
            "fleet_status_today": [
                { "train_id": "TS-02", "health_score": 20.0, "current_km": 1800.0,
                  "job_card_priority": "CRITICAL", "is_cert_expired": true }
            ]
        }]"#;
        let days = parse_log(json).unwrap();
        assert!(days[0].fleet_status_today[0].has_open_job());
        assert!(days[0].fleet_status_today[0].is_cert_expired);
    }

    #[test]
    fn rejects_non_array_document() {
        assert!(parse_log(r#"{"day": 1}"#).is_err());
        assert!(parse_log("not json").is_err());
    }
}
