use crate::data::DayPlan;
use serde::{Deserialize, Serialize};

/// Mutually-exclusive operational status of a trainset on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationalStatus {
    /// Running revenue service.
    Service,
    /// Held in the inspection bay line.
    Maintenance,
    /// Parked, available as a spare.
    Standby,
}

impl OperationalStatus {
    /// Classify one train against a day's plan.
    ///
    /// Total over all inputs: a train absent from every bucket is standby, the
    /// same as explicit standby membership. Service membership is checked
    /// before maintenance, so when malformed input violates bucket
    /// disjointness the service assignment wins deterministically.
    #[must_use]
    pub fn classify(plan: &DayPlan, train_id: &str) -> Self {
        if plan.service.contains(train_id) {
            Self::Service
        } else if plan.maintenance.contains(train_id) {
            Self::Maintenance
        } else {
            Self::Standby
        }
    }

    /// Wire/display form, matching the plan bucket names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Service => "SERVICE",
            Self::Maintenance => "MAINTENANCE",
            Self::Standby => "STANDBY",
        }
    }
}

impl std::fmt::Display for OperationalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
