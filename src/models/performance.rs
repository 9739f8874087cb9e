use serde::{Deserialize, Serialize};

/// Statut d'une représentation. Seul `Scheduled` est réservable; tout
/// libellé inconnu du backend retombe sur `Unknown` plutôt que de faire
/// échouer la désérialisation de la liste entière.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PerformanceStatus {
    Scheduled,
    Cancelled,
    Completed,
    Unknown,
}

impl From<String> for PerformanceStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Scheduled" => Self::Scheduled,
            "Cancelled" => Self::Cancelled,
            "Completed" => Self::Completed,
            _ => Self::Unknown,
        }
    }
}

impl From<PerformanceStatus> for String {
    fn from(status: PerformanceStatus) -> Self {
        match status {
            PerformanceStatus::Scheduled => "Scheduled",
            PerformanceStatus::Cancelled => "Cancelled",
            PerformanceStatus::Completed => "Completed",
            PerformanceStatus::Unknown => "Unknown",
        }
        .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    pub id: i64,
    pub spectacle_id: String,
    /// Date ISO 8601 fournie par le backend
    pub date: String,
    pub capacity: u32,
    pub unit_price: f64,
    pub available_tickets: u32,
    pub status: PerformanceStatus,
}

impl Performance {
    pub fn is_bookable(&self) -> bool {
        self.status == PerformanceStatus::Scheduled && self.available_tickets > 0
    }
}

/// Payload de création d'une représentation (admin)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPerformance {
    pub date: String,
    pub capacity: u32,
    pub unit_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn performance(status: PerformanceStatus, available: u32) -> Performance {
        Performance {
            id: 1,
            spectacle_id: "s1".into(),
            date: "2026-09-12T20:30:00".into(),
            capacity: 120,
            unit_price: 35.0,
            available_tickets: available,
            status,
        }
    }

    #[test]
    fn only_scheduled_with_tickets_is_bookable() {
        assert!(performance(PerformanceStatus::Scheduled, 3).is_bookable());
        assert!(!performance(PerformanceStatus::Scheduled, 0).is_bookable());
        assert!(!performance(PerformanceStatus::Cancelled, 3).is_bookable());
        assert!(!performance(PerformanceStatus::Completed, 3).is_bookable());
    }

    #[test]
    fn unexpected_status_maps_to_unknown() {
        let json = r#"{"id":4,"spectacleId":"s1","date":"2026-01-01T20:00:00",
                       "capacity":80,"unitPrice":20.0,"availableTickets":10,
                       "status":"Postponed"}"#;
        let perf: Performance = serde_json::from_str(json).unwrap();
        assert_eq!(perf.status, PerformanceStatus::Unknown);
        assert!(!perf.is_bookable());
    }
}
