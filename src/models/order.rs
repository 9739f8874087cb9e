use serde::{Deserialize, Serialize};

use crate::models::{Performance, Spectacle};

/// Une commande telle que listée par /orders, avec le détail imbriqué
/// ticket -> représentation -> spectacle calculé côté serveur.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub created_at: String,
    pub status: String,
    #[serde(default)]
    pub total_price: Option<f64>,
    #[serde(default)]
    pub tickets: Vec<Ticket>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: i64,
    #[serde(default)]
    pub performance: Option<TicketPerformance>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketPerformance {
    #[serde(flatten)]
    pub performance: Performance,
    #[serde(default)]
    pub spectacle: Option<Spectacle>,
}

impl Order {
    /// Nom du spectacle porté par le premier ticket de la commande
    pub fn spectacle_name(&self) -> &str {
        self.tickets
            .first()
            .and_then(|t| t.performance.as_ref())
            .and_then(|p| p.spectacle.as_ref())
            .map(|s| s.name.as_str())
            .unwrap_or("Spectacle inconnu")
    }

    pub fn ticket_count(&self) -> usize {
        self.tickets.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub performance_id: i64,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub items: Vec<OrderItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spectacle_name_falls_back_when_detail_is_missing() {
        let order: Order = serde_json::from_str(
            r#"{"id":12,"createdAt":"2026-03-01T10:00:00","status":"Paid"}"#,
        )
        .unwrap();
        assert_eq!(order.spectacle_name(), "Spectacle inconnu");
        assert_eq!(order.ticket_count(), 0);
        assert_eq!(order.total_price, None);
    }

    #[test]
    fn spectacle_name_reads_the_nested_detail() {
        let json = r#"{
            "id": 12,
            "createdAt": "2026-03-01T10:00:00",
            "status": "Paid",
            "totalPrice": 70.0,
            "tickets": [{
                "id": 1,
                "performance": {
                    "id": 4,
                    "spectacleId": "s1",
                    "date": "2026-04-01T20:00:00",
                    "capacity": 100,
                    "unitPrice": 35.0,
                    "availableTickets": 12,
                    "status": "Scheduled",
                    "spectacle": {
                        "id": "s1",
                        "name": "Le Roi Lion",
                        "description": "Savane",
                        "duration": "2h10",
                        "Type": "Comédie musicale"
                    }
                }
            }]
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.spectacle_name(), "Le Roi Lion");
        assert_eq!(order.ticket_count(), 1);
    }

    #[test]
    fn create_request_serializes_in_camel_case() {
        let request = CreateOrderRequest {
            items: vec![OrderItem { performance_id: 4, quantity: 2 }],
            payment_method_id: Some("pm_123".into()),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains(r#""performanceId":4"#));
        assert!(json.contains(r#""paymentMethodId":"pm_123""#));
    }
}
