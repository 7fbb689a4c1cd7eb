// Dashboard snapshot domain model
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;

/// One complete dashboard dataset for a single render pass.
///
/// Loaded wholesale (never merged or patched) and read-only afterwards.
/// Collections default to empty so a snapshot with a missing section still
/// loads; the matching region simply renders empty.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    #[serde(default)]
    pub stats: BTreeMap<String, StatValue>,
    #[serde(default)]
    pub recent_orders: Vec<Order>,
    #[serde(default)]
    pub top_products: Vec<Product>,
    #[serde(default)]
    pub sales_by_category: Vec<CategorySales>,
    #[serde(default)]
    pub monthly_sales: Vec<MonthlySales>,
    #[serde(default)]
    pub customer_demographics: Vec<AgeBracket>,
    #[serde(default)]
    pub recent_messages: Vec<Message>,
}

/// A single metric. At most one of `currency` / `max_value` is expected;
/// rendering precedence is currency, then ratio, then plain number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatValue {
    pub value: f64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub max_value: Option<f64>,
    pub change: f64,
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer: Customer,
    pub product: String,
    pub amount: f64,
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub category: String,
    pub sales: u64,
    pub revenue: f64,
    /// 0 to 5, fractional ratings allowed.
    pub rating: f64,
    pub image_url: String,
}

/// Pre-computed share of sales per category. Percentages are inputs, not
/// derived here, and may not sum to 100.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySales {
    pub category: String,
    pub sales: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySales {
    pub month: String,
    pub sales: f64,
    pub orders: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeBracket {
    pub age_group: String,
    pub percentage: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    pub relative_time: String,
    pub unread: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sender {
    pub name: String,
    pub avatar_url: String,
    pub status: Presence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Online,
    Offline,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_wire_fields() {
        let raw = r#"{
            "stats": {
                "totalSales": { "value": 2845000, "currency": "USD", "change": 12.5, "trend": "up" },
                "customerSatisfaction": { "value": 4.8, "maxValue": 5, "change": 0.3, "trend": "up" }
            },
            "recentOrders": [{
                "id": "ORD-001",
                "customer": { "name": "Sarah Johnson", "email": "sarah.j@email.com", "avatarUrl": "faces/1.jpg" },
                "product": "Premium Wireless Headphones",
                "amount": 299.99,
                "status": "completed",
                "timestamp": "2024-01-15T10:30:00Z"
            }],
            "recentMessages": [{
                "id": 1,
                "sender": { "name": "Customer Support", "avatarUrl": "faces/1.jpg", "status": "online" },
                "text": "New order has been placed",
                "relativeTime": "2 min ago",
                "unread": true
            }]
        }"#;

        let snapshot: DashboardSnapshot = serde_json::from_str(raw).unwrap();
        assert_eq!(snapshot.stats["totalSales"].currency.as_deref(), Some("USD"));
        assert_eq!(snapshot.stats["customerSatisfaction"].max_value, Some(5.0));
        assert_eq!(snapshot.stats["totalSales"].trend, Trend::Up);
        assert_eq!(snapshot.recent_orders[0].customer.avatar_url, "faces/1.jpg");
        assert_eq!(snapshot.recent_messages[0].sender.status, Presence::Online);
        assert!(snapshot.recent_messages[0].unread);
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let snapshot: DashboardSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.stats.is_empty());
        assert!(snapshot.recent_orders.is_empty());
        assert!(snapshot.monthly_sales.is_empty());
    }
}
