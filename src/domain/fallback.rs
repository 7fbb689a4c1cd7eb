// Built-in fallback dataset used whenever the snapshot source is unavailable
use super::snapshot::{
    AgeBracket, CategorySales, Customer, DashboardSnapshot, Message, MonthlySales, Order, Presence,
    Product, Sender, StatValue, Trend,
};
use chrono::{DateTime, TimeZone, Utc};
use std::collections::BTreeMap;

fn order_time(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, hour, minute, 0).unwrap()
}

/// The fixed default snapshot. The dashboard must always render something,
/// so a failed load is answered with this dataset instead of an error.
pub fn fallback_snapshot() -> DashboardSnapshot {
    DashboardSnapshot {
        stats: BTreeMap::from([
            (
                "totalSales".to_string(),
                StatValue {
                    value: 2_845_000.0,
                    currency: Some("USD".to_string()),
                    max_value: None,
                    change: 12.5,
                    trend: Trend::Up,
                },
            ),
            (
                "totalOrders".to_string(),
                StatValue {
                    value: 15_420.0,
                    currency: None,
                    max_value: None,
                    change: 8.2,
                    trend: Trend::Up,
                },
            ),
            (
                "averageOrderValue".to_string(),
                StatValue {
                    value: 184.50,
                    currency: Some("USD".to_string()),
                    max_value: None,
                    change: -2.1,
                    trend: Trend::Down,
                },
            ),
            (
                "customerSatisfaction".to_string(),
                StatValue {
                    value: 4.8,
                    currency: None,
                    max_value: Some(5.0),
                    change: 0.3,
                    trend: Trend::Up,
                },
            ),
        ]),
        recent_orders: vec![
            Order {
                id: "ORD-001".to_string(),
                customer: Customer {
                    name: "Sarah Johnson".to_string(),
                    email: "sarah.j@email.com".to_string(),
                    avatar_url: "assets/static/images/faces/1.jpg".to_string(),
                },
                product: "Premium Wireless Headphones".to_string(),
                amount: 299.99,
                status: "completed".to_string(),
                timestamp: order_time(10, 30),
            },
            Order {
                id: "ORD-002".to_string(),
                customer: Customer {
                    name: "Michael Chen".to_string(),
                    email: "mchen@email.com".to_string(),
                    avatar_url: "assets/static/images/faces/2.jpg".to_string(),
                },
                product: "Smart Fitness Watch".to_string(),
                amount: 199.99,
                status: "processing".to_string(),
                timestamp: order_time(9, 15),
            },
            Order {
                id: "ORD-003".to_string(),
                customer: Customer {
                    name: "Emily Rodriguez".to_string(),
                    email: "emily.r@email.com".to_string(),
                    avatar_url: "assets/static/images/faces/3.jpg".to_string(),
                },
                product: "Portable Bluetooth Speaker".to_string(),
                amount: 89.99,
                status: "shipped".to_string(),
                timestamp: order_time(8, 45),
            },
            Order {
                id: "ORD-004".to_string(),
                customer: Customer {
                    name: "David Kim".to_string(),
                    email: "dkim@email.com".to_string(),
                    avatar_url: "assets/static/images/faces/4.jpg".to_string(),
                },
                product: "Wireless Charging Pad".to_string(),
                amount: 49.99,
                status: "pending".to_string(),
                timestamp: order_time(8, 20),
            },
            Order {
                id: "ORD-005".to_string(),
                customer: Customer {
                    name: "Lisa Thompson".to_string(),
                    email: "lisa.t@email.com".to_string(),
                    avatar_url: "assets/static/images/faces/5.jpg".to_string(),
                },
                product: "Smart Home Hub".to_string(),
                amount: 159.99,
                status: "completed".to_string(),
                timestamp: order_time(7, 55),
            },
        ],
        top_products: vec![
            Product {
                name: "Premium Wireless Headphones".to_string(),
                category: "Audio".to_string(),
                sales: 1250,
                revenue: 374_987.50,
                rating: 4.8,
                image_url: "assets/static/images/samples/1.png".to_string(),
            },
            Product {
                name: "Smart Fitness Watch".to_string(),
                category: "Wearables".to_string(),
                sales: 980,
                revenue: 195_980.20,
                rating: 4.6,
                image_url: "assets/static/images/samples/2.png".to_string(),
            },
            Product {
                name: "Portable Bluetooth Speaker".to_string(),
                category: "Audio".to_string(),
                sales: 750,
                revenue: 67_492.50,
                rating: 4.7,
                image_url: "assets/static/images/samples/3.png".to_string(),
            },
            Product {
                name: "Wireless Charging Pad".to_string(),
                category: "Accessories".to_string(),
                sales: 1200,
                revenue: 59_988.00,
                rating: 4.5,
                image_url: "assets/static/images/samples/4.png".to_string(),
            },
            Product {
                name: "Smart Home Hub".to_string(),
                category: "Smart Home".to_string(),
                sales: 450,
                revenue: 71_995.50,
                rating: 4.9,
                image_url: "assets/static/images/samples/5.png".to_string(),
            },
        ],
        sales_by_category: vec![
            CategorySales {
                category: "Audio".to_string(),
                sales: 442_480.00,
                percentage: 35.0,
            },
            CategorySales {
                category: "Wearables".to_string(),
                sales: 195_980.20,
                percentage: 15.0,
            },
            CategorySales {
                category: "Smart Home".to_string(),
                sales: 71_995.50,
                percentage: 12.0,
            },
            CategorySales {
                category: "Accessories".to_string(),
                sales: 59_988.00,
                percentage: 10.0,
            },
            CategorySales {
                category: "Computers".to_string(),
                sales: 89_982.30,
                percentage: 8.0,
            },
            CategorySales {
                category: "Others".to_string(),
                sales: 374_574.00,
                percentage: 20.0,
            },
        ],
        monthly_sales: vec![
            month("Jan", 2_850_000.0, 15_420),
            month("Feb", 3_200_000.0, 16_800),
            month("Mar", 2_950_000.0, 15_200),
            month("Apr", 3_100_000.0, 16_200),
            month("May", 3_400_000.0, 17_800),
            month("Jun", 3_600_000.0, 18_500),
            month("Jul", 3_800_000.0, 19_200),
            month("Aug", 3_950_000.0, 19_800),
            month("Sep", 4_100_000.0, 20_500),
            month("Oct", 4_250_000.0, 21_200),
            month("Nov", 4_400_000.0, 22_000),
            month("Dec", 4_600_000.0, 23_000),
        ],
        customer_demographics: vec![
            bracket("18-24", 15.0, "#435ebe"),
            bracket("25-34", 35.0, "#38b2ac"),
            bracket("35-44", 25.0, "#f59e0b"),
            bracket("45-54", 15.0, "#ef4444"),
            bracket("55+", 10.0, "#8b5cf6"),
        ],
        recent_messages: vec![
            Message {
                id: 1,
                sender: Sender {
                    name: "Customer Support".to_string(),
                    avatar_url: "assets/static/images/faces/1.jpg".to_string(),
                    status: Presence::Online,
                },
                text: "New order #ORD-006 has been placed".to_string(),
                relative_time: "2 min ago".to_string(),
                unread: true,
            },
            Message {
                id: 2,
                sender: Sender {
                    name: "Inventory Manager".to_string(),
                    avatar_url: "assets/static/images/faces/2.jpg".to_string(),
                    status: Presence::Online,
                },
                text: "Low stock alert: Premium Headphones".to_string(),
                relative_time: "15 min ago".to_string(),
                unread: true,
            },
            Message {
                id: 3,
                sender: Sender {
                    name: "Marketing Team".to_string(),
                    avatar_url: "assets/static/images/faces/3.jpg".to_string(),
                    status: Presence::Offline,
                },
                text: "New campaign launched successfully".to_string(),
                relative_time: "1 hour ago".to_string(),
                unread: false,
            },
            Message {
                id: 4,
                sender: Sender {
                    name: "Sales Manager".to_string(),
                    avatar_url: "assets/static/images/faces/4.jpg".to_string(),
                    status: Presence::Online,
                },
                text: "Monthly sales target achieved!".to_string(),
                relative_time: "2 hours ago".to_string(),
                unread: false,
            },
        ],
    }
}

fn month(name: &str, sales: f64, orders: u64) -> MonthlySales {
    MonthlySales {
        month: name.to_string(),
        sales,
        orders,
    }
}

fn bracket(age_group: &str, percentage: f64, color: &str) -> AgeBracket {
    AgeBracket {
        age_group: age_group.to_string(),
        percentage,
        color: color.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_covers_every_dashboard_section() {
        let snapshot = fallback_snapshot();

        assert_eq!(snapshot.stats.len(), 4);
        assert!(snapshot.stats.contains_key("totalSales"));
        assert!(snapshot.stats.contains_key("customerSatisfaction"));
        assert_eq!(snapshot.recent_orders.len(), 5);
        assert_eq!(snapshot.top_products.len(), 5);
        assert_eq!(snapshot.sales_by_category.len(), 6);
        assert_eq!(snapshot.monthly_sales.len(), 12);
        assert_eq!(snapshot.customer_demographics.len(), 5);
        assert_eq!(snapshot.recent_messages.len(), 4);
    }

    #[test]
    fn fallback_orders_are_most_recent_first() {
        let orders = fallback_snapshot().recent_orders;
        for pair in orders.windows(2) {
            assert!(pair[0].timestamp > pair[1].timestamp);
        }
    }
}
