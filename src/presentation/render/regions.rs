// Region renderers - Pure projection of the snapshot into markup
use crate::domain::snapshot::{DashboardSnapshot, Message, Order, Presence, Product, StatValue};
use crate::presentation::render::format::{
    change_label, format_currency, format_number, star_markup, status_color, trend_class,
};
use std::collections::{BTreeMap, HashMap};

/// A named anchor the renderer targets. Optional by contract: the page
/// shell asks only for the regions it defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewRegion {
    StatsPanel,
    OrdersTable,
    ProductsList,
    MessagesList,
}

/// Metric key, element id and title for the four fixed stat cards.
pub const STAT_CARDS: [(&str, &str, &str); 4] = [
    ("totalSales", "total-sales", "Total Sales"),
    ("totalOrders", "total-orders", "Total Orders"),
    ("averageOrderValue", "average-order", "Average Order Value"),
    ("customerSatisfaction", "customer-satisfaction", "Customer Satisfaction"),
];

/// Build the markup for each requested region. Every call regenerates a
/// region from scratch; regions not requested are skipped silently.
pub fn render_regions(
    snapshot: &DashboardSnapshot,
    regions: &[ViewRegion],
) -> HashMap<ViewRegion, String> {
    regions
        .iter()
        .map(|region| {
            let markup = match region {
                ViewRegion::StatsPanel => stats_panel(&snapshot.stats),
                ViewRegion::OrdersTable => orders_table_body(&snapshot.recent_orders),
                ViewRegion::ProductsList => products_list(&snapshot.top_products),
                ViewRegion::MessagesList => messages_list(&snapshot.recent_messages),
            };
            (*region, markup)
        })
        .collect()
}

/// The four stat cards, in fixed order. A metric missing from the snapshot
/// skips its card.
pub fn stats_panel(stats: &BTreeMap<String, StatValue>) -> String {
    let mut cards = String::new();
    for (key, element_id, title) in STAT_CARDS {
        let Some(stat) = stats.get(key) else {
            continue;
        };
        cards.push_str(&format!(
            r#"<div class="stat-card" id="{element_id}">
    <p class="stat-title">{title}</p>
    <p class="stat-value">{value}</p>
    <p class="stat-change {class}">{change}</p>
</div>
"#,
            value = stat_value_text(stat),
            class = trend_class(stat.trend),
            change = change_label(stat.change),
        ));
    }
    cards
}

/// Value slot text. Precedence: currency, then ratio, then plain number.
pub fn stat_value_text(stat: &StatValue) -> String {
    if let Some(currency) = &stat.currency {
        format_currency(stat.value, currency)
    } else if let Some(max_value) = stat.max_value {
        format!("{}/{}", stat.value, max_value)
    } else {
        format_number(stat.value)
    }
}

/// Table rows for the recent orders, one `<tr>` per order, input order kept.
pub fn orders_table_body(orders: &[Order]) -> String {
    let mut rows = String::new();
    for order in orders {
        rows.push_str(&format!(
            r#"<tr>
    <td class="col-3">
        <div class="d-flex align-items-center">
            <div class="avatar avatar-md">
                <img src="{avatar}" alt="{name}">
            </div>
            <div class="ms-3">
                <p class="font-bold mb-0">{name}</p>
                <p class="text-muted mb-0 small">{email}</p>
            </div>
        </div>
    </td>
    <td class="col-auto">
        <p class="mb-0">{product}</p>
        <p class="text-muted mb-0 small">{id}</p>
    </td>
    <td class="col-2">
        <span class="badge bg-{color}">{status}</span>
    </td>
    <td class="col-2 text-end">
        <p class="font-bold mb-0">{amount}</p>
    </td>
</tr>
"#,
            avatar = order.customer.avatar_url,
            name = order.customer.name,
            email = order.customer.email,
            product = order.product,
            id = order.id,
            color = status_color(&order.status),
            status = order.status,
            amount = format_currency(order.amount, "USD"),
        ));
    }
    rows
}

/// Ranked product entries with star rating, revenue and units sold.
pub fn products_list(products: &[Product]) -> String {
    let mut items = String::new();
    for product in products {
        items.push_str(&format!(
            r#"<div class="product-item d-flex align-items-center mb-3">
    <div class="product-image me-3">
        <img src="{image}" alt="{name}" class="rounded">
    </div>
    <div class="product-info flex-grow-1">
        <h6 class="mb-1">{name}</h6>
        <p class="text-muted mb-1 small">{category}</p>
        <div class="d-flex align-items-center">
            <div class="stars me-2">{stars}</div>
            <span class="text-muted small">{rating}/5</span>
        </div>
    </div>
    <div class="product-stats text-end">
        <p class="font-bold mb-1">{revenue}</p>
        <p class="text-muted mb-0 small">{sold} sold</p>
    </div>
</div>
"#,
            image = product.image_url,
            name = product.name,
            category = product.category,
            stars = star_markup(product.rating),
            rating = product.rating,
            revenue = format_currency(product.revenue, "USD"),
            sold = format_number(product.sales as f64),
        ));
    }
    items
}

/// Recent message entries; unread ones carry the `unread` class and marker.
pub fn messages_list(messages: &[Message]) -> String {
    let mut items = String::new();
    for message in messages {
        let unread_class = if message.unread { " unread" } else { "" };
        let unread_marker = if message.unread {
            r#"<div class="unread-indicator"></div>"#
        } else {
            ""
        };
        items.push_str(&format!(
            r#"<div class="recent-message d-flex px-4 py-3{unread_class}">
    <div class="avatar avatar-lg position-relative">
        <img src="{avatar}" alt="{name}">
        <span class="status-indicator {presence}"></span>
    </div>
    <div class="name ms-4 flex-grow-1">
        <h5 class="mb-1">{name}</h5>
        <p class="text-muted mb-0 small">{text}</p>
        <p class="text-muted mb-0 small">{time}</p>
    </div>
    {unread_marker}
</div>
"#,
            avatar = message.sender.avatar_url,
            name = message.sender.name,
            presence = presence_class(message.sender.status),
            text = message.text,
            time = message.relative_time,
        ));
    }
    items
}

fn presence_class(status: Presence) -> &'static str {
    match status {
        Presence::Online => "online",
        Presence::Offline => "offline",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fallback::fallback_snapshot;
    use crate::domain::snapshot::Trend;

    #[test]
    fn orders_table_has_one_row_per_order_in_input_order() {
        let orders = fallback_snapshot().recent_orders;
        let body = orders_table_body(&orders);

        assert_eq!(body.matches("<tr>").count(), orders.len());
        let first = body.find("Sarah Johnson").unwrap();
        let second = body.find("Michael Chen").unwrap();
        assert!(first < second);
    }

    #[test]
    fn order_rows_carry_status_badge_and_formatted_amount() {
        let orders = fallback_snapshot().recent_orders;
        let body = orders_table_body(&orders);

        assert!(body.contains(r#"<span class="badge bg-success">completed</span>"#));
        assert!(body.contains(r#"<span class="badge bg-warning">processing</span>"#));
        assert!(body.contains("$299.99"));
    }

    #[test]
    fn stats_panel_applies_the_value_precedence() {
        let stats = fallback_snapshot().stats;
        let panel = stats_panel(&stats);

        assert!(panel.contains("$2,845,000.00"));
        assert!(panel.contains("15,420"));
        assert!(panel.contains("4.8/5"));
        assert!(panel.contains(r#"id="total-sales""#));
        assert!(panel.contains(r#"id="customer-satisfaction""#));
    }

    #[test]
    fn stats_panel_styles_by_trend_not_change_sign() {
        let mut stats = fallback_snapshot().stats;
        let stat = stats.get_mut("totalSales").unwrap();
        stat.change = -3.4;
        stat.trend = Trend::Up;

        let panel = stats_panel(&stats);
        assert!(panel.contains(r#"<p class="stat-change text-success">-3.4%</p>"#));
    }

    #[test]
    fn stats_panel_skips_missing_metrics() {
        let mut stats = fallback_snapshot().stats;
        stats.remove("totalOrders");

        let panel = stats_panel(&stats);
        assert!(!panel.contains(r#"id="total-orders""#));
        assert_eq!(panel.matches("stat-card").count(), 3);
    }

    #[test]
    fn products_list_shows_stars_rating_and_units() {
        let products = fallback_snapshot().top_products;
        let list = products_list(&products);

        assert!(list.contains("4.8/5"));
        assert!(list.contains("1,250 sold"));
        assert!(list.contains("$374,987.50"));
        assert!(list.contains("bi-star-fill"));
    }

    #[test]
    fn messages_list_marks_unread_and_presence() {
        let messages = fallback_snapshot().recent_messages;
        let list = messages_list(&messages);

        assert_eq!(list.matches("unread-indicator").count(), 2);
        assert_eq!(list.matches(r#"status-indicator online"#).count(), 3);
        assert_eq!(list.matches(r#"status-indicator offline"#).count(), 1);
    }

    #[test]
    fn unrequested_regions_are_skipped() {
        let snapshot = fallback_snapshot();
        let rendered = render_regions(&snapshot, &[ViewRegion::StatsPanel]);

        assert_eq!(rendered.len(), 1);
        assert!(rendered.contains_key(&ViewRegion::StatsPanel));
        assert!(!rendered.contains_key(&ViewRegion::OrdersTable));
    }

    #[test]
    fn rerender_with_a_new_snapshot_leaves_no_trace_of_the_old() {
        let first = fallback_snapshot();
        let mut second = fallback_snapshot();
        second.recent_orders.truncate(1);
        for order in &mut second.recent_orders {
            order.customer.name = "Alex Morgan".to_string();
        }

        let _ = orders_table_body(&first.recent_orders);
        let body = orders_table_body(&second.recent_orders);
        assert_eq!(body.matches("<tr>").count(), 1);
        assert!(body.contains("Alex Morgan"));
        assert!(!body.contains("Sarah Johnson"));
    }
}
