// Dashboard page assembly
use crate::application::chart_service::build_series;
use crate::domain::snapshot::DashboardSnapshot;
use crate::presentation::render::charts::charts_script;
use crate::presentation::render::regions::{render_regions, ViewRegion};
use crate::presentation::render::style::STYLES;
use chrono::Utc;

/// All regions the page shell defines.
const PAGE_REGIONS: [ViewRegion; 4] = [
    ViewRegion::StatsPanel,
    ViewRegion::OrdersTable,
    ViewRegion::ProductsList,
    ViewRegion::MessagesList,
];

/// Generate the complete dashboard HTML page for one snapshot.
pub fn dashboard_page(snapshot: &DashboardSnapshot) -> serde_json::Result<String> {
    let mut regions = render_regions(snapshot, &PAGE_REGIONS);
    let script = charts_script(&build_series(snapshot))?;
    let generated_at = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>E-commerce Dashboard</title>
    <script src="https://cdn.jsdelivr.net/npm/apexcharts"></script>
    <style>
{styles}
    </style>
</head>
<body>
    <div class="container">
        <header>
            <h1>E-commerce Dashboard</h1>
            <span class="refresh-time">Last updated {generated_at}</span>
        </header>

        <section class="stats-panel">
{stats}
        </section>

        <section class="panel">
            <h2>Sales Overview</h2>
            <div id="sales-chart"></div>
        </section>

        <div class="panel-row">
            <section class="panel">
                <h2>Sales by Category</h2>
                <div id="category-chart"></div>
            </section>
            <section class="panel">
                <h2>Customer Demographics</h2>
                <div id="demographics-chart"></div>
            </section>
        </div>

        <section class="panel">
            <h2>Recent Orders</h2>
            <table id="recent-orders-table">
                <thead>
                    <tr>
                        <th>Customer</th>
                        <th>Product</th>
                        <th>Status</th>
                        <th class="text-end">Amount</th>
                    </tr>
                </thead>
                <tbody>
{orders}
                </tbody>
            </table>
        </section>

        <div class="panel-row">
            <section class="panel">
                <h2>Top Products</h2>
                <div id="top-products-list">
{products}
                </div>
            </section>
            <section class="panel">
                <h2>Recent Messages</h2>
                <div id="recent-messages-list">
{messages}
                </div>
            </section>
        </div>
    </div>
    <script>
{script}
    </script>
</body>
</html>
"#,
        styles = STYLES,
        stats = regions.remove(&ViewRegion::StatsPanel).unwrap_or_default(),
        orders = regions.remove(&ViewRegion::OrdersTable).unwrap_or_default(),
        products = regions.remove(&ViewRegion::ProductsList).unwrap_or_default(),
        messages = regions.remove(&ViewRegion::MessagesList).unwrap_or_default(),
    ))
}
