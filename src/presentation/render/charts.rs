// Chart handoff - serialized series payload plus the initialization script
use crate::application::chart_service::DashboardSeries;
use serde_json::json;

/// Emit the script block for the three charts: the serialized series under
/// `DASHBOARD_SERIES`, then a fixed initializer that builds one ApexCharts
/// configuration per anchor and fires `render()`. Fire and forget; nothing
/// is read back from the library.
pub fn charts_script(series: &DashboardSeries) -> serde_json::Result<String> {
    let payload = json!({
        "months": series.sales.months,
        "salesMillions": series.sales.sales_millions,
        "categoryLabels": series.category.labels,
        "categoryPercentages": series.category.percentages,
        "ageGroups": series.demographics.labels,
        "agePercentages": series.demographics.percentages,
        "ageColors": series.demographics.colors,
    });

    Ok(format!(
        "const DASHBOARD_SERIES = {};\n{}",
        serde_json::to_string(&payload)?,
        CHART_INIT
    ))
}

// Initialization deferred by a fixed short delay so layout settles before
// the library measures anchor dimensions. Anchors missing from the page are
// skipped; a throwing library call is left unhandled.
const CHART_INIT: &str = r#"
function initializeSalesChart() {
    const el = document.getElementById('sales-chart');
    if (!el) return;
    const options = {
        series: [{ name: 'Sales (Millions)', data: DASHBOARD_SERIES.salesMillions }],
        chart: { type: 'area', height: 350, toolbar: { show: false }, background: 'transparent' },
        dataLabels: { enabled: false },
        stroke: { curve: 'smooth', width: 3 },
        colors: ['#667eea'],
        fill: {
            type: 'gradient',
            gradient: { shadeIntensity: 1, opacityFrom: 0.7, opacityTo: 0.1, stops: [0, 90, 100] }
        },
        xaxis: { categories: DASHBOARD_SERIES.months, labels: { style: { colors: '#6b7280' } } },
        yaxis: {
            labels: {
                formatter: (value) => '$' + value + 'M',
                style: { colors: '#6b7280' }
            }
        },
        tooltip: { y: { formatter: (value) => '$' + (value * 1000000).toLocaleString() } },
        grid: { borderColor: '#e5e7eb', strokeDashArray: 4 }
    };
    new ApexCharts(el, options).render();
}

function initializeCategoryChart() {
    const el = document.getElementById('category-chart');
    if (!el) return;
    const options = {
        series: DASHBOARD_SERIES.categoryPercentages,
        chart: { type: 'donut', height: 300, background: 'transparent' },
        labels: DASHBOARD_SERIES.categoryLabels,
        colors: ['#667eea', '#38b2ac', '#f59e0b', '#ef4444', '#8b5cf6', '#10b981'],
        plotOptions: { pie: { donut: { size: '60%' } } },
        legend: { position: 'bottom', labels: { colors: '#6b7280' } }
    };
    new ApexCharts(el, options).render();
}

function initializeDemographicsChart() {
    const el = document.getElementById('demographics-chart');
    if (!el) return;
    const options = {
        series: [{ name: 'Percentage', data: DASHBOARD_SERIES.agePercentages }],
        chart: { type: 'bar', height: 300, toolbar: { show: false }, background: 'transparent' },
        colors: DASHBOARD_SERIES.ageColors,
        plotOptions: {
            bar: { horizontal: true, dataLabels: { position: 'top' }, borderRadius: 4 }
        },
        dataLabels: {
            enabled: true,
            formatter: (val) => val + '%',
            style: { fontSize: '12px', colors: ['#fff'] }
        },
        xaxis: {
            categories: DASHBOARD_SERIES.ageGroups,
            labels: { formatter: (val) => val + '%', style: { colors: '#6b7280' } }
        },
        yaxis: { labels: { show: true, style: { colors: '#6b7280' } } },
        grid: { borderColor: '#e5e7eb', strokeDashArray: 4 }
    };
    new ApexCharts(el, options).render();
}

setTimeout(() => {
    initializeSalesChart();
    initializeCategoryChart();
    initializeDemographicsChart();
}, 100);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::chart_service::build_series;
    use crate::domain::fallback::fallback_snapshot;

    #[test]
    fn script_embeds_the_serialized_series() {
        let series = build_series(&fallback_snapshot());
        let script = charts_script(&series).unwrap();

        assert!(script.starts_with("const DASHBOARD_SERIES = "));
        assert!(script.contains("\"months\":[\"Jan\",\"Feb\""));
        assert!(script.contains("2.85"));
        assert!(script.contains("\"ageColors\":[\"#435ebe\""));
    }

    #[test]
    fn script_defers_initialization_and_targets_all_three_anchors() {
        let series = build_series(&fallback_snapshot());
        let script = charts_script(&series).unwrap();

        assert!(script.contains("setTimeout"));
        assert!(script.contains("}, 100);"));
        assert!(script.contains("sales-chart"));
        assert!(script.contains("category-chart"));
        assert!(script.contains("demographics-chart"));
    }
}
