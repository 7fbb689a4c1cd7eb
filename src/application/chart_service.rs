// Chart series builder - Pure transforms from the snapshot to chart inputs
use crate::domain::snapshot::DashboardSnapshot;

/// Monthly sales trend, converted to millions for the area chart axis.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesSeries {
    pub months: Vec<String>,
    pub sales_millions: Vec<f64>,
}

/// Category share donut. Percentages are passed through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySeries {
    pub labels: Vec<String>,
    pub percentages: Vec<f64>,
}

/// Age distribution bar chart, one color per bracket.
#[derive(Debug, Clone, PartialEq)]
pub struct DemographicsSeries {
    pub labels: Vec<String>,
    pub percentages: Vec<f64>,
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSeries {
    pub sales: SalesSeries,
    pub category: CategorySeries,
    pub demographics: DemographicsSeries,
}

/// Derive the three chart series from a snapshot. Order and length always
/// match the input sequences.
pub fn build_series(snapshot: &DashboardSnapshot) -> DashboardSeries {
    let sales = SalesSeries {
        months: snapshot
            .monthly_sales
            .iter()
            .map(|m| m.month.clone())
            .collect(),
        sales_millions: snapshot
            .monthly_sales
            .iter()
            .map(|m| m.sales / 1_000_000.0)
            .collect(),
    };

    let category = CategorySeries {
        labels: snapshot
            .sales_by_category
            .iter()
            .map(|c| c.category.clone())
            .collect(),
        percentages: snapshot
            .sales_by_category
            .iter()
            .map(|c| c.percentage)
            .collect(),
    };

    let demographics = DemographicsSeries {
        labels: snapshot
            .customer_demographics
            .iter()
            .map(|d| d.age_group.clone())
            .collect(),
        percentages: snapshot
            .customer_demographics
            .iter()
            .map(|d| d.percentage)
            .collect(),
        colors: snapshot
            .customer_demographics
            .iter()
            .map(|d| d.color.clone())
            .collect(),
    };

    DashboardSeries {
        sales,
        category,
        demographics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fallback::fallback_snapshot;

    #[test]
    fn sales_series_is_input_divided_by_one_million() {
        let snapshot = fallback_snapshot();
        let series = build_series(&snapshot);

        assert_eq!(series.sales.months.len(), snapshot.monthly_sales.len());
        assert_eq!(
            series.sales.sales_millions.len(),
            snapshot.monthly_sales.len()
        );
        for (derived, input) in series
            .sales
            .sales_millions
            .iter()
            .zip(&snapshot.monthly_sales)
        {
            assert_eq!(*derived, input.sales / 1_000_000.0);
        }
        assert_eq!(series.sales.months[0], "Jan");
        assert_eq!(series.sales.sales_millions[0], 2.85);
    }

    #[test]
    fn category_percentages_pass_through_unchanged() {
        let snapshot = fallback_snapshot();
        let series = build_series(&snapshot);

        let expected: Vec<f64> = snapshot
            .sales_by_category
            .iter()
            .map(|c| c.percentage)
            .collect();
        assert_eq!(series.category.percentages, expected);
        assert_eq!(series.category.labels[0], "Audio");
    }

    #[test]
    fn demographics_keep_labels_percentages_and_colors_aligned() {
        let snapshot = fallback_snapshot();
        let series = build_series(&snapshot);

        assert_eq!(series.demographics.labels.len(), 5);
        assert_eq!(series.demographics.percentages.len(), 5);
        assert_eq!(series.demographics.colors.len(), 5);
        assert_eq!(series.demographics.labels[0], "18-24");
        assert_eq!(series.demographics.colors[0], "#435ebe");
    }

    #[test]
    fn empty_snapshot_yields_empty_series() {
        let snapshot = DashboardSnapshot {
            stats: Default::default(),
            recent_orders: vec![],
            top_products: vec![],
            sales_by_category: vec![],
            monthly_sales: vec![],
            customer_demographics: vec![],
            recent_messages: vec![],
        };
        let series = build_series(&snapshot);
        assert!(series.sales.months.is_empty());
        assert!(series.category.labels.is_empty());
        assert!(series.demographics.labels.is_empty());
    }
}
