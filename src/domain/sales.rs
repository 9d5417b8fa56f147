use crate::domain::formatting::{format_count, format_currency};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One labelled row of the precomputed KPI summary table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    #[serde(rename = "Metric")]
    pub metric: String,
    #[serde(rename = "Value")]
    pub value: f64,
}

/// Total sales for one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySales {
    pub date: NaiveDate,
    pub sales: f64,
}

/// Aggregated sales for one `YYYY-MM` period. The label is kept as written in the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySales {
    #[serde(rename = "Year_Month")]
    pub year_month: String,
    #[serde(rename = "Monthly_Sales")]
    pub sales: f64,
}

/// Number of leading summary rows the KPI cards are built from.
pub const KPI_ROW_COUNT: usize = 4;

/// The four headline figures, taken by position from the summary table:
/// total sales, total profit, order count, average order value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KpiSummary {
    pub total_sales: f64,
    pub total_profit: f64,
    pub total_orders: f64,
    pub avg_order_value: f64,
}

/// A display-ready KPI card.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: String,
    pub delta: Option<&'static str>,
}

/// The summary table as loaded, together with the KPIs read from its leading rows.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryTable {
    pub rows: Vec<SummaryRow>,
    pub kpis: KpiSummary,
}

impl KpiSummary {
    /// Returns `None` when the table has fewer than `KPI_ROW_COUNT` rows.
    pub fn from_rows(rows: &[SummaryRow]) -> Option<Self> {
        match rows {
            [sales, profit, orders, aov, ..] => Some(Self {
                total_sales: sales.value,
                total_profit: profit.value,
                total_orders: orders.value,
                avg_order_value: aov.value,
            }),
            _ => None,
        }
    }

    pub fn cards(&self) -> [KpiCard; KPI_ROW_COUNT] {
        [
            KpiCard {
                icon: "💰",
                title: "Total Sales",
                value: format_currency(self.total_sales),
                delta: Some("+5%"),
            },
            KpiCard {
                icon: "📈",
                title: "Total Profit",
                value: format_currency(self.total_profit),
                delta: Some("+3%"),
            },
            KpiCard {
                icon: "🛒",
                title: "Total Orders",
                value: format_count(self.total_orders),
                delta: None,
            },
            KpiCard {
                icon: "📦",
                title: "Avg Order Value",
                value: format_currency(self.avg_order_value),
                delta: None,
            },
        ]
    }
}
