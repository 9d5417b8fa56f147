//! Readers for the three precomputed dashboard tables.

use crate::domain::errors::DataLoadError;
use crate::domain::sales::{
    DailySales, KPI_ROW_COUNT, KpiSummary, MonthlySales, SummaryRow, SummaryTable,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d-%m-%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

#[derive(Debug, Deserialize)]
struct DailyRecord {
    #[serde(rename = "Order_Date")]
    order_date: String,
    #[serde(rename = "Sales")]
    sales: f64,
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DataLoadError> {
    let file = File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let record: T = result.map_err(|source| DataLoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Loads the KPI summary table and reads the headline figures from its first four rows.
pub fn load_summary(path: &Path) -> Result<SummaryTable, DataLoadError> {
    let rows: Vec<SummaryRow> = read_records(path)?;
    let kpis = KpiSummary::from_rows(&rows).ok_or_else(|| DataLoadError::MissingKpiRows {
        path: path.to_path_buf(),
        expected: KPI_ROW_COUNT,
        found: rows.len(),
    })?;
    info!("Loaded {} KPI summary rows from {:?}", rows.len(), path);
    Ok(SummaryTable { rows, kpis })
}

pub fn load_daily(path: &Path) -> Result<Vec<DailySales>, DataLoadError> {
    let records: Vec<DailyRecord> = read_records(path)?;
    let mut daily = Vec::with_capacity(records.len());

    for record in records {
        let date = parse_order_date(&record.order_date).ok_or_else(|| {
            DataLoadError::InvalidDate {
                path: path.to_path_buf(),
                value: record.order_date.clone(),
            }
        })?;
        daily.push(DailySales {
            date,
            sales: record.sales,
        });
    }

    info!("Loaded {} daily sales rows from {:?}", daily.len(), path);
    Ok(daily)
}

pub fn load_monthly(path: &Path) -> Result<Vec<MonthlySales>, DataLoadError> {
    let monthly: Vec<MonthlySales> = read_records(path)?;
    info!("Loaded {} monthly sales rows from {:?}", monthly.len(), path);
    Ok(monthly)
}

/// Accepts plain dates and full timestamps; the time of day is dropped.
pub fn parse_order_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                .map(|dt| dt.date())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_parse_order_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2014, 11, 9).unwrap();
        assert_eq!(parse_order_date("2014-11-09"), Some(expected));
        assert_eq!(parse_order_date("11/09/2014"), Some(expected));
        assert_eq!(parse_order_date("2014-11-09 00:00:00"), Some(expected));
        assert_eq!(parse_order_date(" 2014-11-09T13:45:00 "), Some(expected));
        assert_eq!(parse_order_date("yesterday"), None);
    }

    #[test]
    fn test_load_summary() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "dashboard_summary.csv",
            "Metric,Value\nTotal Sales,2297200.86\nTotal Profit,286397.02\nTotal Orders,5009\nAverage Order Value,458.61\n",
        );

        let table = load_summary(&path).unwrap();
        assert_eq!(table.rows.len(), 4);
        assert_eq!(table.rows[2].metric, "Total Orders");
        assert_eq!(table.rows[2].value, 5009.0);
        assert_eq!(table.kpis.total_orders, 5009.0);
        assert_eq!(table.kpis.avg_order_value, 458.61);
    }

    #[test]
    fn test_short_summary_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "summary.csv", "Metric,Value\nTotal Sales,10\n");

        match load_summary(&path) {
            Err(DataLoadError::MissingKpiRows {
                expected, found, ..
            }) => {
                assert_eq!(expected, 4);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_load_daily() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "daily_sales_data.csv",
            "Order_Date,Sales\n2014-01-03,16.448\n2014-01-04,288.06\n",
        );

        let daily = load_daily(&path).unwrap();
        assert_eq!(daily.len(), 2);
        assert_eq!(daily[0].date, NaiveDate::from_ymd_opt(2014, 1, 3).unwrap());
        assert_eq!(daily[1].sales, 288.06);
    }

    #[test]
    fn test_bad_date_names_the_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "daily.csv", "Order_Date,Sales\nnot-a-date,1.0\n");

        match load_daily(&path) {
            Err(DataLoadError::InvalidDate { value, .. }) => assert_eq!(value, "not-a-date"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_load_monthly() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "monthly_sales_trend.csv",
            "Year_Month,Monthly_Sales\n2014-01,14236.895\n2014-02,4519.892\n",
        );

        let monthly = load_monthly(&path).unwrap();
        assert_eq!(monthly.len(), 2);
        assert_eq!(monthly[0].year_month, "2014-01");
        assert_eq!(monthly[1].sales, 4519.892);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let res = load_monthly(Path::new("does/not/exist.csv"));
        assert!(matches!(res, Err(DataLoadError::Io { .. })));
    }

    #[test]
    fn test_non_numeric_value_is_csv_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "monthly.csv", "Year_Month,Monthly_Sales\n2014-01,lots\n");
        assert!(matches!(load_monthly(&path), Err(DataLoadError::Csv { .. })));
    }
}
