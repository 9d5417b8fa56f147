use serde::{Deserialize, Serialize};

/// Ordered list of feature names.
/// This order MUST match exactly the column order the sales model was fitted on.
/// Nothing checks that at prediction time; any change here is a breaking change
/// for existing model artifacts.
pub const FEATURE_NAMES: &[&str] = &[
    "Quantity",
    "Profit",
    "Discount",
    "Month",
    "Day",
    "DayOfWeek",
];

pub const FEATURE_COUNT: usize = 6;

/// The six inputs of a single sales prediction.
///
/// Values are not range-checked here. Bounds live with whatever collects them
/// (sidebar widgets, CLI flags); out-of-domain values go to the model as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalesFeatures {
    pub quantity: f64,
    pub profit: f64,
    pub discount: f64,
    pub month: f64,
    pub day: f64,
    pub day_of_week: f64,
}

impl Default for SalesFeatures {
    /// Sidebar defaults
    fn default() -> Self {
        Self {
            quantity: 50.0,
            profit: 500.0,
            discount: 0.1,
            month: 1.0,
            day: 15.0,
            day_of_week: 0.0,
        }
    }
}

impl SalesFeatures {
    pub fn new(
        quantity: f64,
        profit: f64,
        discount: f64,
        month: f64,
        day: f64,
        day_of_week: f64,
    ) -> Self {
        Self {
            quantity,
            profit,
            discount,
            month,
            day,
            day_of_week,
        }
    }

    /// Builds the model input row in `FEATURE_NAMES` order.
    pub fn to_vector(&self) -> Vec<f64> {
        vec![
            self.quantity,
            self.profit,
            self.discount,
            self.month,
            self.day,
            self.day_of_week,
        ]
    }
}

/// Short weekday label for a 0-based day-of-week index (0 = Monday).
pub fn weekday_label(day_of_week: u32) -> &'static str {
    match day_of_week {
        0 => "Mon",
        1 => "Tue",
        2 => "Wed",
        3 => "Thu",
        4 => "Fri",
        5 => "Sat",
        6 => "Sun",
        _ => "?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_vector_length() {
        let fs = SalesFeatures::default();
        let vec = fs.to_vector();
        assert_eq!(vec.len(), FEATURE_NAMES.len());
        assert_eq!(vec.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_feature_consistency() {
        let fs = SalesFeatures {
            quantity: 120.0,
            day_of_week: 5.0,
            ..Default::default()
        };

        let vec = fs.to_vector();
        // Quantity is index 0
        assert_eq!(vec[0], 120.0);
        // DayOfWeek is last index (5)
        assert_eq!(vec[5], 5.0);
    }

    #[test]
    fn test_defaults_match_sidebar() {
        let fs = SalesFeatures::default();
        assert_eq!(fs.to_vector(), vec![50.0, 500.0, 0.1, 1.0, 15.0, 0.0]);
    }

    #[test]
    fn test_weekday_label() {
        assert_eq!(weekday_label(0), "Mon");
        assert_eq!(weekday_label(6), "Sun");
        assert_eq!(weekday_label(9), "?");
    }
}
