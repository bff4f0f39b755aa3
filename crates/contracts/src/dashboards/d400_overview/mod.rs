use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MonthlyOrders {
    pub month: u32,
    pub total_orders: u32,
}

/// `GET /Admin/Dashboard` totals and month-over-month changes (percent).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardData {
    pub total_users: u64,
    pub total_providers: u64,
    pub total_orders: u64,
    pub total_services: u64,
    pub users_percentage_change: f64,
    pub providers_percentage_change: f64,
    pub orders_percentage_change: f64,
    pub services_percentage_change: f64,
    pub total_orders_by_month: Option<Vec<MonthlyOrders>>,
}

impl DashboardData {
    /// Twelve monthly buckets (January first), zero-filled where missing.
    pub fn orders_per_month(&self) -> [u32; 12] {
        let mut months = [0u32; 12];
        for entry in self.total_orders_by_month.iter().flatten() {
            if (1..=12).contains(&entry.month) {
                months[(entry.month - 1) as usize] = entry.total_orders;
            }
        }
        months
    }
}

/// `"+12.5% from last month"` / `"-3.0% from last month"`.
pub fn change_label(percent: f64) -> String {
    let sign = if percent > 0.0 { "+" } else { "" };
    format!("{}{:.1}% from last month", sign, percent)
}

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_label() {
        assert_eq!(change_label(12.5), "+12.5% from last month");
        assert_eq!(change_label(-3.0), "-3.0% from last month");
        assert_eq!(change_label(0.0), "0.0% from last month");
    }

    #[test]
    fn test_orders_per_month_zero_fills() {
        let data = DashboardData {
            total_orders_by_month: Some(vec![
                MonthlyOrders { month: 3, total_orders: 7 },
                MonthlyOrders { month: 13, total_orders: 99 },
            ]),
            ..Default::default()
        };
        let months = data.orders_per_month();
        assert_eq!(months[2], 7);
        assert_eq!(months.iter().sum::<u32>(), 7);
        assert_eq!(DashboardData::default().orders_per_month(), [0; 12]);
    }
}
