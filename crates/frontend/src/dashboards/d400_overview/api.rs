use contracts::dashboards::d400_overview::DashboardData;

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::ApiClient;

const API_BASE: &str = "/Admin/Dashboard";

/// Platform totals with month-over-month changes
pub async fn get_dashboard(client: &ApiClient) -> Result<DashboardData, ApiError> {
    client.get(API_BASE).await
}
