use crate::shared::api_utils::proxy_url;
use crate::shared::http;
use contracts::dashboards::d400_dashboard_ventas::{VentasDashboard, VentasDashboardRequest};
use contracts::shared::api_error::ApiError;
use contracts::shared::proxy::resources::DASHBOARD_VENTAS;

pub async fn fetch_dashboard(request: &VentasDashboardRequest) -> Result<VentasDashboard, ApiError> {
    http::get_json(&proxy_url(DASHBOARD_VENTAS, &request.to_query_pairs())).await
}
