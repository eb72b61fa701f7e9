use crate::models::{PaymentType, PortDirection, PortOption};

const CATALOG_URL: &str = "https://api.interconnect-portal.net/v1";

/// Client for the port catalog service. Source and destination port lists
/// are fetched independently; the wizard never merges them.
#[derive(Debug, Clone)]
pub struct PortCatalog {
    base_url: String,
}

impl PortCatalog {
    pub fn new() -> Self {
        Self {
            base_url: CATALOG_URL.to_string(),
        }
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Fetch the selectable ports for one end of the interconnection.
    pub async fn fetch_ports(
        &self,
        direction: PortDirection,
    ) -> Result<Vec<PortOption>, String> {
        let url = format!("{}/ports/{}.json", self.base_url, direction.as_str());

        let response = reqwest::get(&url)
            .await
            .map_err(|e| format!("Failed to fetch {} ports: {}", direction, e))?;

        if !response.status().is_success() {
            return Err(format!(
                "Failed to fetch {} ports, status: {}",
                direction,
                response.status()
            ));
        }

        let ports: Vec<PortOption> = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse {} port list: {}", direction, e))?;

        Ok(plan_ports(ports))
    }
}

impl Default for PortCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Only ports on plans can carry an interconnection today; credit card and
/// invoice ports are filtered out before they reach the dropdowns.
pub fn plan_ports(ports: Vec<PortOption>) -> Vec<PortOption> {
    ports
        .into_iter()
        .filter(|p| p.payment_type == PaymentType::Plan)
        .collect()
}
