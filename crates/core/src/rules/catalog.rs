//! Access-gated asset catalog.
//!
//! The only place plan tier and asset visibility meet. Nothing is cached:
//! customers, availability and the catalog all change independently.

use crate::error::CoreError;
use crate::models::asset::Asset;
use crate::rules::CustomerRules;
use crate::store::{AssetStore, CustomerStore};

pub struct Catalog;

impl Catalog {
    /// Available assets visible to the customer owning `access_code`, in
    /// store order.
    pub async fn list_visible_assets(
        customers: &dyn CustomerStore,
        assets: &dyn AssetStore,
        access_code: Option<&str>,
    ) -> Result<Vec<Asset>, CoreError> {
        let customer = CustomerRules::resolve_by_access_code(customers, access_code).await?;

        let visible: Vec<Asset> = assets
            .find_by_availability(true)
            .await?
            .into_iter()
            .filter(|asset| customer.plan.can_see(asset.category))
            .collect();

        tracing::debug!(
            customer_id = customer.id,
            plan = %customer.plan,
            count = visible.len(),
            "Catalog filtered by plan"
        );
        Ok(visible)
    }
}
