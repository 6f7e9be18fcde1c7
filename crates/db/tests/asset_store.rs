//! Integration tests for the PostgreSQL asset store.
//!
//! Exercises the repository and adapter layer against a real database:
//! - Insertion-order listings and availability filters
//! - `uq_assets_name` unique violations surface as `UniqueViolation`
//! - Compare-and-swap value updates miss on stale reads
//!
//! Requires `DATABASE_URL`; run with `cargo test -p wallet-db -- --ignored`.

use assert_matches::assert_matches;
use sqlx::PgPool;
use wallet_core::error::StoreError;
use wallet_core::models::asset::NewAsset;
use wallet_core::plan::AssetCategory;
use wallet_core::store::{AssetStore, ASSET_NAME_CONSTRAINT};
use wallet_db::PgAssetStore;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_asset(name: &str, category: AssetCategory, available: bool) -> NewAsset {
    NewAsset {
        name: name.to_string(),
        category,
        description: Some("integration test".to_string()),
        available,
        current_value: 100.0,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn create_and_list_in_insertion_order(pool: PgPool) {
    let store = PgAssetStore::new(pool);
    store
        .create(new_asset("Tesouro IPCA", AssetCategory::GovernmentBond, true))
        .await
        .unwrap();
    store
        .create(new_asset("Petrobras", AssetCategory::Equity, false))
        .await
        .unwrap();

    let all = store.list_all().await.unwrap();
    let names: Vec<_> = all.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["Tesouro IPCA", "Petrobras"]);
    assert_eq!(all[0].category, AssetCategory::GovernmentBond);

    let available = store.find_by_availability(true).await.unwrap();
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].name, "Tesouro IPCA");
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn duplicate_name_reports_constraint(pool: PgPool) {
    let store = PgAssetStore::new(pool);
    store
        .create(new_asset("Bitcoin", AssetCategory::Crypto, true))
        .await
        .unwrap();

    let result = store
        .create(new_asset("Bitcoin", AssetCategory::Crypto, true))
        .await;
    assert_matches!(
        result,
        Err(StoreError::UniqueViolation { constraint }) if constraint == ASSET_NAME_CONSTRAINT
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn compare_and_set_value_guards_on_expected(pool: PgPool) {
    let store = PgAssetStore::new(pool);
    let asset = store
        .create(new_asset("Vale", AssetCategory::Equity, true))
        .await
        .unwrap();

    assert!(store
        .compare_and_set_value(asset.id, 50.0, 120.0)
        .await
        .unwrap()
        .is_none());

    let updated = store
        .compare_and_set_value(asset.id, 100.0, 120.0)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.current_value, 120.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn availability_and_delete(pool: PgPool) {
    let store = PgAssetStore::new(pool);
    let asset = store
        .create(new_asset("Ethereum", AssetCategory::Crypto, true))
        .await
        .unwrap();

    let toggled = store.set_availability(asset.id, false).await.unwrap().unwrap();
    assert!(!toggled.available);
    assert!(store.set_availability(999_999, true).await.unwrap().is_none());

    assert!(store.delete_by_id(asset.id).await.unwrap());
    assert!(!store.delete_by_id(asset.id).await.unwrap());
    assert!(!store.exists_by_id(asset.id).await.unwrap());
}
