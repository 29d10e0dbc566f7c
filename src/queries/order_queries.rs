use mongodb::bson::to_document;

use crate::{
    database::{DocumentStore, ORDER_COLLECTION},
    error::Result,
    models::Order,
};

/// Persists the order with its total recomputed from the items.
pub async fn create_order(store: &dyn DocumentStore, order: Order) -> Result<(String, Order)> {
    let order = order.with_computed_total();
    let document = to_document(&order)?;

    let id = store.insert_one(ORDER_COLLECTION, document).await?;

    Ok((id, order))
}
