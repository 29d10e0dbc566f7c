use axum::{Json, extract::State};

use crate::{
    AppState,
    error::Result,
    models::{Order, OrderReceipt},
    queries::order_queries,
    utils::extractors::ValidatedJson,
};

pub async fn create_order(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<Order>,
) -> Result<Json<OrderReceipt>> {
    let store = state.store()?;

    let (id, order) = order_queries::create_order(store, payload).await?;

    tracing::info!(
        "Order {} received: {} items, total {:.2}",
        id,
        order.items.len(),
        order.total
    );

    Ok(Json(OrderReceipt::received(id)))
}
