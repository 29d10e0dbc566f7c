use axum::{Json, extract::State};

use crate::{
    AppState,
    error::Result,
    models::{FeaturedQuery, ProductQuery, ProductResponse, SeedResponse},
    queries::product_queries,
    utils::extractors::ValidatedQuery,
};

pub async fn list_products(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<ProductQuery>,
) -> Result<Json<Vec<ProductResponse>>> {
    let store = state.store()?;

    let products = product_queries::find_products(store, params.filter(), params.limit).await?;

    Ok(Json(products))
}

pub async fn featured_products(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<FeaturedQuery>,
) -> Result<Json<Vec<ProductResponse>>> {
    let store = state.store()?;

    let products = product_queries::find_products(store, params.filter(), params.limit).await?;

    Ok(Json(products))
}

pub async fn seed_products(State(state): State<AppState>) -> Result<Json<SeedResponse>> {
    let store = state.store()?;

    let inserted = product_queries::seed_sample_products(store).await?;
    tracing::info!("Seeded {} sample products", inserted);

    Ok(Json(SeedResponse { inserted }))
}
