use mongodb::bson::{Document, doc, to_document};

use crate::{
    database::{DocumentStore, PRODUCT_COLLECTION, samples::sample_products},
    error::Result,
    models::{Product, ProductResponse},
};

pub async fn find_products(
    store: &dyn DocumentStore,
    filter: Document,
    limit: i64,
) -> Result<Vec<ProductResponse>> {
    let documents = store.find(PRODUCT_COLLECTION, filter, limit).await?;

    documents
        .into_iter()
        .map(ProductResponse::try_from)
        .collect()
}

pub async fn count_products(store: &dyn DocumentStore) -> Result<u64> {
    store.count_documents(PRODUCT_COLLECTION, doc! {}).await
}

pub async fn insert_product(store: &dyn DocumentStore, product: &Product) -> Result<String> {
    let document = to_document(product)?;

    store.insert_one(PRODUCT_COLLECTION, document).await
}

/// Inserts the sample catalogue when the collection is empty.
///
/// The emptiness check and the inserts are separate store calls, so two
/// concurrent callers can both seed.
pub async fn seed_sample_products(store: &dyn DocumentStore) -> Result<u64> {
    if count_products(store).await? > 0 {
        return Ok(0);
    }

    let mut inserted = 0;
    for product in sample_products() {
        insert_product(store, &product).await?;
        inserted += 1;
    }

    Ok(inserted)
}
