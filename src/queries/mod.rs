pub mod order_queries;
pub mod product_queries;
