mod app_error;

pub use app_error::{AppError, FieldError, STORE_NOT_CONFIGURED};

pub type Result<T> = std::result::Result<T, AppError>;
