mod diagnostics;
mod document;
mod order;
mod product;

pub use diagnostics::*;
pub use document::*;
pub use order::*;
pub use product::*;
