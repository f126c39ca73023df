mod dataset;
mod product;

pub use dataset::{Dataset, DatasetSnapshot};
pub use product::Product;
