mod category;

pub use category::{Category, CategoryBuilder};
