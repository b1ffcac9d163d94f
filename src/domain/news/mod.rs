pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewNews, News, NewsUpdate, NewsWithCategories};
pub use repository::{NewsReadRepository, NewsWriteRepository};
pub use value_objects::{CategoryId, NewsId};
