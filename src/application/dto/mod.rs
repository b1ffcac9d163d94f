pub mod news;

pub use news::{NO_FIELDS_TO_UPDATE, NewsCreateForm, NewsEditForm, NewsWithCategoriesDto};
