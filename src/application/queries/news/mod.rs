mod list;
mod service;

pub use service::NewsQueryService;
