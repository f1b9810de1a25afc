pub mod actions;
pub mod catalog_use_case;
pub mod ports;

pub use actions::CatalogAction;
pub use catalog_use_case::CatalogUseCase;
