pub mod form;
pub mod sitemap;
pub mod templates;
