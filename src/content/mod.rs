//! Static site content: defined once, read for the lifetime of the process.

pub mod cities;
pub mod meta;
pub mod pages;
pub mod site;

pub use cities::{all_cities, city_by_slug, City};
pub use meta::{meta_for_path, normalize_path, RouteMeta};
pub use pages::{page_content, Breadcrumb};
