pub mod health;
pub mod locations;
pub mod meta;
pub mod navigation;
pub mod pages;
pub mod shell;
pub mod sitemap;

pub use health::health_handler;
pub use locations::{get_location_handler, list_locations_handler};
pub use meta::meta_handler;
pub use navigation::navigation_handler;
pub use pages::pages_handler;
pub use shell::shell_handler;
pub use sitemap::{robots_handler, sitemap_handler};
