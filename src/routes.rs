// Route path constants - single source of truth for all server paths

pub const HEALTH: &str = "/health";
pub const API_META: &str = "/api/meta";
pub const API_PAGES: &str = "/api/pages";
pub const API_NAVIGATION: &str = "/api/navigation";
pub const API_LOCATIONS: &str = "/api/locations";
pub const API_LOCATION_ITEM: &str = "/api/locations/{slug}";
pub const SITEMAP: &str = "/sitemap.xml";
pub const ROBOTS: &str = "/robots.txt";
pub const ASSETS: &str = "/assets";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
