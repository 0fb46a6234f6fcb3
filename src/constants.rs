use super::models::{Catalog, Course, PriceTable, Yen};

pub static APP_CATALOG: Catalog = include!(concat!(env!("OUT_DIR"), "/catalog.rs"));
pub const APP_NAME: &str = env!("APP_NAME");
pub const APP_VERSION: &str = env!("APP_VERSION");
pub const APP_TITLE: &str = env!("APP_TITLE");
pub const APP_DESCRIPTION: &str = env!("APP_DESCRIPTION");
pub const APP_SITE_URL: &str = env!("APP_SITE_URL");

pub const NEW_COURSE_BADGE: &str = "新コース";
