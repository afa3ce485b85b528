pub mod scraper;
pub mod types;

pub use scraper::{HeadHunter, HH_MOSCOW_AREA_ID};
