pub mod scraper;
pub mod types;

pub use scraper::{SuperJob, MAX_SALARY_ESTIMATES, SJ_MOSCOW_TOWN};
