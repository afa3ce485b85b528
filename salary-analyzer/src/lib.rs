pub mod api;
pub mod models;
pub mod salary;

pub use api::PredictSalary;
pub use models::{JobSite, LanguageStats};
pub use salary::{SalaryRange, SalarySample};
