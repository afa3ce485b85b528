pub mod aggregator;
pub mod api;
pub mod credentials;
pub mod headhunter;
pub(crate) mod lenient;
pub mod superjob;

pub use aggregator::collect_language_stats;
pub use api::{Error, Result, SearchPage, VacancySource};
pub use credentials::{CredentialProvider, EnvCredentials, StaticCredentials};
pub use headhunter::HeadHunter;
pub use superjob::SuperJob;
