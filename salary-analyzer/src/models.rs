use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::salary::SalarySample;

#[derive(Deserialize, Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobSite {
    HeadHunter,
    SuperJob,
}

impl JobSite {
    pub fn label(&self) -> &'static str {
        match self {
            JobSite::HeadHunter => "HeadHunter",
            JobSite::SuperJob => "SuperJob",
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            JobSite::HeadHunter => "HH",
            JobSite::SuperJob => "SJ",
        }
    }
}

impl Display for JobSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Salary statistics of one language on one job site
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct LanguageStats {
    pub vacancies_found: u32,
    pub vacancies_processed: u32,
    pub average_salary: Option<u64>,
}

impl LanguageStats {
    pub fn new(vacancies_found: u32, salaries: &SalarySample) -> Self {
        Self {
            vacancies_found,
            vacancies_processed: salaries.len() as u32,
            average_salary: salaries.average(),
        }
    }
}
