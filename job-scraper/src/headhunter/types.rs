use salary_analyzer::{PredictSalary, SalaryRange};
use serde::Deserialize;

use crate::api::SearchPage;
use crate::lenient::lenient;

#[derive(Deserialize, Debug)]
pub struct Salary {
    #[serde(default, deserialize_with = "lenient")]
    currency: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    from: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    to: Option<f64>,
}

#[derive(Deserialize, Debug)]
pub struct Vacancy {
    #[serde(default, deserialize_with = "lenient")]
    salary: Option<Salary>,
}

impl PredictSalary for Vacancy {
    const CURRENCY: &'static str = "RUR";

    fn salary_range(&self) -> Option<SalaryRange<'_>> {
        let salary = self.salary.as_ref()?;
        Some(SalaryRange::new(
            salary.currency.as_deref().unwrap_or_default(),
            salary.from,
            salary.to,
        ))
    }
}

/// Response of `GET /vacancies`
#[derive(Deserialize, Debug)]
pub struct SearchResponse {
    #[serde(default)]
    items: Vec<Vacancy>,
    #[serde(default)]
    found: u32,
    #[serde(default)]
    pages: u32,
}

impl SearchPage for SearchResponse {
    type Vacancy = Vacancy;

    fn vacancies(&self) -> &[Vacancy] {
        &self.items
    }

    /// The server reports the total itself, the latest page wins
    fn found(&self, _found_so_far: u32) -> u32 {
        self.found
    }

    fn is_last(&self, page: u32) -> bool {
        page.saturating_add(1) >= self.pages
    }
}
