use salary_analyzer::{PredictSalary, SalaryRange};
use serde::Deserialize;

use crate::api::SearchPage;
use crate::lenient::lenient;

#[derive(Deserialize, Debug)]
pub struct Vacancy {
    #[serde(default, deserialize_with = "lenient")]
    currency: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    payment_from: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    payment_to: Option<f64>,
}

impl PredictSalary for Vacancy {
    const CURRENCY: &'static str = "rub";

    fn salary_range(&self) -> Option<SalaryRange<'_>> {
        Some(SalaryRange::new(
            self.currency.as_deref().unwrap_or_default(),
            self.payment_from,
            self.payment_to,
        ))
    }
}

/// Response of `GET /2.0/vacancies/`
#[derive(Deserialize, Debug)]
pub struct SearchResponse {
    #[serde(default)]
    objects: Vec<Vacancy>,
    #[serde(default)]
    more: bool,
}

impl SearchPage for SearchResponse {
    type Vacancy = Vacancy;

    fn vacancies(&self) -> &[Vacancy] {
        &self.objects
    }

    /// Counts the listings actually returned, the reported total is not used
    fn found(&self, found_so_far: u32) -> u32 {
        found_so_far.saturating_add(self.objects.len() as u32)
    }

    fn is_last(&self, _page: u32) -> bool {
        !self.more
    }
}
