use async_trait::async_trait;
use reqwest::Client;
use salary_analyzer::JobSite;

use crate::api::{get_json, Result, VacancySource};
use crate::headhunter::types::SearchResponse;

const HH_API_URL: &str = "https://api.hh.ru";
pub const HH_MOSCOW_AREA_ID: u32 = 1;
const RESULTS_PER_PAGE: u32 = 100;

/// Client for the public vacancy search of hh.ru
pub struct HeadHunter {
    client: Client,
    base_url: String,
    area: u32,
}

impl HeadHunter {
    pub fn new(client: Client, area: u32) -> Self {
        Self {
            client,
            base_url: HH_API_URL.to_owned(),
            area,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn job_search_url(&self, query: &str, page: u32) -> String {
        format!(
            "{}/vacancies?text={}&area={}&per_page={}&page={}",
            self.base_url,
            urlencoding::encode(query),
            self.area,
            RESULTS_PER_PAGE,
            page
        )
    }
}

#[async_trait]
impl VacancySource for HeadHunter {
    type Page = SearchResponse;

    fn site(&self) -> JobSite {
        JobSite::HeadHunter
    }

    async fn fetch_page(&self, query: &str, page: u32) -> Result<SearchResponse> {
        let url = self.job_search_url(query, page);
        get_json(self.client.get(&url), &url).await
    }
}
