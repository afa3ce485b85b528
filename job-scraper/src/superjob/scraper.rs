use async_trait::async_trait;
use reqwest::{header::HeaderValue, Client};
use salary_analyzer::JobSite;

use crate::api::{get_json, Result, VacancySource};
use crate::credentials::CredentialProvider;
use crate::superjob::types::SearchResponse;

const SJ_API_URL: &str = "https://api.superjob.ru/2.0";
const API_KEY_HEADER: &str = "X-Api-App-Id";
pub const SJ_MOSCOW_TOWN: &str = "Москва";
/// Bounds the number of requests for very popular languages
pub const MAX_SALARY_ESTIMATES: usize = 2000;
const RESULTS_PER_PAGE: u32 = 100;

/// Client for the superjob.ru vacancy api, requests need an application key
pub struct SuperJob {
    client: Client,
    base_url: String,
    town: String,
    api_key: Option<String>,
}

impl SuperJob {
    pub fn new(client: Client, credentials: &impl CredentialProvider, town: impl Into<String>) -> Self {
        Self {
            client,
            base_url: SJ_API_URL.to_owned(),
            town: town.into(),
            api_key: credentials.superjob_api_key(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn job_search_url(&self, query: &str, page: u32) -> String {
        format!(
            "{}/vacancies/?keyword={}&count={}&page={}&town={}",
            self.base_url,
            urlencoding::encode(query),
            RESULTS_PER_PAGE,
            page,
            urlencoding::encode(&self.town)
        )
    }
}

#[async_trait]
impl VacancySource for SuperJob {
    type Page = SearchResponse;

    fn site(&self) -> JobSite {
        JobSite::SuperJob
    }

    fn estimate_cap(&self) -> Option<usize> {
        Some(MAX_SALARY_ESTIMATES)
    }

    async fn fetch_page(&self, query: &str, page: u32) -> Result<SearchResponse> {
        let url = self.job_search_url(query, page);
        let mut request = self.client.get(&url);
        if let Some(api_key) = &self.api_key {
            request = request.header(API_KEY_HEADER, HeaderValue::from_str(api_key)?);
        }
        get_json(request, &url).await
    }
}
