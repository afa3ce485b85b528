use async_trait::async_trait;
use reqwest::RequestBuilder;
use salary_analyzer::{JobSite, PredictSalary};
use serde::de::DeserializeOwned;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Request to '{0}' not successful, status code: {1}")]
    RequestNotOk(String, reqwest::StatusCode),
    #[error("Invalid api key header: '{0}'")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),
}

/// One page of a vacancy search as returned by a job site
pub trait SearchPage {
    type Vacancy: PredictSalary;

    fn vacancies(&self) -> &[Self::Vacancy];

    /// Number of vacancies found after this page, given the count known before it
    fn found(&self, found_so_far: u32) -> u32;

    /// Whether `page` (zero based) was the last page worth requesting
    fn is_last(&self, page: u32) -> bool;
}

/// A job site exposing a paginated vacancy search
#[async_trait]
pub trait VacancySource: Send + Sync {
    type Page: SearchPage + Send;

    fn site(&self) -> JobSite;

    fn search_query(&self, language: &str) -> String {
        format!("{} программист", language)
    }

    /// Upper bound on salary estimates collected per language
    fn estimate_cap(&self) -> Option<usize> {
        None
    }

    async fn fetch_page(&self, query: &str, page: u32) -> Result<Self::Page>;
}

/// Send the request and deserialize a successful json response
pub(crate) async fn get_json<T: DeserializeOwned>(request: RequestBuilder, url: &str) -> Result<T> {
    let resp = request.header("Accept", "application/json").send().await?;
    let status = resp.status();
    if !status.is_success() {
        let error_body = resp.text().await;
        log::debug!(
            "request to {} not successful, status code: {}, error resp body: {:?}",
            url,
            status,
            error_body,
        );
        return Err(Error::RequestNotOk(url.to_owned(), status));
    }
    Ok(resp.json().await?)
}
