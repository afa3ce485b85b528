use std::collections::HashMap;

use futures::{stream, StreamExt};
use job_scraper::{collect_language_stats, HeadHunter, SuperJob};
use salary_analyzer::LanguageStats;
use salary_report::{build_rows, ReportRow};

/// Scrape both sites one language at a time, HeadHunter first, and merge the results into report rows
pub async fn compare(
    languages: &[String],
    headhunter: &HeadHunter,
    superjob: &SuperJob,
) -> Vec<ReportRow> {
    let results = stream::iter(languages)
        .then(|language| async move {
            log::info!("Collecting salaries for {}", language);
            let hh = collect_language_stats(headhunter, language).await;
            let sj = collect_language_stats(superjob, language).await;
            (language.clone(), hh, sj)
        })
        .collect::<Vec<_>>()
        .await;

    let mut hh_stats: HashMap<String, LanguageStats> = HashMap::with_capacity(results.len());
    let mut sj_stats: HashMap<String, LanguageStats> = HashMap::with_capacity(results.len());
    for (language, hh, sj) in results {
        hh_stats.insert(language.clone(), hh);
        sj_stats.insert(language, sj);
    }
    build_rows(languages, &hh_stats, &sj_stats)
}
