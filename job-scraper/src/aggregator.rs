use salary_analyzer::{LanguageStats, PredictSalary, SalarySample};

use crate::api::{SearchPage, VacancySource};

/// Page through the vacancy search of `source` for one language and estimate its average salary.
/// A failing page ends the scrape for this language, everything gathered so far is kept.
pub async fn collect_language_stats<S: VacancySource>(source: &S, language: &str) -> LanguageStats {
    let query = source.search_query(language);
    let cap = source.estimate_cap();
    let cap_reached = |salaries: &SalarySample| cap.map_or(false, |cap| salaries.len() >= cap);

    let mut salaries = SalarySample::default();
    let mut found = 0;
    let mut page = 0;
    loop {
        log::debug!(
            "requesting vacancies from {}, page: {}, search: {}",
            source.site(),
            page,
            query
        );
        let results = match source.fetch_page(&query, page).await {
            Ok(results) => results,
            Err(e) => {
                log::warn!(
                    "stopping {} scrape for '{}' at page {}: {}",
                    source.site(),
                    query,
                    page,
                    e
                );
                break;
            }
        };
        found = results.found(found);
        for vacancy in results.vacancies() {
            if cap_reached(&salaries) {
                break;
            }
            if let Some(salary) = vacancy.predict_rub_salary() {
                salaries.push(salary);
            }
        }
        if cap_reached(&salaries) || results.is_last(page) {
            break;
        }
        page += 1;
    }

    let stats = LanguageStats::new(found, &salaries);
    log::info!(
        "{} '{}': found {}, processed {}, average salary {:?}",
        source.site(),
        language,
        stats.vacancies_found,
        stats.vacancies_processed,
        stats.average_salary
    );
    stats
}
