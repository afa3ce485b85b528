use std::collections::HashMap;

use comfy_table::{presets::ASCII_FULL, Table};
use salary_analyzer::{JobSite, LanguageStats};
use serde::Serialize;

pub const TITLE: &str = "Salary comparison by language";
/// Shown in place of an average when no salary could be estimated
pub const UNKNOWN_SALARY: &str = "unknown";

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub language: String,
    pub headhunter: LanguageStats,
    pub superjob: LanguageStats,
}

impl ReportRow {
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.language.clone(),
            found_processed(&self.headhunter),
            found_processed(&self.superjob),
            format!(
                "{} / {}",
                average(&self.headhunter),
                average(&self.superjob)
            ),
        ]
    }
}

fn found_processed(stats: &LanguageStats) -> String {
    format!("{}/{}", stats.vacancies_found, stats.vacancies_processed)
}

fn average(stats: &LanguageStats) -> String {
    stats
        .average_salary
        .map(|salary| salary.to_string())
        .unwrap_or_else(|| UNKNOWN_SALARY.to_owned())
}

/// One row per requested language in request order, languages without stats count as empty
pub fn build_rows(
    languages: &[String],
    headhunter: &HashMap<String, LanguageStats>,
    superjob: &HashMap<String, LanguageStats>,
) -> Vec<ReportRow> {
    languages
        .iter()
        .map(|language| ReportRow {
            language: language.clone(),
            headhunter: headhunter.get(language).cloned().unwrap_or_default(),
            superjob: superjob.get(language).cloned().unwrap_or_default(),
        })
        .collect()
}

pub fn header() -> Vec<String> {
    let (hh, sj) = (JobSite::HeadHunter, JobSite::SuperJob);
    vec![
        "Language".to_owned(),
        format!("{}: found/processed", hh.label()),
        format!("{}: found/processed", sj.label()),
        format!(
            "Average salary {} / {}",
            hh.abbreviation(),
            sj.abbreviation()
        ),
    ]
}

pub fn render_table(rows: &[ReportRow]) -> String {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL).set_header(header());
    for row in rows {
        table.add_row(row.cells());
    }
    format!("{}\n{}", TITLE, table)
}

pub fn render_json(rows: &[ReportRow]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(found: u32, processed: u32, average_salary: Option<u64>) -> LanguageStats {
        LanguageStats {
            vacancies_found: found,
            vacancies_processed: processed,
            average_salary,
        }
    }

    fn languages(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_python_row() {
        let headhunter = HashMap::from([("Python".to_owned(), stats(50, 1, Some(150_000)))]);
        let superjob = HashMap::from([("Python".to_owned(), stats(1, 1, Some(90_000)))]);
        let rows = build_rows(&languages(&["Python"]), &headhunter, &superjob);
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0].cells(),
            vec!["Python", "50/1", "1/1", "150000 / 90000"]
        );
    }

    #[test]
    fn test_rows_keep_request_order() {
        let headhunter = HashMap::from([
            ("Go".to_owned(), stats(10, 2, Some(1))),
            ("C#".to_owned(), stats(20, 3, Some(2))),
            ("Java".to_owned(), stats(30, 4, Some(3))),
        ]);
        let requested = languages(&["Java", "C#", "Go"]);
        let rows = build_rows(&requested, &headhunter, &HashMap::new());
        let order = rows.iter().map(|row| row.language.as_str()).collect::<Vec<_>>();
        assert_eq!(order, vec!["Java", "C#", "Go"]);
    }

    #[test]
    fn test_missing_stats_use_placeholders() {
        let superjob = HashMap::from([("Ruby".to_owned(), stats(4, 0, None))]);
        let rows = build_rows(&languages(&["Ruby"]), &HashMap::new(), &superjob);
        assert_eq!(rows[0].headhunter, LanguageStats::default());
        assert_eq!(
            rows[0].cells(),
            vec!["Ruby", "0/0", "4/0", "unknown / unknown"]
        );
    }

    #[test]
    fn test_render_table() {
        let headhunter = HashMap::from([("Python".to_owned(), stats(50, 1, Some(150_000)))]);
        let rows = build_rows(&languages(&["Python", "Kotlin"]), &headhunter, &HashMap::new());
        let table = render_table(&rows);
        let lines = table.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], TITLE);
        assert!(table.contains("HeadHunter: found/processed"));
        assert!(table.contains("Average salary HH / SJ"));
        let python = table.find("150000 / unknown").unwrap();
        let kotlin = table.find("unknown / unknown").unwrap();
        assert!(python < kotlin);
    }

    #[test]
    fn test_render_json() {
        let rows = build_rows(&languages(&["Swift"]), &HashMap::new(), &HashMap::new());
        let json: serde_json::Value = serde_json::from_str(&render_json(&rows).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "language": "Swift",
                "headhunter": {"vacancies_found": 0, "vacancies_processed": 0, "average_salary": null},
                "superjob": {"vacancies_found": 0, "vacancies_processed": 0, "average_salary": null}
            }])
        );
    }
}
