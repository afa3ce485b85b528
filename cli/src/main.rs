mod compare;

use clap::{Parser, ValueEnum};
use dotenv::dotenv;
use job_scraper::headhunter::HH_MOSCOW_AREA_ID;
use job_scraper::superjob::SJ_MOSCOW_TOWN;
use job_scraper::{EnvCredentials, HeadHunter, SuperJob};
use reqwest::Client;
use salary_report::{render_json, render_table};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Programming language to compare, repeat for several, report keeps the given order
    #[clap(long = "language")]
    languages: Vec<String>,

    /// HeadHunter area id to search in
    #[clap(long, default_value_t = HH_MOSCOW_AREA_ID)]
    area: u32,

    /// SuperJob town name to search in
    #[clap(long, default_value = SJ_MOSCOW_TOWN)]
    town: String,

    #[clap(long, value_enum, default_value_t = Format::Table)]
    format: Format,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Table,
    Json,
}

const DEFAULT_LANGUAGES: [&str; 10] = [
    "Python",
    "Java",
    "JavaScript",
    "C#",
    "C++",
    "Go",
    "Ruby",
    "Swift",
    "PHP",
    "Kotlin",
];

#[tokio::main]
async fn main() -> Result<(), reqwest::Error> {
    dotenv().ok();
    env_logger::init();
    let args = Cli::parse();
    let languages = if args.languages.is_empty() {
        DEFAULT_LANGUAGES.into_iter().map(String::from).collect()
    } else {
        args.languages
    };

    // hh.ru rejects requests without a user agent
    let client = Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let headhunter = HeadHunter::new(client.clone(), args.area);
    let superjob = SuperJob::new(client, &EnvCredentials, args.town);
    if !superjob.has_api_key() {
        log::warn!("SUPERJOB_API_KEY not set, SuperJob results will be empty");
    }

    let rows = compare::compare(&languages, &headhunter, &superjob).await;
    match args.format {
        Format::Table => println!("\n{}", render_table(&rows)),
        Format::Json => match render_json(&rows) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to serialize report: {}", e),
        },
    }
    Ok(())
}
