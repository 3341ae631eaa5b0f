use grabfood_scraper::storage::{CsvStorage, GzipNdjsonStorage, StorageManager};
use grabfood_scraper::{ChromeFetcher, ListingExtractor, Pipeline, ScrapeConfig};

const CSV_PATH: &str = "data.csv";
const ARCHIVE_PATH: &str = "grab_food_data.ndjson.gz";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .filter_module("selectors", log::LevelFilter::Warn)
        .filter_module("html5ever", log::LevelFilter::Error)
        .init();

    let config = ScrapeConfig::default();
    // .with_proxies(vec![
    //     "117.250.3.58:8080".to_string(),
    //     "35.185.196.38:3128".to_string(),
    // ]);

    let storage = StorageManager::new()
        .register_storage("csv", Box::new(CsvStorage::new(CSV_PATH)))
        .register_storage("archive", Box::new(GzipNdjsonStorage::new(ARCHIVE_PATH)));

    let pipeline = Pipeline::new(
        Box::new(ChromeFetcher::new()),
        ListingExtractor::default(),
        storage,
    );

    let records = pipeline.run(&config).await?;
    log::info!("Done: {} restaurants scraped", records.len());

    Ok(())
}
