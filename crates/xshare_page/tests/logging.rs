use log::LevelFilter;
use tempfile::TempDir;
use xshare_page::logging::{initialize, LogDestination, LoggingConfig};
use xshare_page::UiConfig;

#[test]
fn level_names_parse_with_info_fallback() {
    let mut config = LoggingConfig::default();
    assert_eq!(config.level_filter(), LevelFilter::Info);
    config.level = " debug ".to_string();
    assert_eq!(config.level_filter(), LevelFilter::Debug);
    config.level = "chatty".to_string();
    assert_eq!(config.level_filter(), LevelFilter::Info);
}

#[test]
fn logging_section_is_read_from_config() {
    let config =
        UiConfig::from_ron_str(r#"(logging: (destination: Both, level: "warn"))"#).unwrap();
    assert_eq!(config.logging.destination, LogDestination::Both);
    assert_eq!(config.logging.level_filter(), LevelFilter::Warn);
}

#[test]
fn file_destination_creates_the_log_and_installs_once() {
    let temp = TempDir::new().unwrap();
    let config = LoggingConfig {
        destination: LogDestination::File,
        level: "info".to_string(),
        file: temp.path().join("page.log"),
    };

    assert!(initialize(&config));
    assert!(config.file.is_file());
    assert!(!initialize(&config));
}
