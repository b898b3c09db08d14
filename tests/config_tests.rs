use std::fs;
use std::time::Duration;

use orderwatch::app::Config;
use orderwatch::domain::ItemId;
use orderwatch::error::{ConfigError, Error};
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn config_loads_every_section() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[marketplace]
api_url = "http://localhost:8080/v1"
user_agent = "orderwatch-test"
request_timeout_secs = 3
order_limit = 50

[watch]
poll_interval_secs = 30
tick_millis = 500
default_max_price = 200

[ranks]
default_max_rank = 9

[ranks.items]
primed_continuity = 10

[search]
limit = 5

[logging]
level = "debug"
format = "json"
"#,
    );

    let config = Config::load(&path).unwrap();

    assert_eq!(config.marketplace.api_url, "http://localhost:8080/v1");
    assert_eq!(config.marketplace.user_agent, "orderwatch-test");
    assert_eq!(config.marketplace.request_timeout(), Duration::from_secs(3));
    assert_eq!(config.marketplace.order_limit, 50);

    let timing = config.watch.timing();
    assert_eq!(timing.interval(), Duration::from_secs(30));
    assert_eq!(timing.tick(), Duration::from_millis(500));
    assert_eq!(timing.ticks(), 60);
    assert_eq!(config.watch.default_max_price, 200);

    let table = config.ranks.table();
    assert_eq!(table.default_max_rank(), 9);
    assert_eq!(table.effective_max_rank(&ItemId::new("primed_continuity"), None), 10);
    assert_eq!(table.effective_max_rank(&ItemId::new("serration"), None), 10);

    assert_eq!(config.search.limit, 5);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();

    let result = Config::load(dir.path().join("absent.toml"));

    assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[watch\npoll_interval_secs = 10\n");

    let result = Config::load(&path);

    assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
}

#[test]
fn zero_poll_interval_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[watch]\npoll_interval_secs = 0\n");

    let result = Config::load(&path);

    match result {
        Err(Error::Config(ConfigError::InvalidValue { field, .. })) => {
            assert_eq!(field, "poll_interval_secs");
        }
        other => panic!("expected invalid poll interval, got {other:?}"),
    }
}

#[test]
fn unparsable_api_url_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[marketplace]\napi_url = \"not a url\"\n");

    let result = Config::load(&path);

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue { field: "api_url", .. }))
    ));
}

#[test]
fn empty_api_url_is_missing() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[marketplace]\napi_url = \"\"\n");

    let result = Config::load(&path);

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::MissingField { field: "api_url" }))
    ));
}
