//! Integration tests for the configuration module

use relfmt_core::utils::config::{Config, CONFIG_PATH_ENV};
use relfmt_core::utils::locale::TimeFormat;
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

fn create_test_config() -> Config {
    Config {
        time_format: "12h".to_string(),
        locale: Some("en_GB".to_string()),
        highlight_factor: 1.8,
        contrast_threshold: 1.5,
    }
}

#[test]
fn test_config_full_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("nested").join("config.yaml");

    let original_config = create_test_config();
    original_config.save_to_file(&config_path)?;

    assert!(config_path.exists());
    let file_content = fs::read_to_string(&config_path)?;
    assert!(file_content.contains("time_format"));
    assert!(file_content.contains("en_GB"));

    let loaded_config = Config::load_from_file(&config_path)?;
    assert_eq!(loaded_config, original_config);
    assert_eq!(loaded_config.resolve_time_format()?, TimeFormat::TwelveHour);

    Ok(())
}

#[test]
fn test_default_config_omits_locale() -> Result<(), Box<dyn std::error::Error>> {
    let yaml = serde_yaml::to_string(&Config::default())?;
    assert!(!yaml.contains("locale:"));
    assert!(yaml.contains("highlight_factor"));
    Ok(())
}

#[test]
fn test_load_rejects_invalid_pattern() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("config.yaml");
    fs::write(&config_path, "time_format: '%Q'\n")?;

    assert!(Config::load_from_file(&config_path).is_err());
    assert_eq!(Config::load_or_default_from(&config_path), Config::default());
    Ok(())
}

#[test]
fn test_load_rejects_malformed_yaml() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("config.yaml");
    fs::write(&config_path, "highlight_factor: [not, a, number]\n")?;

    assert!(Config::load_from_file(&config_path).is_err());
    Ok(())
}

#[test]
#[serial]
fn test_config_path_env_override() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("custom.yaml");
    std::env::set_var(CONFIG_PATH_ENV, &config_path);

    assert_eq!(Config::get_config_path(), config_path);

    let config = create_test_config();
    config.save()?;
    assert_eq!(Config::load_or_default(), config);

    std::env::remove_var(CONFIG_PATH_ENV);
    assert!(Config::get_config_path().ends_with(".relfmt/config.yaml"));
    Ok(())
}

#[test]
fn test_formatter_from_config() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config {
        time_format: "%H:%M".to_string(),
        ..Config::default()
    };
    let formatter = config.formatter()?;
    assert_eq!(formatter.format(&chrono::Local::now()), "now");
    Ok(())
}
