use greenfolio::AppCommand;
use greenfolio::cli::explore::Position;
use greenfolio::core::FundStore;
use greenfolio::core::fund::FundType;
use greenfolio::core::impact::ImpactMetrics;
use greenfolio::seed::SeedKind;
use greenfolio::store::disk::FjallFundStore;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tracing::info;

mod test_utils {
    use std::path::{Path, PathBuf};

    /// Writes a config whose data path points at `data_path` and OCR is off.
    pub fn write_config(dir: &Path, data_path: &Path) -> PathBuf {
        let config_path = dir.join("config.yaml");
        let config_content = format!(
            r#"
data_path: "{}"
ocr:
  enabled: false
"#,
            data_path.display()
        );
        std::fs::write(&config_path, config_content).expect("Failed to write config file");
        config_path
    }
}

async fn stored_funds(data_path: &Path, fund_type: Option<FundType>) -> usize {
    let store = FjallFundStore::open(&data_path.join("catalog")).expect("Failed to open store");
    store.list(fund_type).await.expect("Failed to list").len()
}

#[test_log::test(tokio::test)]
async fn test_seed_all_then_discover() {
    let dir = TempDir::new().unwrap();
    let data_path = dir.path().join("data");
    let config_path = test_utils::write_config(dir.path(), &data_path);
    let config_path = config_path.to_str().unwrap();

    let result =
        greenfolio::run_command(AppCommand::Seed(SeedKind::ALL.to_vec()), Some(config_path)).await;
    assert!(result.is_ok(), "Seeding failed with: {:?}", result.err());

    assert_eq!(stored_funds(&data_path, None).await, 21);
    assert_eq!(stored_funds(&data_path, Some(FundType::GreenFund)).await, 10);
    assert_eq!(stored_funds(&data_path, Some(FundType::GreenBond)).await, 5);
    assert_eq!(stored_funds(&data_path, Some(FundType::Invit)).await, 6);

    let result = greenfolio::run_command(
        AppCommand::Discover(Some(FundType::Invit)),
        Some(config_path),
    )
    .await;
    assert!(result.is_ok(), "Discover failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_reseeding_completes_despite_duplicates() {
    let dir = TempDir::new().unwrap();
    let data_path = dir.path().join("data");
    let config_path = test_utils::write_config(dir.path(), &data_path);
    let config_path = config_path.to_str().unwrap();

    for attempt in 0..2 {
        info!(attempt, "Seeding bonds");
        let result =
            greenfolio::run_command(AppCommand::Seed(vec![SeedKind::Bonds]), Some(config_path))
                .await;
        assert!(result.is_ok(), "Seeding failed with: {:?}", result.err());
    }

    assert_eq!(stored_funds(&data_path, None).await, 5);
}

#[test_log::test(tokio::test)]
async fn test_seed_fails_when_store_is_unavailable() {
    let dir = TempDir::new().unwrap();
    // A regular file where the data directory should be
    let data_path = dir.path().join("not-a-dir");
    fs::write(&data_path, "occupied").unwrap();
    let config_path = test_utils::write_config(dir.path(), &data_path);

    let result = greenfolio::run_command(
        AppCommand::Seed(vec![SeedKind::Funds]),
        Some(config_path.to_str().unwrap()),
    )
    .await;
    let err = result.expect_err("Seeding should fail without a store");
    assert!(err.to_string().contains("Failed to open catalog store"));
}

#[test_log::test(tokio::test)]
async fn test_missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.yaml");

    let result =
        greenfolio::run_command(AppCommand::Categories, Some(missing.to_str().unwrap())).await;
    assert!(result.is_err());
}

#[test_log::test(tokio::test)]
async fn test_display_commands() {
    let dir = TempDir::new().unwrap();
    let config_path = test_utils::write_config(dir.path(), &dir.path().join("data"));
    let config_path = config_path.to_str().unwrap();

    let commands = vec![
        AppCommand::Categories,
        AppCommand::Explore {
            container_width: 320.0,
            position: Position::Scroll(240.0),
        },
        AppCommand::Explore {
            container_width: 320.0,
            position: Position::Goto(2),
        },
        AppCommand::Impact(ImpactMetrics {
            co2_avoided: 12.345,
            clean_energy_generated: 87.9,
            trees_equivalent: 5,
        }),
    ];
    for command in commands {
        let result = greenfolio::run_command(command.clone(), Some(config_path)).await;
        assert!(result.is_ok(), "{command:?} failed with: {:?}", result.err());
    }

    let result = greenfolio::run_command(
        AppCommand::Explore {
            container_width: 320.0,
            position: Position::Goto(3),
        },
        Some(config_path),
    )
    .await;
    assert!(result.is_err());
}

#[test_log::test(tokio::test)]
async fn test_extract_never_fails_on_readable_files() {
    let dir = TempDir::new().unwrap();
    let config_path = test_utils::write_config(dir.path(), &dir.path().join("data"));
    let config_path = config_path.to_str().unwrap();

    let cases = [
        ("notes.txt", Some("text/plain"), b"plain text".to_vec()),
        ("broken.pdf", None, b"%PDF-1.7 truncated".to_vec()),
        ("scan.jpeg", None, b"not really a jpeg".to_vec()),
    ];
    for (name, mime_type, bytes) in cases {
        let path = dir.path().join(name);
        fs::write(&path, bytes).unwrap();

        let result = greenfolio::run_command(
            AppCommand::Extract {
                path,
                mime_type: mime_type.map(str::to_string),
            },
            Some(config_path),
        )
        .await;
        assert!(result.is_ok(), "{name} failed with: {:?}", result.err());
    }

    let result = greenfolio::run_command(
        AppCommand::Extract {
            path: dir.path().join("missing.png"),
            mime_type: None,
        },
        Some(config_path),
    )
    .await;
    assert!(result.is_err(), "Unreadable upload should fail");
}
