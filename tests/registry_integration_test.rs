use anyhow::Result;
use clap::Parser;
use people_registry::core::store::Loaded;
use people_registry::utils::error::ErrorSeverity;
use people_registry::{Cli, DocumentStore, LocalStorage, Registry, RegistryError, TablePresenter};
use serde_json::json;
use tempfile::TempDir;

fn run(registry: &Registry<LocalStorage>, args: &[&str]) -> people_registry::Result<(bool, String)> {
    let cli = Cli::try_parse_from(args).expect("arguments should parse");
    let mut presenter = TablePresenter::new(Vec::new(), Box::new(std::io::sink()));
    let written = registry.run(cli.command, &mut presenter)?;
    Ok((written, String::from_utf8(presenter.into_inner()).expect("utf-8 output")))
}

fn read_json(temp_dir: &TempDir, name: &str) -> Result<serde_json::Value> {
    let raw = std::fs::read_to_string(temp_dir.path().join(name))?;
    Ok(serde_json::from_str(&raw)?)
}

/// add → add → display, checked against the file on disk
#[test]
fn test_add_scenario_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let registry = Registry::new(LocalStorage::new(temp_dir.path()));

    let (written, _) = run(
        &registry,
        &["people", "add", "people.json", "-s", "Doe", "-n", "Jane", "-z", "Leo", "-b", "15.03.1990"],
    )?;
    assert!(written);
    assert_eq!(
        read_json(&temp_dir, "people.json")?,
        json!([{"surname": "Doe", "name": "Jane", "zodiac": "Leo", "birthday": ["15", "03", "1990"]}])
    );

    run(
        &registry,
        &["people", "add", "people.json", "-s", "Roe", "-n", "Rick", "-z", "", "-b", "01.01.1980"],
    )?;
    assert_eq!(
        read_json(&temp_dir, "people.json")?,
        json!([
            {"surname": "Roe", "name": "Rick", "zodiac": "", "birthday": ["01", "01", "1980"]},
            {"surname": "Doe", "name": "Jane", "zodiac": "Leo", "birthday": ["15", "03", "1990"]}
        ])
    );

    let (written, output) = run(&registry, &["people", "display", "people.json"])?;
    assert!(!written);
    let roe = output.find("Roe").expect("Roe listed");
    let doe = output.find("Doe").expect("Doe listed");
    assert!(roe < doe);
    Ok(())
}

#[test]
fn test_display_missing_file_is_empty() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let registry = Registry::new(LocalStorage::new(temp_dir.path()));

    let (written, output) = run(&registry, &["people", "display", "nobody.json"])?;
    assert!(!written);
    assert_eq!(output, "List is empty\n");
    assert!(!temp_dir.path().join("nobody.json").exists());
    Ok(())
}

#[test]
fn test_select_prints_only_matching_surname() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("people.json"),
        json!([
            {"surname": "Smith", "name": "Anna", "birthday": ["01", "01", "1970"]},
            {"surname": "Jones", "name": "Owen", "birthday": ["01", "01", "1971"]},
            {"surname": "Smith", "name": "Bill", "birthday": ["01", "01", "1972"]}
        ])
        .to_string(),
    )?;
    let registry = Registry::new(LocalStorage::new(temp_dir.path()));

    let (_, output) = run(&registry, &["people", "select", "people.json", "-s", "Smith"])?;
    assert!(output.contains("Anna"));
    assert!(output.contains("Bill"));
    assert!(!output.contains("Owen"));

    let (_, output) = run(&registry, &["people", "select", "people.json", "-s", "smith"])?;
    assert_eq!(output, "List is empty\n");
    Ok(())
}

#[test]
fn test_malformed_json_aborts_and_keeps_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("people.json");
    std::fs::write(&path, "[{ not json")?;
    let registry = Registry::new(LocalStorage::new(temp_dir.path()));

    let err = run(
        &registry,
        &["people", "add", "people.json", "-s", "Doe", "-n", "Jane", "-b", "15.03.1990"],
    )
    .unwrap_err();
    assert!(matches!(err, RegistryError::ParseError { .. }));
    assert_eq!(std::fs::read_to_string(&path)?, "[{ not json");
    Ok(())
}

#[test]
fn test_schema_invalid_file_starts_fresh() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("people.json"),
        json!([{"surname": "Doe", "name": "Jane", "zodiac": null, "birthday": ["15", "03", "1990"]}]).to_string(),
    )?;
    let registry = Registry::new(LocalStorage::new(temp_dir.path()));

    let (_, output) = run(&registry, &["people", "display", "people.json"])?;
    assert_eq!(output, "List is empty\n");

    run(
        &registry,
        &["people", "add", "people.json", "-s", "Roe", "-n", "Rick", "-b", "01.01.1980"],
    )?;
    assert_eq!(
        read_json(&temp_dir, "people.json")?,
        json!([{"surname": "Roe", "name": "Rick", "birthday": ["01", "01", "1980"]}])
    );
    Ok(())
}

#[test]
fn test_invalid_birthday_is_rejected_before_writing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let registry = Registry::new(LocalStorage::new(temp_dir.path()));

    let err = run(
        &registry,
        &["people", "add", "people.json", "-s", "Doe", "-n", "Jane", "-b", "31.02.1990"],
    )
    .unwrap_err();
    assert!(matches!(err, RegistryError::MalformedDate { .. }));
    assert!(!temp_dir.path().join("people.json").exists());
    Ok(())
}

#[test]
fn test_round_trip_preserves_order_and_non_ascii() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = DocumentStore::new(LocalStorage::new(temp_dir.path()));
    let document = json!([
        {"surname": "Петров", "name": "Иван", "zodiac": "Рыбы", "birthday": ["05", "03", "1999"]},
        {"surname": "Doe", "name": "Jane", "birthday": ["15", "03", "1990"]}
    ]);
    let people = serde_json::from_value(document)?;

    store.save("people.json", &people)?;
    let raw = std::fs::read_to_string(temp_dir.path().join("people.json"))?;
    assert!(raw.contains("\"Петров\""));
    assert!(raw.contains("\n    {\n        \"surname\""));

    assert_eq!(store.load("people.json")?, Loaded::Valid(people));
    Ok(())
}

#[test]
fn test_unreadable_data_file_is_critical() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::create_dir(temp_dir.path().join("people.json"))?;
    let registry = Registry::new(LocalStorage::new(temp_dir.path()));

    let err = run(&registry, &["people", "display", "people.json"]).unwrap_err();
    assert!(matches!(err, RegistryError::IoError(_)));
    assert_eq!(err.severity(), ErrorSeverity::Critical);
    Ok(())
}

#[test]
fn test_unwritable_data_file_is_critical() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("blocker"), "not a directory")?;
    let registry = Registry::new(LocalStorage::new(temp_dir.path()));

    let err = run(
        &registry,
        &["people", "add", "blocker/people.json", "-s", "Doe", "-n", "Jane", "-b", "15.03.1990"],
    )
    .unwrap_err();
    assert!(matches!(err, RegistryError::IoError(_)));
    assert_eq!(err.severity(), ErrorSeverity::Critical);
    assert_eq!(std::fs::read_to_string(temp_dir.path().join("blocker"))?, "not a directory");
    Ok(())
}
