//! Integration tests for the perkladar CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn perkladar() -> Command {
    let mut cmd = Command::cargo_bin("perkladar").unwrap();
    cmd.env_remove("PERKLADAR_SETTINGS").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_translate_inline_text() {
    let mut cmd = perkladar();
    cmd.arg("translate").arg("Matka").arg("jest").arg("w").arg("ogrodzie.");

    cmd.assert()
        .success()
        .stdout("Matь jestь vu (ne najdeno slova).\n");
}

#[test]
fn test_translate_stdin() {
    let mut cmd = perkladar();
    cmd.arg("translate").write_stdin("sługa boży\nW bóg.\n");

    cmd.assert()
        .success()
        .stdout("božijь sluga\nVU bodzě.\n");
}

#[test]
fn test_translate_file() {
    let mut cmd = perkladar();
    cmd.arg("translate").arg("-i").arg(fixture_path("zdania.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Matь jestь vu (ne najdeno slova)."))
        .stdout(predicate::str::contains("božijь sluga"))
        .stdout(predicate::str::contains("VU bodzě."));
}

#[test]
fn test_json_output() {
    let mut cmd = perkladar();
    cmd.arg("translate")
        .arg("-i")
        .arg(fixture_path("zdania.txt"))
        .arg("-f")
        .arg("json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[2]["line"], 4);
    assert_eq!(items[2]["output"], "VU bodzě.");
}

#[test]
fn test_markdown_output() {
    let mut cmd = perkladar();
    cmd.arg("translate")
        .arg("-i")
        .arg(fixture_path("zdania.txt"))
        .arg("-f")
        .arg("markdown");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("| # | Polish | Proto-Slavic |"))
        .stdout(predicate::str::contains("| 2 | sługa boży | božijь sluga |"))
        .stdout(predicate::str::contains("*Total lines: 3*"));
}

#[test]
fn test_explain_shows_outcomes() {
    let mut cmd = perkladar();
    cmd.arg("translate").arg("--explain").arg("W bóg.");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("VU bodzě.\n"))
        .stdout(predicate::str::contains("W -> VU [preposition"))
        .stdout(predicate::str::contains("bóg -> bodzě [exact, locative"));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("output.txt");

    let mut cmd = perkladar();
    cmd.arg("translate")
        .arg("-i")
        .arg(fixture_path("zdania.txt"))
        .arg("-o")
        .arg(&output_file);

    cmd.assert().success();

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("božijь sluga"));
}

#[test]
fn test_glob_pattern() {
    let mut cmd = perkladar();
    cmd.arg("translate").arg("-q").arg("-i").arg(fixture_path("*.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("božijь sluga"));
}

#[test]
fn test_custom_data_files() {
    let mut cmd = perkladar();
    cmd.arg("translate")
        .arg("--lexicon")
        .arg(fixture_path("lexicon.json"))
        .arg("--inflection")
        .arg(fixture_path("inflection.json"))
        .arg("-i")
        .arg(fixture_path("potok.txt"));

    cmd.assert().success().stdout("vu potocě bělъ kotъ\n");
}

#[test]
fn test_custom_config_reorder_policy() {
    let args = [
        "--lexicon",
        "tests/fixtures/lexicon.json",
        "--inflection",
        "tests/fixtures/inflection.json",
        "translate",
        "kot biały biały",
    ];

    perkladar()
        .args(args)
        .assert()
        .success()
        .stdout("bělъ kotъ bělъ\n");

    perkladar()
        .args(args)
        .arg("--config")
        .arg(fixture_path("buffer.toml"))
        .assert()
        .success()
        .stdout("bělъ bělъ kotъ\n");
}

#[test]
fn test_settings_file() {
    let mut cmd = perkladar();
    cmd.arg("--settings")
        .arg(fixture_path("settings.toml"))
        .arg("translate")
        .arg("w potoku kot biały");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("| 1 | w potoku kot biały | vu potocě bělъ kotъ |"));
}

#[test]
fn test_settings_from_environment() {
    let mut cmd = perkladar();
    cmd.env("PERKLADAR_SETTINGS", fixture_path("settings.toml"))
        .arg("translate")
        .arg("-f")
        .arg("text")
        .arg("potok");

    cmd.assert().success().stdout("potokъ\n");
}

#[test]
fn test_invalid_file() {
    let mut cmd = perkladar();
    cmd.arg("translate").arg("-i").arg("nonexistent.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_missing_lexicon() {
    let mut cmd = perkladar();
    cmd.arg("translate")
        .arg("--lexicon")
        .arg("nonexistent.json")
        .arg("dom");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("File not found: nonexistent.json"));
}

#[test]
fn test_lookup() {
    let mut cmd = perkladar();
    cmd.arg("lookup").arg("bóg").arg("--case").arg("loc");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("bóg -> bóg (exact match)"))
        .stdout(predicate::str::contains("locative     singular bodzě"));
}

#[test]
fn test_lookup_custom_lexicon() {
    let mut cmd = perkladar();
    cmd.arg("lookup")
        .arg("potoku")
        .arg("--case")
        .arg("locative")
        .arg("--lexicon")
        .arg(fixture_path("lexicon.json"))
        .arg("--inflection")
        .arg(fixture_path("inflection.json"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("potoku -> potok (prefix match)"))
        .stdout(predicate::str::contains("potocě"));
}

#[test]
fn test_lookup_unknown_word() {
    let mut cmd = perkladar();
    cmd.arg("lookup").arg("ogrodzie");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not in the lexicon"));
}

#[test]
fn test_context_payload() {
    let mut cmd = perkladar();
    cmd.arg("context").arg("--compact").arg("Zamek i dom");

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["text"], "Zamek i dom");

    let hits = value["dictionary_hits"].as_array().unwrap();
    // Homonyms sharing base and category collapse into the first one
    assert_eq!(hits.len(), 3);
    assert_eq!(hits[0]["pl"], "zamek");
    assert_eq!(hits[0]["note"], "castle, fortified residence");
    assert_eq!(hits[1]["sl"], "i");
    assert_eq!(hits[2]["sl"], "domъ");
}

#[test]
fn test_context_limit() {
    let mut cmd = perkladar();
    cmd.arg("context").arg("-n").arg("1").arg("Zamek i dom");

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["dictionary_hits"].as_array().unwrap().len(), 1);
}

#[test]
fn test_validate_embedded_data() {
    let mut cmd = perkladar();
    cmd.arg("validate").arg("--strict");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("✓ Lexicon (embedded)"))
        .stdout(predicate::str::contains("✓ Data is valid!"));
}

#[test]
fn test_validate_skipped_records() {
    perkladar()
        .arg("validate")
        .arg("--lexicon")
        .arg(fixture_path("bad_lexicon.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("1 skipped"))
        .stdout(predicate::str::contains("missing required field 'polish'"));

    perkladar()
        .arg("validate")
        .arg("--strict")
        .arg("--lexicon")
        .arg(fixture_path("bad_lexicon.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("validation failed"));
}

#[test]
fn test_validate_category_mismatch() {
    let mut cmd = perkladar();
    cmd.arg("validate")
        .arg("--strict")
        .arg("--inflection")
        .arg(fixture_path("inflection.json"));

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("without inflection pattern"));
}

#[test]
fn test_strict_translate_rejects_mismatch() {
    let mut cmd = perkladar();
    cmd.arg("translate")
        .arg("--strict")
        .arg("--inflection")
        .arg(fixture_path("inflection.json"))
        .arg("dom");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Data error"));
}

#[test]
fn test_generate_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("custom.toml");

    perkladar()
        .arg("generate-config")
        .arg("-o")
        .arg(&config_file)
        .arg("--code")
        .arg("sla-x-test")
        .assert()
        .success()
        .stdout(predicate::str::contains("Next steps:"));

    let content = fs::read_to_string(&config_file).unwrap();
    assert!(content.contains("code = \"sla-x-test\""));

    perkladar()
        .arg("validate")
        .arg("--config")
        .arg(&config_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("[sla-x-test]"));
}

#[test]
fn test_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("broken.toml");
    fs::write(
        &config_file,
        "[metadata]\ncode = \"x\"\nname = \"x\"\n\n[lemma]\nfuzzy_prefix_len = 9\n",
    )
    .unwrap();

    perkladar()
        .arg("translate")
        .arg("--config")
        .arg(&config_file)
        .arg("dom")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_list_cases() {
    let mut cmd = perkladar();
    cmd.arg("list").arg("cases");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("locative"))
        .stdout(predicate::str::contains("plural"));
}

#[test]
fn test_list_formats() {
    let mut cmd = perkladar();
    cmd.arg("list").arg("formats");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn test_help() {
    let mut cmd = perkladar();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Proto-Slavic"))
        .stdout(predicate::str::contains("translate"));
}
