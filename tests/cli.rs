use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file to be created");
    file.write_all(contents.as_bytes())
        .expect("temp file to be written");
    file
}

#[test]
fn tokenizes_stdin_as_tag_by_default() {
    let mut cmd = cargo_bin_cmd!("rout");
    cmd.write_stdin("[1] TRUE\n");

    cmd.assert()
        .success()
        .stdout("<document>\n  <normal>[1]</normal>\n  <true>TRUE</true>\n</document>\n");
}

#[test]
fn tokenizes_file_as_simple() {
    let mut cmd = cargo_bin_cmd!("rout");
    cmd.arg(fixture_path("sample.Rout")).arg("--format").arg("simple");

    let output_pred = predicate::str::starts_with("normal\t0..1\t>\n")
        .and(predicate::str::contains("neg-number\t35..39\t-2.0\n"))
        .and(predicate::str::contains("inf\t"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn emits_json() {
    let mut cmd = cargo_bin_cmd!("rout");
    cmd.arg("-f").arg("json").write_stdin("-Inf");

    cmd.assert()
        .success()
        .stdout(
            predicate::str::contains("\"kind\": \"inf\"")
                .and(predicate::str::contains("\"end\": 4")),
        );
}

#[test]
fn strict_mode_reports_offset() {
    let mut cmd = cargo_bin_cmd!("rout");
    cmd.args(["--catalog", "legacy", "--strict"]).write_stdin("1 -");

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("byte offset 2"));
}

#[test]
fn legacy_catalog_recovers_without_strict() {
    let mut cmd = cargo_bin_cmd!("rout");
    cmd.args(["-c", "legacy", "-f", "simple"]).write_stdin("1 -");

    cmd.assert()
        .success()
        .stdout("number\t0..1\t1\nnormal\t2..3\t-\n");
}

#[test]
fn unknown_catalog_fails() {
    let mut cmd = cargo_bin_cmd!("rout");
    cmd.args(["--catalog", "nope"]).write_stdin("x");

    cmd.assert().failure().stderr(
        predicate::str::contains("catalog 'nope' not found").and(predicate::str::contains("legacy")),
    );
}

#[test]
fn unknown_format_fails() {
    let mut cmd = cargo_bin_cmd!("rout");
    cmd.args(["--format", "html"]).write_stdin("x");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown format 'html' (available: tag, simple, json, yaml)"));
}

#[test]
fn extras_keep_whitespace_runs() {
    let mut cmd = cargo_bin_cmd!("rout");
    cmd.args(["--extras", "-f", "simple"]).write_stdin("[1] 2\n");

    cmd.assert()
        .success()
        .stdout("normal\t0..3\t[1]\nextra\t3..4\t\" \"\nnumber\t4..5\t2\nextra\t5..6\t\"\\n\"\n");
}

#[test]
fn missing_file_fails() {
    let mut cmd = cargo_bin_cmd!("rout");
    cmd.arg("/nonexistent/input.Rout");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error reading file"));
}

#[test]
fn lists_catalogs_and_formats() {
    cargo_bin_cmd!("rout")
        .arg("--list-catalogs")
        .assert()
        .success()
        .stdout(predicate::str::contains("full").and(predicate::str::contains("legacy")));

    cargo_bin_cmd!("rout")
        .arg("--list-formats")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("simple")
                .and(predicate::str::contains("tag"))
                .and(predicate::str::contains("yaml")),
        );
}

#[test]
fn config_file_adds_catalog() {
    let file = config_file(
        r#"
[lexer]
catalog = "missing"

[output]
format = "simple"

[[catalogs]]
name = "missing"

[[catalogs.rules]]
kind = "normal"
pattern = '\S+'
precedence = 1

[[catalogs.rules]]
kind = "number"
pattern = "NA"
literal = true
precedence = 5
"#,
    );

    let mut cmd = cargo_bin_cmd!("rout");
    cmd.arg("--config").arg(file.path()).write_stdin("NA NaN");

    cmd.assert()
        .success()
        .stdout("number\t0..2\tNA\nnormal\t3..6\tNaN\n");
}

#[test]
fn environment_selects_format() {
    let mut cmd = cargo_bin_cmd!("rout");
    cmd.env("ROUT_OUTPUT__FORMAT", "simple").write_stdin("TRUE");

    cmd.assert().success().stdout("true\t0..4\tTRUE\n");
}

#[test]
fn flags_override_environment() {
    let mut cmd = cargo_bin_cmd!("rout");
    cmd.env("ROUT_OUTPUT__FORMAT", "json")
        .args(["-f", "simple"])
        .write_stdin("FALSE");

    cmd.assert().success().stdout("false\t0..5\tFALSE\n");
}
