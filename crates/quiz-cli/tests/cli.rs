use assert_cmd::Command;
use assert_fs::prelude::*;
use serde_json::Value;
use std::io::Write;

const THREE_QUESTIONS: &str =
    include_str!("../../quiz-spec/tests/fixtures/three_questions.json");

fn intake_quiz() -> Command {
    let mut cmd = Command::cargo_bin("intake-quiz").expect("binary");
    cmd.env_remove("INTAKE_QUIZ_SPEC");
    cmd
}

fn spec_file(dir: &assert_fs::TempDir) -> assert_fs::fixture::ChildPath {
    let file = dir.child("quiz.json");
    file.write_str(THREE_QUESTIONS).expect("write spec");
    file
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("utf8 stdout")
}

#[test]
fn replay_rejects_on_final_question() {
    let dir = assert_fs::TempDir::new().expect("temp dir");
    let spec = spec_file(&dir);

    let stdout = stdout_of(
        intake_quiz()
            .args(["replay", "--choices", "0,0,1", "--format", "json", "--spec"])
            .arg(spec.path()),
    );
    let output: Value = serde_json::from_str(&stdout).expect("json output");
    assert_eq!(output["ui"]["status"], "rejected");
    assert_eq!(output["answers"]["outcome"], "rejected");
    assert_eq!(output["answers"]["answers"].as_array().map(Vec::len), Some(3));
}

#[test]
fn replay_succeeds_with_text_output() {
    let dir = assert_fs::TempDir::new().expect("temp dir");
    let spec = spec_file(&dir);

    let stdout = stdout_of(
        intake_quiz()
            .args(["replay", "--choices", "1,0,0", "--spec"])
            .arg(spec.path()),
    );
    assert!(stdout.contains("Status: complete"));
    assert!(stdout.contains("Eligible."));
    assert!(stdout.contains("Answers: B, false, false"));
}

#[test]
fn replay_back_from_first_question_returns_home() {
    let stdout = stdout_of(intake_quiz().args(["replay", "--choices", "b"]));
    assert!(stdout.contains("Returned home."));
}

#[test]
fn spec_path_is_read_from_environment() {
    let dir = assert_fs::TempDir::new().expect("temp dir");
    let spec = spec_file(&dir);

    let stdout = stdout_of(intake_quiz().arg("check").env("INTAKE_QUIZ_SPEC", spec.path()));
    assert!(stdout.contains("Quiz: Three Questions (three-questions) v1.0.0"));
    assert!(stdout.contains("Questions: 3"));
    assert!(stdout.contains("rejects on 1"));
}

#[test]
fn check_fails_for_empty_quiz() {
    let mut spec = tempfile::NamedTempFile::new().expect("temp file");
    spec.write_all(br#"{"id":"empty","title":"Empty","questions":[]}"#)
        .expect("write spec");

    intake_quiz()
        .args(["check", "--spec"])
        .arg(spec.path())
        .assert()
        .failure();
}

#[test]
fn interactive_run_completes_and_prints_answers() {
    let dir = assert_fs::TempDir::new().expect("temp dir");
    let spec = spec_file(&dir);

    let stdout = stdout_of(
        intake_quiz()
            .args(["run", "--answers-json", "--spec"])
            .arg(spec.path())
            .write_stdin("0\nback\n\n0\n0\n"),
    );
    assert!(stdout.contains("Done ✅"));
    assert!(stdout.contains("Answers (CBOR hex):"));
    assert!(stdout.contains("\"outcome\": \"succeeded\""));
}

#[test]
fn interactive_run_fails_when_input_ends_early() {
    intake_quiz()
        .arg("run")
        .write_stdin("0\n")
        .assert()
        .failure();
}

#[test]
fn layout_reports_desktop_metrics() {
    let stdout = stdout_of(intake_quiz().args(["layout", "--width", "1920", "--height", "1080"]));
    let output: Value = serde_json::from_str(&stdout).expect("json output");
    assert_eq!(output["device_class"], "extra_large");
    assert_eq!(output["is_desktop"], true);
    assert_eq!(output["container_width"], 1100.0);
}

#[test]
fn layout_uses_breakpoint_overrides() {
    let dir = assert_fs::TempDir::new().expect("temp dir");
    let breakpoints = dir.child("breakpoints.json");
    breakpoints.write_str(r#"{"md": 300}"#).expect("write breakpoints");

    let stdout = stdout_of(
        intake_quiz()
            .args(["layout", "--width", "400", "--height", "800", "--breakpoints"])
            .arg(breakpoints.path()),
    );
    let output: Value = serde_json::from_str(&stdout).expect("json output");
    assert_eq!(output["is_mobile"], false);
    assert_eq!(output["portrait"], true);
}

#[test]
fn schema_describes_questions() {
    let stdout = stdout_of(intake_quiz().arg("schema"));
    let schema: Value = serde_json::from_str(&stdout).expect("json schema");
    assert!(schema["properties"]["questions"].is_object());
}

#[test]
fn interactive_run_prints_json_screens() {
    let dir = assert_fs::TempDir::new().expect("temp dir");
    let spec = spec_file(&dir);

    let stdout = stdout_of(
        intake_quiz()
            .args(["run", "--format", "json", "--spec"])
            .arg(spec.path())
            .write_stdin("0\n1\n"),
    );
    assert!(!stdout.contains("> "));
    assert!(stdout.contains("\"status\": \"need_input\""));
    assert!(stdout.contains("\"status\": \"rejected\""));
    assert!(stdout.contains("\"outcome\": \"Not eligible.\""));
    assert!(!stdout.contains("Not eligible ❌"));
}

#[test]
fn onboarding_prints_home_copy() {
    let stdout = stdout_of(intake_quiz().args(["onboarding", "--format", "json"]));
    let content: Value = serde_json::from_str(&stdout).expect("json output");
    assert_eq!(content["heading1"], "Be good");
    assert_eq!(content["buttonText"], "Take the quiz");
}

#[test]
fn learn_more_pages_to_the_last_slide() {
    let stdout = stdout_of(intake_quiz().args(["learn-more", "--format", "json"]));
    let slides: Value = serde_json::from_str(&stdout).expect("json output");
    let slides = slides.as_array().expect("slides");
    assert_eq!(slides.len(), 2);
    assert_eq!(slides[1]["assetID"], "erectile-dysfunction");

    let stdout = stdout_of(intake_quiz().args(["learn-more", "--start", "1"]));
    assert!(stdout.contains("2/2 Erectile dysfunction"));
    assert!(!stdout.contains("1/2 Hair loss"));
    assert!(stdout.contains("Back to home."));
}

#[test]
fn learn_more_rejects_unknown_start() {
    intake_quiz()
        .args(["learn-more", "--start", "5"])
        .assert()
        .failure();
}
