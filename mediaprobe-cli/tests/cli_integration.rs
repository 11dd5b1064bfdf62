use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::error::Error;
use std::path::PathBuf;
use tempfile::NamedTempFile;

const PROBE_JSON: &str = r#"{
    "streams": [
        {"index": 0, "codec_name": "h264", "codec_type": "video", "width": 1280, "height": 720, "avg_frame_rate": "30/1"},
        {"index": 1, "codec_name": "opus", "codec_type": "audio", "sample_rate": "48000", "channel_layout": "stereo", "tags": {"language": "eng"}}
    ],
    "chapters": [
        {"id": 0, "start_time": "0.000000", "end_time": "60.000000", "tags": {"title": "Intro"}}
    ],
    "format": {
        "filename": "clip.webm",
        "format_name": "matroska,webm",
        "duration": "60.000000",
        "size": "1048576",
        "tags": {"title": "Clip"}
    }
}"#;

// Helper function to get the path to the compiled binary
fn mediaprobe_cmd() -> Command {
    let mut cmd = Command::cargo_bin("mediaprobe").expect("Failed to find mediaprobe binary");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn probe_file(contents: &str) -> Result<NamedTempFile, Box<dyn Error>> {
    let file = NamedTempFile::new()?;
    std::fs::write(file.path(), contents)?;
    Ok(file)
}

#[test]
fn test_info_prints_summary() -> Result<(), Box<dyn Error>> {
    let file = probe_file(PROBE_JSON)?;

    mediaprobe_cmd()
        .arg("info")
        .arg(file.path())
        .assert()
        .success()
        .stdout(contains("Format: matroska,webm"))
        .stdout(contains("Duration: 60.000000"))
        .stdout(contains("Bitrate: <not present>"))
        .stdout(contains("Streams (2)"))
        .stdout(contains("#0 video (h264)"))
        .stdout(contains("Resolution: 1280x720"))
        .stdout(contains("tag:language: eng"))
        .stdout(contains("Chapters (1)"))
        .stdout(contains("Title: Intro"));

    Ok(())
}

#[test]
fn test_info_section_flags() -> Result<(), Box<dyn Error>> {
    let file = probe_file(PROBE_JSON)?;

    mediaprobe_cmd()
        .args(["info", "--no-streams", "--no-chapters", "--no-tags"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(contains("Format: matroska,webm"))
        .stdout(contains("Streams (").not())
        .stdout(contains("Chapters (").not())
        .stdout(contains("Clip").not());

    Ok(())
}

#[test]
fn test_info_reads_stdin() {
    mediaprobe_cmd()
        .args(["info", "-"])
        .write_stdin(PROBE_JSON)
        .assert()
        .success()
        .stdout(contains("Filename: clip.webm"));
}

#[test]
fn test_info_raw_prints_document() -> Result<(), Box<dyn Error>> {
    let file = probe_file(PROBE_JSON)?;

    let output = mediaprobe_cmd()
        .args(["info", "--raw"])
        .arg(file.path())
        .output()?;

    assert!(output.status.success());
    let printed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let original: serde_json::Value = serde_json::from_str(PROBE_JSON)?;
    assert_eq!(printed, original);

    Ok(())
}

#[test]
fn test_info_strict_rejects_malformed_input() -> Result<(), Box<dyn Error>> {
    let file = probe_file(r#"{"format":"#)?;

    mediaprobe_cmd()
        .arg("info")
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error:"))
        .stderr(contains("JSON parse error"));

    Ok(())
}

#[test]
fn test_info_lenient_reports_no_result() -> Result<(), Box<dyn Error>> {
    let file = probe_file(r#"{"format":"#)?;

    mediaprobe_cmd()
        .args(["info", "--lenient"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(contains("No media information available."))
        .stderr(contains("MediaInformation parsing failed"));

    Ok(())
}

#[test]
fn test_info_lenient_invalid_utf8_stdin() {
    mediaprobe_cmd()
        .args(["info", "--lenient", "-"])
        .write_stdin(b"{\"format\":\xff".to_vec())
        .assert()
        .success()
        .stdout(contains("No media information available."))
        .stderr(contains("MediaInformation parsing failed"));
}

#[test]
fn test_info_strict_invalid_utf8_is_a_parse_error() -> Result<(), Box<dyn Error>> {
    let file = NamedTempFile::new()?;
    std::fs::write(file.path(), b"{\"format\":{\"tags\":{\"title\":\"\xff\"}}}")?;

    mediaprobe_cmd()
        .arg("info")
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stderr(contains("JSON parse error"))
        .stderr(contains("Failed to read").not());

    Ok(())
}

#[test]
fn test_info_null_tag_prints_empty() -> Result<(), Box<dyn Error>> {
    let file = probe_file(r#"{"format":{"format_name":"mp4","tags":{"comment":null}}}"#)?;

    mediaprobe_cmd()
        .arg("info")
        .arg(file.path())
        .assert()
        .success()
        .stdout(contains("comment: \n"))
        .stdout(contains("null").not());

    Ok(())
}

#[test]
fn test_info_non_existent_input() {
    let non_existent_input = PathBuf::from("surely/this/does/not/exist/probe.json");

    mediaprobe_cmd()
        .arg("info")
        .arg(&non_existent_input)
        .assert()
        .failure()
        .stderr(contains("Failed to read probe output"));
}

#[test]
fn test_get_format_property() -> Result<(), Box<dyn Error>> {
    let file = probe_file(PROBE_JSON)?;

    mediaprobe_cmd()
        .arg("get")
        .arg(file.path())
        .arg("size")
        .args(["--as", "number"])
        .assert()
        .success()
        .stdout("1048576\n");

    Ok(())
}

#[test]
fn test_get_missing_property() -> Result<(), Box<dyn Error>> {
    let file = probe_file(r#"{"streams":[]}"#)?;

    mediaprobe_cmd()
        .arg("get")
        .arg(file.path())
        .arg("duration")
        .assert()
        .success()
        .stdout("<not present>\n");

    Ok(())
}

#[test]
fn test_get_all_scope_raw() -> Result<(), Box<dyn Error>> {
    let file = probe_file(r#"{"format":{"tags":{"title":"x"}}}"#)?;

    mediaprobe_cmd()
        .arg("get")
        .arg(file.path())
        .arg("format")
        .args(["--scope", "all", "--as", "raw"])
        .assert()
        .success()
        .stdout(contains("\"title\": \"x\""));

    Ok(())
}
