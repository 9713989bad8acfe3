use assert_cmd::Command;

#[test]
fn cli_help_smoke() {
    let mut cmd = Command::cargo_bin("mmgroup").unwrap();
    cmd.arg("--help");
    cmd.assert().success();
}

#[test]
fn merge_help_lists_thresholds() {
    let mut cmd = Command::cargo_bin("mmgroup").unwrap();
    cmd.args(["merge", "--help"]);
    let assert = cmd.assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("--count"));
    assert!(stdout.contains("--length"));
    assert!(stdout.contains("--drop-low-count"));
}
