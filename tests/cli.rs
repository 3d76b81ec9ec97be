use assert_cmd::Command;

#[test]
fn refuses_to_run_without_a_tty() {
    let output = Command::cargo_bin("fastkey")
        .unwrap()
        .args(["-p", "hi"])
        .write_stdin("")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("stdin must be a tty"));
}

#[test]
fn rejects_unknown_language() {
    Command::cargo_bin("fastkey")
        .unwrap()
        .args(["--language", "de"])
        .write_stdin("")
        .assert()
        .failure();
}

#[test]
fn prints_help() {
    let output = Command::cargo_bin("fastkey")
        .unwrap()
        .arg("--help")
        .output()
        .unwrap();
    assert!(output.status.success());
    let help = String::from_utf8_lossy(&output.stdout);
    assert!(help.contains("--seconds"));
    assert!(help.contains("--difficulty"));
}
