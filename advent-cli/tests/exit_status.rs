use std::process::Command;

fn my_aoc(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_my-aoc"))
        .args(args)
        .env_remove("AOC_SESSION_ID")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_error_is_reported_once() {
    for args in [&["-y", "2019"][..], &["-y", "2019", "-v"][..]] {
        let output = my_aoc(args);
        let stderr = String::from_utf8_lossy(&output.stderr);

        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
        assert_eq!(stderr.matches("Year 2019 is not supported").count(), 1, "{}", stderr);
        assert!(stderr.contains("Error: Year 2019 is not supported"));
    }
}

#[test]
fn test_list_exits_cleanly() {
    let output = my_aoc(&["list"]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    assert!(String::from_utf8_lossy(&output.stdout).contains("2022"));
}
