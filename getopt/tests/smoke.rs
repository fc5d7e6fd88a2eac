use std::process::{Command, Output};

fn getopt_binary() -> &'static str {
    env!("CARGO_BIN_EXE_getopt")
}

/// Run getopt with a clean environment for the variables it reads.
fn getopt(args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(getopt_binary());
    cmd.args(args)
        .env_remove("POSIXLY_CORRECT")
        .env_remove("POSIX_ME_HARDER")
        .env_remove("OPTSCAN_LOG")
        .env_remove("RUST_LOG");
    for (k, v) in env {
        cmd.env(k, v);
    }
    cmd.output().expect("failed to run getopt")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn options_form_output() {
    let out = getopt(
        &[
            "-o", "vf:", "-l", "verbose,file:", "--", "-v", "a", "--file", "x", "b",
        ],
        &[],
    );
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), " -v --file x -- a b\n");
}

#[test]
fn traditional_form_output() {
    let out = getopt(&["ab:", "-a", "c", "-b1"], &[]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), " -a -b 1 -- c\n");
}

#[test]
fn optional_arguments() {
    let out = getopt(
        &["-o", "c::", "-l", "color::", "--", "-c", "--color=always", "-cx", "--color"],
        &[],
    );
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), " -c --color=always -cx --color= --\n");
}

#[test]
fn posixly_correct_stops_at_first_argument() {
    let out = getopt(&["-o", "a", "--", "x", "-a"], &[("POSIXLY_CORRECT", "1")]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), " -- x -a\n");

    let out = getopt(&["-o", "+a", "--", "x", "-a"], &[]);
    assert_eq!(stdout(&out), " -- x -a\n");
}

#[test]
fn posix_me_harder_stops_at_first_argument() {
    let out = getopt(&["-o", "a", "--", "x", "-a"], &[("POSIX_ME_HARDER", "1")]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), " -- x -a\n");
}

#[test]
fn unknown_option_exit_1() {
    let out = getopt(&["-o", "a", "--", "-x"], &[]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "");
    assert_eq!(stderr(&out), "getopt: unknown option: -x\n");
}

#[test]
fn name_and_quiet() {
    let out = getopt(&["-n", "myprog", "-o", "a:", "--", "-a"], &[]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stderr(&out), "myprog: option requires an argument: -a\n");

    let out = getopt(&["-q", "-o", "a:", "--", "-a"], &[]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stderr(&out), "");
}

#[test]
fn quiet_output() {
    let out = getopt(&["-Q", "-o", "a", "--", "-a"], &[]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "");
}

#[test]
fn own_argument_errors_exit_2() {
    let out = getopt(&[], &[]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("missing optstring argument"));

    let out = getopt(&["-Z", "ab"], &[]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("unknown option: -Z"));
}

#[test]
fn bad_definition_exit_3() {
    let out = getopt(&["-o", "a", "-l", "a", "--", "-a"], &[]);
    assert_eq!(out.status.code(), Some(3));
    assert!(stderr(&out).contains("duplicate option name: a"));
}

#[test]
fn test_mode_exit_4() {
    let out = getopt(&["-T"], &[]);
    assert_eq!(out.status.code(), Some(4));
}

#[test]
fn help_and_version() {
    let out = getopt(&["--help"], &[]);
    assert!(out.status.success());
    assert!(stdout(&out).starts_with("Usage:"));

    let out = getopt(&["-V"], &[]);
    assert!(out.status.success());
    assert!(stdout(&out).starts_with("getopt from optscan "));
}

#[test]
fn debug_logging_goes_to_stderr() {
    let out = getopt(&["-o", "a", "--", "-a"], &[("OPTSCAN_LOG", "debug")]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), " -a --\n");
    assert!(stderr(&out).contains("parsed command line"));
}
