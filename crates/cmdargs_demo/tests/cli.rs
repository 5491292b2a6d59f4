use std::{
    ffi::OsStr,
    path::Path,
    process::{Command, Output},
};

fn run<I, S>(dir: &Path, commands: &Path, args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    Command::new(env!("CARGO_BIN_EXE_cmdargs_demo"))
        .args(args)
        .current_dir(dir)
        .env("CMDARGS_COMMANDS", commands)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn builtin<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let dir = tempfile::tempdir().unwrap();
    run(dir.path(), &dir.path().join("missing.toml"), args)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn first_stderr_line(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr)
        .lines()
        .next()
        .unwrap_or_default()
        .to_string()
}

#[test]
fn parse_failures_exit_with_one() {
    let tests: Vec<(Vec<&str>, &str)> = vec![
        (vec![], "error: Missing a command"),
        (vec!["bogus"], "error: Unknown command: bogus"),
        (vec!["test", "-t"], "error: Missing value for argument: -t"),
        (
            vec!["test", "-t", "a", "--test", "b"],
            "error: Duplicate argument: --test",
        ),
    ];

    for (args, expected) in tests {
        let output = builtin(&args);
        assert_eq!(output.status.code(), Some(1), "{:?}", args);
        assert_eq!(first_stderr_line(&output), expected, "{:?}", args);
        assert!(output.stdout.is_empty(), "{:?}", args);

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Available commands:"), "{:?}", args);
        assert!(stderr.contains("\t-t/--test"), "{:?}", args);
    }
}

#[test]
fn single_argument_prints_bare_value() {
    let output = builtin(&["test", "-t", "value"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "value\n");
    assert!(output.stderr.is_empty());

    let output = builtin(&["test"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "def\n");
}

#[cfg(unix)]
#[test]
fn non_utf8_argument_is_not_a_crash() {
    use std::{ffi::OsString, os::unix::ffi::OsStringExt as _};

    let args = vec![
        OsString::from("test"),
        OsString::from("-t"),
        OsString::from_vec(vec![b'a', 0xff]),
    ];

    let output = builtin(&args);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "a\u{FFFD}\n");
}

#[test]
fn configured_commands_print_in_declaration_order() {
    let dir = tempfile::tempdir().unwrap();
    let commands = dir.path().join("commands.toml");
    std::fs::write(
        &commands,
        r#"
        [[commands]]
        name = "copy"

        [[commands.arguments]]
        short       = "-s"
        long        = "--source"
        description = "where to copy from"

        [[commands.arguments]]
        short   = "-m"
        long    = "--mode"
        default = "fast"
        "#,
    )
    .unwrap();

    let output = run(dir.path(), &commands, &["copy", "--source", "a"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "-s=a\n-m=fast\n");

    let output = run(dir.path(), &commands, &["copy", "-m", "slow", "-s", "b"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "-s=b\n-m=slow\n");

    let output = run(dir.path(), &commands, &["copy"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(first_stderr_line(&output), "error: Missing argument: -s");

    let output = run(dir.path(), &commands, &["test"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(first_stderr_line(&output), "error: Unknown command: test");
}
