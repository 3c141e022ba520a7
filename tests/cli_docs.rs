#![cfg(unix)]

mod common;

use common::{stderr_of, stdout_of, TestEnv};

fn docs_env() -> TestEnv {
    let env = TestEnv::new();
    env.write_source("x.js", "var x = 1;");
    env.write_source("y.js", "var y = 2;");
    env.write_manifest("a", &["x.js", "y.js"]);
    env
}

#[test]
fn docs_invokes_generator_with_conf_and_sources() {
    let env = docs_env();
    env.write_script(
        "fake-jsdoc.sh",
        "#!/bin/sh\nprintf '%s\\n' \"$@\" > jsdoc-args.txt\n",
    );
    env.write_config("[docs]\ncommand = \"./fake-jsdoc.sh\"\n");

    let output = env.run(&["docs", "--include", "a", "--conf", "conf/jsdoc.json"]);
    assert!(output.status.success(), "stderr:\n{}", stderr_of(&output));

    let args: Vec<String> = env
        .read_file("jsdoc-args.txt")
        .lines()
        .map(str::to_string)
        .collect();
    assert_eq!(args, vec!["-c", "conf/jsdoc.json", "x.js", "y.js"]);
}

#[test]
fn docs_conf_defaults_to_current_dir() {
    let env = docs_env();
    env.write_script(
        "fake-jsdoc.sh",
        "#!/bin/sh\nprintf '%s\\n' \"$@\" > jsdoc-args.txt\n",
    );
    env.write_config("[docs]\ncommand = \"./fake-jsdoc.sh\"\n");

    let output = env.run(&["docs", "--include", "a"]);
    assert!(output.status.success());

    let args: Vec<String> = env
        .read_file("jsdoc-args.txt")
        .lines()
        .map(str::to_string)
        .collect();
    assert_eq!(args[..2], ["-c".to_string(), "./".to_string()]);
}

#[test]
fn docs_prints_progress_and_command_line() {
    let env = docs_env();
    env.write_script("fake-jsdoc.sh", "#!/bin/sh\nexit 0\n");
    env.write_config("[docs]\ncommand = \"./fake-jsdoc.sh\"\n");

    let output = env.run(&["docs", "--include", "a"]);
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains(" * Building sources"), "stdout:\n{}", stdout);
    assert!(
        stdout.contains(" * Sources are \"x.js y.js\""),
        "stdout:\n{}",
        stdout
    );
    assert!(stdout.contains(" * Generating jsdoc"), "stdout:\n{}", stdout);
    assert!(
        stdout.contains("./fake-jsdoc.sh -c ./ x.js y.js"),
        "stdout:\n{}",
        stdout
    );
}

#[test]
fn docs_failing_generator_is_fatal() {
    let env = docs_env();
    env.write_script("fake-jsdoc.sh", "#!/bin/sh\nexit 2\n");
    env.write_config("[docs]\ncommand = \"./fake-jsdoc.sh\"\n");

    let output = env.run(&["docs", "--include", "a"]);
    assert!(!output.status.success());
    assert!(
        stderr_of(&output).contains("documentation generator exited with"),
        "stderr:\n{}",
        stderr_of(&output)
    );
}

#[test]
fn docs_missing_manifest_fails() {
    let env = TestEnv::new();

    let output = env.run(&["docs", "--include", "ghost"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("manifest 'ghost' not found"));
}
