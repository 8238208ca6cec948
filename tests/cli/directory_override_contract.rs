use crate::harness::TestContext;
use crate::harness::test_context::JQ_CONFIG;
use predicates::prelude::*;

#[test]
fn directory_flag_resolves_paths_against_it() {
    let ctx = TestContext::new();
    ctx.write_file("project/make-env.yaml", JQ_CONFIG);

    ctx.cli().args(["-C", "project"]).assert().success();

    assert!(ctx.exists("project/make-env.Makefile"));
    assert!(ctx.exists("project/make-env.Dockerfile"));
    assert!(!ctx.exists("make-env.Makefile"));
}

#[test]
fn missing_directory_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--directory", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Directory not found"));
}

#[test]
fn debug_flag_logs_to_stderr_only() {
    let ctx = TestContext::new();
    ctx.write_config(JQ_CONFIG);

    ctx.cli()
        .arg("--debug")
        .assert()
        .success()
        .stderr(predicate::str::contains("resolved emission order"))
        .stdout(predicate::str::contains("resolved emission order").not());

    assert!(!ctx.read_file("make-env.Makefile").contains("DEBUG"));
}
