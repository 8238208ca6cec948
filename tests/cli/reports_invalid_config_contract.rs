use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn missing_config_fails_with_path() {
    let ctx = TestContext::new();

    ctx.cli()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read config 'make-env.yaml'"));
}

#[test]
fn malformed_config_fails() {
    let ctx = TestContext::new();
    ctx.write_config("tools: [unterminated\n");

    ctx.cli()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config 'make-env.yaml'"));
}

#[test]
fn multiple_installers_name_the_tool() {
    let ctx = TestContext::new();
    ctx.write_config("tools:\n  jq:\n    provided: {}\n    http:\n      url: https://x/jq\n");

    ctx.cli()
        .assert()
        .failure()
        .stderr(predicate::str::contains("jq"))
        .stderr(predicate::str::contains("provided, http"));
}

#[test]
fn dependency_cycle_shows_path() {
    let ctx = TestContext::new();
    ctx.write_config(
        "tools:\n  a:\n    dependsOn: [b]\n    provided: {}\n  b:\n    dependsOn: [a]\n    provided: {}\n",
    );

    ctx.cli().assert().failure().stderr(predicate::str::contains("a -> b -> a"));

    assert!(!ctx.exists("make-env.Makefile"));
    assert!(!ctx.exists("make-env.Dockerfile"));
}

#[test]
fn undefined_dependency_is_named() {
    let ctx = TestContext::new();
    ctx.write_config("tools:\n  yq:\n    dependsOn: [jq]\n    provided: {}\n");

    ctx.cli().assert().failure().stderr(predicate::str::contains("jq"));
}
