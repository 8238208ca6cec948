use crate::harness::TestContext;
use crate::harness::test_context::JQ_CONFIG;
use predicates::prelude::*;

#[test]
fn positional_argument_is_rejected() {
    let ctx = TestContext::new();
    ctx.write_config(JQ_CONFIG);

    ctx.cli()
        .arg("make-env.yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));

    assert!(!ctx.exists("make-env.Makefile"));
}
