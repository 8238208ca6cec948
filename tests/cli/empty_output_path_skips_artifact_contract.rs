use crate::harness::TestContext;
use crate::harness::test_context::JQ_CONFIG;
use predicates::prelude::*;

#[test]
fn empty_out_skips_makefile() {
    let ctx = TestContext::new();
    ctx.write_config(JQ_CONFIG);

    ctx.cli()
        .args(["--out", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("Makefile").not());

    assert!(!ctx.exists("make-env.Makefile"));
    assert!(ctx.exists("make-env.Dockerfile"));
}

#[test]
fn empty_dockerfile_skips_dockerfile() {
    let ctx = TestContext::new();
    ctx.write_config(JQ_CONFIG);

    ctx.cli().args(["--dockerfile="]).assert().success();

    assert!(ctx.exists("make-env.Makefile"));
    assert!(!ctx.exists("make-env.Dockerfile"));
}
