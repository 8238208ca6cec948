use crate::harness::TestContext;

const CONFIG: &str = r#"
vars:
  mirror: https://mirror.example
toolSets:
  lint: [yamllint, jq]
tools:
  jq:
    vars:
      version: "1.7.1"
    http:
      url: "{{ global.mirror }}/jq-{{ vars.version }}"
  yq:
    dependsOn: [jq]
    go:
      module: github.com/mikefarah/yq/v4
      version: v4.44.2
  yamllint:
    pipx:
      version: "1.35.1"
"#;

#[test]
fn repeated_runs_are_byte_identical() {
    let ctx = TestContext::new();
    ctx.write_config(CONFIG);

    ctx.cli().assert().success();
    let makefile = ctx.read_file("make-env.Makefile");
    let dockerfile = ctx.read_file("make-env.Dockerfile");

    ctx.cli().assert().success();
    assert_eq!(ctx.read_file("make-env.Makefile"), makefile);
    assert_eq!(ctx.read_file("make-env.Dockerfile"), dockerfile);

    assert!(makefile.find("# jq (http)").unwrap() < makefile.find("# yq (go)").unwrap());
    assert!(makefile.contains("lint: yamllint jq\n"));
}
