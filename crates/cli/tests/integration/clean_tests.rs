use predicates::prelude::*;

use crate::common::TestEnv;

const MANIFEST: &str = r#"
[[libraries]]
name = "Widgets"
flag = "g"

[[themes]]
name = "DarkTheme"
flag = "m"
"#;

fn project_tree(env: &TestEnv) {
  for dir in ["NUKit", "TNKit", "Bambou", "Widgets", "DarkTheme/Build"] {
    env.mkdir(&format!("Libraries/{}", dir));
  }
  env.mkdir("Build/Deployment");
  env.write_file("webapp/index.html", "<html></html>");
  env.write_file("webapp/main.environment", "");
  env.write_file("webapp/WEB-INF/web.xml", "<web-app/>");
  env.write_file("nukit.toml", MANIFEST);
}

#[test]
fn clean_cleans_components_and_builds_nothing() {
  let env = TestEnv::new();
  project_tree(&env);

  env
    .nukit_cmd()
    .args(["--clean", "--everything"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Clean complete"));

  assert_eq!(
    env.log(),
    vec![
      "jake clean @ ./Libraries/NUKit",
      "jake clean @ ./Libraries/TNKit",
      "jake clean @ ./Libraries/Bambou",
      "jake clean @ ./Libraries/Widgets",
    ]
  );
  assert!(!env.exists("Build"));
  assert!(!env.exists("Libraries/DarkTheme/Build"));
  assert!(!env.exists("webapp/index.html"));
  assert!(!env.exists("webapp/main.environment"));
  assert!(env.exists("webapp/WEB-INF/web.xml"));
  assert!(env.install_dir().join("bin/jake").exists());
  assert!(env.build_dir().is_dir());
}

#[test]
fn clobber_also_removes_install_and_build_dirs() {
  let env = TestEnv::new();
  project_tree(&env);

  env.nukit_cmd().arg("--clobber").assert().success();

  let log = env.log();
  assert_eq!(log.len(), 6);
  assert_eq!(log[4], "jake clobber-theme @ .");
  assert_eq!(log[5], "jake clobber @ .");
  assert!(!env.install_dir().exists());
  assert!(!env.build_dir().exists());
}

#[test]
fn clean_stops_at_first_failure() {
  let env = TestEnv::new();
  project_tree(&env);

  env
    .nukit_cmd()
    .arg("-C")
    .env("FAKE_EXIT", "4")
    .assert()
    .code(255)
    .stderr(predicate::str::contains("expected to return 0 (was 4)"));

  assert_eq!(env.log(), vec!["jake clean @ ./Libraries/NUKit"]);
  assert!(env.exists("Build"));
}
