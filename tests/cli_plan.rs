mod common;

use common::*;

#[test]
fn plan_lists_steps_in_deploy_order() {
    let env = TestEnv::new();
    write_bundle(&env);

    let result = env.run(&["plan", "--host", "10.0.0.1"]);
    assert!(result.success, "stderr: {}", result.stderr);

    let out = &result.stdout;
    let project = out.find("/opt/plc/Archive.prj").unwrap();
    let app = out.find("/opt/plc/Updates/Control.app").unwrap();
    let crc = out.find("/opt/plc/Updates/Control.crc").unwrap();
    let mkdir = out.find("ensure_remote_dir").unwrap();
    let html = out.find("/opt/plc/Visu/index.html").unwrap();
    assert!(project < app && app < crc && crc < mkdir && mkdir < html);
}

#[test]
fn plan_json_is_identical_for_every_target() {
    let env = TestEnv::new();
    write_bundle(&env);
    env.write("hosts.txt", "# line 1\nplc-01\nplc-02 # spare\n\nplc-01\n");

    let result = env.run(&["plan", "--json"]);
    assert!(result.success, "stderr: {}", result.stderr);

    let events = result.events();
    assert_eq!(events.len(), 1);
    let plan = &events[0];
    assert_eq!(plan["event"], "plan");
    assert_eq!(
        plan["targets"],
        serde_json::json!(["plc-01", "plc-02", "plc-01"])
    );

    let steps = plan["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 6);
    assert_eq!(steps[0]["action"], "copy_file");
    assert_eq!(steps[0]["remote"], "/opt/plc/Archive.prj");
    assert_eq!(steps[3]["action"], "ensure_remote_dir");
    assert_eq!(steps[4]["action"], "copy_tree");
    assert_eq!(steps[4]["remote"], "/opt/plc/Visu");
}

#[test]
fn plan_root_flag_overrides_config_and_env() {
    let env = TestEnv::new();
    write_bundle(&env);

    let result = env.run_with_env(
        &["plan", "--json", "--host", "h", "--root", "/srv/cli"],
        &[("PLC_DEPLOY_REMOTE_ROOT", "/srv/env")],
    );
    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(result.events()[0]["steps"][0]["remote"], "/srv/cli/Archive.prj");

    let result = env.run_with_env(
        &["plan", "--json", "--host", "h"],
        &[("PLC_DEPLOY_REMOTE_ROOT", "/srv/env")],
    );
    assert_eq!(result.events()[0]["steps"][0]["remote"], "/srv/env/Archive.prj");
}

#[test]
fn plan_without_visu_has_no_visu_steps() {
    let env = TestEnv::new();
    write_bundle(&env);
    std::fs::remove_dir_all(env.path("visu")).unwrap();

    let result = env.run(&["plan", "--json", "--host", "h"]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(result.events()[0]["steps"].as_array().unwrap().len(), 3);
}
