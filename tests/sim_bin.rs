use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["tablero", "2"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    for name in ["naive", "weakest", "spread", "focus", "random"] {
        assert!(v[name]["turns"].as_u64().unwrap() > 0, "{} did not play", name);
        assert!(v[name]["score"].is_u64());
    }
}

#[test]
fn cli_json_output() {
    let output = Command::new(env!("CARGO_BIN_EXE_naval_salvo"))
        .args(["--board", "tablero", "--launchers", "1", "--output", "json", "--seed", "5"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("failed to run naval_salvo binary");
    assert!(output.status.success());
    let v: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("invalid json");
    let events = v["events"].as_array().unwrap();
    assert_eq!(events[0]["event"], "turn_state");
    assert_eq!(events.last().unwrap()["event"], "finished");
    assert_eq!(events.last().unwrap()["turn"], v["turns"]);
}
