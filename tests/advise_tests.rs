use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::net::SocketAddr;
use tokio::task;
use warp::Filter;

const PROJECT_YAML: &str = r#"
name: Demo House
area: 2000
area_unit: sq_ft
floors: 2
complexity: medium
timeline: 180
budget: 4500000
estimated_cost: 5000000
"#;

fn write_project() -> assert_fs::NamedTempFile {
    let input_file = assert_fs::NamedTempFile::new("project.yaml").unwrap();
    input_file.write_str(PROJECT_YAML).unwrap();
    input_file
}

async fn run_advise(url: String, input: String, output: String) {
    task::spawn_blocking(move || {
        let mut cmd = assert_cmd::cargo_bin_cmd!("buildplan");
        cmd.args([
            "advise",
            "-i",
            &input,
            "-o",
            &output,
            "--advisor-url",
            &url,
            "--model",
            "test-model",
        ]);
        cmd.assert()
            .success()
            .stdout(predicate::str::contains("Advisory report written to"));
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn advise_writes_service_analysis() {
    let generate_route = warp::path("api")
        .and(warp::path("generate"))
        .and(warp::post())
        .and(warp::body::json())
        .map(|body: serde_json::Value| {
            let model = body["model"].as_str().unwrap_or_default().to_string();
            warp::reply::json(&serde_json::json!({
                "model": model,
                "response": "  Timeline is tight but workable with parallel crews.  ",
                "done": true
            }))
        });
    let (addr, server) = warp::serve(generate_route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    let input_file = write_project();
    let output_file = assert_fs::NamedTempFile::new("advice.yaml").unwrap();
    run_advise(
        format!("http://{addr}"),
        input_file.path().to_str().unwrap().to_string(),
        output_file.path().to_str().unwrap().to_string(),
    )
    .await;

    let output = fs::read_to_string(output_file.path()).unwrap();
    assert!(output.contains("analysis: Timeline is tight but workable with parallel crews."));
    assert!(output.contains("ai_available: true"));
    assert!(output.contains("budget_status: tight"));
    assert!(output.contains("timeline_status: realistic"));
}

#[tokio::test]
async fn advise_falls_back_when_service_errors() {
    let generate_route = warp::path("api")
        .and(warp::path("generate"))
        .map(|| warp::reply::with_status("overloaded", warp::http::StatusCode::SERVICE_UNAVAILABLE));
    let (addr, server) = warp::serve(generate_route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    let input_file = write_project();
    let output_file = assert_fs::NamedTempFile::new("advice.yaml").unwrap();
    run_advise(
        format!("http://{addr}"),
        input_file.path().to_str().unwrap().to_string(),
        output_file.path().to_str().unwrap().to_string(),
    )
    .await;

    let output = fs::read_to_string(output_file.path()).unwrap();
    assert!(output.contains("AI analysis unavailable. Proceeding with standard estimation."));
    assert!(output.contains("ai_available: false"));
}

#[tokio::test]
async fn advise_falls_back_when_service_is_unreachable() {
    // Bind and drop a listener so the port is known to be closed.
    let addr: SocketAddr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    let input_file = write_project();
    let output_file = assert_fs::NamedTempFile::new("advice.yaml").unwrap();
    run_advise(
        format!("http://{addr}"),
        input_file.path().to_str().unwrap().to_string(),
        output_file.path().to_str().unwrap().to_string(),
    )
    .await;

    let output = fs::read_to_string(output_file.path()).unwrap();
    assert!(output.contains("ai_available: false"));
}

#[test]
fn advise_offline_prints_rule_based_report() {
    let input_file = write_project();

    let mut cmd = assert_cmd::cargo_bin_cmd!("buildplan");
    cmd.args([
        "advise",
        "-i",
        input_file.path().to_str().unwrap(),
        "--offline",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ai_available: false"))
        .stdout(predicate::str::contains("feasibility_score: 85"))
        .stdout(predicate::str::contains("budget_status: tight"))
        .stdout(predicate::str::contains("timeline_status: realistic"));
}
