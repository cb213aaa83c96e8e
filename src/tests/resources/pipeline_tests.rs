//! End-to-end tests: mocked backend through client, pipeline, and
//! orchestrator.

use super::create_dashboard_client;
use crate::{DiskUsage, FetchState, HostStatus};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HOSTGROUP_BODY: &str = r#"{
    "result": { "type_code": 0, "type_text": "Success", "message": "" },
    "data": {
        "hostgrouplist": {
            "web-servers": { "members": ["web-01", "web-02", "retired-09"] },
            "db-servers": { "members": ["db-01"] }
        }
    }
}"#;

fn servicelist_body() -> serde_json::Value {
    serde_json::json!({
        "result": { "type_code": 0, "type_text": "Success", "message": "" },
        "data": {
            "servicelist": {
                "web-01": {
                    "Host Alive": { "plugin_output": "PING OK - Packet loss = 0%, RTA = 1.20 ms" },
                    "CPU Usage": { "plugin_output": "CPU 23.5% used" },
                    "Memory Usage": { "plugin_output": "Memory Used: 512 MB, Free: 256 MB" },
                    "Disk Space": {
                        "plugin_output": "DISK OK - free space: / 21845 MB",
                        "perf_data": "/=7743MB;23670;26629;0;29588"
                    }
                },
                "web-02": {
                    "Host Alive": { "plugin_output": "PING CRITICAL - Packet loss = 100%" }
                },
                "db-01": {
                    "Host Alive": { "plugin_output": "PING OK - RTA = 0.80 ms" },
                    "Memory Usage": { "plugin_output": "swap only" }
                }
            }
        }
    })
}

async fn mount_backend(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/statusjson.cgi"))
        .and(query_param("query", "hostgrouplist"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(HOSTGROUP_BODY.as_bytes().to_vec(), "application/json"),
        )
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/statusjson.cgi"))
        .and(query_param("query", "servicelist"))
        .respond_with(ResponseTemplate::new(200).set_body_json(servicelist_body()))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_grouped_view_end_to_end() {
    let mock_server = MockServer::start().await;
    mount_backend(&mock_server).await;
    let client = create_dashboard_client(&mock_server).await;

    let view = client.grouped_view().await.unwrap();

    assert_eq!(view.groups.len(), 2);
    assert_eq!(view.groups[0].name, "web-servers");
    assert_eq!(view.groups[1].name, "db-servers");

    // retired-09 has no check data and is silently omitted.
    let web = &view.groups[0];
    assert_eq!(web.hosts.len(), 2);
    assert_eq!(web.hosts[0].host_name, "web-01");
    assert_eq!(web.hosts[1].host_name, "web-02");

    let web01 = &web.hosts[0].metrics;
    assert_eq!(web01.status, HostStatus::Up);
    assert_eq!(web01.cpu, Some(23.5));
    assert_eq!(web01.memory_mb, Some(512));
    assert_eq!(
        web01.disk,
        DiskUsage {
            used_mb: 7743,
            total_mb: 29588
        }
    );
    assert_eq!(web01.disk.free_mb(), 21845);

    // Down host, no metrics: nulls plus the disk zero fallback.
    let web02 = &web.hosts[1].metrics;
    assert_eq!(web02.status, HostStatus::Down);
    assert_eq!(web02.cpu, None);
    assert_eq!(web02.memory_mb, None);
    assert_eq!(web02.disk, DiskUsage::default());

    // Unparseable memory output is null, not zero.
    let db01 = &view.groups[1].hosts[0].metrics;
    assert_eq!(db01.status, HostStatus::Up);
    assert_eq!(db01.memory_mb, None);
}

#[tokio::test]
async fn test_pipeline_is_idempotent() {
    let mock_server = MockServer::start().await;
    mount_backend(&mock_server).await;
    let client = create_dashboard_client(&mock_server).await;

    let snapshot = client.snapshot().await.unwrap();
    let bindings = crate::ServiceBindings::default();
    assert_eq!(snapshot.grouped_view(&bindings), snapshot.grouped_view(&bindings));

    let first = client.grouped_view().await.unwrap();
    let second = client.grouped_view().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_orchestrator_ready_end_to_end() {
    let mock_server = MockServer::start().await;
    mount_backend(&mock_server).await;
    let client = create_dashboard_client(&mock_server).await;

    let mut orchestrator = client.into_orchestrator();
    assert!(matches!(orchestrator.state(), FetchState::Idle));

    let state = orchestrator.refresh().await;
    let view = state.view().expect("state should be Ready");
    assert_eq!(view.groups.len(), 2);
}

#[tokio::test]
async fn test_orchestrator_failed_on_partial_backend() {
    let mock_server = MockServer::start().await;

    // Host groups respond fine; the service list does not.
    Mock::given(method("GET"))
        .and(path("/statusjson.cgi"))
        .and(query_param("query", "hostgrouplist"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(HOSTGROUP_BODY.as_bytes().to_vec(), "application/json"),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/statusjson.cgi"))
        .and(query_param("query", "servicelist"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = create_dashboard_client(&mock_server).await;
    let mut orchestrator = client.into_orchestrator();

    let state = orchestrator.refresh().await;
    assert!(state.error().is_some());
    assert!(state.view().is_none());
}
