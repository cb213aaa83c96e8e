use super::create_test_client;
use crate::HostState;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_host_list_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/statusjson.cgi"))
        .and(query_param("query", "hostlist"))
        .and(query_param("details", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": { "type_code": 0, "type_text": "Success", "message": "" },
            "data": {
                "hostlist": {
                    "web-01": {
                        "name": "web-01",
                        "status": 0,
                        "last_check": 1700000000000_u64,
                        "plugin_output": "PING OK - Packet loss = 0%, RTA = 1.20 ms"
                    },
                    "db-01": {
                        "name": "db-01",
                        "status": 2,
                        "last_check": 1700000000000_u64,
                        "plugin_output": "CRITICAL - Host Unreachable"
                    }
                }
            }
        })))
        .mount(&mock_server)
        .await;

    let hosts = client.host_list().await.unwrap();
    assert_eq!(hosts.len(), 2);
    assert_eq!(hosts["web-01"].state(), HostState::Ok);
    assert_eq!(hosts["db-01"].state(), HostState::Critical);
    assert!(hosts["db-01"].plugin_output.contains("Unreachable"));
}

#[tokio::test]
async fn test_host_list_unknown_status_code() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/statusjson.cgi"))
        .and(query_param("query", "hostlist"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": { "type_code": 0, "type_text": "Success", "message": "" },
            "data": {
                "hostlist": {
                    "odd-01": {
                        "name": "odd-01",
                        "status": 8,
                        "plugin_output": ""
                    }
                }
            }
        })))
        .mount(&mock_server)
        .await;

    let hosts = client.host_list().await.unwrap();
    assert_eq!(hosts["odd-01"].state(), HostState::Unknown);
    assert_eq!(hosts["odd-01"].last_check, 0);
}
