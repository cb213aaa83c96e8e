use super::create_test_client;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_service_list_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/statusjson.cgi"))
        .and(query_param("query", "servicelist"))
        .and(query_param("details", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": { "type_code": 0, "type_text": "Success", "message": "" },
            "data": {
                "servicelist": {
                    "web-01": {
                        "Host Alive": {
                            "plugin_output": "PING OK - Packet loss = 0%, RTA = 1.20 ms",
                            "perf_data": "rta=1.200000ms;3000.000000;5000.000000;0.000000 pl=0%;80;100;0"
                        },
                        "CPU Usage": {
                            "plugin_output": "CPU 23.5% used"
                        },
                        "Disk Space": {
                            "plugin_output": "DISK OK - free space: / 21845 MB (73% inode=99%)",
                            "perf_data": "/=7743MB;23670;26629;0;29588"
                        }
                    },
                    "db-01": {
                        "Memory Usage": {
                            "plugin_output": "Memory Used: 512 MB, Free: 256 MB"
                        }
                    }
                }
            }
        })))
        .mount(&mock_server)
        .await;

    let checks = client.service_list().await.unwrap();
    assert_eq!(checks.len(), 2);

    let web = &checks["web-01"];
    assert_eq!(web.len(), 3);
    assert!(web["Host Alive"].plugin_output.contains("PING OK"));
    assert_eq!(
        web["Disk Space"].perf_data.as_deref(),
        Some("/=7743MB;23670;26629;0;29588")
    );
    assert_eq!(web["CPU Usage"].perf_data, None);

    let db = &checks["db-01"];
    assert_eq!(db["Memory Usage"].plugin_output, "Memory Used: 512 MB, Free: 256 MB");
}

#[tokio::test]
async fn test_service_list_empty() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/statusjson.cgi"))
        .and(query_param("query", "servicelist"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": { "type_code": 0, "type_text": "Success", "message": "" },
            "data": { "servicelist": {} }
        })))
        .mount(&mock_server)
        .await;

    let checks = client.service_list().await.unwrap();
    assert!(checks.is_empty());
}

#[tokio::test]
async fn test_service_list_ignores_extra_backend_fields() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/statusjson.cgi"))
        .and(query_param("query", "servicelist"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": { "type_code": 0, "type_text": "Success", "message": "" },
            "data": {
                "servicelist": {
                    "web-01": {
                        "Host Alive": {
                            "plugin_output": "PING OK - 1.2ms",
                            "status": 2,
                            "last_check": 1700000000000_u64,
                            "max_attempts": 4
                        }
                    }
                }
            }
        })))
        .mount(&mock_server)
        .await;

    let checks = client.service_list().await.unwrap();
    assert_eq!(checks["web-01"]["Host Alive"].plugin_output, "PING OK - 1.2ms");
}
