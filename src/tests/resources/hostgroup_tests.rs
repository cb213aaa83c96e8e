use super::create_test_client;
use crate::NagboardError;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Raw body: serde_json::json! would sort keys alphabetically and the
// whole point here is backend document order.
const HOSTGROUP_BODY: &str = r#"{
    "format_version": 0,
    "result": {
        "query_time": 1700000000000,
        "cgi": "statusjson.cgi",
        "user": "nagiosadmin",
        "query": "hostgrouplist",
        "query_status": "released",
        "type_code": 0,
        "type_text": "Success",
        "message": ""
    },
    "data": {
        "hostgrouplist": {
            "zeta-servers": { "members": ["zeta-01", "zeta-02"] },
            "alpha-servers": { "members": ["alpha-01"] },
            "empty-rack": { "members": [] }
        }
    }
}"#;

#[tokio::test]
async fn test_hostgroup_list_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/statusjson.cgi"))
        .and(query_param("query", "hostgrouplist"))
        .and(query_param("details", "true"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(HOSTGROUP_BODY.as_bytes().to_vec(), "application/json"),
        )
        .mount(&mock_server)
        .await;

    let groups = client.host_group_list().await.unwrap();
    assert_eq!(groups.len(), 3);

    // Document order survives, not alphabetical order.
    assert_eq!(groups[0].name, "zeta-servers");
    assert_eq!(groups[0].members, vec!["zeta-01", "zeta-02"]);
    assert_eq!(groups[1].name, "alpha-servers");
    assert_eq!(groups[1].members, vec!["alpha-01"]);
    assert_eq!(groups[2].name, "empty-rack");
    assert!(groups[2].members.is_empty());
}

#[tokio::test]
async fn test_hostgroup_list_empty() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/statusjson.cgi"))
        .and(query_param("query", "hostgrouplist"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": { "type_code": 0, "type_text": "Success", "message": "" },
            "data": { "hostgrouplist": {} }
        })))
        .mount(&mock_server)
        .await;

    let groups = client.host_group_list().await.unwrap();
    assert!(groups.is_empty());
}

#[tokio::test]
async fn test_hostgroup_list_backend_error() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/statusjson.cgi"))
        .and(query_param("query", "hostgrouplist"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": {
                "type_code": 8,
                "type_text": "Error",
                "message": "Status data not available"
            },
            "data": {}
        })))
        .mount(&mock_server)
        .await;

    let result = client.host_group_list().await;
    assert!(matches!(result, Err(NagboardError::Api(_))));
}
