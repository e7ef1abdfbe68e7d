//! Integration tests for the `SoftLayer_Location` service.

use softlayer_api::services::{LocationService, Service, ServiceError};
use softlayer_api::{ApiKey, ApiUsername, EndpointUrl, SoftLayerClient, SoftLayerConfig};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test client pointed at the given mock server.
fn create_test_client(mock_server: &MockServer) -> SoftLayerClient {
    let config = SoftLayerConfig::builder()
        .username(ApiUsername::new("SL123456").unwrap())
        .api_key(ApiKey::new("test-api-key").unwrap())
        .endpoint(EndpointUrl::new(mock_server.uri()).unwrap())
        .build()
        .unwrap();
    SoftLayerClient::new(&config)
}

#[test]
fn test_service_name() {
    let mock_config = SoftLayerConfig::builder()
        .username(ApiUsername::new("SL123456").unwrap())
        .api_key(ApiKey::new("test-api-key").unwrap())
        .build()
        .unwrap();
    let client = SoftLayerClient::new(&mock_config);

    assert_eq!(client.location_service().name(), "SoftLayer_Location");
    assert_eq!(LocationService::NAME, "SoftLayer_Location");
}

#[tokio::test]
async fn test_get_object_sends_mask_and_decodes_location() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/SoftLayer_Location/66/getObject.json"))
        .and(query_param("objectMask", "id;longName;name"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 66,
            "longName": "Dallas 1",
            "name": "dal01"
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let location = client.location_service().get_object(66).await.unwrap();

    assert_eq!(location.id, 66);
    assert_eq!(location.long_name, "Dallas 1");
    assert_eq!(location.name, "dal01");
}

#[tokio::test]
async fn test_get_datacenters_decodes_collection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/SoftLayer_Location/getDatacenters.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 66, "longName": "Dallas 1", "name": "dal01"},
            {"id": 154, "longName": "Washington 1", "name": "wdc01"}
        ])))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let datacenters = client.location_service().get_datacenters().await.unwrap();

    assert_eq!(datacenters.len(), 2);
    assert_eq!(datacenters[0].name, "dal01");
    assert_eq!(datacenters[1].id, 154);
}

#[tokio::test]
async fn test_get_available_object_storage_datacenters_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/SoftLayer_Location/getObjectStorageDatacenters.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 265592, "longName": "Amsterdam 1", "name": "ams01"}
        ])))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let datacenters = client
        .location_service()
        .get_available_object_storage_datacenters()
        .await
        .unwrap();

    assert_eq!(datacenters.len(), 1);
    assert_eq!(datacenters[0].name, "ams01");
}

#[tokio::test]
async fn test_get_location_status_decodes_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/SoftLayer_Location/66/getLocationStatus.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"id": 2, "status": "ACTIVE"})),
        )
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let status = client
        .location_service()
        .get_location_status(66)
        .await
        .unwrap();

    assert_eq!(status.id, 2);
    assert_eq!(status.status, "ACTIVE");
}

#[tokio::test]
async fn test_get_price_groups_decodes_nested_group_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/SoftLayer_Location/66/getPriceGroups.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "id": 505,
            "description": "Location Group 2",
            "locationGroupTypeId": 82,
            "locationGroupType": {"name": "PRICING"}
        }])))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let groups = client
        .location_service()
        .get_price_groups(66)
        .await
        .unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].id, 505);
    assert_eq!(groups[0].location_group_type_id, 82);
    assert_eq!(
        groups[0].location_group_type.as_ref().unwrap().name,
        "PRICING"
    );
}

#[tokio::test]
async fn test_get_regions_decodes_keyname() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/SoftLayer_Location/66/getRegions.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"description": "na-usa-east-1", "keyname": "NA_USA_EAST_1"}
        ])))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let regions = client.location_service().get_regions(66).await.unwrap();

    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].description, "na-usa-east-1");
    assert_eq!(regions[0].keyname, "NA_USA_EAST_1");
}

#[tokio::test]
async fn test_http_error_statuses_map_to_service_error() {
    for code in [400_u16, 401, 499, 500, 501, 599] {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/SoftLayer_Location/getDatacenters.json"))
            .respond_with(ResponseTemplate::new(code))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.location_service().get_datacenters().await;

        match result {
            Err(ServiceError::Http {
                service,
                operation,
                code: got,
            }) => {
                assert_eq!(service, "SoftLayer_Location");
                assert_eq!(operation, "getDatacenters");
                assert_eq!(got, code);
            }
            other => panic!("expected Http error for status {code}, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_http_error_message_format() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/SoftLayer_Location/getDatacenters.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let error = client
        .location_service()
        .get_datacenters()
        .await
        .unwrap_err();

    assert_eq!(
        error.to_string(),
        "could not SoftLayer_Location#getDatacenters, HTTP error code: '500'"
    );
}

#[tokio::test]
async fn test_malformed_json_produces_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/SoftLayer_Location/getDatacenters.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.location_service().get_datacenters().await;

    assert!(matches!(
        result,
        Err(ServiceError::Decode {
            operation: "getDatacenters",
            ..
        })
    ));
}
