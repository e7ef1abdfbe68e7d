//! Integration tests for the `SoftLayer_Product_Package_Server` service.

use softlayer_api::services::{ProductPackageServerService, Service, ServiceError};
use softlayer_api::{ApiKey, ApiUsername, EndpointUrl, SoftLayerClient, SoftLayerConfig};
use wiremock::matchers::{method, path};
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

fn sample_server_json(id: i32, outlet: bool) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "catalogId": 10,
        "datacenters": "dal05,dal06",
        "defaultRamCapacity": "4",
        "dualPathNetworkFlag": false,
        "gpuFlag": false,
        "hourlyBillingFlag": true,
        "itemId": 3124,
        "itemPriceId": 44988,
        "maximumDriveCount": 4,
        "maximumPortSpeed": "1000",
        "maximumRamCapacity": "32",
        "minimumPortSpeed": "100",
        "outletFlag": outlet,
        "packageId": 200,
        "packageType": "BARE_METAL_CPU",
        "powerServerFlag": false,
        "presetId": null,
        "privateNetworkOnlyFlag": false,
        "processorBusSpeed": "1333",
        "processorCache": "8",
        "processorCores": 4,
        "processorCount": 1,
        "processorManufacturer": "Intel",
        "processorModel": "1270",
        "processorName": "Xeon",
        "processorPhysicalCores": 4,
        "processorSpeed": "3.4",
        "productName": "Single Processor Quad Core Xeon 1270",
        "redundantPowerFlag": false,
        "sapCertifiedServerFlag": false,
        "startingHourlyPrice": ".375",
        "startingMonthlyPrice": "199",
        "totalCoreCount": 4,
        "txtTpmFlag": false,
        "unitSize": 1
    })
}

#[test]
fn test_service_name() {
    assert_eq!(
        ProductPackageServerService::NAME,
        "SoftLayer_Product_Package_Server"
    );
}

#[tokio::test]
async fn test_get_all_objects_decodes_server_catalog() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/SoftLayer_Product_Package_Server/getAllObjects.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            sample_server_json(1001, false),
            sample_server_json(1002, true)
        ])))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let servers = client
        .product_package_server_service()
        .get_all_objects()
        .await
        .unwrap();

    assert_eq!(servers.len(), 2);
    assert_eq!(servers[0].id, 1001);
    assert!(!servers[0].outlet);
    assert!(servers[1].outlet);
    assert_eq!(servers[0].processor_name, "Xeon");
    assert_eq!(servers[0].total_core_count, 4);
}

#[tokio::test]
async fn test_get_object_decodes_flags_and_prices() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/SoftLayer_Product_Package_Server/1001/getObject.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_server_json(1001, false)))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let server = client
        .product_package_server_service()
        .get_object(1001)
        .await
        .unwrap();

    assert_eq!(server.id, 1001);
    assert!(server.hourly_billing);
    assert!(!server.gpu);
    assert!(server.preset_id.is_none());
    assert_eq!(server.starting_hourly_price.as_deref(), Some(".375"));
    assert_eq!(server.starting_monthly_price.as_deref(), Some("199"));
    assert_eq!(server.package_type, "BARE_METAL_CPU");
}

#[tokio::test]
async fn test_sparse_payload_uses_zero_values() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/SoftLayer_Product_Package_Server/1001/getObject.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"id": 1001, "gpuFlag": true})),
        )
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let server = client
        .product_package_server_service()
        .get_object(1001)
        .await
        .unwrap();

    assert_eq!(server.id, 1001);
    assert!(server.gpu);
    assert_eq!(server.processor_cores, 0);
    assert!(server.product_name.is_empty());
    assert!(server.starting_hourly_price.is_none());
}

#[tokio::test]
async fn test_http_error_carries_service_context() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/SoftLayer_Product_Package_Server/getAllObjects.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let error = client
        .product_package_server_service()
        .get_all_objects()
        .await
        .unwrap_err();

    assert_eq!(
        error.to_string(),
        "could not SoftLayer_Product_Package_Server#getAllObjects, HTTP error code: '503'"
    );
    assert!(matches!(error, ServiceError::Http { code: 503, .. }));
}
