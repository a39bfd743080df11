use super::*;

#[test]
fn create_vehicle_endpoint_is_collection_path() {
    assert_eq!(create_vehicle_endpoint(), "/api/vehicles");
}

#[test]
fn encode_failed_message_includes_detail() {
    assert_eq!(
        encode_failed_message("key must be a string"),
        "could not encode vehicle: key must be a string"
    );
}

#[cfg(not(feature = "csr"))]
#[tokio::test]
async fn native_transport_reports_failure() {
    let payload = VehiclePayload::car(vehicles::VehicleDraft::default());
    let result = BrowserTransport.create_vehicle(&payload).await;
    assert_eq!(result, Err(TransportError::new("not available outside the browser")));
}
