use std::sync::Arc;

use http::StatusCode;
use serde_json::{json, Value};
use strum::IntoEnumIterator;
use youverify::{
    transport::mock::MockTransport,
    types::{BankVerificationNumberRequest, BvnRecord, VerificationResponse},
    Client, StatusError, YouverifyError,
};

fn sandbox_client(transport: &MockTransport) -> Client {
    Client::initialize(false, "tok123", Arc::new(transport.clone()))
}

#[tokio::test]
async fn test_lookup_without_consent_sends_nothing() {
    let transport = MockTransport::respond(200, r#"{"success":true}"#);
    let client = sandbox_client(&transport);

    for premium in [false, true] {
        let request = BankVerificationNumberRequest {
            bvn: "22222222222".to_string(),
            is_subject_consent: false,
            premium_bvn: premium,
            ..BankVerificationNumberRequest::default()
        };
        let result = client.kyc().nigeria().bank_verification_number(&request).await;
        assert!(matches!(result, Err(YouverifyError::SubjectConsentRequired)));
    }

    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_every_known_status_is_reported() {
    for expected in StatusError::iter() {
        // Valid JSON on purpose: the body must not be decoded for these codes
        let transport = MockTransport::respond(
            expected.code(),
            r#"{"success":true,"statusCode":200,"data":{"firstName":"Jane"}}"#,
        );
        let client = sandbox_client(&transport);

        let err = client
            .kyc()
            .nigeria()
            .bank_verification_number(&BankVerificationNumberRequest::new("123"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(expected));
        assert_eq!(transport.calls(), 1);
    }
}

#[tokio::test]
async fn test_response_fields_match_payload() {
    let record = BvnRecord {
        id: Some("61dc4b8ad5a8f0b8c8e5f1a2".to_string()),
        status: Some("found".to_string()),
        first_name: Some("Jane".to_string()),
        last_name: Some("Doe".to_string()),
        date_of_birth: Some("1990-01-31".to_string()),
        all_validation_passed: Some(true),
        email: Some(json!("jane@example.com")),
        ..BvnRecord::default()
    };
    let payload = VerificationResponse {
        success: true,
        status_code: Some(200),
        message: Some("BVN Verification Successful".to_string()),
        data: Some(record),
        links: Some(vec![]),
    };

    let transport = MockTransport::respond(200, serde_json::to_vec(&payload).unwrap());
    let client = sandbox_client(&transport);

    let response = client
        .kyc()
        .nigeria()
        .bank_verification_number(&BankVerificationNumberRequest::new("123"))
        .await
        .unwrap();

    assert_eq!(response, payload);
}

#[tokio::test]
async fn test_created_status_is_decoded() {
    let transport = MockTransport::respond(201, r#"{"success":true,"data":{"nin":"123"}}"#);
    let client = sandbox_client(&transport);

    let response = client
        .kyc()
        .nigeria()
        .bank_verification_number(&BankVerificationNumberRequest::new("123"))
        .await
        .unwrap();

    assert_eq!(response.data().and_then(|d| d.nin.as_deref()), Some("123"));
}

#[tokio::test]
async fn test_wrong_shape_is_decode_error() {
    let transport = MockTransport::respond(200, r#"{"success":"yes"}"#);
    let client = sandbox_client(&transport);

    let err = client
        .kyc()
        .nigeria()
        .bank_verification_number(&BankVerificationNumberRequest::new("123"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        YouverifyError::Decode { status, .. } if status == StatusCode::OK
    ));
}

#[tokio::test]
async fn test_concurrent_lookups_share_client() {
    let transport = MockTransport::respond(200, r#"{"success":true}"#);
    let client = sandbox_client(&transport);

    let lookups = ["1", "2", "3", "4"].map(|bvn| {
        let client = client.clone();
        tokio::spawn(async move {
            client
                .kyc()
                .nigeria()
                .bank_verification_number(&BankVerificationNumberRequest::new(bvn))
                .await
        })
    });

    for lookup in lookups {
        assert!(lookup.await.unwrap().unwrap().success);
    }

    let mut ids: Vec<String> = transport
        .requests()
        .iter()
        .map(|r| {
            let body: Value = serde_json::from_slice(r.body.as_deref().unwrap()).unwrap();
            body["id"].as_str().unwrap().to_string()
        })
        .collect();
    ids.sort();
    assert_eq!(ids, vec!["1", "2", "3", "4"]);
}

#[tokio::test]
async fn test_generic_send_reaches_unmodelled_endpoints() {
    let transport = MockTransport::respond(200, r#"{"success":true,"data":{"anything":1}}"#);
    let client = sandbox_client(&transport);

    let response: VerificationResponse<Value> = client
        .send(
            http::Method::POST,
            "identity/ng/nin",
            Some(&json!({ "id": "111", "isSubjectConsent": true })),
        )
        .await
        .unwrap();

    assert_eq!(response.data(), Some(&json!({ "anything": 1 })));
    assert_eq!(
        transport.requests()[0].url.as_str(),
        "https://api.sandbox.youverify.co/v2/api/identity/ng/nin"
    );
}
