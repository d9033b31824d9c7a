use crate::{ApiError, StoreError};

use sp_auth::AuthError;
use sp_core::{CoreError, ServiceStatus};

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn given_not_found_when_into_response_then_404_with_json_body() {
    let (status, json) = body_json(ApiError::NotFound {
        message: "Service s1 not found".into(),
        location: ErrorLocation::from(Location::caller()),
    })
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Service s1 not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn given_invalid_service_status_when_converted_then_validation_error_on_status() {
    let core_error = "Broken".parse::<ServiceStatus>().unwrap_err();

    let (status, json) = body_json(ApiError::from(core_error)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "status");
    assert!(json["error"]["message"].as_str().unwrap().contains("Broken"));
}

#[tokio::test]
async fn given_core_validation_error_when_converted_then_field_preserved() {
    let core_error = CoreError::Validation {
        message: "name is required".into(),
        field: Some("name".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(ApiError::from(core_error)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "name");
}

#[tokio::test]
async fn given_unknown_services_when_converted_then_validation_error_on_service_ids() {
    let store_error = StoreError::UnknownServices {
        ids: vec!["s9".into()],
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(ApiError::from(store_error)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "serviceIds");
    assert!(json["error"]["message"].as_str().unwrap().contains("s9"));
}

#[tokio::test]
async fn given_missing_header_when_converted_then_401_with_auth_code() {
    let auth_error = AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(ApiError::from(auth_error)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "MISSING_AUTH_HEADER");
}

#[tokio::test]
async fn given_invalid_token_when_converted_then_details_not_exposed() {
    let auth_error = AuthError::InvalidToken {
        message: "signature mismatch for key abc".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (_, json) = body_json(ApiError::from(auth_error)).await;

    assert_eq!(json["error"]["code"], "INVALID_TOKEN");
    assert_eq!(json["error"]["message"], "Invalid token");
}
