/*
 * Responsibility
 * - GET /credential
 * - middleware が抽出した API key を fingerprint で返す (key そのものは返さない)
 */
use axum::Json;
use serde::Serialize;

use crate::api::v1::extractors::ApiKeyCtxExtractor;
use crate::services::auth::API_KEY_SCHEME;

#[derive(Debug, Serialize)]
pub struct CredentialResponse {
    pub scheme: &'static str,
    pub fingerprint: String,
}

pub async fn get_credential(
    ApiKeyCtxExtractor(ctx): ApiKeyCtxExtractor,
) -> Json<CredentialResponse> {
    Json(CredentialResponse {
        scheme: API_KEY_SCHEME,
        fingerprint: ctx.fingerprint(),
    })
}
