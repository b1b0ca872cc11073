/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - API key が必要な範囲 (protected) にだけ middleware を掛ける
 */
use axum::{Router, routing::get};

use crate::middleware::auth::api_key;
use crate::state::AppState;

use crate::api::v1::handlers::{credential::get_credential, health::health};

pub fn routes() -> Router<AppState> {
    let public = Router::new().route("/health", get(health));

    let protected = api_key::apply(Router::new().route("/credential", get(get_credential)));

    public.merge(protected)
}
