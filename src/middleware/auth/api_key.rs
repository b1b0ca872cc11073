//! `Authorization: ApiKey <key>` 抽出 → ApiKeyCtx を extensions に入れる
//!
//! key の照合はしない。形式が正しければ通し、handler 側で ApiKeyCtx を受け取る。

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::ApiKeyCtx;
use crate::error::AppError;
use crate::services::auth::get_api_key;
use crate::state::AppState;

/// 保護したい Router に API key の抽出を掛ける。
///
/// 例：
/// ```ignore
/// let protected = middleware::auth::api_key::apply(protected);
/// ```
pub fn apply(router: Router<AppState>) -> Router<AppState> {
    // 照合しないので State は不要。from_fn で足りる
    // route_layer: マッチしなかったパスは 401 ではなく 404 のまま返す
    router.route_layer(middleware::from_fn(api_key_middleware))
}

async fn api_key_middleware(
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let api_key = match get_api_key(req.headers()) {
        Ok(key) => key,
        Err(err) => {
            tracing::warn!(
                error = ?err,
                method = %req.method(),
                path = %req.uri().path(),
                "api key extraction failed"
            );
            return Err(err.into());
        }
    };

    let ctx = ApiKeyCtx::new(api_key);
    tracing::debug!(fingerprint = %ctx.fingerprint(), "api key extracted");

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(ctx);

    Ok(next.run(req).await)
}
