/*
 * Responsibility
 * - handler 向け extractor の公開口
 */
pub mod api_key_ctx;

pub use api_key_ctx::{ApiKeyCtx, ApiKeyCtxExtractor};
