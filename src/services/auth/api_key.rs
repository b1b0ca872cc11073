//! `Authorization: ApiKey <key>` からの API key 抽出
//!
//! Responsibility:
//! - ヘッダの存在確認 → scheme の照合 → key の取り出し
//! - 失敗は `ApiKeyError` の 2 種類だけに分類する
//!
//! Not here:
//! - key の照合 (store への問い合わせ)
//! - HTTP レスポンスへの変換 (`AppError` 側)

use axum::http::{HeaderMap, header};
use thiserror::Error;

/// Authorization ヘッダで受け付ける唯一の scheme。大文字小文字を区別する。
pub const API_KEY_SCHEME: &str = "ApiKey";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiKeyError {
    #[error("no authorization header included")]
    NoAuthHeaderIncluded,
    #[error("malformed authorization header")]
    MalformedHeader,
}

/// `Authorization` ヘッダから API key を取り出す。
///
/// - ヘッダが無い、または空文字 → `NoAuthHeaderIncluded`
/// - 最初の空白で scheme と残りに分け、scheme が `ApiKey` と完全一致しない、
///   または残りが無い → `MalformedHeader`
/// - 残りは trim も検証もせずにそのまま返す
///
/// 複数の Authorization が来た場合は先頭の値だけを見る。
pub fn get_api_key(headers: &HeaderMap) -> Result<String, ApiKeyError> {
    let value = match headers.get(header::AUTHORIZATION) {
        Some(v) if !v.is_empty() => v,
        _ => return Err(ApiKeyError::NoAuthHeaderIncluded),
    };

    // to_str() は 0x80 以上を拒否するので bytes のまま分割する
    let bytes = value.as_bytes();
    let split = bytes
        .iter()
        .position(u8::is_ascii_whitespace)
        .ok_or(ApiKeyError::MalformedHeader)?;
    let (scheme, key) = (&bytes[..split], &bytes[split + 1..]);

    if scheme != API_KEY_SCHEME.as_bytes() || key.is_empty() {
        return Err(ApiKeyError::MalformedHeader);
    }

    // key の中身は問わないが、String で返す以上 UTF-8 であること
    let key = std::str::from_utf8(key).map_err(|_| ApiKeyError::MalformedHeader)?;

    Ok(key.to_string())
}
