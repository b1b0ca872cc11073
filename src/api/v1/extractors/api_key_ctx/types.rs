/*
 * Responsibility
 * - Handler から見える「API key 付きリクエスト」のコンテキスト型
 * - middleware が抽出して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - key の照合 (store 問い合わせ) はここでは行わない
 * - key 本体は Debug に出さない。ログ相関には fingerprint() を使う
 */
use std::fmt;

use base64::Engine as _;
use sha2::{Digest, Sha256};

#[derive(Clone)]
pub struct ApiKeyCtx {
    pub api_key: String,
}

impl ApiKeyCtx {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// SHA-256(api_key) の base64url (padding なし)
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.api_key.as_bytes());
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(digest)
    }
}

impl fmt::Debug for ApiKeyCtx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyCtx")
            .field("fingerprint", &self.fingerprint())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_sha256_base64url() {
        // echo -n abc | sha256sum → ba7816bf...
        let ctx = ApiKeyCtx::new("abc");
        assert_eq!(
            ctx.fingerprint(),
            "ungWv48Bz-pBQUDeXa4iI7ADYaOWF3qctBD_YfIAFa0"
        );
    }

    #[test]
    fn debug_does_not_leak_key() {
        let ctx = ApiKeyCtx::new("super-secret");
        let rendered = format!("{ctx:?}");

        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains(&ctx.fingerprint()));
    }
}
