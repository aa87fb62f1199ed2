//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that delivery layers map to responses.

use serde::Serialize;

/// エラー種別の列挙体
///
/// ドメイン層で発生する失敗を、HTTP ステータスコードに対応する分類で表します。
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::UnprocessableEntity;
/// assert_eq!(kind.status_code(), 422);
/// assert_eq!(kind.as_str(), "Unprocessable Entity");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - Bad Request: 識別子などの入力形式が不正
    BadRequest,
    /// 422 - Unprocessable Entity: エンティティの不変条件違反
    UnprocessableEntity,
}

impl ErrorKind {
    /// HTTP ステータスコードを取得
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::UnprocessableEntity => 422,
        }
    }

    /// ユーザー向けの文字列表現を取得
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::UnprocessableEntity => "Unprocessable Entity",
        }
    }

    /// クライアント側のエラーかどうかを判定
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        let code = self.status_code();
        code >= 400 && code < 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ErrorKind::BadRequest.status_code(), 400);
        assert_eq!(ErrorKind::UnprocessableEntity.status_code(), 422);
    }

    #[test]
    fn test_client_errors() {
        assert!(ErrorKind::BadRequest.is_client_error());
        assert!(ErrorKind::UnprocessableEntity.is_client_error());
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorKind::UnprocessableEntity).unwrap();
        assert_eq!(json, "\"UNPROCESSABLE_ENTITY\"");
        assert_eq!(ErrorKind::BadRequest.to_string(), "Bad Request");
    }
}
