use thiserror::Error;

/// QM統一エラー型
#[derive(Debug, Error)]
pub enum QmError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Remote API error: {message} (status: {status})")]
    RemoteApi { status: u16, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid import file: {0}")]
    InvalidImport(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, QmError>;

impl QmError {
    /// 同期処理で握りつぶしてよいエラーかどうか
    ///
    /// 通信・応答ステータス・デコードの失敗は「今回は更新なし」として扱う。
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            QmError::Network(_) | QmError::RemoteApi { .. } | QmError::Json(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_api_is_transient() {
        let error = QmError::RemoteApi {
            status: 503,
            message: "Service Unavailable".to_string(),
        };
        assert!(error.is_transient());
    }

    #[test]
    fn invalid_import_is_not_transient() {
        let error = QmError::InvalidImport("expected array".to_string());
        assert!(!error.is_transient());
    }
}
