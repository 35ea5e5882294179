use thiserror::Error;

/// クレート全体で使用する統一エラー型
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),

    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Preserves the original message without a prefix
    #[error("{0}")]
    Custom(String),
}

impl AppError {
    /// バリデーションエラーを作成
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// 設定エラーを作成
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// カスタムエラーを作成 (任意の文字列エラーメッセージ用)
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }
}

/// クレート全体で使用するResult型
pub type AppResult<T> = Result<T, AppError>;

/// エラーのカテゴリ分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// ユーザー操作エラー（修正可能）
    UserError,
    /// システムエラー（再試行可能）
    SystemError,
    /// 設定エラー（設定変更が必要）
    ConfigError,
    /// 重大なエラー
    FatalError,
}

impl AppError {
    /// エラーのカテゴリを取得
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::Validation { .. } => ErrorCategory::UserError,
            // A malformed hidden field comes from the submitting page
            AppError::Serialization(_) => ErrorCategory::UserError,
            AppError::Configuration(_) => ErrorCategory::ConfigError,
            AppError::Io(_) => ErrorCategory::SystemError,
            AppError::Internal(_) => ErrorCategory::SystemError,
            AppError::Custom(_) => ErrorCategory::FatalError,
        }
    }

    /// ユーザー向けメッセージを取得
    pub fn user_message(&self) -> String {
        match self {
            AppError::Io(_) => {
                "Could not read a file. Check that it exists and is readable.".to_string()
            }
            AppError::Serialization(_) => "The submitted player list is not valid.".to_string(),
            AppError::Internal(err) => format!("Internal error: {err}"),
            AppError::Validation { field, message } => format!("{field}: {message}"),
            AppError::Configuration(msg) => format!("Configuration error: {msg}"),
            AppError::Custom(msg) => msg.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display_and_category() {
        let err = AppError::validation("players_json", "duplicate player");
        assert_eq!(
            err.to_string(),
            "Validation error: players_json - duplicate player"
        );
        assert_eq!(err.category(), ErrorCategory::UserError);
        assert_eq!(err.user_message(), "players_json: duplicate player");
    }

    #[test]
    fn test_serialization_error_from_serde_json() {
        let parse_err = serde_json::from_str::<Vec<i64>>("[1,").unwrap_err();
        let err: AppError = parse_err.into();
        assert!(matches!(err, AppError::Serialization(_)));
        assert_eq!(err.category(), ErrorCategory::UserError);
    }

    #[test]
    fn test_io_error_is_system_error() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.category(), ErrorCategory::SystemError);
    }

    #[test]
    fn test_config_and_custom_messages() {
        let err = AppError::config("missing #player-tags");
        assert_eq!(err.to_string(), "Configuration error: missing #player-tags");
        assert_eq!(err.category(), ErrorCategory::ConfigError);

        let err = AppError::custom("element not found");
        assert_eq!(err.to_string(), "element not found");
        assert_eq!(err.user_message(), "element not found");
    }
}
