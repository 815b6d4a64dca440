pub mod code;
pub mod formatter;

use std::path::PathBuf;
use thiserror::Error;

pub use code::ErrorCode;

/// cidstamp統一エラー型
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Invalid input variable '{key}': {reason}")]
    Input { key: String, reason: String },

    #[error("Failed to load pkginfo {}: {reason}", .path.display())]
    RecordLoad { path: PathBuf, reason: String },

    #[error("Failed to write pkginfo {}: {reason}", .path.display())]
    RecordWrite { path: PathBuf, reason: String },

    #[error("ipfs add failed with error code {code}: {message}")]
    ToolInvocation { code: i32, message: String },

    #[error("IPFS add failed: \n{stderr}")]
    ToolExecution { exit_code: i32, stderr: String },

    #[error("Could not read a content identifier from tool output: {output:?}")]
    IdentifierParse { output: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ImportError>;

impl ImportError {
    /// エラー種別に対応するエラーコード
    pub fn code(&self) -> ErrorCode {
        match self {
            ImportError::Input { .. } => ErrorCode::Val001,
            ImportError::RecordLoad { .. } => ErrorCode::Rec001,
            ImportError::RecordWrite { .. } => ErrorCode::Rec002,
            ImportError::ToolInvocation { .. } => ErrorCode::Tool001,
            ImportError::ToolExecution { .. } => ErrorCode::Tool002,
            ImportError::IdentifierParse { .. } => ErrorCode::Tool003,
            ImportError::Config(_) => ErrorCode::Cfg001,
            ImportError::Io(err) => match err.kind() {
                std::io::ErrorKind::NotFound => ErrorCode::Io001,
                std::io::ErrorKind::PermissionDenied => ErrorCode::Io002,
                _ => ErrorCode::Int001,
            },
        }
    }

    /// 対象となったファイルパス（あれば）
    pub fn file_path(&self) -> Option<&std::path::Path> {
        match self {
            ImportError::RecordLoad { path, .. } | ImportError::RecordWrite { path, .. } => {
                Some(path)
            }
            _ => None,
        }
    }

    pub(crate) fn input(key: &str, reason: impl Into<String>) -> Self {
        ImportError::Input {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_execution_message_embeds_stderr() {
        let err = ImportError::ToolExecution {
            exit_code: 1,
            stderr: "no such file".to_string(),
        };
        assert!(err.to_string().contains("no such file"));
        assert_eq!(err.code(), ErrorCode::Tool002);
    }

    #[test]
    fn test_tool_invocation_message_carries_os_code() {
        let err = ImportError::ToolInvocation {
            code: 2,
            message: "No such file or directory".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "ipfs add failed with error code 2: No such file or directory"
        );
    }

    #[test]
    fn test_record_errors_expose_path() {
        let err = ImportError::RecordLoad {
            path: PathBuf::from("/tmp/x.plist"),
            reason: "missing".to_string(),
        };
        assert_eq!(err.file_path(), Some(std::path::Path::new("/tmp/x.plist")));
        assert_eq!(err.code(), ErrorCode::Rec001);

        let err = ImportError::Config("bad".to_string());
        assert!(err.file_path().is_none());
    }

    #[test]
    fn test_io_error_code_follows_kind() {
        let err = ImportError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.code(), ErrorCode::Io002);
    }
}
