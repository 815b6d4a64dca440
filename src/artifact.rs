//! ビルド済みアーティファクトへの参照

use std::path::PathBuf;

/// アーティファクト参照
///
/// `/` で始まるものだけをローカルパスとして扱う。
/// それ以外（URL 形式や相対パス）はリモート参照として、検証せずにそのままツールへ渡す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactReference {
    Local(PathBuf),
    Remote(String),
}

impl ArtifactReference {
    /// 文字列から参照を分類
    pub fn parse(reference: &str) -> Self {
        if reference.starts_with('/') {
            Self::Local(PathBuf::from(reference))
        } else {
            Self::Remote(reference.to_string())
        }
    }

    /// ローカルパスかどうか
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local(_))
    }

    /// ツールの位置引数として渡す文字列
    pub fn as_arg(&self) -> String {
        match self {
            Self::Local(path) => path.to_string_lossy().to_string(),
            Self::Remote(reference) => reference.clone(),
        }
    }
}

impl std::fmt::Display for ArtifactReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_arg())
    }
}
