//! Importer の設定
//!
//! 優先順位: CLI 引数 > 環境変数 > 設定ファイル > デフォルト値

use crate::error::{ImportError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// ツールパスを上書きする環境変数
pub const TOOL_ENV: &str = "CIDSTAMP_TOOL";
/// 設定ファイルのパスを指定する環境変数
pub const CONFIG_ENV: &str = "CIDSTAMP_CONFIG";

const DEFAULT_TOOL_PATH: &str = "/usr/local/bin/ipfs";
const DEFAULT_RECORD_FIELD: &str = "content_id";

/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.is_empty())
    }
}

/// Importer 設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImporterConfig {
    /// コンテンツアドレスツールの実行ファイル
    pub tool_path: PathBuf,
    /// `add` より前に渡す引数（例: `--repo-dir`）
    pub leading_args: Vec<String>,
    /// pkginfo に書き込むキー
    pub record_field: String,
}

impl Default for ImporterConfig {
    fn default() -> Self {
        Self {
            tool_path: PathBuf::from(DEFAULT_TOOL_PATH),
            leading_args: Vec::new(),
            record_field: DEFAULT_RECORD_FIELD.to_string(),
        }
    }
}

impl ImporterConfig {
    /// デフォルト値 → 設定ファイル → 環境変数 の順に解決
    ///
    /// `path` が None の場合は `CIDSTAMP_CONFIG` を参照する。どちらもなければファイルは読まない。
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = path
            .map(Path::to_path_buf)
            .or_else(|| EnvVar::get(CONFIG_ENV).map(PathBuf::from));

        let config = match file {
            Some(file) => Self::load_from(&file)?,
            None => Self::default(),
        };

        Ok(config.with_env_overrides())
    }

    /// TOML ファイルから読み込み
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ImportError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// TOML 文字列からパース（未指定の項目はデフォルト値）
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| ImportError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 環境変数による上書き
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(tool) = EnvVar::get(TOOL_ENV) {
            self.tool_path = PathBuf::from(tool);
        }
        self
    }

    /// ツールパスを設定
    pub fn with_tool_path(mut self, tool_path: impl Into<PathBuf>) -> Self {
        self.tool_path = tool_path.into();
        self
    }

    /// 書き込みキーを設定
    pub fn with_record_field(mut self, field: impl Into<String>) -> Self {
        self.record_field = field.into();
        self
    }

    fn validate(&self) -> Result<()> {
        if self.tool_path.as_os_str().is_empty() {
            return Err(ImportError::Config("tool_path cannot be empty".to_string()));
        }
        if self.record_field.trim().is_empty() {
            return Err(ImportError::Config(
                "record_field cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// `ipfs add --only-hash <reference>` の引数列を組み立てる
    pub fn tool_args(&self, reference: &str) -> Vec<String> {
        let mut args = self.leading_args.clone();
        args.extend(["add".to_string(), "--only-hash".to_string()]);
        args.push(reference.to_string());
        args
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
