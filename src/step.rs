//! ホストパイプラインとの受け渡しに使う環境マップと変数定義

use crate::error::{ImportError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 入力: pkginfo のパス
pub const PKGINFO_PATH: &str = "pkginfo_path";
/// 入力: アーティファクト参照
pub const ARTIFACT_PATH: &str = "artifact_path";
/// 出力: コンテンツ識別子
pub const CONTENT_ID: &str = "content_id";
/// 出力: ツールの終了コード
pub const TOOL_EXIT_CODE: &str = "tool_exit_code";
/// 出力: ツールの標準エラー出力
pub const TOOL_STDERR: &str = "tool_stderr";

/// ステップの説明
pub const DESCRIPTION: &str = "Computes the IPFS content identifier of a built package and stores it in its pkginfo";

/// 入出力変数の定義
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Variable {
    pub name: &'static str,
    pub required: bool,
    pub description: &'static str,
}

pub const INPUT_VARIABLES: &[Variable] = &[
    Variable {
        name: PKGINFO_PATH,
        required: true,
        description: "Path to pkginfo",
    },
    Variable {
        name: ARTIFACT_PATH,
        required: true,
        description: "Path to imported pkg",
    },
];

pub const OUTPUT_VARIABLES: &[Variable] = &[
    Variable {
        name: CONTENT_ID,
        required: false,
        description: "CID of the imported item.",
    },
    Variable {
        name: TOOL_EXIT_CODE,
        required: false,
        description: "Exit code of ipfs add.",
    },
    Variable {
        name: TOOL_STDERR,
        required: false,
        description: "Standard error output of ipfs add.",
    },
];

/// ステップ環境（文字列キー、任意の JSON 値）
///
/// 呼び出し側が作成し、`Importer::run` が更新して返す。キーの挿入順を保持する。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepEnv(Map<String, Value>);

impl StepEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// 値を設定（ビルダー形式）
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// 文字列値を取得（文字列以外は None）
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// 必須の文字列値を取得
    ///
    /// 未設定または文字列以外の場合は `ImportError::Input`
    pub fn require_str(&self, key: &str) -> Result<&str> {
        match self.get(key) {
            Some(Value::String(s)) => Ok(s.as_str()),
            Some(other) => Err(ImportError::input(
                key,
                format!("expected a string, got {}", type_name(other)),
            )),
            None => Err(ImportError::input(key, "required variable is not set")),
        }
    }

    /// 別の環境の値で上書きマージ
    pub fn merge(&mut self, other: StepEnv) {
        for (key, value) in other.0 {
            self.0.insert(key, value);
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
