//! コンテンツ識別子（CID）

use crate::error::{ImportError, Result};
use serde::{Deserialize, Serialize};

/// ツールが算出したコンテンツ識別子
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(String);

impl ContentId {
    /// 文字列への参照を取得
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// `ipfs add` の出力から識別子を取り出す
///
/// 出力は `<verb> <cid> [name]` 形式を想定し、空白区切りの2番目のトークンを返す。
/// - "added bafy123\n" -> Ok("bafy123")
/// - "added QmX Foo.pkg" -> Ok("QmX")
/// - "" / "added" -> Err
pub fn parse_identifier(output: &str) -> Result<ContentId> {
    output
        .split_whitespace()
        .nth(1)
        .map(|token| ContentId(token.to_string()))
        .ok_or_else(|| ImportError::IdentifierParse {
            output: output.to_string(),
        })
}

#[cfg(test)]
#[path = "cid_test.rs"]
mod tests;
