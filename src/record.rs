//! pkginfo（メタデータレコード）の読み書き
//!
//! レコードは文字列キーの辞書。plist（XML/バイナリ）と JSON に対応する。
//! 読み込み時の形式で書き戻し、対象キー以外のフィールドと順序は変更しない。

use crate::error::{ImportError, Result};
use crate::fs::FileSystem;
use std::io::Cursor;
use std::path::Path;

const BINARY_PLIST_MAGIC: &[u8] = b"bplist00";

/// レコードのシリアライズ形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    XmlPlist,
    BinaryPlist,
    Json,
}

impl RecordFormat {
    /// 内容と拡張子から形式を判定
    ///
    /// 優先順位: バイナリ plist のマジック > `.json` 拡張子 > 先頭の `{` > XML plist
    pub fn detect(bytes: &[u8], path: Option<&Path>) -> Self {
        if bytes.starts_with(BINARY_PLIST_MAGIC) {
            return Self::BinaryPlist;
        }

        let has_json_ext = path
            .and_then(|p| p.extension())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if has_json_ext {
            return Self::Json;
        }

        match bytes.iter().find(|b| !b.is_ascii_whitespace()) {
            Some(b'{') => Self::Json,
            _ => Self::XmlPlist,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Document {
    Plist(plist::Dictionary),
    Json(serde_json::Map<String, serde_json::Value>),
}

/// メタデータレコード
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataRecord {
    format: RecordFormat,
    document: Document,
}

impl MetadataRecord {
    /// ファイルから読み込み
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Self> {
        let load_error = |reason: String| ImportError::RecordLoad {
            path: path.to_path_buf(),
            reason,
        };

        if !fs.exists(path) {
            return Err(load_error("file does not exist".to_string()));
        }

        let bytes = fs.read(path).map_err(|e| load_error(e.to_string()))?;
        let record = Self::from_bytes(&bytes, Some(path)).map_err(load_error)?;

        tracing::debug!(path = %path.display(), format = ?record.format(), "loaded pkginfo");
        Ok(record)
    }

    /// バイト列からパース
    ///
    /// ルートが辞書でない場合は Err
    pub fn from_bytes(bytes: &[u8], path: Option<&Path>) -> std::result::Result<Self, String> {
        let format = RecordFormat::detect(bytes, path);

        let document = match format {
            RecordFormat::Json => {
                let value: serde_json::Value = serde_json::from_slice(bytes)
                    .map_err(|e| format!("invalid JSON: {}", e))?;
                match value {
                    serde_json::Value::Object(map) => Document::Json(map),
                    _ => return Err("root element is not an object".to_string()),
                }
            }
            RecordFormat::XmlPlist | RecordFormat::BinaryPlist => {
                let value = plist::Value::from_reader(Cursor::new(bytes))
                    .map_err(|e| format!("invalid plist: {}", e))?;
                let dict = value
                    .into_dictionary()
                    .ok_or_else(|| "root element is not a dictionary".to_string())?;
                Document::Plist(dict)
            }
        };

        Ok(Self { format, document })
    }

    /// 読み込み時の形式
    pub fn format(&self) -> RecordFormat {
        self.format
    }

    /// 文字列フィールドを取得（文字列以外は None）
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match &self.document {
            Document::Plist(dict) => dict.get(key).and_then(|v| v.as_string()),
            Document::Json(map) => map.get(key).and_then(|v| v.as_str()),
        }
    }

    /// 文字列フィールドを設定（既存キーは位置を保ったまま上書き）
    pub fn set_str(&mut self, key: &str, value: &str) {
        match &mut self.document {
            Document::Plist(dict) => {
                dict.insert(key.to_string(), plist::Value::String(value.to_string()));
            }
            Document::Json(map) => {
                map.insert(
                    key.to_string(),
                    serde_json::Value::String(value.to_string()),
                );
            }
        }
    }

    /// 読み込み時と同じ形式でシリアライズ
    pub fn to_bytes(&self) -> std::result::Result<Vec<u8>, String> {
        let mut buf = Vec::new();
        match (&self.document, self.format) {
            (Document::Json(map), _) => {
                serde_json::to_writer_pretty(&mut buf, map).map_err(|e| e.to_string())?;
                buf.push(b'\n');
            }
            (Document::Plist(dict), RecordFormat::BinaryPlist) => {
                plist::Value::Dictionary(dict.clone())
                    .to_writer_binary(&mut buf)
                    .map_err(|e| e.to_string())?;
            }
            (Document::Plist(dict), _) => {
                plist::Value::Dictionary(dict.clone())
                    .to_writer_xml(&mut buf)
                    .map_err(|e| e.to_string())?;
                buf.push(b'\n');
            }
        }
        Ok(buf)
    }

    /// ファイルへ書き戻し（既存内容は丸ごと置き換え）
    pub fn save(&self, fs: &dyn FileSystem, path: &Path) -> Result<()> {
        let write_error = |reason: String| ImportError::RecordWrite {
            path: path.to_path_buf(),
            reason,
        };

        let bytes = self.to_bytes().map_err(write_error)?;
        fs.write(path, &bytes)
            .map_err(|e| write_error(e.to_string()))?;

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote pkginfo");
        Ok(())
    }
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;
