//! ファイルシステム抽象化
//!
//! pkginfo の読み書きに使うファイルシステム操作の抽象化レイヤー。
//! テスト時に MockFs を注入して、I/O が発生しないことや書き込み内容を検証できる。

use crate::error::Result;
use std::io::Write;
use std::path::Path;

/// ファイルシステム操作を抽象化するトレイト
///
/// 本番コードでは RealFs を使用する。
pub trait FileSystem: Send + Sync {
    /// パスが存在するか（シンボリックリンク追従）
    fn exists(&self, path: &Path) -> bool;

    /// ファイル内容をバイト列として読み込み
    fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// ファイルに書き込み
    ///
    /// - 既存ファイルは丸ごと置き換える
    /// - 同じディレクトリの一時ファイルに書いてからリネームする
    /// - シンボリックリンクはリンク先のファイルを書き換える（リンク自体は残す）
    /// - 既存ファイルのパーミッションは引き継ぐ
    fn write(&self, path: &Path, content: &[u8]) -> Result<()>;
}

/// 本番用ファイルシステム実装
pub struct RealFs;

impl FileSystem for RealFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        Ok(std::fs::read(path)?)
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        // リンク先に置き換えてから一時ファイルを作る
        let target = if path.exists() {
            std::fs::canonicalize(path)?
        } else {
            path.to_path_buf()
        };
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(content)?;
        tmp.as_file().sync_all()?;

        if let Ok(metadata) = std::fs::metadata(&target) {
            std::fs::set_permissions(tmp.path(), metadata.permissions())?;
        }

        tmp.persist(&target).map_err(|e| e.error)?;
        Ok(())
    }
}

#[cfg(test)]
pub mod mock;

#[cfg(test)]
#[path = "fs_test.rs"]
mod tests;
