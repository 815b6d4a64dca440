//! テスト用モックファイルシステム

use super::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

/// テスト用モックファイルシステム
///
/// 存在確認・読み書きの回数を数えるので、I/O が一切発生しないことを検証できる。
pub struct MockFs {
    files: RwLock<HashMap<String, Vec<u8>>>,
    exists_checks: AtomicUsize,
    reads: AtomicUsize,
    writes: AtomicUsize,
}

impl MockFs {
    pub fn new() -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
            exists_checks: AtomicUsize::new(0),
            reads: AtomicUsize::new(0),
            writes: AtomicUsize::new(0),
        }
    }

    /// ファイルを追加
    pub fn add_file(&self, path: &str, content: &str) {
        self.add_file_bytes(path, content.as_bytes());
    }

    /// バイナリファイルを追加
    pub fn add_file_bytes(&self, path: &str, content: &[u8]) {
        self.files
            .write()
            .unwrap()
            .insert(path.to_string(), content.to_vec());
    }

    /// 現在のファイル内容を取得
    pub fn contents(&self, path: &str) -> Option<Vec<u8>> {
        self.files.read().unwrap().get(path).cloned()
    }

    /// exists の呼び出し回数
    pub fn exists_count(&self) -> usize {
        self.exists_checks.load(Ordering::SeqCst)
    }

    /// exists / read / write の合計呼び出し回数
    pub fn access_count(&self) -> usize {
        self.exists_count() + self.read_count() + self.write_count()
    }

    /// read の呼び出し回数
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// write の呼び出し回数
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl Default for MockFs {
    fn default() -> Self {
        Self::new()
    }
}

fn key(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

impl FileSystem for MockFs {
    fn exists(&self, path: &Path) -> bool {
        self.exists_checks.fetch_add(1, Ordering::SeqCst);
        self.files.read().unwrap().contains_key(&key(path))
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.files
            .read()
            .unwrap()
            .get(&key(path))
            .cloned()
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path.display()),
                )
                .into()
            })
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.files
            .write()
            .unwrap()
            .insert(key(path), content.to_vec());
        Ok(())
    }
}
