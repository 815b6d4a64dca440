//! pkginfo へのコンテンツ識別子の書き込み
//!
//! 処理の流れ: 空パスチェック → pkginfo 読み込み → 引数組み立て → ツール実行
//! → 識別子の抽出 → 結果を環境へ格納 → 成功時のみ pkginfo を書き戻す

use crate::artifact::ArtifactReference;
use crate::cid::parse_identifier;
use crate::config::ImporterConfig;
use crate::error::{ImportError, Result};
use crate::fs::{FileSystem, RealFs};
use crate::output::StepOutput;
use crate::process::{ProcessInvoker, SystemInvoker};
use crate::record::MetadataRecord;
use crate::step::{StepEnv, ARTIFACT_PATH, CONTENT_ID, PKGINFO_PATH, TOOL_EXIT_CODE, TOOL_STDERR};
use std::path::Path;
use std::sync::Arc;

/// Importer ステップ
pub struct Importer {
    config: ImporterConfig,
    invoker: Arc<dyn ProcessInvoker>,
    fs: Arc<dyn FileSystem>,
}

impl Importer {
    /// 本番用の実装で作成
    pub fn new(config: ImporterConfig) -> Self {
        Self::with_parts(config, Arc::new(SystemInvoker), Arc::new(RealFs))
    }

    /// プロセス呼び出しとファイルシステムを差し替えて作成
    pub fn with_parts(
        config: ImporterConfig,
        invoker: Arc<dyn ProcessInvoker>,
        fs: Arc<dyn FileSystem>,
    ) -> Self {
        Self {
            config,
            invoker,
            fs,
        }
    }

    /// ステップを実行
    ///
    /// `env` は失敗時にも更新される（ツールが実行できた場合は終了コードと stderr が入る）。
    /// pkginfo が書き換わるのはツールが終了コード 0 で識別子を返した場合のみ。
    pub fn run(&self, env: &mut StepEnv, out: &dyn StepOutput) -> Result<()> {
        let pkginfo_path = env.require_str(PKGINFO_PATH)?.to_string();
        if pkginfo_path.is_empty() {
            out.output("empty pkginfo path");
            return Ok(());
        }
        let reference = ArtifactReference::parse(env.require_str(ARTIFACT_PATH)?);
        let pkginfo_path = Path::new(&pkginfo_path);

        let mut record = MetadataRecord::load(self.fs.as_ref(), pkginfo_path)?;

        if !reference.is_local() {
            tracing::debug!(%reference, "artifact is not a local path, passing it through");
        }
        let args = self.config.tool_args(&reference.as_arg());
        let output = self.invoker.invoke(&self.config.tool_path, &args)?;

        let cid = parse_identifier(&output.stdout);
        if let Ok(cid) = &cid {
            env.set(CONTENT_ID, cid.as_str());
        }
        env.set(TOOL_EXIT_CODE, output.exit_code);
        env.set(TOOL_STDERR, output.stderr.as_str());

        if !output.success() {
            return Err(ImportError::ToolExecution {
                exit_code: output.exit_code,
                stderr: output.stderr,
            });
        }
        let cid = cid?;

        if let Some(previous) = record.get_str(&self.config.record_field) {
            tracing::debug!(field = %self.config.record_field, previous, "replacing existing content id");
        }
        record.set_str(&self.config.record_field, cid.as_str());
        out.output(&format!("Writing pkginfo to {}", pkginfo_path.display()));
        record.save(self.fs.as_ref(), pkginfo_path)?;
        out.output(&format!("{} added to IPFS with cid {}", reference, cid));

        Ok(())
    }
}

#[cfg(test)]
#[path = "importer_test.rs"]
mod tests;
