//! 外部プロセス呼び出しの抽象化
//!
//! テスト時にはモックを注入して、決まった stdout/stderr/終了コードを返させる。

use crate::error::{ImportError, Result};
use std::path::Path;
use std::process::Command;

/// 終了したプロセスの出力
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
    /// シグナルで終了した場合は -1
    pub exit_code: i32,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// 外部プロセスを同期的に実行するトレイト
///
/// 起動に失敗した場合は `ImportError::ToolInvocation` を返す。
/// 終了コードが非0でも Ok を返し、判定は呼び出し側が行う。
pub trait ProcessInvoker: Send + Sync {
    fn invoke(&self, program: &Path, args: &[String]) -> Result<ProcessOutput>;
}

/// 本番用実装（std::process::Command）
pub struct SystemInvoker;

impl ProcessInvoker for SystemInvoker {
    fn invoke(&self, program: &Path, args: &[String]) -> Result<ProcessOutput> {
        tracing::debug!(program = %program.display(), ?args, "spawning tool");

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|err| ImportError::ToolInvocation {
                code: err.raw_os_error().unwrap_or(-1),
                message: err.to_string(),
            })?;

        let exit_code = output.status.code().unwrap_or(-1);
        tracing::debug!(exit_code, "tool exited");

        Ok(ProcessOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code,
        })
    }
}

#[cfg(test)]
pub mod mock;

#[cfg(test)]
#[path = "process_test.rs"]
mod tests;
