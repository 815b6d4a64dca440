//! テスト用モックプロセス

use super::*;
use std::path::PathBuf;
use std::sync::Mutex;

enum Response {
    Exit(ProcessOutput),
    SpawnError { code: i32, message: String },
}

/// 呼び出しを記録し、あらかじめ決めた結果を返すモック
pub struct MockInvoker {
    response: Response,
    calls: Mutex<Vec<(PathBuf, Vec<String>)>>,
}

impl MockInvoker {
    /// 指定の出力で終了するモック
    pub fn exits(exit_code: i32, stdout: &str, stderr: &str) -> Self {
        Self::with_response(Response::Exit(ProcessOutput {
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
            exit_code,
        }))
    }

    /// 起動に失敗するモック
    pub fn spawn_fails(code: i32, message: &str) -> Self {
        Self::with_response(Response::SpawnError {
            code,
            message: message.to_string(),
        })
    }

    fn with_response(response: Response) -> Self {
        Self {
            response,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// 記録された呼び出し
    pub fn calls(&self) -> Vec<(PathBuf, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ProcessInvoker for MockInvoker {
    fn invoke(&self, program: &Path, args: &[String]) -> Result<ProcessOutput> {
        self.calls
            .lock()
            .unwrap()
            .push((program.to_path_buf(), args.to_vec()));

        match &self.response {
            Response::Exit(output) => Ok(output.clone()),
            Response::SpawnError { code, message } => Err(ImportError::ToolInvocation {
                code: *code,
                message: message.clone(),
            }),
        }
    }
}
