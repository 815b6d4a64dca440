use owo_colors::OwoColorize;
use std::sync::Mutex;

/// ホストパイプラインへの進捗報告コールバック
pub trait StepOutput {
    fn output(&self, message: &str);
}

/// 標準エラー出力へ書き出す実装
///
/// stdout は結果の環境マップ用に空けておく。
pub struct ConsoleOutput {
    use_color: bool,
}

impl ConsoleOutput {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn format(&self, message: &str) -> String {
        if self.use_color {
            format!("{} {}", "•".cyan(), message)
        } else {
            format!("• {}", message)
        }
    }
}

impl StepOutput for ConsoleOutput {
    fn output(&self, message: &str) {
        eprintln!("{}", self.format(message));
    }
}

/// メッセージを溜めておく実装（テストや埋め込み用）
#[derive(Default)]
pub struct CapturedOutput {
    lines: Mutex<Vec<String>>,
}

impl CapturedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }
}

impl StepOutput for CapturedOutput {
    fn output(&self, message: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(message.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captured_output_keeps_order() {
        let out = CapturedOutput::new();
        out.output("first");
        out.output("second");
        assert_eq!(out.lines(), vec!["first", "second"]);
    }

    #[test]
    fn test_console_format_without_color() {
        let out = ConsoleOutput::new(false);
        assert_eq!(out.format("empty pkginfo path"), "• empty pkginfo path");
    }

    #[test]
    fn test_console_format_with_color() {
        let out = ConsoleOutput::new(true);
        let formatted = out.format("hello");
        assert!(formatted.contains("\x1b["));
        assert!(formatted.ends_with("hello"));
    }
}
