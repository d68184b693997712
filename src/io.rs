//! 输入 / 输出协作者
//!
//! 核心分析不接触控制台和文件；读日志和落盘都经由这里的 trait，
//! 测试可以换成内存实现。

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Result, TriageError};

pub const DEFAULT_OUTPUT_PATH: &str = "diagnostico_saida.txt";
pub const PROMPT: &str = "Cole o log do console ou do terminal com o erro:\n";

/// 日志来源
pub trait LogSource {
    fn read_input(&mut self) -> Result<String>;
}

/// 报告落盘目标
pub trait ReportSink {
    /// 展示给用户的位置 (确认信息里使用)
    fn location(&self) -> String;

    fn write_report(&self, text: &str) -> Result<()>;
}

/// 交互式输入：打印提示，读一行
pub struct PromptSource<R, W> {
    reader: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> PromptSource<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        Self { reader, prompt_out }
    }
}

impl<R: BufRead, W: Write> LogSource for PromptSource<R, W> {
    fn read_input(&mut self) -> Result<String> {
        self.prompt_out
            .write_all(PROMPT.as_bytes())
            .and_then(|_| self.prompt_out.flush())
            .map_err(TriageError::Console)?;

        // EOF 视为空日志
        let mut line = String::new();
        self.reader.read_line(&mut line).map_err(TriageError::Input)?;
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }
}

/// 整个文件作为一段日志
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LogSource for FileSource {
    fn read_input(&mut self) -> Result<String> {
        let bytes = fs::read(&self.path).map_err(TriageError::Input)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// UTF-8 文本文件，每次完整覆盖
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for FileSink {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn write_report(&self, text: &str) -> Result<()> {
        fs::write(&self.path, text).map_err(|source| TriageError::Persistence {
            path: self.path.clone(),
            source,
        })?;
        info!(path = %self.path.display(), bytes = text.len(), "report persisted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_source_reads_one_line() {
        let mut prompt = Vec::new();
        let mut source = PromptSource::new(Cursor::new("Failed to fetch\r\nsecond line\n"), &mut prompt);

        assert_eq!(source.read_input().unwrap(), "Failed to fetch");
        assert_eq!(String::from_utf8(prompt).unwrap(), PROMPT);
    }

    #[test]
    fn test_prompt_source_eof_is_empty() {
        let mut source = PromptSource::new(Cursor::new(""), Vec::new());
        assert_eq!(source.read_input().unwrap(), "");
    }

    #[test]
    fn test_file_sink_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::new(dir.path().join("out.txt"));

        sink.write_report("a much longer first report\n").unwrap();
        sink.write_report("short\n").unwrap();

        assert_eq!(fs::read_to_string(sink.path()).unwrap(), "short\n");
    }

    #[test]
    fn test_file_sink_unwritable_path_is_persistence_error() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::new(dir.path().join("missing").join("out.txt"));

        let err = sink.write_report("x").unwrap_err();
        assert!(matches!(err, TriageError::Persistence { .. }));
        assert!(err.to_string().contains("out.txt"));
    }

    #[test]
    fn test_file_source_reads_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("console.log");
        fs::write(&path, "line one\nCannot find module 'x'\n").unwrap();

        let text = FileSource::new(&path).read_input().unwrap();
        assert_eq!(text, "line one\nCannot find module 'x'\n");
    }

    #[test]
    fn test_file_source_missing_file_is_input_error() {
        let err = FileSource::new("/definitely/not/here.log").read_input().unwrap_err();
        assert!(matches!(err, TriageError::Input(_)));
    }
}
