//! Forensic 模块 - 控制台日志错误签名归类
//!
//! 🔬 一次线性扫描：每条规则最多一条命中，按规则顺序输出

use serde::Serialize;
use serde_json::{json, Value};
use std::io::Write;
use tracing::debug;

use crate::error::{Result, TriageError};
use crate::io::ReportSink;
use crate::scanner::{Finding, RuleSet};

pub const NO_KNOWN_ERROR: &str = "Nenhum erro crítico conhecido detectado no log.\n";

/// 一次调用的诊断报告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    findings: Vec<Finding>,
}

impl Report {
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// 渲染为纯文本 (控制台与文件内容一致)
    pub fn render(&self) -> String {
        if self.findings.is_empty() {
            return NO_KNOWN_ERROR.to_string();
        }

        let mut out = String::new();
        for finding in &self.findings {
            out.push_str(&format!(
                "Erro detectado: {}\nSugestão de solução: {}\n\n",
                finding.matched, finding.advice
            ));
        }
        out
    }

    pub fn to_json(&self) -> Value {
        json!({
            "clean": self.is_clean(),
            "findings": self.findings,
        })
    }
}

/// 用内置规则分析日志
pub fn analyze(log_text: &str) -> Report {
    analyze_with(&RuleSet::builtin(), log_text)
}

pub fn analyze_with(rules: &RuleSet, log_text: &str) -> Report {
    let findings = rules.scan(log_text);
    debug!(bytes = log_text.len(), findings = findings.len(), "log analyzed");
    Report { findings }
}

/// 控制台输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleFormat {
    Text,
    Json,
}

/// 分析 + 输出 + 落盘
///
/// Order: report to console, report to sink, confirmation line. A failed write
/// aborts before the confirmation; the console report has already gone out.
pub fn diagnose<W: Write>(
    log_text: &str,
    sink: &dyn ReportSink,
    console: &mut W,
    format: ConsoleFormat,
) -> Result<Report> {
    let report = analyze(log_text);
    let text = report.render();

    let printed = match format {
        ConsoleFormat::Text => writeln!(console, "{}", text),
        ConsoleFormat::Json => writeln!(console, "{:#}", report.to_json()),
    };
    printed.map_err(TriageError::Console)?;

    sink.write_report(&text)?;

    writeln!(console, "Diagnóstico também salvo em '{}'.", sink.location())
        .map_err(TriageError::Console)?;
    Ok(report)
}
