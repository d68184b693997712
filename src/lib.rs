//! log-triage - 控制台日志错误签名诊断
//!
//! 扫描一段日志，按固定顺序匹配已知错误签名，输出修复建议并落盘到
//! `diagnostico_saida.txt`。

pub mod error;
pub mod forensic;
pub mod io;
pub mod scanner;

pub use error::TriageError;
pub use forensic::{analyze, diagnose, Report};
pub use scanner::{Finding, Rule, RuleSet};
