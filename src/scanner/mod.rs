use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

pub mod rules;

/// 已知错误签名：正则 + 固定修复建议
pub struct Rule {
    pub id: &'static str,
    pub pattern: &'static Lazy<Regex>,
    pub advice: &'static str,
}

/// 单条命中记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub rule: &'static str,
    /// Full match span, captures flattened
    pub matched: String,
    pub advice: &'static str,
}

impl Rule {
    /// First occurrence only; later occurrences of the same signature are ignored.
    pub fn search(&self, text: &str) -> Option<Finding> {
        self.pattern.find(text).map(|m| Finding {
            rule: self.id,
            matched: m.as_str().to_string(),
            advice: self.advice,
        })
    }
}

/// 有序规则集
///
/// Rules run in declaration order and every matching rule reports, so the
/// order here is output order, not priority.
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The built-in front-end/Supabase signatures
    pub fn builtin() -> Self {
        Self::new(rules::builtin_rules())
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn scan(&self, text: &str) -> Vec<Finding> {
        self.rules
            .iter()
            .filter_map(|rule| {
                let finding = rule.search(text)?;
                debug!(rule = rule.id, matched = %finding.matched, "signature matched");
                Some(finding)
            })
            .collect()
    }
}
