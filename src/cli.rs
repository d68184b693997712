use std::io::{self, Write};

use anyhow::Result;
use serde_json::json;
use tracing::debug;

use log_triage::forensic::{self, ConsoleFormat};
use log_triage::io::{FileSink, FileSource, LogSource, PromptSource};
use log_triage::scanner::RuleSet;

use crate::Command;

pub fn handle_command(command: Command, json: bool) -> Result<()> {
    match command {
        Command::Diagnose { input, output } => {
            let log_text = match input {
                Some(path) => {
                    debug!(path = %path.display(), "reading log from file");
                    FileSource::new(path).read_input()?
                }
                None => PromptSource::new(io::stdin().lock(), io::stdout()).read_input()?,
            };

            let format = if json { ConsoleFormat::Json } else { ConsoleFormat::Text };
            let sink = FileSink::new(output);
            forensic::diagnose(&log_text, &sink, &mut io::stdout().lock(), format)?;
        }

        Command::Rules => print_rules(&RuleSet::builtin(), json)?,
    }
    Ok(())
}

fn print_rules(rules: &RuleSet, json: bool) -> Result<()> {
    let mut out = io::stdout().lock();

    if json {
        let list: Vec<_> = rules
            .rules()
            .iter()
            .map(|r| {
                json!({
                    "id": r.id,
                    "pattern": display_pattern(r.pattern.as_str()),
                    "advice": r.advice,
                })
            })
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&list)?)?;
        return Ok(());
    }

    writeln!(out, "## 📋 Assinaturas conhecidas ({})\n", rules.rules().len())?;
    for (i, rule) in rules.rules().iter().enumerate() {
        writeln!(
            out,
            "{}. `{}`\n   Padrão: {}\n   Sugestão: {}\n",
            i + 1,
            rule.id,
            display_pattern(rule.pattern.as_str()),
            rule.advice
        )?;
    }
    Ok(())
}

/// 去掉内部的大小写标志，只展示签名本身
fn display_pattern(pattern: &str) -> &str {
    pattern.trim_start_matches("(?i)")
}
