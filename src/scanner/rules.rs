// ============================================================================
// 内置错误签名 - 前端 / Supabase 控制台日志
// ============================================================================
//
// 全部大小写不敏感、非锚定搜索 (search, not full match)。
// `.` 不跨行，所以 UNCAUGHT_SCRIPT_ERROR 的消息部分截止到行尾。
//
// ============================================================================

use once_cell::sync::Lazy;
use regex::Regex;

use super::Rule;

static RE_GOTRUE_MULTIPLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Multiple GoTrueClient instances detected").unwrap()
});

static RE_UNCAUGHT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Uncaught (SyntaxError|TypeError|ReferenceError): (.+)").unwrap()
});

static RE_SUPABASE_CONFIG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Missing Supabase configuration").unwrap()
});

static RE_MODULE_NOT_FOUND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Cannot find module").unwrap()
});

static RE_FETCH_FAILED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Failed to fetch").unwrap()
});

static RE_BLANK_SCREEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)white screen|blank screen|tela branca").unwrap()
});

pub const ADVICE_GOTRUE_MULTIPLE: &str = "Você está criando múltiplas instâncias do Supabase Client. Garanta que o client seja singleton e importado sempre do mesmo arquivo.";
pub const ADVICE_UNCAUGHT: &str = "Erro crítico de JavaScript. Verifique o trecho do erro acima, geralmente causado por imports errados, variáveis de ambiente ausentes ou código inválido.";
pub const ADVICE_SUPABASE_CONFIG: &str = "As variáveis de ambiente do Supabase não estão definidas. Verifique seu arquivo .env.";
pub const ADVICE_MODULE_NOT_FOUND: &str = "Módulo não encontrado. Execute 'npm install' para instalar as dependências ou corrija o nome do import.";
pub const ADVICE_FETCH_FAILED: &str = "Falha ao buscar dados. Verifique sua conexão com a internet, o backend ou as URLs configuradas.";
pub const ADVICE_BLANK_SCREEN: &str = "Tela branca detectada. Verifique se há erros no console do navegador e se os Providers/Routers estão configurados corretamente.";

/// 内置规则，按评估顺序排列
pub fn builtin_rules() -> Vec<Rule> {
    vec![
        Rule {
            id: "GOTRUE_MULTIPLE_CLIENTS",
            pattern: &RE_GOTRUE_MULTIPLE,
            advice: ADVICE_GOTRUE_MULTIPLE,
        },
        Rule {
            id: "UNCAUGHT_SCRIPT_ERROR",
            pattern: &RE_UNCAUGHT,
            advice: ADVICE_UNCAUGHT,
        },
        Rule {
            id: "SUPABASE_CONFIG_MISSING",
            pattern: &RE_SUPABASE_CONFIG,
            advice: ADVICE_SUPABASE_CONFIG,
        },
        Rule {
            id: "MODULE_NOT_FOUND",
            pattern: &RE_MODULE_NOT_FOUND,
            advice: ADVICE_MODULE_NOT_FOUND,
        },
        Rule {
            id: "FETCH_FAILED",
            pattern: &RE_FETCH_FAILED,
            advice: ADVICE_FETCH_FAILED,
        },
        Rule {
            id: "BLANK_SCREEN",
            pattern: &RE_BLANK_SCREEN,
            advice: ADVICE_BLANK_SCREEN,
        },
    ]
}
