// ============================================================================
// 快照测试 - 验证签名与报告格式不退化
// ============================================================================

use log_triage::analyze;

/// 常见的 Vite + Supabase 白屏现场
const VITE_CONSOLE: &str = "\
[vite] connected.
GoTrueClient.ts:122 Multiple GoTrueClient instances detected in the same browser context.
index.tsx:8 Uncaught ReferenceError: process is not defined
    at index.tsx:8:5
GET http://localhost:54321/rest/v1/profiles net::ERR_CONNECTION_REFUSED
TypeError: Failed to fetch
TypeError: Failed to fetch
usuário reportou tela branca após o login
";

#[test]
fn test_vite_console_snapshot() {
    let report = analyze(VITE_CONSOLE);
    insta::assert_json_snapshot!(report.findings(), @r###"
    [
      {
        "rule": "GOTRUE_MULTIPLE_CLIENTS",
        "matched": "Multiple GoTrueClient instances detected",
        "advice": "Você está criando múltiplas instâncias do Supabase Client. Garanta que o client seja singleton e importado sempre do mesmo arquivo."
      },
      {
        "rule": "UNCAUGHT_SCRIPT_ERROR",
        "matched": "Uncaught ReferenceError: process is not defined",
        "advice": "Erro crítico de JavaScript. Verifique o trecho do erro acima, geralmente causado por imports errados, variáveis de ambiente ausentes ou código inválido."
      },
      {
        "rule": "FETCH_FAILED",
        "matched": "Failed to fetch",
        "advice": "Falha ao buscar dados. Verifique sua conexão com a internet, o backend ou as URLs configuradas."
      },
      {
        "rule": "BLANK_SCREEN",
        "matched": "tela branca",
        "advice": "Tela branca detectada. Verifique se há erros no console do navegador e se os Providers/Routers estão configurados corretamente."
      }
    ]
    "###);
}

#[test]
fn test_node_build_rule_ids_snapshot() {
    let log = "Error: Cannot find module '@supabase/supabase-js'\n\
               Error: Missing Supabase configuration. Check VITE_SUPABASE_URL\n";
    let ids: Vec<_> = analyze(log).findings().iter().map(|f| f.rule).collect();
    insta::assert_json_snapshot!(ids, @r###"
    [
      "SUPABASE_CONFIG_MISSING",
      "MODULE_NOT_FOUND"
    ]
    "###);
}

#[test]
fn test_rendered_report_layout() {
    let text = analyze("CANNOT FIND MODULE 'x'").render();
    let lines: Vec<_> = text.split('\n').collect();

    assert_eq!(lines[0], "Erro detectado: CANNOT FIND MODULE");
    assert!(lines[1].starts_with("Sugestão de solução: Módulo não encontrado."));
    assert_eq!(&lines[2..], ["", ""]);
}
