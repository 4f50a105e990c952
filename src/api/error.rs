/// Centralized error mapping for commands.
///
/// The webview only ever sees strings; `{:#}` keeps the context chain
/// while server-reported messages stay verbatim (they are never wrapped).
pub fn map_err(err: anyhow::Error) -> String {
    format!("{err:#}")
}
