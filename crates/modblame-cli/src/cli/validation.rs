/// Parse and validate a module filter.
///
/// Filters match by substring, so an empty filter would select every module.
/// Surrounding whitespace is rejected rather than trimmed because module
/// paths never contain it.
///
/// # Examples
///
/// Valid filters: golang.org/x/text, x/net@v0.1.0, github.com/
/// Invalid filters: "", " x/text"
pub fn parse_filter(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("Filter cannot be empty".to_string());
    }
    if s.trim() != s {
        return Err(format!(
            "Filter must not start or end with whitespace: '{}'",
            s
        ));
    }
    Ok(s.to_string())
}
