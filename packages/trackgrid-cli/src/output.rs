use std::io::Write;

/// Serialize a value to pretty JSON.
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("JSON serialization failed: {}", e))
}

/// Write a JSON string to stdout with a trailing newline.
pub fn write_stdout(json: &str) -> Result<(), String> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(json.as_bytes())
        .and_then(|_| handle.write_all(b"\n"))
        .map_err(|e| format!("Failed to write to stdout: {}", e))
}
