use anyhow::Result;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save any serializable data to a pretty-printed JSON file.
pub fn save_json_output<T: Serialize>(data: &T, out_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;

    // Write to file (create or truncate)
    let mut file = File::create(out_path)?;
    file.write_all(json.as_bytes())?;
    file.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn writes_pretty_json() {
        let path = std::env::temp_dir().join(format!("urlcheck-{}.json", uuid::Uuid::new_v4()));
        save_json_output(&json!({"url": "https://example.com"}), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n  \"url\": \"https://example.com\""));
        let _ = std::fs::remove_file(&path);
    }
}
