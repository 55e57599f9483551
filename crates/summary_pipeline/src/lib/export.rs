use std::path::{Path, PathBuf};

pub const EXPORT_FILE_NAME: &str = "summary.txt";
pub const EXPORT_MIME_TYPE: &str = "text/plain";

/// Writes the raw summary string to `dir`/`summary.txt` with no additional
/// structure. Returns the written path.
pub fn export_summary(summary_text: &str, dir: &Path) -> std::io::Result<PathBuf> {
    let path = dir.join(EXPORT_FILE_NAME);
    std::fs::write(&path, summary_text)?;
    tracing::info!(path = %path.display(), "Exported summary");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_writes_raw_summary_only() {
        let dir = std::env::temp_dir().join(format!("summary-export-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let path = export_summary("just the summary", &dir).unwrap();
        assert_eq!(path.file_name().unwrap(), EXPORT_FILE_NAME);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "just the summary");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
