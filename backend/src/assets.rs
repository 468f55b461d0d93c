use std::path::{Path, PathBuf};

/// Screenshot files the landing page gallery links to.
pub const SCREENSHOTS: &[&str] = &["ai-search.png", "folders.png", "memo-detail.png"];

pub fn missing_screenshots(screenshots_dir: &Path) -> Vec<PathBuf> {
    SCREENSHOTS
        .iter()
        .map(|file| screenshots_dir.join(file))
        .filter(|path| !path.is_file())
        .collect()
}

/// Logs a warning for every screenshot that is not on disk. The page still
/// renders without them, so this never fails startup.
pub fn warn_missing_screenshots(screenshots_dir: &Path) -> usize {
    let missing = missing_screenshots(screenshots_dir);
    for path in &missing {
        tracing::warn!("Screenshot not found: {}", path.display());
    }
    missing.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_only_absent_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("folders.png"), b"png").unwrap();
        let missing = missing_screenshots(dir.path());
        assert_eq!(
            missing,
            vec![dir.path().join("ai-search.png"), dir.path().join("memo-detail.png")]
        );
        assert_eq!(warn_missing_screenshots(dir.path()), 2);
    }
}
