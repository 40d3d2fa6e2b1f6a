use std::env::temp_dir;
use std::path::{Path, PathBuf};

/// A fresh directory under the system temp dir, removed with everything in it when dropped.
pub struct ScratchDir(PathBuf);

impl ScratchDir {
    pub fn new(name: &str) -> Self {
        let path = temp_dir().join(format!("bookswap-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&path);
        std::fs::create_dir_all(&path).unwrap();
        ScratchDir(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_removed_with_its_content_when_dropped() {
        let scratch = ScratchDir::new("dropped");
        std::fs::write(scratch.path().join("preferences.json"), "{}").unwrap();
        let path = scratch.path().to_path_buf();

        drop(scratch);

        assert!(!path.exists());
    }
}
