use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !Self::dir_exists(path) {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(())
    }

    /// Write a string to a file, creating the parent directory first
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Copy a file from one location to another, ensuring the target directory exists
    pub fn copy_file<P1: AsRef<Path>, P2: AsRef<Path>>(from: P1, to: P2) -> Result<()> {
        let from = from.as_ref();
        let to = to.as_ref();

        if !Self::file_exists(from) {
            return Err(anyhow!("Source file does not exist: {:?}", from));
        }

        if let Some(parent) = to.parent() {
            Self::ensure_dir(parent)?;
        }

        fs::copy(from, to).with_context(|| format!("Failed to copy {:?} to {:?}", from, to))?;

        Ok(())
    }
}

/// Where the artifacts of one example land under the output root
///
/// ```text
/// <root>/<name>.<ext>                skeleton
/// <root>/reference/<name>.rs         original source
/// <root>/reports/<name>.<html|md>    comparison report
/// <root>/screenshots/<name>/         screenshots (filled externally)
/// <root>/assets/<font>               font used by the skeleton
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    // @generates: Path of a file placed directly in the output root
    pub fn skeleton_path(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }

    pub fn reference_path(&self, name: &str) -> PathBuf {
        self.root.join("reference").join(format!("{}.rs", name))
    }

    pub fn report_path(&self, file_name: &str) -> PathBuf {
        self.root.join("reports").join(file_name)
    }

    pub fn screenshots_dir(&self, name: &str) -> PathBuf {
        self.root.join("screenshots").join(name)
    }

    // @generates: Destination of a copied asset, keeping its file name
    pub fn asset_path<P: AsRef<Path>>(&self, source: P) -> PathBuf {
        let file_name = source
            .as_ref()
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "asset".into());
        self.root.join("assets").join(file_name)
    }
}
