use std::{
    fmt::Display,
    io,
    path::{Component, Path, PathBuf},
};

use console::style;
use log::debug;

/// Absolute location of the project being scaffolded.
#[derive(Debug, PartialEq)]
pub struct ProjectDir(PathBuf);

impl AsRef<Path> for ProjectDir {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

impl Display for ProjectDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.display().fmt(f)
    }
}

impl ProjectDir {
    /// Join `target_dir` onto `cwd` once; absolute targets replace `cwd`.
    pub fn new(cwd: &Path, target_dir: &str) -> Self {
        if target_dir == "." {
            Self(cwd.to_path_buf())
        } else {
            Self(cwd.join(target_dir))
        }
    }

    pub fn is_cwd(&self, cwd: &Path) -> bool {
        self.0 == cwd
    }

    /// True when the project lands in `dir` or anywhere below it.
    pub fn is_within(&self, dir: &Path) -> io::Result<bool> {
        Ok(resolve_path(&self.0)?.starts_with(dir.canonicalize()?))
    }

    /// Create the directory and any missing parents. An existing directory is fine.
    pub fn create(&self) -> anyhow::Result<()> {
        if self.0.is_dir() {
            debug!(
                "{}",
                style(format!("Reusing existing directory: {}", self.0.display())).yellow()
            );
        }
        std::fs::create_dir_all(&self.0)?;
        Ok(())
    }
}

/// Fold `.` and `..`, then canonicalize the longest prefix that exists so
/// not-yet-created paths compare equal to canonical ones.
fn resolve_path(path: &Path) -> io::Result<PathBuf> {
    let mut folded = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                folded.pop();
            }
            other => folded.push(other),
        }
    }

    let mut existing = folded.as_path();
    let mut missing = Vec::new();
    while !existing.exists() {
        let (Some(parent), Some(name)) = (existing.parent(), existing.file_name()) else {
            break;
        };
        missing.push(name);
        existing = parent;
    }
    let mut resolved = existing.canonicalize()?;
    resolved.extend(missing.iter().rev());
    Ok(resolved)
}
