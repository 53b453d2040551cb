use std::path::Path;

/// Name written into `package.json`. `.` means "the directory we are in".
pub fn get_project_name(cwd: &Path, target_dir: &str) -> String {
    if target_dir == "." {
        cwd.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| target_dir.to_string())
    } else {
        target_dir.to_string()
    }
}
