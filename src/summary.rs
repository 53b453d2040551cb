use std::path::Path;

use crate::template_variables::ProjectDir;

/// Commands the user should run next, in order.
pub fn next_steps(
    cwd: &Path,
    project_dir: &ProjectDir,
    target_dir: &str,
    pkg_manager: &str,
) -> Vec<String> {
    let mut steps = Vec::with_capacity(3);
    if !project_dir.is_cwd(cwd) {
        let dir = if Path::new(target_dir).is_absolute() {
            project_dir.to_string()
        } else {
            target_dir.to_string()
        };
        if dir.contains(char::is_whitespace) {
            steps.push(format!("cd \"{dir}\""));
        } else {
            steps.push(format!("cd {dir}"));
        }
    }
    match pkg_manager {
        "yarn" => {
            steps.push("yarn".to_string());
            steps.push("yarn dev".to_string());
        }
        _ => {
            steps.push(format!("{pkg_manager} install"));
            steps.push(format!("{pkg_manager} run dev"));
        }
    }
    steps
}
