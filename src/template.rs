use anyhow::{Context, Result};
use console::style;
use indicatif::ProgressBar;
use log::{debug, info};
use serde_json::{Map, Value};
use std::ffi::{OsStr, OsString};
use std::fs::{self, DirEntry};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::progressbar;
use crate::selection::ResolvedSelection;
use crate::template_config::Config;
use crate::template_variables::project_name::get_project_name;
use crate::template_variables::ProjectDir;

pub const PACKAGE_JSON: &str = "package.json";

/// Keys an add-on manifest contributes to the project manifest
const MERGED_MANIFEST_KEYS: [&str; 3] = ["dependencies", "devDependencies", "scripts"];

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template directory `{0}` does not exist")]
    MissingTemplate(PathBuf),
    #[error("add-on directory `{0}` does not exist")]
    MissingAddOn(PathBuf),
    #[error("`{0}` not found")]
    MissingManifest(PathBuf),
    #[error("`{0}` does not contain a JSON object")]
    InvalidManifest(PathBuf),
    #[error("project directory `{target}` is inside the source directory `{source_dir}`")]
    TargetInsideSource { target: PathBuf, source_dir: PathBuf },
}

/// `_gitignore` is stored under another name so packaging tools leave it alone.
pub fn target_file_name(name: &OsStr) -> OsString {
    if name == "_gitignore" {
        OsString::from(".gitignore")
    } else {
        name.to_owned()
    }
}

/// Materialize the selected template in the project directory.
///
/// Reads happen first; once the directory exists, `package.json` is written
/// before anything else is copied. Nothing is cleaned up on failure.
pub fn scaffold(cwd: &Path, selection: &ResolvedSelection) -> Result<ProjectDir> {
    let template_dir = cwd.join(selection.template.dir_name());
    let config = Config::from_template_dir(&template_dir)?;
    config.check_version()?;
    if let Some(description) = config.description() {
        debug!("{} {}", style("Template:").bold(), description);
    }

    let add_on_dirs = selection
        .add_ons
        .iter()
        .map(|add_on| {
            let dir = cwd.join(add_on.dir_name());
            if dir.is_dir() {
                Ok(dir)
            } else {
                Err(TemplateError::MissingAddOn(dir))
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut excluded = config.excluded_paths()?;
    excluded.push(PathBuf::from(PACKAGE_JSON));

    let project_dir = ProjectDir::new(cwd, &selection.target_dir);
    for source_dir in std::iter::once(&template_dir).chain(&add_on_dirs) {
        if source_dir.is_dir() && project_dir.is_within(source_dir)? {
            return Err(TemplateError::TargetInsideSource {
                target: project_dir.as_ref().to_path_buf(),
                source_dir: source_dir.clone(),
            }
            .into());
        }
    }
    info!(
        "\n🔧 {} {}...",
        style("Scaffolding project in").bold(),
        style(&project_dir).underlined()
    );
    project_dir.create().with_context(|| {
        format!(
            "{} `{}`",
            style("Cannot create project directory").bold().red(),
            style(&project_dir).bold()
        )
    })?;
    debug!("directory created");

    if !template_dir.is_dir() {
        return Err(TemplateError::MissingTemplate(template_dir).into());
    }
    let mut manifest = read_manifest(&template_dir.join(PACKAGE_JSON))?;
    set_manifest_name(
        &mut manifest,
        &get_project_name(cwd, &selection.target_dir),
    );
    for dir in &add_on_dirs {
        let path = dir.join(PACKAGE_JSON);
        if path.is_file() {
            merge_manifest(&mut manifest, &read_manifest(&path)?);
        }
    }
    write_manifest(project_dir.as_ref(), &manifest)?;
    debug!("{PACKAGE_JSON} written");

    copy_dir(&template_dir, project_dir.as_ref(), &excluded)?;
    for dir in &add_on_dirs {
        copy_dir(dir, project_dir.as_ref(), &[PathBuf::from(PACKAGE_JSON)])?;
    }
    debug!("files copied");

    Ok(project_dir)
}

pub fn read_manifest(path: &Path) -> Result<Map<String, Value>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(TemplateError::MissingManifest(path.to_path_buf()).into())
        }
        Err(e) => {
            return Err(e).with_context(|| format!("cannot read `{}`", path.display()))
        }
    };
    let value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("cannot parse `{}`", path.display()))?;
    match value {
        Value::Object(manifest) => Ok(manifest),
        _ => Err(TemplateError::InvalidManifest(path.to_path_buf()).into()),
    }
}

/// Replace `name` in place, keeping every other field and the key order.
pub fn set_manifest_name(manifest: &mut Map<String, Value>, name: &str) {
    manifest.insert("name".to_string(), Value::String(name.to_string()));
}

/// Fold an add-on manifest's dependency and script tables into `manifest`.
pub fn merge_manifest(manifest: &mut Map<String, Value>, extra: &Map<String, Value>) {
    for key in MERGED_MANIFEST_KEYS {
        let Some(Value::Object(extra_entries)) = extra.get(key) else {
            continue;
        };
        let entry = manifest
            .entry(key)
            .or_insert_with(|| Value::Object(Map::new()));
        match entry {
            Value::Object(entries) => {
                for (k, v) in extra_entries {
                    entries.insert(k.clone(), v.clone());
                }
            }
            other => *other = Value::Object(extra_entries.clone()),
        }
    }
}

pub fn write_manifest(project_dir: &Path, manifest: &Map<String, Value>) -> Result<()> {
    let path = project_dir.join(PACKAGE_JSON);
    let mut contents = serde_json::to_string_pretty(manifest)?;
    contents.push('\n');
    fs::write(&path, contents).with_context(|| {
        format!(
            "{} `{}`",
            style("Error writing").bold().red(),
            style(path.display()).bold()
        )
    })
}

fn sorted_entries(dir: &Path) -> Result<Vec<DirEntry>> {
    let mut entries = fs::read_dir(dir)
        .with_context(|| format!("cannot read directory `{}`", dir.display()))?
        .collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(DirEntry::file_name);
    Ok(entries)
}

/// Copy the entries of `src` into `dest`, skipping `excluded` paths (relative to `src`).
pub fn copy_dir(src: &Path, dest: &Path, excluded: &[PathBuf]) -> Result<()> {
    let mp = progressbar::new();
    let spinner_style = progressbar::spinner();

    let entries = sorted_entries(src)?;
    let total = entries.len().to_string();
    for (progress, entry) in entries.iter().enumerate() {
        let name = entry.file_name();
        let pb = mp.add(ProgressBar::new_spinner());
        pb.set_style(spinner_style.clone());
        pb.set_prefix(format!(
            "[{:width$}/{}]",
            progress + 1,
            total,
            width = total.len()
        ));
        pb.set_message(format!("Copying: {name:?}"));
        copy_entry(src, Path::new(&name), dest, excluded)?;
        pb.finish_with_message(format!("Done: {name:?}"));
    }
    Ok(())
}

fn copy_entry(
    src_root: &Path,
    relative: &Path,
    dest_dir: &Path,
    excluded: &[PathBuf],
) -> Result<()> {
    if excluded.iter().any(|path| path == relative) {
        debug!("skipping {}", relative.display());
        return Ok(());
    }
    let Some(name) = relative.file_name() else {
        return Ok(());
    };
    let src_path = src_root.join(relative);

    if src_path.is_dir() {
        let dest_path = dest_dir.join(name);
        fs::create_dir_all(&dest_path)
            .with_context(|| format!("cannot create directory `{}`", dest_path.display()))?;
        for entry in sorted_entries(&src_path)? {
            copy_entry(
                src_root,
                &relative.join(entry.file_name()),
                &dest_path,
                excluded,
            )?;
        }
    } else {
        let dest_path = dest_dir.join(target_file_name(name));
        fs::copy(&src_path, &dest_path).with_context(|| {
            format!(
                "cannot copy `{}` to `{}`",
                src_path.display(),
                dest_path.display()
            )
        })?;
    }
    Ok(())
}
