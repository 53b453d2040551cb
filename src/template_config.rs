use anyhow::{bail, Result};
use console::style;
use semver::VersionReq;
use serde::Deserialize;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::{convert::TryFrom, io::ErrorKind};

pub const CONFIG_FILE_NAME: &str = "scaffold.toml";

#[derive(Deserialize, Debug, PartialEq, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub template: Option<TemplateConfig>,
}

#[derive(Deserialize, Debug, PartialEq, Eq, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct TemplateConfig {
    pub description: Option<String>,
    pub min_version: Option<VersionReq>,
    pub exclude: Option<Vec<String>>,
}

impl TryFrom<String> for Config {
    type Error = toml::de::Error;

    fn try_from(contents: String) -> Result<Self, Self::Error> {
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}

impl Config {
    /// Read `scaffold.toml` from a template directory; a missing file is an empty config.
    pub fn from_template_dir(template_dir: &Path) -> Result<Self> {
        let config = match fs::read_to_string(template_dir.join(CONFIG_FILE_NAME)) {
            Ok(contents) => Self::try_from(contents)?,
            Err(e) => match e.kind() {
                ErrorKind::NotFound => Self::default(),
                _ => bail!(e),
            },
        };
        Ok(config)
    }

    pub fn description(&self) -> Option<&str> {
        self.template.as_ref()?.description.as_deref()
    }

    /// Relative paths that must never reach the project, with `./` segments dropped.
    pub fn excluded_paths(&self) -> Result<Vec<PathBuf>> {
        let mut excluded = vec![PathBuf::from(CONFIG_FILE_NAME)];
        if let Some(exclude) = self.template.as_ref().and_then(|t| t.exclude.as_ref()) {
            for entry in exclude {
                excluded.push(normalize_exclude(entry)?);
            }
        }
        Ok(excluded)
    }

    pub fn check_version(&self) -> Result<()> {
        let Some(requirement) = self.template.as_ref().and_then(|t| t.min_version.as_ref())
        else {
            return Ok(());
        };
        let version = semver::Version::parse(env!("CARGO_PKG_VERSION"))?;
        if !requirement.matches(&version) {
            bail!(
                "{} {} {} {}",
                style("Required create-solid version not met. Required:")
                    .bold()
                    .red(),
                style(requirement).yellow(),
                style(" was:").bold().red(),
                style(version).yellow(),
            );
        }
        Ok(())
    }
}

fn normalize_exclude(entry: &str) -> Result<PathBuf> {
    let mut path = PathBuf::new();
    for component in Path::new(entry).components() {
        match component {
            Component::CurDir => {}
            Component::Normal(part) => path.push(part),
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => bail!(
                "{} `{}` {}",
                style("Exclude entry").bold().red(),
                style(entry).yellow(),
                style("must be a path inside the template").bold().red(),
            ),
        }
    }
    if path.as_os_str().is_empty() {
        bail!(
            "{} `{}` {}",
            style("Exclude entry").bold().red(),
            style(entry).yellow(),
            style("does not name a file").bold().red(),
        );
    }
    Ok(path)
}
