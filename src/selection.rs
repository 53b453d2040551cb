//! Resolve what to scaffold and where, from flags first and prompts second.

use anyhow::Result;
use console::style;
use log::debug;
use std::path::{PathBuf, MAIN_SEPARATOR};

use crate::choices::{AddOn, Template, DEFAULT_TARGET_DIR};
use crate::package_manager::{pkg_from_user_agent, DEFAULT_PACKAGE_MANAGER};

/// Answers the questions the resolver cannot answer from flags.
///
/// Every method returns `Ok(None)` when the user cancelled the prompt.
pub trait Prompter {
    fn target_dir(&mut self, default: &str) -> Result<Option<String>>;

    /// `warning` is set when the user passed a template name we do not know
    fn template(&mut self, choices: &[Template], warning: Option<&str>)
        -> Result<Option<Template>>;

    fn add_ons(&mut self, choices: &[AddOn]) -> Result<Option<Vec<AddOn>>>;
}

/// Process-level inputs, passed in instead of read from globals.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    pub cwd: PathBuf,
    pub user_agent: Option<String>,
    pub default_target_dir: String,
}

impl ResolverConfig {
    pub fn new(cwd: PathBuf, user_agent: Option<String>) -> Self {
        Self {
            cwd,
            user_agent,
            default_target_dir: DEFAULT_TARGET_DIR.to_string(),
        }
    }
}

/// What the user asked for on the command line.
#[derive(Debug, Clone, Default)]
pub struct SelectionRequest {
    pub target_dir: Option<String>,
    pub template: Option<String>,
    pub typescript: bool,
    pub add_ons: Vec<AddOn>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSelection {
    pub target_dir: String,
    pub template: Template,
    pub add_ons: Vec<AddOn>,
    pub package_manager: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Resolution {
    Selected(ResolvedSelection),
    Cancelled,
}

/// Trim whitespace and strip trailing path separators. `None` when nothing is left.
pub fn normalize_target_dir(dir: Option<&str>) -> Option<String> {
    let dir = dir?
        .trim()
        .trim_end_matches(|c| c == '/' || c == MAIN_SEPARATOR);
    (!dir.is_empty()).then(|| dir.to_string())
}

pub fn invalid_template_warning(value: &str) -> String {
    format!("\"{value}\" isn't a valid template. Please choose from below:")
}

pub fn resolve(
    request: &SelectionRequest,
    config: &ResolverConfig,
    prompter: &mut impl Prompter,
) -> Result<Resolution> {
    let target_dir = match normalize_target_dir(request.target_dir.as_deref()) {
        Some(dir) => dir,
        None => match prompter.target_dir(&config.default_target_dir)? {
            Some(answer) => normalize_target_dir(Some(&answer))
                .unwrap_or_else(|| config.default_target_dir.clone()),
            None => return Ok(Resolution::Cancelled),
        },
    };

    let flagged = match request.template.as_deref() {
        Some(name) => name.parse::<Template>().ok(),
        None if request.typescript => Some(Template::SolidTs),
        None => None,
    };
    let (template, prompted) = match flagged {
        Some(template) => (template, false),
        None => {
            let warning = request
                .template
                .as_deref()
                .map(invalid_template_warning);
            match prompter.template(&Template::ALL, warning.as_deref())? {
                Some(template) => (template, true),
                None => return Ok(Resolution::Cancelled),
            }
        }
    };

    let add_ons = if prompted && request.add_ons.is_empty() {
        match prompter.add_ons(&AddOn::ALL)? {
            Some(add_ons) => add_ons,
            None => return Ok(Resolution::Cancelled),
        }
    } else {
        request.add_ons.clone()
    };

    let package_manager = match pkg_from_user_agent(config.user_agent.as_deref()) {
        Some(pkg) => {
            debug!("invoked through {} {}", pkg.name, pkg.version);
            pkg.name
        }
        None => DEFAULT_PACKAGE_MANAGER.to_string(),
    };
    debug!(
        "resolved {} with template {} using {}",
        style(&target_dir).bold(),
        style(template).bold(),
        style(&package_manager).bold()
    );

    Ok(Resolution::Selected(ResolvedSelection {
        target_dir,
        template,
        add_ons,
        package_manager,
    }))
}
