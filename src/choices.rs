//! The fixed set of templates and add-ons, and how they are presented.

use console::Style;
use std::fmt::Display;
use std::str::FromStr;

/// Directory name used when the user gives nothing better.
pub const DEFAULT_TARGET_DIR: &str = "solid-js-app";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Solid,
    SolidTs,
}

impl Template {
    pub const ALL: [Template; 2] = [Template::Solid, Template::SolidTs];

    pub const fn name(self) -> &'static str {
        match self {
            Template::Solid => "solid",
            Template::SolidTs => "solid-ts",
        }
    }

    /// Name of the directory, next to the working directory, holding the template files
    pub fn dir_name(self) -> String {
        format!("{}-template", self.name())
    }
}

impl FromStr for Template {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or(())
    }
}

impl Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOn {
    Telefunc,
    Tailwind,
}

impl AddOn {
    pub const ALL: [AddOn; 2] = [AddOn::Telefunc, AddOn::Tailwind];

    pub const fn name(self) -> &'static str {
        match self {
            AddOn::Telefunc => "telefunc",
            AddOn::Tailwind => "tailwind",
        }
    }

    pub fn dir_name(self) -> String {
        format!("{}-addon", self.name())
    }
}

impl Display for AddOn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Anything that can be shown as a colored entry in a selection list
pub trait Presentable {
    fn label(&self) -> &'static str;
    fn style(&self) -> Style;

    fn styled_label(&self) -> String {
        self.style().apply_to(self.label()).to_string()
    }
}

impl Presentable for Template {
    fn label(&self) -> &'static str {
        match self {
            Template::Solid => "Javascript",
            Template::SolidTs => "Typescript",
        }
    }

    fn style(&self) -> Style {
        match self {
            Template::Solid => Style::new().yellow(),
            Template::SolidTs => Style::new().blue(),
        }
    }
}

impl Presentable for AddOn {
    fn label(&self) -> &'static str {
        match self {
            AddOn::Telefunc => "Telefunc",
            AddOn::Tailwind => "Tailwind.Css",
        }
    }

    fn style(&self) -> Style {
        match self {
            AddOn::Telefunc => Style::new().black().on_yellow(),
            AddOn::Tailwind => Style::new().cyan(),
        }
    }
}
