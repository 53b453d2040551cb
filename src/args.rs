use clap::Parser;

use crate::choices::AddOn;

/// Styles from <https://github.com/rust-lang/cargo/blob/master/src/cargo/util/style.rs>
mod style {
    use anstyle::*;
    use clap::builder::Styles;

    const HEADER: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
    const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
    const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

    pub const STYLES: Styles = {
        Styles::styled()
            .header(HEADER)
            .usage(USAGE)
            .literal(LITERAL)
            .placeholder(PLACEHOLDER)
            .error(ERROR)
            .valid(VALID)
            .invalid(INVALID)
    };
}

mod heading {
    pub const TEMPLATE_SELECTION: &str = "Template Selection";
    pub const ADD_ONS: &str = "Add-ons";
}

#[derive(Parser, Clone, Debug, Default)]
#[command(
    name = "create-solid",
    version,
    about,
    next_line_help(false),
    styles(style::STYLES)
)]
pub struct AppArgs {
    /// Directory to create the project in; prompted for when omitted
    #[arg(value_name = "TARGET_DIR")]
    pub target_dir: Option<String>,

    /// Template to scaffold from. Unknown names fall back to an interactive choice
    #[arg(long, short, value_name = "NAME", help_heading = heading::TEMPLATE_SELECTION)]
    pub template: Option<String>,

    /// Use the typescript flavour of the default template
    #[arg(long, action, conflicts_with = "template", help_heading = heading::TEMPLATE_SELECTION)]
    pub typescript: bool,

    /// Add telefunc to the project
    #[arg(long, action, help_heading = heading::ADD_ONS)]
    pub telefunc: bool,

    /// Add tailwind css to the project
    #[arg(long, action, help_heading = heading::ADD_ONS)]
    pub tailwind: bool,

    /// Enables more verbose output.
    #[arg(long, short, action)]
    pub verbose: bool,
}

impl AppArgs {
    /// Add-ons picked through flags, in declaration order
    pub fn add_ons(&self) -> Vec<AddOn> {
        let mut add_ons = Vec::new();
        if self.telefunc {
            add_ons.push(AddOn::Telefunc);
        }
        if self.tailwind {
            add_ons.push(AddOn::Tailwind);
        }
        add_ons
    }
}

/// To get the arguments list from terminal
pub fn resolve_args() -> AppArgs {
    AppArgs::parse()
}
