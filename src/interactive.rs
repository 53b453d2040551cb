use anyhow::Result;
use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use std::io::ErrorKind;

use crate::choices::{AddOn, Presentable, Template};
use crate::selection::Prompter;

/// Prompts on the terminal through dialoguer.
#[derive(Default)]
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

/// Esc/`q` already come back as `None`; Ctrl-C surfaces as an interrupted read.
fn cancelled_on_interrupt<T>(answer: dialoguer::Result<Option<T>>) -> Result<Option<T>> {
    match answer {
        Ok(answer) => Ok(answer),
        Err(dialoguer::Error::IO(e)) if e.kind() == ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e.into()),
    }
}

impl Prompter for TerminalPrompter {
    fn target_dir(&mut self, default: &str) -> Result<Option<String>> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt("🤷 Project name")
            .default(default.to_string())
            .interact_text()
            .map(Some);
        cancelled_on_interrupt(answer)
    }

    fn template(
        &mut self,
        choices: &[Template],
        warning: Option<&str>,
    ) -> Result<Option<Template>> {
        // Not routed through `log`: visible at every log level
        if let Some(warning) = warning {
            Term::stderr().write_line(&style(warning).for_stderr().bold().yellow().to_string())?;
        }
        let items: Vec<String> = choices.iter().map(Presentable::styled_label).collect();
        let chosen = Select::with_theme(&self.theme)
            .with_prompt("🤷 Select a template")
            .items(&items)
            .default(0)
            .interact_opt();
        Ok(cancelled_on_interrupt(chosen)?.and_then(|idx| choices.get(idx).copied()))
    }

    fn add_ons(&mut self, choices: &[AddOn]) -> Result<Option<Vec<AddOn>>> {
        let items: Vec<String> = choices.iter().map(Presentable::styled_label).collect();
        let chosen = MultiSelect::with_theme(&self.theme)
            .with_prompt("🤷 Select add-ons (space to toggle)")
            .items(&items)
            .defaults(&vec![false; items.len()])
            .interact_opt();
        Ok(cancelled_on_interrupt(chosen)?.map(|indices| {
            indices
                .iter()
                .filter_map(|idx| choices.get(*idx).copied())
                .collect()
        }))
    }
}
