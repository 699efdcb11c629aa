// Interactive prompt seam.
//
// The driver and the per-tool installer only ever talk to the `Prompter`
// trait; the console implementation wraps dialoguer, and tests substitute a
// scripted implementation so the whole flow can run unattended.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

use crate::libs::error::InstallError;
use crate::schemas::catalog::TargetOs;

pub trait Prompter {
    /// OS selection, Linux first and preselected.
    fn select_os(&mut self) -> Result<TargetOs, InstallError>;

    /// Yes/no gate with a default taken on plain Enter.
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, InstallError>;

    /// Free-text version override; an empty response keeps `default`.
    fn version(&mut self, tool: &str, default: &str) -> Result<String, InstallError>;
}

/// Dialoguer-backed prompts on the controlling terminal.
pub struct ConsolePrompter {
    theme: ColorfulTheme,
}

impl ConsolePrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Prompter for ConsolePrompter {
    fn select_os(&mut self) -> Result<TargetOs, InstallError> {
        let choices = [TargetOs::Linux, TargetOs::Mac, TargetOs::Windows];
        let labels: Vec<String> = choices.iter().map(|os| os.to_string()).collect();
        let index = Select::with_theme(&self.theme)
            .with_prompt("Which OS are you installing for?")
            .items(&labels)
            .default(0)
            .interact()
            .map_err(|err| InstallError::Prompt(err.to_string()))?;
        Ok(choices[index])
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, InstallError> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|err| InstallError::Prompt(err.to_string()))
    }

    fn version(&mut self, tool: &str, default: &str) -> Result<String, InstallError> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(format!("Pick version for {tool}"))
            .default(default.to_string())
            .interact_text()
            .map_err(|err| InstallError::Prompt(err.to_string()))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Prompter;
    use crate::libs::error::InstallError;
    use crate::schemas::catalog::TargetOs;
    use std::collections::VecDeque;

    /// Answers prompts from a script: queued confirm answers first, then a
    /// fixed fallback; version prompts echo the offered default unless an
    /// override is queued.
    pub struct ScriptedPrompter {
        pub os: TargetOs,
        pub confirms: VecDeque<bool>,
        pub fallback_confirm: bool,
        pub version_overrides: VecDeque<String>,
        pub versions_seen: Vec<(String, String)>,
    }

    impl ScriptedPrompter {
        pub fn new(os: TargetOs, confirms: &[bool], fallback_confirm: bool) -> Self {
            Self {
                os,
                confirms: confirms.iter().copied().collect(),
                fallback_confirm,
                version_overrides: VecDeque::new(),
                versions_seen: Vec::new(),
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn select_os(&mut self) -> Result<TargetOs, InstallError> {
            Ok(self.os)
        }

        fn confirm(&mut self, _prompt: &str, _default: bool) -> Result<bool, InstallError> {
            Ok(self.confirms.pop_front().unwrap_or(self.fallback_confirm))
        }

        fn version(&mut self, tool: &str, default: &str) -> Result<String, InstallError> {
            let answer = self
                .version_overrides
                .pop_front()
                .unwrap_or_else(|| default.to_string());
            self.versions_seen.push((tool.to_string(), answer.clone()));
            Ok(answer)
        }
    }
}
