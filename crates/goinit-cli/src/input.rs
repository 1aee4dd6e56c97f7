use std::io::{self, IsTerminal};

use dialoguer::{Input, theme::ColorfulTheme};
use goinit_core::prompt::{LinePrompter, Prompter};

/// Prompts through `dialoguer`, showing the default inline.
#[derive(Default)]
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl Prompter for DialoguerPrompter {
    fn input(&mut self, message: &str, default: &str) -> io::Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .default(default.to_string())
            .interact_text()
            .map_err(into_io_error)
    }
}

fn into_io_error(err: dialoguer::Error) -> io::Error {
    match err {
        dialoguer::Error::IO(e) => e,
    }
}

/// Rich prompts on a terminal, plain line reads when stdin is piped.
pub fn stdin_prompter() -> Box<dyn Prompter> {
    if io::stdin().is_terminal() {
        Box::new(DialoguerPrompter::default())
    } else {
        Box::new(LinePrompter::stdio())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialoguer_errors_keep_the_io_cause() {
        let err = dialoguer::Error::IO(io::Error::new(io::ErrorKind::NotConnected, "no tty"));
        let io_err = into_io_error(err);
        assert_eq!(io_err.kind(), io::ErrorKind::NotConnected);
        assert_eq!(io_err.to_string(), "no tty");
    }
}
