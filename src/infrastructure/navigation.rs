//! Navigator for the terminal client.

use std::io::Write;

use colored::Colorize;

use crate::domain::ports::{Navigation, Navigator};

/// Prints the navigation target instead of moving a browser.
///
/// The output is meant to be piped: the target URL or route is written alone
/// on stdout, the human-readable note goes to stderr.
#[derive(Debug, Default)]
pub struct TerminalNavigator;

impl TerminalNavigator {
    pub fn new() -> Self {
        Self
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, navigation: &Navigation) {
        match navigation {
            Navigation::External(url) => {
                eprintln!("{} {}", "→".green().bold(), "Redirecting".green());
                let _ = writeln!(std::io::stdout(), "{url}");
            }
            Navigation::Home(route) => {
                eprintln!(
                    "{} {}",
                    "↩".yellow().bold(),
                    "Short link could not be resolved, going home".yellow()
                );
                let _ = writeln!(std::io::stdout(), "{route}");
            }
        }
    }
}
