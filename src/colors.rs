//! Color output gating.
//!
//! Implements the NO_COLOR standard (https://no-color.org/) and the
//! traditional CLICOLOR conventions, layered under the explicit
//! `--no-color` flag. Colors are disabled automatically when stdout is not
//! a terminal, unless CLICOLOR_FORCE is set.

use colored::control;

/// Configure color output for the entire program. Call this early in main().
pub fn init_colors(no_color_flag: bool) {
    control::set_override(colors_enabled(no_color_flag));
}

fn colors_enabled(no_color_flag: bool) -> bool {
    // The explicit flag and NO_COLOR (set to any value) win over everything
    if no_color_flag || std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    // CLICOLOR_FORCE overrides both CLICOLOR and TTY detection
    if std::env::var("CLICOLOR_FORCE")
        .map(|v| v != "0")
        .unwrap_or(false)
    {
        return true;
    }

    // CLICOLOR=0 disables colors
    if std::env::var("CLICOLOR").map(|v| v == "0").unwrap_or(false) {
        return false;
    }

    std::io::IsTerminal::is_terminal(&std::io::stdout())
}
