//! Status lines for the maintenance commands (fetch, cache, init).
//! Colors are dropped when the stream is not a terminal.

use std::fmt;
use std::io::IsTerminal;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";

fn line<T: fmt::Display>(color: &str, icon: &str, msg: T) -> String {
    if std::io::stdout().is_terminal() {
        format!("{}{}{} {}{}", color, BOLD, icon, RESET, msg)
    } else {
        format!("{} {}", icon, msg)
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_BLUE, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_GREEN, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_YELLOW, ICON_WARN, msg));
}
