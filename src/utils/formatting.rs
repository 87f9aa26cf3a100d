//! Formatting utilities used for terminal output.

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}
