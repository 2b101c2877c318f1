//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: ids, paths, hints
//! - Bold: headers, important values
//! - Dimmed: secondary info

use std::fmt::Display;

use console::{style, StyledObject};

const RULE_WIDTH: usize = 56;

/// Style a value, unless NO_COLOR is set.
fn paint<D>(value: D) -> StyledObject<D> {
    let styled = style(value);
    if std::env::var_os("NO_COLOR").is_some() {
        styled.force_styling(false)
    } else {
        styled
    }
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ added Production`
pub fn success(msg: &str) {
    println!("{} {}", paint("✓").green(), msg);
}

/// Print an error message to stderr (red).
///
/// Example: `✗ profile not found: prod`
pub fn error(msg: &str) {
    eprintln!("{} {}", paint("✗").for_stderr().red(), msg);
}

/// Print a warning message to stderr (yellow).
pub fn warn(msg: &str) {
    eprintln!("{} {}", paint("⚠").for_stderr().yellow(), msg);
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ run: bullpen list`
pub fn hint(msg: &str) {
    eprintln!(
        "{} {}",
        paint("→").for_stderr().cyan(),
        paint(msg).for_stderr().cyan()
    );
}

/// Print a bold section header.
pub fn header(title: &str) {
    println!("{}", paint(title).bold());
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  account   123456789012`
pub fn kv(label: &str, value: impl Display) {
    println!(
        "  {:<10}{}",
        paint(label).dim(),
        paint(value.to_string()).bold()
    );
}

/// Print a list item with bullet.
pub fn list_item(item: &str) {
    println!("  • {}", item);
}

/// Print a horizontal rule separator.
pub fn rule() {
    println!("{}", paint("─".repeat(RULE_WIDTH)).dim());
}

/// Print an empty line.
pub fn blank() {
    println!();
}

/// Print a dimmed/secondary message.
///
/// Example: `no profiles stored`
pub fn dimmed(msg: &str) {
    println!("{}", paint(msg).dim());
}

/// Print machine-readable data verbatim.
pub fn data(text: &str) {
    println!("{}", text);
}

/// Format an id or name in cyan for inline use.
pub fn key(k: &str) -> String {
    paint(k).cyan().to_string()
}

/// Format a path in cyan for inline use.
pub fn path(p: &std::path::Path) -> String {
    paint(p.display().to_string()).cyan().to_string()
}
