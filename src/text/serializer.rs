//! Renders a configuration back to text.

use tracing::trace;

use crate::model::{Configuration, Element};

/// Serializes `config` to text, comments included.
///
/// Every section is followed by a blank line, and a blank line separates any
/// element that carries pre-comments from what precedes it. Runs of blank
/// lines are then collapsed to a single one.
#[must_use]
pub fn serialize(config: &Configuration) -> String {
    let mut out = String::new();

    for (index, section) in config.iter().enumerate() {
        if index > 0 && !section.pre_comments().is_empty() {
            out.push('\n');
        }

        out.push_str(&section.render(true));
        out.push('\n');

        for setting in section {
            if !setting.pre_comments().is_empty() {
                out.push('\n');
            }

            out.push_str(&setting.render(true));
            out.push('\n');
        }

        out.push('\n');
    }

    let out = collapse_blank_lines(out);
    trace!(bytes = out.len(), sections = config.len(), "Serialized configuration");
    out
}

fn collapse_blank_lines(mut text: String) -> String {
    while text.contains("\n\n\n") {
        text = text.replace("\n\n\n", "\n\n");
    }
    text
}
