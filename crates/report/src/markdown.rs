//! Small Markdown building blocks shared by the documents.

use std::fmt;

/// A titled list of checklist items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Group {
    pub title: &'static str,
    pub items: Vec<String>,
}

impl Group {
    pub fn new(title: &'static str, items: &[&str]) -> Self {
        Self {
            title,
            items: items.iter().map(ToString::to_string).collect(),
        }
    }

    /// Appends an item whose text depends on the design.
    pub fn with(mut self, item: String) -> Self {
        self.items.push(item);
        self
    }

    pub fn and(mut self, items: &[&str]) -> Self {
        self.items.extend(items.iter().map(ToString::to_string));
        self
    }
}

/// Writes a group as a `###` heading over a task list.
///
/// Items are ticked when `done` is true.
pub(crate) fn write_group(f: &mut fmt::Formatter<'_>, group: &Group, done: bool) -> fmt::Result {
    let mark = if done { 'x' } else { ' ' };

    writeln!(f, "### {}", group.title)?;
    writeln!(f)?;
    for item in &group.items {
        writeln!(f, "- [{mark}] {item}")?;
    }
    writeln!(f)
}

/// Writes a `##` section of unticked groups.
pub(crate) fn write_section(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    groups: &[Group],
) -> fmt::Result {
    writeln!(f, "## {title}")?;
    writeln!(f)?;
    groups.iter().try_for_each(|group| write_group(f, group, false))
}

/// Upper-cases the first character.
pub(crate) fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub(crate) fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

pub(crate) fn pass_fail(value: bool) -> &'static str {
    if value { "PASS" } else { "FAIL" }
}
