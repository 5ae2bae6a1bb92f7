//! Narrowband channel rows suggested from files found on disk.

use crate::template::{PathTemplate, TemplateMatch};

pub const NARROWBAND_CHANNELS: [&str; 3] = ["Sii", "Ha", "Oiii"];

pub const TOKEN: &str = "token";
pub const EXTENSION: &str = "extension";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelRow {
    /// Matched path relative to the template's static root.
    pub label: String,
    pub token: String,
    /// `None` when the file uses the default extension.
    pub extension: Option<String>,
    /// False when an equivalent row already exists.
    pub active: bool,
}

/// Turn template matches into channel rows.
///
/// `existing` holds the `(token, extension)` pairs of rows that are already
/// configured, with `None` meaning the default extension.
pub fn suggest_rows(
    template: &PathTemplate,
    matches: &[TemplateMatch],
    default_extension: &str,
    existing: &[(String, Option<String>)],
) -> Vec<ChannelRow> {
    let root = template.split().root;

    matches
        .iter()
        .filter_map(|m| {
            let token = m.binding.get(TOKEN)?.to_string();
            let extension = m
                .binding
                .get(EXTENSION)
                .filter(|ext| *ext != default_extension)
                .map(str::to_string);

            let label = m
                .path
                .strip_prefix(root.as_str())
                .unwrap_or(&m.path)
                .trim_start_matches('/')
                .to_string();

            let active = !existing
                .iter()
                .any(|(t, e)| *t == token && *e == extension);

            Some(ChannelRow {
                label,
                token,
                extension,
                active,
            })
        })
        .collect()
}

/// Parse a `token[:extension]` row spec into the pair [`suggest_rows`]
/// compares against. The default extension is stored as `None`.
pub fn parse_row_spec(spec: &str, default_extension: &str) -> (String, Option<String>) {
    match spec.split_once(':') {
        Some((token, ext)) if !ext.is_empty() && ext != default_extension => {
            (token.to_string(), Some(ext.to_string()))
        }
        Some((token, _)) => (token.to_string(), None),
        None => (spec.to_string(), None),
    }
}

/// Whether `token` names one of the standard narrowband channels.
pub fn is_narrowband(token: &str) -> bool {
    NARROWBAND_CHANNELS.contains(&token)
}
