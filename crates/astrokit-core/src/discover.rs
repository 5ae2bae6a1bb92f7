use std::path::{Path, MAIN_SEPARATOR};

use rayon::prelude::*;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::Result;
use crate::template::{PathTemplate, TemplateMatch};

#[derive(Clone, Debug, Default)]
pub struct DiscoverOptions {
    /// Walk depth below the static root; `Some(1)` visits only direct children.
    pub max_depth: Option<usize>,
    pub follow_links: bool,
}

/// Find the files on disk that match `template`, in file-name walk order.
///
/// Entries below the root that cannot be read (dangling links, permission
/// errors, link loops) are skipped; only a failure on the root is an error.
/// The walk is recursive unless `max_depth` says otherwise, and placeholders
/// may capture `/`, so `${token}.xisf` also matches `sub/Oiii.xisf` with
/// `token = "sub/Oiii"`.
pub fn files_matching_template(
    template: &PathTemplate,
    options: &DiscoverOptions,
) -> Result<Vec<TemplateMatch>> {
    files_matching_template_with_progress(template, options, |_| {})
}

/// Like [`files_matching_template`], reporting the number of entries visited.
pub fn files_matching_template_with_progress<F>(
    template: &PathTemplate,
    options: &DiscoverOptions,
    mut on_progress: F,
) -> Result<Vec<TemplateMatch>>
where
    F: FnMut(usize),
{
    if !template.has_placeholders() {
        let path = Path::new(template.as_str());
        return Ok(if path.is_file() {
            template.matches([template.as_str()])
        } else {
            Vec::new()
        });
    }

    let split = template.split();
    let relative = split.root.is_empty();
    let walk_root = if relative {
        Path::new(".")
    } else {
        Path::new(&split.root)
    };

    if !walk_root.exists() {
        debug!(root = %walk_root.display(), "Template root does not exist");
        return Ok(Vec::new());
    }

    let mut walker = WalkDir::new(walk_root)
        .follow_links(options.follow_links)
        .sort_by_file_name();
    if let Some(depth) = options.max_depth {
        walker = walker.max_depth(depth);
    }

    let mut candidates = Vec::new();
    let mut visited = 0;
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => return Err(err.into()),
            Err(err) => {
                debug!(
                    path = ?err.path().map(|p| p.display().to_string()),
                    error = %err,
                    "Skipping unreadable entry"
                );
                continue;
            }
        };
        visited += 1;
        on_progress(visited);

        if !entry.file_type().is_file() {
            continue;
        }
        match candidate_path(entry.path(), relative) {
            Some(path) => candidates.push(path),
            None => debug!(path = %entry.path().display(), "Skipping non UTF-8 path"),
        }
    }

    let matches: Vec<TemplateMatch> = candidates
        .par_iter()
        .filter_map(|path| {
            template.match_path(path).map(|binding| TemplateMatch {
                path: path.clone(),
                binding,
            })
        })
        .collect();

    info!(
        root = %walk_root.display(),
        visited,
        candidates = candidates.len(),
        matched = matches.len(),
        "Template discovery complete"
    );

    Ok(matches)
}

fn candidate_path(path: &Path, relative: bool) -> Option<String> {
    let mut text = path.to_str()?.to_string();
    if MAIN_SEPARATOR != '/' {
        text = text.replace(MAIN_SEPARATOR, "/");
    }
    if relative {
        if let Some(stripped) = text.strip_prefix("./") {
            text = stripped.to_string();
        }
    }
    Some(text)
}
