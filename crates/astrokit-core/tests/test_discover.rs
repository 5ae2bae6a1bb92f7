use std::fs;
use std::path::Path;

use astrokit_core::discover::{
    files_matching_template, files_matching_template_with_progress, DiscoverOptions,
};
use astrokit_core::template::PathTemplate;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"").unwrap();
}

/// Temp tree mirroring a typical narrowband capture folder.
fn make_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    // Created out of order to exercise the sorted walk.
    touch(root, "prefixA-token2-suffix.b");
    touch(root, "prefixA-token1-suffix.a");
    touch(root, "prefixB-token1.ext");
    touch(root, "d2/token2-suffix.d");
    touch(root, "d1/token1-suffix.c");
    touch(root, "token1-suffix.a");
    dir
}

fn root_str(dir: &TempDir) -> String {
    dir.path().to_str().unwrap().replace('\\', "/")
}

fn template(dir: &TempDir, rest: &str) -> PathTemplate {
    PathTemplate::parse(&format!("{}/{}", root_str(dir), rest)).unwrap()
}

fn relative_paths(dir: &TempDir, matches: &[astrokit_core::template::TemplateMatch]) -> Vec<String> {
    let prefix = format!("{}/", root_str(dir));
    matches
        .iter()
        .map(|m| m.path.strip_prefix(&prefix).unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// files_matching_template
// ---------------------------------------------------------------------------

#[test]
fn test_discover_in_sorted_order() {
    let dir = make_tree();
    let t = template(&dir, "prefixA-${token}-suffix.${extension}");
    let matches = files_matching_template(&t, &DiscoverOptions::default()).unwrap();

    assert_eq!(
        relative_paths(&dir, &matches),
        ["prefixA-token1-suffix.a", "prefixA-token2-suffix.b"]
    );
    assert_eq!(matches[0].binding.get("token"), Some("token1"));
    assert_eq!(matches[1].binding.get("extension"), Some("b"));
}

#[test]
fn test_discover_directory_placeholder() {
    let dir = make_tree();
    let t = template(&dir, "${dir}/${token}-suffix.${extension}");
    let matches = files_matching_template(&t, &DiscoverOptions::default()).unwrap();

    assert_eq!(
        relative_paths(&dir, &matches),
        ["d1/token1-suffix.c", "d2/token2-suffix.d"]
    );
    assert_eq!(matches[0].binding.get("dir"), Some("d1"));
}

#[test]
fn test_discover_max_depth_limits_walk() {
    let dir = make_tree();
    let t = template(&dir, "${name}-suffix.${extension}");

    let all = files_matching_template(&t, &DiscoverOptions::default()).unwrap();
    assert_eq!(all.len(), 5);

    let shallow = files_matching_template(
        &t,
        &DiscoverOptions {
            max_depth: Some(1),
            follow_links: false,
        },
    )
    .unwrap();
    assert_eq!(
        relative_paths(&dir, &shallow),
        [
            "prefixA-token1-suffix.a",
            "prefixA-token2-suffix.b",
            "token1-suffix.a"
        ]
    );
}

#[test]
fn test_discover_skips_directories() {
    let dir = make_tree();
    fs::create_dir_all(dir.path().join("prefixA-folder-suffix.x")).unwrap();
    let t = template(&dir, "prefixA-${token}-suffix.${extension}");
    let matches = files_matching_template(&t, &DiscoverOptions::default()).unwrap();
    assert_eq!(matches.len(), 2);
}

#[test]
fn test_discover_missing_root_is_empty() {
    let dir = make_tree();
    let t = template(&dir, "missing/${token}.fits");
    let matches = files_matching_template(&t, &DiscoverOptions::default()).unwrap();
    assert!(matches.is_empty());
}

#[test]
fn test_discover_literal_template() {
    let dir = make_tree();
    let existing = template(&dir, "prefixB-token1.ext");
    let matches = files_matching_template(&existing, &DiscoverOptions::default()).unwrap();
    assert_eq!(matches.len(), 1);
    assert!(matches[0].binding.is_empty());

    let missing = template(&dir, "prefixB-token9.ext");
    assert!(files_matching_template(&missing, &DiscoverOptions::default())
        .unwrap()
        .is_empty());

    let directory = template(&dir, "d1");
    assert!(files_matching_template(&directory, &DiscoverOptions::default())
        .unwrap()
        .is_empty());
}

#[test]
fn test_discover_reports_progress() {
    let dir = make_tree();
    let t = template(&dir, "${token}.ext");
    let mut seen = Vec::new();
    let matches =
        files_matching_template_with_progress(&t, &DiscoverOptions::default(), |visited| {
            seen.push(visited)
        })
        .unwrap();

    assert_eq!(relative_paths(&dir, &matches), ["prefixB-token1.ext"]);
    // Root, two subdirectories and six files.
    assert_eq!(seen.len(), 9);
    assert!(seen.windows(2).all(|w| w[1] == w[0] + 1));
}

#[test]
fn test_discover_round_trips_through_substitute() {
    let dir = make_tree();
    let t = template(&dir, "${dir}/${token}-suffix.${extension}");
    for m in files_matching_template(&t, &DiscoverOptions::default()).unwrap() {
        assert_eq!(t.substitute(&m.binding).unwrap(), m.path);
    }
}

#[cfg(unix)]
#[test]
fn test_discover_skips_dangling_links() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "Ha.fits");
    std::os::unix::fs::symlink(dir.path().join("gone.fits"), dir.path().join("zz-dangling"))
        .unwrap();

    let t = template(&dir, "${token}.fits");
    let matches = files_matching_template(
        &t,
        &DiscoverOptions {
            max_depth: None,
            follow_links: true,
        },
    )
    .unwrap();

    assert_eq!(relative_paths(&dir, &matches), ["Ha.fits"]);
    assert_eq!(matches[0].binding.get("token"), Some("Ha"));
}

#[cfg(unix)]
#[test]
fn test_discover_skips_link_loops() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "Oiii.fits");
    fs::create_dir_all(dir.path().join("loop")).unwrap();
    std::os::unix::fs::symlink(dir.path(), dir.path().join("loop/back")).unwrap();

    let t = template(&dir, "${token}.fits");
    let matches = files_matching_template(
        &t,
        &DiscoverOptions {
            max_depth: None,
            follow_links: true,
        },
    )
    .unwrap();

    assert_eq!(relative_paths(&dir, &matches), ["Oiii.fits"]);
}
