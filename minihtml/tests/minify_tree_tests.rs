#![allow(clippy::unwrap_used)]
//! Integration tests for `minihtml::minify_tree`.

use std::fs;
use std::path::{Path, PathBuf};

use minihtml::{MinifyConfig, MinifyError, minify_tree};
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &[u8]) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

fn run(root: &Path) -> (minihtml::Result<minihtml::MinifyReport>, String) {
    let mut progress = Vec::new();
    let result = minify_tree(root, &MinifyConfig::default(), &mut progress);
    (result, String::from_utf8(progress).unwrap())
}

const PAGE: &str = "<html>\n  <head>\n    <script src=\"app.js\"></script>\n    \
<link href='style.css' rel='stylesheet'>\n  </head>\n  <body>\n    \
<a href=\"other.htm\">  Other  </a>\n  </body>\n</html>\n";

const PAGE_MIN: &str = "<html><head><script src=\"app.js-min\"></script>\
<link href='style.css-min' rel='stylesheet'></head><body>\
<a href=\"other.html\">Other</a></body></html>";

#[test]
fn test_rewrites_pages_recursively() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let top = write(root, "index.html", PAGE.as_bytes());
    let nested = write(root, "blog/2024/post.html", PAGE.as_bytes());

    let (result, _) = run(root);
    let report = result.unwrap();

    assert_eq!(report.processed_files, 2);
    assert_eq!(fs::read_to_string(top).unwrap(), PAGE_MIN);
    assert_eq!(fs::read_to_string(nested).unwrap(), PAGE_MIN);
    assert_eq!(report.bytes_after, 2 * PAGE_MIN.len() as u64);
    assert!(report.bytes_saved() > 0);
}

#[test]
fn test_progress_line_per_page() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let a = write(root, "a.html", b"<p> a </p>");
    let b = write(root, "z/b.html", b"<p> b </p>");

    let (result, progress) = run(root);
    result.unwrap();

    let expected = format!(
        "Processing {}...\nProcessing {}...\n",
        a.display(),
        b.display()
    );
    assert_eq!(progress, expected);
}

#[test]
fn test_other_files_untouched_byte_for_byte() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let originals: Vec<(PathBuf, &[u8])> = vec![
        (write(root, "legacy.htm", PAGE.as_bytes()), PAGE.as_bytes()),
        (write(root, "UPPER.HTML", PAGE.as_bytes()), PAGE.as_bytes()),
        (write(root, "app.js", b"load('x.js');  \n"), &b"load('x.js');  \n"[..]),
        (write(root, "bin/blob.dat", b"\xff\xfe > \n <"), &b"\xff\xfe > \n <"[..]),
    ];
    write(root, "page.html", PAGE.as_bytes());

    let (result, progress) = run(root);
    assert_eq!(result.unwrap().processed_files, 1);
    assert_eq!(progress.lines().count(), 1);

    for (path, bytes) in originals {
        assert_eq!(fs::read(&path).unwrap(), bytes, "{} changed", path.display());
    }
}

#[test]
fn test_second_run_is_noop() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let page = write(root, "index.html", PAGE.as_bytes());

    run(root).0.unwrap();
    let report = run(root).0.unwrap();

    assert_eq!(fs::read_to_string(page).unwrap(), PAGE_MIN);
    assert_eq!(report.bytes_saved(), 0);
    assert_eq!(report.bytes_before, report.bytes_after);
}

#[test]
fn test_empty_tree_reports_nothing() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("empty/dirs")).unwrap();

    let (result, progress) = run(tmp.path());
    let report = result.unwrap();
    assert_eq!(report.processed_files, 0);
    assert!(report.files.is_empty());
    assert!(progress.is_empty());
}

#[test]
fn test_missing_root_errors() {
    let tmp = TempDir::new().unwrap();
    let (result, progress) = run(&tmp.path().join("nope"));
    let err = result.unwrap_err();
    assert!(matches!(err, MinifyError::MissingRoot(_)), "got: {err}");
    assert!(err.to_string().contains("does not exist"), "got: {err}");
    assert!(progress.is_empty());
}

#[test]
fn test_bad_page_aborts_the_walk() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let first = write(root, "a.html", b"<p> first </p>");
    let bad = write(root, "b.html", b"<p>\xe9</p>");
    let last = write(root, "c.html", b"<p> last </p>");

    let (result, progress) = run(root);
    let err = result.unwrap_err();

    assert!(matches!(err, MinifyError::InvalidEncoding { .. }), "got: {err}");
    assert_eq!(err.path(), Some(bad.as_path()));
    // already rewritten pages stay rewritten, later pages are not touched
    assert_eq!(fs::read_to_string(first).unwrap(), "<p>first</p>");
    assert_eq!(fs::read_to_string(last).unwrap(), "<p> last </p>");
    assert_eq!(progress.lines().count(), 2);
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory_aborts_the_walk() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write(root, "locked/inner.html", b"<p> x </p>");
    let locked = root.join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // root ignores permission bits; nothing to assert there
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let (result, _) = run(root);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    let err = result.unwrap_err();
    assert!(matches!(err, MinifyError::Walk(_)), "got: {err}");
}

#[test]
fn test_root_may_be_a_single_page() {
    let tmp = TempDir::new().unwrap();
    let page = write(tmp.path(), "solo.html", b"<b> solo </b>\n");

    let (result, progress) = run(&page);
    assert_eq!(result.unwrap().processed_files, 1);
    assert_eq!(progress, format!("Processing {}...\n", page.display()));
    assert_eq!(fs::read_to_string(page).unwrap(), "<b>solo</b>");
}
