//! End-to-end tests: scan a real directory tree, then generate batches.

use repo_bench::{
    ContentCatalog, DataProvider, FsDirectoryLister, GuessingMimeResolver, PropertySet,
    RepositoryProfile,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const PROPERTY_SET: &str = r#"
version: 1

properties:
  - name: title
    kind: text
    restrictions:
      min_length: 5
      max_length: 5

  - name: description
    kind: text

  - name: attachment
    kind: content
"#;

/// Two roots: `a` with 2 files, `b` with 1 file plus 1 file hidden under
/// an excluded `svn` directory.
fn fixture_tree() -> (TempDir, Vec<PathBuf>) {
    let temp = TempDir::new().unwrap();

    let a = temp.path().join("a");
    fs::create_dir_all(&a).unwrap();
    fs::write(a.join("report.pdf"), b"%PDF-1.4").unwrap();
    fs::write(a.join("notes.txt"), b"meeting notes").unwrap();

    let b = temp.path().join("b");
    let svn = b.join("svn");
    fs::create_dir_all(&svn).unwrap();
    fs::write(svn.join("pristine.txt"), b"excluded").unwrap();
    fs::write(b.join("photo.jpg"), b"\xff\xd8\xff\xe0").unwrap();

    (temp, vec![a, b])
}

#[test]
fn scan_and_generate() {
    let (_temp, roots) = fixture_tree();

    let catalog = ContentCatalog::scan(&roots, &FsDirectoryLister, &GuessingMimeResolver).unwrap();
    assert_eq!(catalog.len(), 3);

    let paths: Vec<String> = catalog.items().iter().map(|i| i.path.clone()).collect();
    let set = PropertySet::from_yaml(PROPERTY_SET).unwrap();
    let provider = DataProvider::seeded(catalog, 42);

    for _ in 0..20 {
        let result = provider
            .get_property_data(&RepositoryProfile::default(), &set.properties)
            .unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(result["title"].as_text().unwrap().chars().count(), 5);

        let description = result["description"].as_text().unwrap();
        assert!((5..=35).contains(&description.chars().count()));
        assert!(description
            .chars()
            .all(|c| c == ' ' || c.is_ascii_alphabetic()));

        let attachment = result["attachment"].as_content().unwrap();
        assert!(paths.contains(&attachment.path));
        assert_eq!(attachment.encoding, "UTF-8");
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let (_temp, roots) = fixture_tree();
    let set = PropertySet::from_yaml(PROPERTY_SET).unwrap();

    let catalog = ContentCatalog::scan(&roots, &FsDirectoryLister, &GuessingMimeResolver).unwrap();
    let provider1 = DataProvider::seeded(catalog.clone(), 7);
    let provider2 = DataProvider::seeded(catalog, 7);

    for _ in 0..5 {
        let result1 = provider1
            .get_property_data(&RepositoryProfile::default(), &set.properties)
            .unwrap();
        let result2 = provider2
            .get_property_data(&RepositoryProfile::default(), &set.properties)
            .unwrap();
        assert_eq!(result1, result2);
    }
}

#[test]
fn missing_root_fails_before_any_generation() {
    let (temp, mut roots) = fixture_tree();
    roots.push(temp.path().join("does-not-exist"));

    let result = ContentCatalog::scan(&roots, &FsDirectoryLister, &GuessingMimeResolver);
    assert!(result.is_err());
}
