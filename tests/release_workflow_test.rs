//! Workflow-level tests over in-memory collaborators.

use git_release::config::{Config, FilesConfig};
use git_release::git::MockRepository;
use git_release::project::{MemoryStore, ProjectFiles};
use git_release::release::{run_release, ReleaseOutcome};
use git_release::version::{Part, Version};
use git_release::ReleaseError;

const METADATA: &str = "\
name: demo-project
release-version: 1.2.3
license: MIT
";

const MANIFEST: &str = "\
{
  \"name\": \"demo\",
  \"version\": \"1.2.3\",
  \"scripts\": {
    \"build\": \"make\"
  }
}
";

fn project() -> ProjectFiles<MemoryStore> {
    let store = MemoryStore::new();
    store.insert("project.yaml", METADATA);
    store.insert("package.json", MANIFEST);
    ProjectFiles::new("", &FilesConfig::default(), store)
}

#[test]
fn test_patch_release_end_to_end() {
    let files = project();
    let repo = MockRepository::clean();

    let outcome = run_release(
        Part::Patch,
        &Config::default(),
        &files,
        &repo,
        |current, next| {
            assert_eq!(*current, Version::new(1, 2, 3));
            assert_eq!(*next, Version::new(1, 2, 4));
            Ok(true)
        },
    )
    .unwrap();

    match outcome {
        ReleaseOutcome::Completed(summary) => {
            assert_eq!(summary.previous, Version::new(1, 2, 3));
            assert_eq!(summary.released, Version::new(1, 2, 4));
            assert_eq!(summary.tag, "v1.2.4");
        }
        other => panic!("expected completion, got {:?}", other),
    }

    // Exactly the two files were staged, then one commit and one tag
    assert_eq!(repo.staged(), vec!["project.yaml", "package.json"]);
    assert_eq!(repo.commits(), vec!["Release v1.2.4"]);
    assert_eq!(repo.tags(), vec!["v1.2.4"]);

    // The new version landed in both files
    assert_eq!(files.read_version().unwrap(), Version::new(1, 2, 4));
}

#[test]
fn test_release_preserves_file_content_outside_the_version() {
    let files = project();
    let repo = MockRepository::clean();

    run_release(
        Part::Minor,
        &Config::default(),
        &files,
        &repo,
        |_, _| Ok(true),
    )
    .unwrap();

    // Every byte except the version digits is unchanged
    assert_eq!(
        files.store().contents("project.yaml").unwrap(),
        METADATA.replace("1.2.3", "1.3.0")
    );
    assert_eq!(
        files.store().contents("package.json").unwrap(),
        MANIFEST.replace("1.2.3", "1.3.0")
    );
}

#[test]
fn test_dirty_workspace_aborts_with_file_list() {
    let files = project();
    let repo = MockRepository::dirty(&["package.json", "notes.txt"]);

    let err = run_release(
        Part::Patch,
        &Config::default(),
        &files,
        &repo,
        |_, _| Ok(true),
    )
    .unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("uncommitted changes"));
    assert!(msg.contains("package.json"));
    assert!(msg.contains("notes.txt"));

    // Nothing was read, written, committed or tagged
    assert_eq!(files.read_version().unwrap(), Version::new(1, 2, 3));
    assert!(repo.staged().is_empty());
    assert!(repo.commits().is_empty());
    assert!(repo.tags().is_empty());
}

#[test]
fn test_cancellation_is_not_an_error() {
    let files = project();
    let repo = MockRepository::clean();

    let outcome = run_release(
        Part::Major,
        &Config::default(),
        &files,
        &repo,
        |_, _| Ok(false),
    )
    .unwrap();

    assert_eq!(outcome, ReleaseOutcome::Cancelled);
    assert_eq!(files.read_version().unwrap(), Version::new(1, 2, 3));
    assert!(repo.commits().is_empty());
}

#[test]
fn test_missing_metadata_file() {
    let store = MemoryStore::new();
    store.insert("package.json", MANIFEST);
    let files = ProjectFiles::new("", &FilesConfig::default(), store);
    let repo = MockRepository::clean();

    let err = run_release(
        Part::Patch,
        &Config::default(),
        &files,
        &repo,
        |_, _| Ok(true),
    )
    .unwrap_err();

    assert!(matches!(err, ReleaseError::MissingFile(_)));
}

#[test]
fn test_strict_version_grammar() {
    for bad in ["1.2", "1.2.3.4", "1.2.x", "v1.2.3"] {
        let err = Version::parse(bad).unwrap_err();
        assert!(
            matches!(err, ReleaseError::InvalidVersion(_)),
            "'{}' should fail strict parsing",
            bad
        );
    }
}

#[test]
fn test_increment_kind_validation() {
    let err = "release".parse::<Part>().unwrap_err();
    assert!(matches!(err, ReleaseError::InvalidPart(_)));
}

#[test]
fn test_version_roundtrip_property() {
    for major in [0u32, 1, 7, 120] {
        for minor in [0u32, 9, 10] {
            for patch in [0u32, 1, 99] {
                let v = Version::new(major, minor, patch);
                assert_eq!(Version::parse(&v.to_string()).unwrap(), v);
            }
        }
    }
}
