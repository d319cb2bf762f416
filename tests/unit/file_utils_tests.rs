/*!
 * Tests for discovery and file writing
 */

use anyhow::Result;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use autotranslate::errors::DiscoveryError;
use autotranslate::file_utils::FileManager;
use crate::common;

/// Test that directory crawling keeps only documents with the extension
#[test]
fn test_discover_withMixedDirectory_shouldReturnOnlyMarkdownFiles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let a = common::create_test_file(temp_dir.path(), "a.md", "a")?;
    let b = common::create_test_file(temp_dir.path(), "b.md", "b")?;
    common::create_test_file(temp_dir.path(), "c.txt", "c")?;

    let files = FileManager::discover(&[temp_dir.path()], ".md")?;

    let found: HashSet<PathBuf> = files.into_iter().collect();
    let expected: HashSet<PathBuf> = [a, b].into_iter().collect();
    assert_eq!(found, expected);

    Ok(())
}

/// Test that nested directories are crawled with the root as prefix
#[test]
fn test_discover_withNestedDirectories_shouldRecurse() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "web/api/fetch/index.md", "x")?;
    common::create_test_file(temp_dir.path(), "web/css/index.md", "x")?;
    common::create_test_file(temp_dir.path(), "web/css/notes.mdx", "x")?;

    let files = FileManager::discover(&[temp_dir.path()], ".md")?;

    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|f| f.starts_with(temp_dir.path())));
    assert!(files.contains(&temp_dir.path().join("web/api/fetch/index.md")));

    Ok(())
}

/// Test that explicitly named files bypass the extension filter
#[test]
fn test_discover_withExplicitFile_shouldIncludeRegardlessOfExtension() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let notes = common::create_test_file(temp_dir.path(), "notes.txt", "x")?;

    let files = FileManager::discover(&[notes.clone()], ".md")?;

    assert_eq!(files, vec![notes]);
    Ok(())
}

/// Test that roots are processed in the order supplied
#[test]
fn test_discover_withSeveralFiles_shouldKeepRootOrder() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let second = common::create_test_file(temp_dir.path(), "second.md", "x")?;
    let first = common::create_test_file(temp_dir.path(), "first.md", "x")?;

    let files = FileManager::discover(&[second.clone(), first.clone()], ".md")?;

    assert_eq!(files, vec![second, first]);
    Ok(())
}

/// Test that a file reached twice is only listed once
#[test]
fn test_discover_withOverlappingRoots_shouldNotDuplicate() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let a = common::create_test_file(temp_dir.path(), "a.md", "x")?;

    let files = FileManager::discover(&[a.clone(), temp_dir.path().to_path_buf()], ".md")?;

    assert_eq!(files, vec![a]);
    Ok(())
}

/// Test that a missing root fails the whole discovery
#[test]
fn test_discover_withMissingRoot_shouldFailWithInputNotFound() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let a = common::create_test_file(temp_dir.path(), "a.md", "x")?;
    let missing = temp_dir.path().join("missing");

    let err = FileManager::discover(&[a, missing.clone()], ".md").unwrap_err();

    match err {
        DiscoveryError::InputNotFound { path, .. } => assert_eq!(path, missing),
    }
    Ok(())
}

/// Test that one file reached under two spellings is only listed once
#[test]
fn test_discover_withDifferentSpellingsOfSameFile_shouldNotDuplicate() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "a.md", "x")?;
    fs::create_dir(temp_dir.path().join("sub"))?;
    let dotted = temp_dir.path().join("sub/../a.md");

    let files = FileManager::discover(&[dotted.clone(), temp_dir.path().to_path_buf()], ".md")?;

    assert_eq!(files, vec![dotted]);
    Ok(())
}

/// Test that unreadable directories are skipped while the rest is crawled
#[cfg(unix)]
#[test]
fn test_discover_withUnreadableSubdirectory_shouldSkipIt() -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = common::create_temp_dir()?;
    let readable = common::create_test_file(temp_dir.path(), "a.md", "x")?;
    let hidden = common::create_test_file(temp_dir.path(), "locked/b.md", "x")?;
    let locked = temp_dir.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;
    // Privileged users can still list the directory
    let listable = fs::read_dir(&locked).is_ok();

    let result = FileManager::discover(&[temp_dir.path()], ".md");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;

    let files = result?;
    assert!(files.contains(&readable));
    assert_eq!(files.contains(&hidden), listable);
    Ok(())
}

/// Test that write_atomic replaces content and leaves no temporary files
#[test]
fn test_write_atomic_withExistingFile_shouldReplaceContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(temp_dir.path(), "a.md", "old")?;

    FileManager::write_atomic(&file, "new content")?;

    assert_eq!(FileManager::read_to_string(&file)?, "new content");
    assert_eq!(fs::read_dir(temp_dir.path())?.count(), 1);
    Ok(())
}

/// Test that write_atomic refuses read-only files and keeps their content
#[test]
fn test_write_atomic_withReadOnlyFile_shouldFailAndKeepContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(temp_dir.path(), "a.md", "old")?;
    let mut permissions = fs::metadata(&file)?.permissions();
    permissions.set_readonly(true);
    fs::set_permissions(&file, permissions)?;

    let result = FileManager::write_atomic(&file, "new");

    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&file)?, "old");
    Ok(())
}

/// Test that writing through a symlink updates the target and keeps the link
#[cfg(unix)]
#[test]
fn test_write_atomic_withSymlink_shouldWriteThroughToTarget() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let real = common::create_test_file(temp_dir.path(), "real.md", "old")?;
    let link = temp_dir.path().join("link.md");
    std::os::unix::fs::symlink(&real, &link)?;

    FileManager::write_atomic(&link, "new")?;

    assert!(fs::symlink_metadata(&link)?.file_type().is_symlink());
    assert_eq!(fs::read_to_string(&real)?, "new");
    assert_eq!(fs::read_to_string(&link)?, "new");
    Ok(())
}
