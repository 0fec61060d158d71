use lifeline_core::*;
use std::path::PathBuf;

#[test]
fn test_resolve_workspace_path_explicit_wins() {
    let resolved = resolve_workspace_path(Some("/explicit/data")).unwrap();
    assert_eq!(resolved, PathBuf::from("/explicit/data"));
}

#[test]
fn test_resolve_workspace_path_default_is_lifeline_dir() {
    if std::env::var(lifeline_core::path::PATH_ENV).is_ok() {
        return;
    }
    let resolved = resolve_workspace_path(None).unwrap();
    let name = resolved.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name == "lifeline" || name == ".lifeline", "got {}", name);
}

#[test]
fn test_expand_tilde_leaves_plain_paths_alone() {
    assert_eq!(expand_tilde("/tmp/card"), PathBuf::from("/tmp/card"));
    assert_eq!(expand_tilde("relative/dir"), PathBuf::from("relative/dir"));
}

#[test]
fn test_expand_tilde_uses_home() {
    let Some(home) = std::env::var_os("HOME") else {
        return;
    };
    assert_eq!(expand_tilde("~/cards"), PathBuf::from(home).join("cards"));
}

#[test]
fn test_resolved_dir_is_creatable() {
    let temp = tempfile::TempDir::new().unwrap();
    let target = temp.path().join("nested").join("lifeline");
    let resolved = resolve_workspace_path(Some(target.to_str().unwrap())).unwrap();
    std::fs::create_dir_all(&resolved).unwrap();
    assert!(resolved.is_dir());
}
