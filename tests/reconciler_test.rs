use forge::reconciler::reconcile;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_source_is_a_noop() {
    let temp_dir = TempDir::new().unwrap();
    let dest_root = temp_dir.path().to_path_buf();
    fs::write(dest_root.join("existing.txt"), "untouched").unwrap();

    let nested = dest_root.join("my-blog");
    reconcile(&nested, &dest_root).unwrap();

    assert_eq!(fs::read_to_string(dest_root.join("existing.txt")).unwrap(), "untouched");
}

#[test]
fn test_merge_overwrites_and_deletes_source() {
    let temp_dir = TempDir::new().unwrap();
    let dest_root = temp_dir.path().join("out");
    let nested = dest_root.join("my-blog");
    fs::create_dir_all(nested.join("sub")).unwrap();

    fs::write(dest_root.join("keep.txt"), "keep").unwrap();
    fs::write(dest_root.join("conflict.txt"), "old").unwrap();
    fs::write(nested.join("conflict.txt"), "new").unwrap();
    fs::write(nested.join("sub").join("inner.txt"), "inner").unwrap();

    reconcile(&nested, &dest_root).unwrap();

    let expected = temp_dir.path().join("expected");
    fs::create_dir_all(expected.join("sub")).unwrap();
    fs::write(expected.join("keep.txt"), "keep").unwrap();
    fs::write(expected.join("conflict.txt"), "new").unwrap();
    fs::write(expected.join("sub").join("inner.txt"), "inner").unwrap();

    assert!(!nested.exists());
    assert!(!dir_diff::is_different(&dest_root, &expected).unwrap());
}

#[cfg(unix)]
#[test]
fn test_launcher_scripts_become_executable() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let dest_root = temp_dir.path().join("out");
    let nested = dest_root.join("my-blog");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("gradlew"), "#!/bin/sh\n").unwrap();
    fs::write(nested.join("gradlew.bat"), "@echo off\r\n").unwrap();

    reconcile(&nested, &dest_root).unwrap();

    for name in ["gradlew", "gradlew.bat"] {
        let mode = fs::metadata(dest_root.join(name)).unwrap().permissions().mode();
        assert_ne!(mode & 0o111, 0, "{} should be executable", name);
    }
}

#[cfg(unix)]
#[test]
fn test_absent_launcher_scripts_are_not_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let dest_root = temp_dir.path().join("out");
    let nested = dest_root.join("my-blog");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("plain.txt"), "no launchers here").unwrap();

    reconcile(&nested, &dest_root).unwrap();
    assert!(dest_root.join("plain.txt").is_file());
}
