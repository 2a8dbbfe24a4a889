use flavored_path::{os, probe, SystemProbe};

fn temp_path(dir: &tempfile::TempDir, name: &str) -> String {
    dir.path().join(name).to_str().unwrap().to_string()
}

#[test]
fn test_probe_queries() {
    let dir = tempfile::tempdir().unwrap();
    let file = temp_path(&dir, "data.txt");
    std::fs::write(&file, b"hello").unwrap();
    let p = SystemProbe;

    assert!(probe::exists(&p, &file));
    assert!(probe::is_file(&p, &file));
    assert!(!probe::is_dir(&p, &file));
    assert!(!probe::is_symlink(&p, &file));
    assert_eq!(probe::size(&p, &file), Some(5));
    assert!(probe::modified(&p, &file).is_some());

    let dir_path = dir.path().to_str().unwrap();
    assert!(probe::is_dir(&p, dir_path));
    assert!(!probe::is_file(&p, dir_path));

    let missing = temp_path(&dir, "missing");
    assert!(!probe::exists(&p, &missing));
    assert!(!probe::lexists(&p, &missing));
    assert_eq!(probe::size(&p, &missing), None);
    assert_eq!(probe::modified(&p, &missing), None);
}

#[test]
fn test_same_file() {
    let dir = tempfile::tempdir().unwrap();
    let a = temp_path(&dir, "a");
    let b = temp_path(&dir, "b");
    std::fs::write(&a, b"x").unwrap();
    std::fs::write(&b, b"x").unwrap();
    let p = SystemProbe;

    if cfg!(unix) {
        assert!(probe::same_file(&p, &a, &a));
        assert!(!probe::same_file(&p, &a, &b));
        os::hard_link(&a, &temp_path(&dir, "a2")).unwrap();
        assert!(probe::same_file(&p, &a, &temp_path(&dir, "a2")));
    }
}

#[test]
fn test_create_and_remove() {
    let dir = tempfile::tempdir().unwrap();
    let p = SystemProbe;

    let file = temp_path(&dir, "f");
    os::create_file(&file).unwrap();
    assert!(probe::is_file(&p, &file));
    os::remove(&file).unwrap();
    assert!(!probe::exists(&p, &file));

    let nested = temp_path(&dir, "a/b/c");
    os::make_dirs(&nested).unwrap();
    assert!(probe::is_dir(&p, &nested));
    // remove takes the whole tree
    os::remove(&temp_path(&dir, "a")).unwrap();
    assert!(!probe::exists(&p, &temp_path(&dir, "a")));

    let err = os::remove(&temp_path(&dir, "nothing")).unwrap_err();
    assert_eq!(err.op, "remove");
}

#[test]
fn test_make_dir_requires_parent() {
    let dir = tempfile::tempdir().unwrap();
    assert!(os::make_dir(&temp_path(&dir, "x/y")).is_err());
    os::make_dir(&temp_path(&dir, "x")).unwrap();
    os::make_dir(&temp_path(&dir, "x/y")).unwrap();
}

#[test]
fn test_copy_and_rename() {
    let dir = tempfile::tempdir().unwrap();
    let p = SystemProbe;

    let src = temp_path(&dir, "src");
    std::fs::write(&src, b"payload").unwrap();

    let copy = temp_path(&dir, "copy");
    assert_eq!(os::copy_file(&src, &copy).unwrap(), 7);
    assert_eq!(std::fs::read(&copy).unwrap(), b"payload");

    let moved = temp_path(&dir, "moved");
    os::rename(&copy, &moved).unwrap();
    assert!(!probe::exists(&p, &copy));
    assert!(probe::is_file(&p, &moved));
}

#[cfg(unix)]
#[test]
fn test_symlinks() {
    use flavored_path::{resolve, Flavor, SystemEnv};

    let dir = tempfile::tempdir().unwrap();
    let p = SystemProbe;

    let target = temp_path(&dir, "target");
    std::fs::write(&target, b"x").unwrap();
    let link = temp_path(&dir, "link");
    os::symlink(&target, &link).unwrap();

    assert!(probe::is_symlink(&p, &link));
    assert!(probe::exists(&p, &link));
    assert!(probe::same_file(&p, &link, &target));

    let env = SystemEnv;
    let resolved = resolve::canonicalize(Flavor::Posix, &link, &env, &p);
    let expected = resolve::canonicalize(Flavor::Posix, &target, &env, &p);
    assert_eq!(resolved, expected);

    // a dangling link still "lexists"
    std::fs::remove_file(&target).unwrap();
    assert!(!probe::exists(&p, &link));
    assert!(probe::lexists(&p, &link));
    assert!(probe::is_symlink(&p, &link));
}

#[test]
fn test_mutation_error_reports_op_and_path() {
    let err = os::make_dir("/definitely/not/a/real/parent/dir").unwrap_err();
    assert_eq!(err.op, "mkdir");
    assert!(err.to_string().contains("mkdir"));
    assert!(err.to_string().contains("/definitely/not/a/real/parent/dir"));
}
