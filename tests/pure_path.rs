use flavored_path::{Flavor, PurePath};

#[test]
fn test_construction_and_accessors() {
    let p = PurePath::new(Flavor::Posix, "/usr/lib");
    assert_eq!(p.flavor(), Flavor::Posix);
    assert_eq!(p.as_str(), "/usr/lib");
    assert_eq!(p.to_string(), "/usr/lib");
    assert_eq!(p.clone().into_string(), "/usr/lib");
    let s: &str = p.as_ref();
    assert_eq!(s, "/usr/lib");
}

#[test]
fn test_equality_honors_flavor() {
    assert_eq!(PurePath::posix("a/b"), PurePath::posix("a/b"));
    assert_ne!(PurePath::posix("a/b"), PurePath::windows("a/b"));
    // equality is textual, not semantic
    assert_ne!(PurePath::windows(r"a\b"), PurePath::windows("a/b"));
}

#[test]
fn test_ordering_is_textual() {
    assert!(PurePath::posix("/a") < PurePath::posix("/b"));
    // byte-wise ordering, so a longer path can sort before a sibling
    assert!(PurePath::posix("/a/z") < PurePath::posix("/b"));
    assert!(PurePath::posix("a/b") < PurePath::windows("a/b"));
}

#[test]
fn test_join_method_and_operator() {
    let p = PurePath::posix("/usr").join(["local", "lib"]);
    assert_eq!(p.as_str(), "/usr/local/lib");

    let q = PurePath::windows(r"c:\a").join([r"\b"]);
    assert_eq!(q.as_str(), r"c:\b");

    let r = PurePath::posix("/usr") + "lib";
    assert_eq!(r.as_str(), "/usr/lib");
    assert_eq!(r.flavor(), Flavor::Posix);
}

#[test]
fn test_split_wrappers() {
    let p = PurePath::windows(r"c:\foo\bar.txt");

    let (head, tail) = p.split();
    assert_eq!(head.as_str(), r"c:\foo");
    assert_eq!(tail.as_str(), "bar.txt");
    assert_eq!(head.flavor(), Flavor::Windows);

    let (drive, rest) = p.split_drive();
    assert_eq!(drive.as_str(), "c:");
    assert_eq!(rest.as_str(), r"\foo\bar.txt");

    let (root, ext) = p.split_extension();
    assert_eq!(root.as_str(), r"c:\foo\bar");
    assert_eq!(ext, ".txt");

    assert_eq!(p.base_name(), "bar.txt");
    assert_eq!(p.dir_name().as_str(), r"c:\foo");
}

#[test]
fn test_normalize_and_norm_case() {
    let p = PurePath::windows("C:/a/./b/../c").normalize();
    assert_eq!(p.as_str(), r"C:\a\c");

    let q = PurePath::windows("a/b").norm_case();
    assert_eq!(q.as_str(), r"a\b");

    let r = PurePath::posix("/a/./b/../c").normalize();
    assert_eq!(r.as_str(), "/a/c");
    // posix norm_case is the identity
    assert_eq!(PurePath::posix("A/b").norm_case().as_str(), "A/b");
}

#[test]
fn test_is_absolute() {
    assert!(PurePath::posix("/x").is_absolute());
    assert!(!PurePath::posix("x").is_absolute());
    assert!(PurePath::windows(r"c:\x").is_absolute());
    assert!(!PurePath::windows("c:x").is_absolute());
}

#[test]
fn test_native_matches_platform() {
    let expected = if cfg!(windows) {
        Flavor::Windows
    } else {
        Flavor::Posix
    };
    assert_eq!(PurePath::native("x").flavor(), expected);
    assert_eq!(Flavor::native(), expected);
}

#[cfg(feature = "url")]
#[test]
fn test_to_file_url() {
    let url = PurePath::posix("/usr/lib").to_file_url().unwrap();
    assert_eq!(url.to_string(), "file:///usr/lib");

    let url = PurePath::windows(r"C:\Users\me").to_file_url().unwrap();
    assert_eq!(url.to_string(), "file:///C:/Users/me");

    assert!(PurePath::posix("usr/lib").to_file_url().is_err());
}
