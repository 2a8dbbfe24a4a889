//! Conversion of absolute paths to `file://` URLs.

use std::borrow::Cow;
use std::fmt::Write;

use percent_encoding::{percent_encode, AsciiSet, CONTROLS};

use crate::{
    flavor::Flavor,
    windows::{self, parse_drive_exact, SEP},
};

const URL_FRAGMENT: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'<').add(b'>').add(b'`');
const URL_PATH: &AsciiSet = &URL_FRAGMENT.add(b'#').add(b'?').add(b'{').add(b'}');
const URL_PATH_SEGMENT: &AsciiSet = &URL_PATH.add(b'/').add(b'%');

#[derive(thiserror::Error, Debug)]
pub enum PathToUrlError {
    #[error(transparent)]
    UrlParseError(#[from] url::ParseError),
    #[error("PathNotAbsoluteError {{ path = {path} }}")]
    PathNotAbsoluteError { path: Cow<'static, str> },
    #[error("NotSupportedPrefixError {{ path = {path}, prefix = {prefix} }}")]
    NotSupportedPrefixError {
        path: Cow<'static, str>,
        prefix: Cow<'static, str>,
    },
}

/// Turns an absolute path of the given flavor into a `file://` URL.
pub fn to_file_url(flavor: Flavor, path: &str) -> Result<url::Url, PathToUrlError> {
    let serialization = match flavor {
        Flavor::Posix => posix_file_url(path)?,
        Flavor::Windows => windows_file_url(path)?,
    };
    Ok(url::Url::parse(&serialization)?)
}

fn not_absolute(path: &str) -> PathToUrlError {
    PathToUrlError::PathNotAbsoluteError {
        path: Cow::Owned(path.to_string()),
    }
}

fn not_supported(path: &str, prefix: &str) -> PathToUrlError {
    PathToUrlError::NotSupportedPrefixError {
        path: Cow::Owned(path.to_string()),
        prefix: Cow::Owned(prefix.to_string()),
    }
}

fn posix_file_url(path: &str) -> Result<String, PathToUrlError> {
    if !path.starts_with('/') {
        return Err(not_absolute(path));
    }
    let mut serialization = String::from("file://");
    let mut empty = true;
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        empty = false;
        serialization.push('/');
        serialization.extend(percent_encode(segment.as_bytes(), URL_PATH_SEGMENT));
    }
    if empty {
        serialization.push('/');
    }
    Ok(serialization)
}

fn windows_file_url(path: &str) -> Result<String, PathToUrlError> {
    if !windows::is_absolute(path) {
        return Err(not_absolute(path));
    }
    let normed = windows::norm_case(path);
    let normed = normed.as_ref();

    let mut serialization = String::from("file://");

    if let Some(verbatim) = normed.strip_prefix(r"\\?\") {
        if let Some(unc) = verbatim.strip_prefix(r"UNC\") {
            push_unc(&mut serialization, unc)?;
        } else if parse_drive_exact(verbatim).is_ok() {
            push_disk(&mut serialization, verbatim);
        } else {
            return Err(not_supported(path, r"\\?\"));
        }
        return Ok(serialization);
    }
    if normed.starts_with(r"\\.\") {
        return Err(not_supported(path, r"\\.\"));
    }

    let (drive, rest) = windows::split_drive(normed);
    if drive.ends_with(':') {
        push_disk(&mut serialization, normed);
    } else if let Some(unc) = drive.strip_prefix(r"\\") {
        let (server, share) = unc.split_once(SEP).unwrap_or((unc, ""));
        let host = url::Host::parse(server)?;
        write!(serialization, "{}", host).map_err(|_| url::ParseError::Overflow)?;
        serialization.push('/');
        serialization.extend(percent_encode(share.as_bytes(), URL_PATH_SEGMENT));
        push_segments(&mut serialization, rest);
    } else {
        return Err(not_absolute(path));
    }
    Ok(serialization)
}

// `unc` is `server\share\...` with the leading `\\` (and any `UNC\`)
// already stripped.
fn push_unc(serialization: &mut String, unc: &str) -> Result<(), PathToUrlError> {
    let (server, rest) = unc.split_once(SEP).unwrap_or((unc, ""));
    let host = url::Host::parse(server)?;
    write!(serialization, "{}", host).map_err(|_| url::ParseError::Overflow)?;
    push_segments(serialization, rest);
    Ok(())
}

// `disk` starts with a `X:` drive; a drive with nothing after it still gets
// a trailing slash.
fn push_disk(serialization: &mut String, disk: &str) {
    let (drive, rest) = disk.split_at(2);
    serialization.push('/');
    serialization.push_str(drive);
    if rest.chars().all(windows::is_sep) {
        serialization.push('/');
    } else {
        push_segments(serialization, rest);
    }
}

fn push_segments(serialization: &mut String, rest: &str) {
    for segment in rest.split(SEP).filter(|s| !s.is_empty()) {
        serialization.push('/');
        serialization.extend(percent_encode(segment.as_bytes(), URL_PATH_SEGMENT));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url_of(flavor: Flavor, path: &str) -> String {
        to_file_url(flavor, path).unwrap().to_string()
    }

    #[test]
    fn test_posix_file_url() {
        assert_eq!(url_of(Flavor::Posix, "/"), "file:///");
        assert_eq!(url_of(Flavor::Posix, "/usr/lib"), "file:///usr/lib");
        assert_eq!(url_of(Flavor::Posix, "/a b"), "file:///a%20b");
        assert!(matches!(
            to_file_url(Flavor::Posix, "usr/lib"),
            Err(PathToUrlError::PathNotAbsoluteError { .. })
        ));
    }

    #[test]
    fn test_windows_file_url() {
        assert_eq!(url_of(Flavor::Windows, r"C:\path"), "file:///C:/path");
        assert_eq!(url_of(Flavor::Windows, r"C:\"), "file:///C:/");
        assert_eq!(url_of(Flavor::Windows, "C:/a/b"), "file:///C:/a/b");
        assert_eq!(
            url_of(Flavor::Windows, r"\\server\share\path"),
            "file://server/share/path"
        );
        assert_eq!(
            url_of(Flavor::Windows, r"\\?\C:\path"),
            "file:///C:/path"
        );
        assert_eq!(
            url_of(Flavor::Windows, r"\\?\UNC\server\share\path"),
            "file://server/share/path"
        );
    }

    #[test]
    fn test_windows_unsupported_prefixes() {
        assert!(matches!(
            to_file_url(Flavor::Windows, r"\\?\abc\path"),
            Err(PathToUrlError::NotSupportedPrefixError { .. })
        ));
        assert!(matches!(
            to_file_url(Flavor::Windows, r"\\.\device\path"),
            Err(PathToUrlError::NotSupportedPrefixError { .. })
        ));
        assert!(matches!(
            to_file_url(Flavor::Windows, r"relative\path"),
            Err(PathToUrlError::PathNotAbsoluteError { .. })
        ));
    }
}
