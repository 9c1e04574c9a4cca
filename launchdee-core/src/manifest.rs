// launchdee-core/src/manifest.rs
//! Reads a single launchd property list into a string-keyed document.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use launchdee_common::error::{LaunchdeeError, Result};
use plist::{Dictionary, Value};
use tracing::{debug, warn};

/// Manifest keys this tool understands. Everything else is ignored.
pub mod keys {
    pub const RUN_AT_LOAD: &str = "RunAtLoad";
    pub const PROGRAM: &str = "Program";
    pub const PROGRAM_ARGUMENTS: &str = "ProgramArguments";
    pub const DISABLED: &str = "Disabled";
}

#[derive(Debug, Clone)]
pub struct ManifestDocument {
    path: PathBuf,
    entries: Dictionary,
}

impl ManifestDocument {
    pub fn new(path: impl Into<PathBuf>, entries: Dictionary) -> Self {
        Self {
            path: path.into(),
            entries,
        }
    }

    pub fn bool(&self, key: &str) -> Option<bool> {
        let value = self.entries.get(key)?;
        let b = value.as_boolean();
        if b.is_none() {
            self.wrong_type(key, "boolean", value);
        }
        b
    }

    pub fn string(&self, key: &str) -> Option<&str> {
        let value = self.entries.get(key)?;
        let s = value.as_string();
        if s.is_none() {
            self.wrong_type(key, "string", value);
        }
        s
    }

    /// An array of strings. Any non-string element makes the whole key absent.
    pub fn string_list(&self, key: &str) -> Option<Vec<String>> {
        let value = self.entries.get(key)?;
        let list = value.as_array().and_then(|items| {
            items
                .iter()
                .map(|item| item.as_string().map(String::from))
                .collect::<Option<Vec<_>>>()
        });
        if list.is_none() {
            self.wrong_type(key, "array of strings", value);
        }
        list
    }

    fn wrong_type(&self, key: &str, expected: &str, found: &Value) {
        warn!(
            "{}: key {} is not a {} ({:?}), treating it as absent",
            self.path.display(),
            key,
            expected,
            found
        );
    }
}

/// Opens and parses a property list whose root must be a dictionary.
///
/// Every failure (missing, unreadable, malformed, wrong root type) is a `Parse` error so that
/// enumerators can skip just this one file.
pub fn read_manifest(path: &Path) -> Result<ManifestDocument> {
    debug!("Reading manifest {}", path.display());
    let dict = read_plist_dictionary(path).map_err(|reason| LaunchdeeError::parse(path, reason))?;
    Ok(ManifestDocument::new(path, dict))
}

/// Shared by the manifest reader and the registries. The error is a human-readable reason;
/// callers decide which error variant it becomes.
pub(crate) fn read_plist_dictionary(path: &Path) -> std::result::Result<Dictionary, String> {
    let file = File::open(path).map_err(|e| e.to_string())?;
    match Value::from_reader(BufReader::new(file)) {
        Ok(Value::Dictionary(dict)) => Ok(dict),
        Ok(_) => Err("root element is not a dictionary".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::test_support::{plist_xml, write_file};

    #[test]
    fn reads_recognized_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "com.example.agent.plist",
            &plist_xml(
                "<key>Label</key><string>com.example.agent</string>\
                 <key>RunAtLoad</key><true/>\
                 <key>ProgramArguments</key><array><string>/bin/sh</string><string>-c</string></array>\
                 <key>Disabled</key><false/>",
            ),
        );

        let doc = read_manifest(&path).unwrap();
        assert_eq!(doc.bool(keys::RUN_AT_LOAD), Some(true));
        assert_eq!(doc.bool(keys::DISABLED), Some(false));
        assert_eq!(doc.string(keys::PROGRAM), None);
        assert_eq!(
            doc.string_list(keys::PROGRAM_ARGUMENTS),
            Some(vec!["/bin/sh".to_string(), "-c".to_string()])
        );
    }

    #[test]
    fn wrong_value_types_read_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "odd.plist",
            &plist_xml(
                "<key>Disabled</key><string>yes</string>\
                 <key>Program</key><integer>4</integer>\
                 <key>ProgramArguments</key><array><string>/bin/sh</string><integer>1</integer></array>",
            ),
        );

        let doc = read_manifest(&path).unwrap();
        assert_eq!(doc.bool(keys::DISABLED), None);
        assert_eq!(doc.string(keys::PROGRAM), None);
        assert_eq!(doc.string_list(keys::PROGRAM_ARGUMENTS), None);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "broken.plist", "<plist><dict><key>oops");
        let err = read_manifest(&path).unwrap_err();
        assert!(matches!(err, LaunchdeeError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_manifest(&dir.path().join("absent.plist")).unwrap_err();
        match err {
            LaunchdeeError::Parse { path, .. } => assert!(path.ends_with("absent.plist")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_dictionary_root_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("array.plist");
        fs::write(
            &path,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<plist version="1.0"><array><string>x</string></array></plist>"#,
        )
        .unwrap();
        let err = read_manifest(&path).unwrap_err();
        assert!(err.to_string().contains("not a dictionary"));
    }
}
