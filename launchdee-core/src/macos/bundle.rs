use std::path::Path;

use plist::Value as PlistValue;
use serde::Serialize;
use tracing::{debug, warn};

/// Identity fields from an application bundle's `Contents/Info.plist`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BundleInfo {
    pub identifier: Option<String>,
    pub name: Option<String>,
}

impl BundleInfo {
    /// `None` when the bundle has no readable Info.plist. Display-only, so failures are logged.
    pub fn read(app_path: &Path) -> Option<Self> {
        let info_plist_path = app_path.join("Contents/Info.plist");
        if !info_plist_path.is_file() {
            debug!("Info.plist not found at {}", info_plist_path.display());
            return None;
        }
        match PlistValue::from_file(&info_plist_path) {
            Ok(PlistValue::Dictionary(dict)) => {
                let field = |key: &str| {
                    dict.get(key)
                        .and_then(PlistValue::as_string)
                        .map(String::from)
                };
                Some(Self {
                    identifier: field("CFBundleIdentifier"),
                    name: field("CFBundleName").or_else(|| field("CFBundleDisplayName")),
                })
            }
            Ok(val) => {
                warn!(
                    "Info.plist at {} is not a dictionary. Value: {:?}",
                    info_plist_path.display(),
                    val
                );
                None
            }
            Err(e) => {
                warn!(
                    "Failed to parse Info.plist at {}: {}",
                    info_plist_path.display(),
                    e
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{plist_xml, write_file};

    #[test]
    fn reads_identifier_and_name() {
        let root = tempfile::tempdir().unwrap();
        let app = root.path().join("Foo.app");
        write_file(
            &app.join("Contents"),
            "Info.plist",
            &plist_xml(
                "<key>CFBundleIdentifier</key><string>com.example.Foo</string>\
                 <key>CFBundleDisplayName</key><string>Foo Display</string>",
            ),
        );

        let info = BundleInfo::read(&app).unwrap();
        assert_eq!(info.identifier.as_deref(), Some("com.example.Foo"));
        assert_eq!(info.name.as_deref(), Some("Foo Display"));
    }

    #[test]
    fn missing_info_plist_is_none() {
        let root = tempfile::tempdir().unwrap();
        assert_eq!(BundleInfo::read(&root.path().join("Bare.app")), None);
    }
}
