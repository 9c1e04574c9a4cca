use std::fs;
use std::path::{Path, PathBuf};

use launchdee_common::config::{Config, RegistryFallback};
use launchdee_common::model::Uid;

pub(crate) fn plist_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>{body}</dict>
</plist>
"#
    )
}

pub(crate) fn agent_manifest(extra: &str) -> String {
    plist_xml(&format!("<key>Label</key><string>ignored</string>{extra}"))
}

pub(crate) fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[cfg(unix)]
pub(crate) fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = write_file(dir, name, &format!("#!/bin/sh\n{body}"));
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Everything rooted under `root`, uid 501, strict registries.
pub(crate) fn test_config(root: &Path) -> Config {
    Config {
        uid: Uid(501),
        home_dir: root.join("home"),
        launchd_db_dir: root.join("db"),
        user_agents_dir: root.join("home/Library/LaunchAgents"),
        global_agents_dir: root.join("Library/LaunchAgents"),
        launchctl_path: root.join("bin/launchctl"),
        mdfind_path: root.join("bin/mdfind"),
        working_dir: Some(root.to_path_buf()),
        registry_fallback: RegistryFallback::Strict,
    }
}
