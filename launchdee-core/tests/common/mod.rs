#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use launchdee_common::config::{Config, RegistryFallback};
use launchdee_common::model::Uid;
use tempfile::TempDir;

/// A fake machine: launchd db, both agents dirs and an Applications folder under one tempdir.
pub struct Fixture {
    pub root: TempDir,
    pub config: Config,
}

impl Fixture {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("tempdir");
        let base = root.path();
        let config = Config {
            uid: Uid(501),
            home_dir: base.join("Users/tester"),
            launchd_db_dir: base.join("var/db/com.apple.xpc.launchd"),
            user_agents_dir: base.join("Users/tester/Library/LaunchAgents"),
            global_agents_dir: base.join("Library/LaunchAgents"),
            launchctl_path: base.join("bin/launchctl"),
            mdfind_path: base.join("bin/mdfind"),
            working_dir: Some(base.to_path_buf()),
            registry_fallback: RegistryFallback::Strict,
        };
        Self { root, config }
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.path().join(rel)
    }

    pub fn overrides(&self, entries: &[(&str, bool)]) {
        let body: String = entries
            .iter()
            .map(|(label, disabled)| {
                format!(
                    "<key>{label}</key>{}",
                    if *disabled { "<true/>" } else { "<false/>" }
                )
            })
            .collect();
        write(&self.config.override_registry_path(), &plist(&body));
    }

    pub fn login_items(&self, entries: &[(&str, &str)]) {
        let body: String = entries
            .iter()
            .map(|(label, id)| format!("<key>{label}</key><string>{id}</string>"))
            .collect();
        write(&self.config.login_items_registry_path(), &plist(&body));
    }

    pub fn user_agent(&self, label: &str, body: &str) -> PathBuf {
        let path = self.config.user_agents_dir.join(format!("{label}.plist"));
        write(&path, &plist(body));
        path
    }

    pub fn global_agent(&self, label: &str, body: &str) -> PathBuf {
        let path = self.config.global_agents_dir.join(format!("{label}.plist"));
        write(&path, &plist(body));
        path
    }

    pub fn executable(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        write(&path, "#!/bin/sh\n");
        path
    }
}

pub fn plist(body: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<plist version=\"1.0\"><dict>{body}</dict></plist>\n"
    )
}

pub fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(path, contents).expect("write");
}
