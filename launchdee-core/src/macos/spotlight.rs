use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, warn};

/// Finds the installed application for a bundle identifier.
pub trait AppLocator {
    fn locate(&self, bundle_id: &str) -> Option<PathBuf>;
}

/// Asks Spotlight (`mdfind`) for the bundle and takes the first hit that exists on disk.
#[derive(Debug, Clone)]
pub struct SpotlightLocator {
    mdfind: PathBuf,
}

impl SpotlightLocator {
    pub fn new(mdfind: impl Into<PathBuf>) -> Self {
        Self {
            mdfind: mdfind.into(),
        }
    }
}

impl AppLocator for SpotlightLocator {
    fn locate(&self, bundle_id: &str) -> Option<PathBuf> {
        // Quotes would break out of the query string.
        if bundle_id.contains(['\'', '"', '\\']) {
            warn!("Refusing to query Spotlight for bundle id {:?}", bundle_id);
            return None;
        }
        let query = format!("kMDItemCFBundleIdentifier == '{bundle_id}'");
        debug!("Running {} {}", self.mdfind.display(), query);

        let output = match Command::new(&self.mdfind)
            .arg(&query)
            .stdin(Stdio::null())
            .stderr(Stdio::piped())
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                warn!("Failed to execute {}: {}", self.mdfind.display(), e);
                return None;
            }
        };
        if !output.status.success() {
            debug!(
                "mdfind for {} failed ({}): {}",
                bundle_id,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return None;
        }

        first_existing_path(&String::from_utf8_lossy(&output.stdout))
    }
}

fn first_existing_path(stdout: &str) -> Option<PathBuf> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Path::new)
        .find(|path| path.exists())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn picks_first_line_that_exists() {
        let root = tempfile::tempdir().unwrap();
        let app = root.path().join("Foo.app");
        fs::create_dir(&app).unwrap();
        let stdout = format!("/nonexistent/Foo.app\n\n{}\n", app.display());
        assert_eq!(first_existing_path(&stdout), Some(app));
        assert_eq!(first_existing_path(""), None);
    }

    #[cfg(unix)]
    #[test]
    fn locator_runs_mdfind_and_reads_stdout() {
        let root = tempfile::tempdir().unwrap();
        let app = root.path().join("Foo.app");
        fs::create_dir(&app).unwrap();
        let script = crate::test_support::write_script(
            root.path(),
            "mdfind",
            &format!("echo '{}'\n", app.display()),
        );

        let locator = SpotlightLocator::new(script);
        assert_eq!(locator.locate("com.example.Foo"), Some(app));
        assert_eq!(locator.locate("com.example.'quoted"), None);
    }
}
