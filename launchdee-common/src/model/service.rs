use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric user id. Looked up once at startup and passed to whatever needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uid(pub u32);

impl Uid {
    pub fn current() -> Self {
        // SAFETY: getuid has no preconditions and cannot fail.
        Self(unsafe { libc::getuid() })
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Which launch agents directory a manifest came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    User,
    Global,
}

impl Scope {
    pub const ALL: [Scope; 2] = [Scope::User, Scope::Global];

    pub fn display_name(&self) -> &'static str {
        match self {
            Scope::User => "User",
            Scope::Global => "Global",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Anything that can be handed to `launchctl enable|disable`.
pub trait QualifiedTarget {
    fn label(&self) -> &str;

    fn qualified_target(&self, uid: Uid) -> String {
        format!("user/{uid}/{}", self.label())
    }
}

/// The label is the sole identity of a service within its scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceTarget {
    pub label: String,
}

impl ServiceTarget {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl QualifiedTarget for ServiceTarget {
    fn label(&self) -> &str {
        &self.label
    }
}

/// A label passed to launchctl verbatim, without the `user/<uid>/` domain prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BareLabel(pub String);

impl QualifiedTarget for BareLabel {
    fn label(&self) -> &str {
        &self.0
    }

    fn qualified_target(&self, _uid: Uid) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_target_is_user_domain_qualified() {
        let target = ServiceTarget::new("com.example.agent");
        assert_eq!(target.qualified_target(Uid(501)), "user/501/com.example.agent");
    }

    #[test]
    fn bare_label_is_passed_verbatim() {
        let target = BareLabel("com.example.global".to_string());
        assert_eq!(target.qualified_target(Uid(501)), "com.example.global");
    }
}
