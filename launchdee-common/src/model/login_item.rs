use serde::Serialize;

use super::service::{QualifiedTarget, ServiceTarget};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginItem {
    #[serde(flatten)]
    pub service: ServiceTarget,
    /// Bundle identifier, absent when the registry held a numeric placeholder.
    pub app_identifier: Option<String>,
    pub disabled_by_override: bool,
    pub effective_enabled: bool,
}

impl QualifiedTarget for LoginItem {
    fn label(&self) -> &str {
        &self.service.label
    }
}
