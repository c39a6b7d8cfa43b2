pub const DEFAULT_CLIENTS_BASE: &str = "/clients";

/// Server endpoints for client management. Every path ends with a slash,
/// matching the server's URL configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientRoutes {
    base: String,
}

impl Default for ClientRoutes {
    fn default() -> Self {
        Self::new(DEFAULT_CLIENTS_BASE)
    }
}

impl ClientRoutes {
    pub fn new(base: &str) -> Self {
        let base = base.trim().trim_end_matches('/');
        let base = if base.starts_with('/') || base.is_empty() {
            base.to_string()
        } else {
            format!("/{}", base)
        };
        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn list(&self) -> String {
        format!("{}/", self.base)
    }

    pub fn add(&self) -> String {
        format!("{}/add/", self.base)
    }

    pub fn edit(&self, id: i64) -> String {
        format!("{}/edit/{}/", self.base, id)
    }

    pub fn delete(&self, id: i64) -> String {
        format!("{}/delete/{}/", self.base, id)
    }
}
