//! Test-only decision context shared by the core integration tests.

#![allow(dead_code)]
#![allow(clippy::unwrap_used)]

use serde::Deserialize;

use mediaguard_core::Principal;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TestUser {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl TestUser {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn named(username: &str) -> Self {
        Self {
            authenticated: true,
            username: Some(username.to_string()),
            roles: Vec::new(),
        }
    }

    pub fn with_role(mut self, role: &str) -> Self {
        self.roles.push(role.to_string());
        self
    }
}

impl Principal for TestUser {
    fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// JSON scenario vector: one registry setup, many access checks.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioVector {
    pub description: String,
    pub default_allow: bool,
    pub cases: Vec<ScenarioCase>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioCase {
    pub user: TestUser,
    pub path: String,
    pub allowed: bool,
}

pub fn load_vector(name: &str) -> ScenarioVector {
    let s = std::fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}
