use crate::error::ReposError;
use crate::result::ReposResult;
use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdentityKind {
    User,
    Organization,
}

impl IdentityKind {
    fn collection(self) -> &'static str {
        match self {
            Self::User => "users",
            Self::Organization => "orgs",
        }
    }
}

/// Identifies whose repositories to list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    pub kind: IdentityKind,
    pub login: String,
}

impl FetchRequest {
    pub fn user(login: &str) -> Self {
        Self {
            kind: IdentityKind::User,
            login: String::from(login),
        }
    }

    pub fn organization(login: &str) -> Self {
        Self {
            kind: IdentityKind::Organization,
            login: String::from(login),
        }
    }

    /// Path of the repository collection, relative to the API root.
    pub fn resource_path(&self) -> String {
        format!("{}/{}/repos", self.kind.collection(), self.login)
    }

    pub(crate) fn validate(&self) -> ReposResult<()> {
        // Only reject what would change the request path.
        let valid = !matches!(self.login.as_str(), "" | "." | "..")
            && !self
                .login
                .chars()
                .any(|c| {
                    matches!(c, '/' | '\\' | '?' | '#' | '%') || c.is_whitespace() || c.is_control()
                });
        if valid {
            Ok(())
        } else {
            Err(ReposError::InvalidLogin(self.login.clone()))
        }
    }
}

impl Display for FetchRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.login)
    }
}
