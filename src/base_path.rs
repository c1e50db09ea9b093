use std::convert::Infallible;
use std::env;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

/// Environment variable holding the entry script path, as set by CGI-style
/// web servers.
pub const SCRIPT_NAME_VAR: &str = "SCRIPT_NAME";

/// Path of the entry script as reported by the web server, e.g.
/// `/centre/public/index.php`. Install it as a request extension to override
/// the `SCRIPT_NAME` environment variable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptName(pub String);

impl ScriptName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// URL path prefix the application is mounted under. Either empty (mounted at
/// the root) or a path with no trailing slash.
///
/// This is computed once when a request handler starts and then passed to
/// whatever builds links, so every link in one response agrees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
    /// Base path for an app mounted at the root.
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Derive the base path from the script path: the script's directory
    /// with trailing slashes removed, or empty if that directory is `/`.
    pub fn from_script_name(script_name: &str) -> Self {
        let normalized = script_name.replace('\\', "/");
        let dir = directory(&normalized).trim_end_matches('/');
        Self(dir.to_string())
    }

    /// Derive the base path from the `SCRIPT_NAME` environment variable. A
    /// missing variable gives an empty base path.
    pub fn from_env() -> Self {
        let script_name = env::var(SCRIPT_NAME_VAR).unwrap_or_default();
        Self::from_script_name(&script_name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for BasePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Directory component of a `/`-separated path, following `dirname`: trailing
/// slashes are ignored and a bare file name has no directory.
fn directory(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return if path.is_empty() { "" } else { "/" };
    }
    match trimmed.rfind('/') {
        None => "",
        Some(i) => {
            let dir = trimmed[..i].trim_end_matches('/');
            if dir.is_empty() {
                "/"
            } else {
                dir
            }
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for BasePath
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let base = match parts.extensions.get::<ScriptName>() {
            Some(script_name) => BasePath::from_script_name(script_name.as_str()),
            None => BasePath::from_env(),
        };
        Ok(base)
    }
}
