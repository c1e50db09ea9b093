use std::fmt::Display;

use crate::base_path::BasePath;
use crate::escape::build_query;

impl BasePath {
    /// URL of a static resource (css, js, images) under the mount point.
    /// `assets/app.css` and `/assets/app.css` give the same result.
    pub fn asset(&self, path: &str) -> String {
        format!("{}/{}", self.as_str(), path.trim_start_matches('/'))
    }

    /// Internal page URL of the form `<base>/?p=<route>`.
    ///
    /// Non-empty `params` are appended as a second `?p=` block holding the
    /// form-encoded pairs, e.g. `/?p=cerca?p=q=a+b&page=2`. Existing links
    /// depend on that shape so it is kept as is.
    pub fn url<I, K, V>(&self, path: &str, params: I) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Display,
    {
        let mut out = format!("{}/?p={}", self.as_str(), route(path));

        let query = build_query(params);
        if !query.is_empty() {
            out += "?p=";
            out += &query;
        }
        out
    }

    /// URL of the home page.
    pub fn home(&self) -> String {
        self.url("", Vec::<(&str, &str)>::new())
    }
}

/// Strip leading slashes and `?p=` / `p=` markers. An empty route is the
/// home page, `/`.
fn route(path: &str) -> &str {
    let mut rest = path;
    loop {
        let next = rest
            .strip_prefix('/')
            .or_else(|| rest.strip_prefix("?p="))
            .or_else(|| rest.strip_prefix("p="));
        match next {
            Some(stripped) => rest = stripped,
            None => break,
        }
    }
    if rest.is_empty() {
        "/"
    } else {
        rest
    }
}
