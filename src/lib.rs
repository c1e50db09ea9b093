//! Helpers for server-rendered pages: HTML escaping, and links that keep
//! working when the app is mounted under a sub-directory.
//!
//! ```
//! use mount_links::{e, BasePath};
//!
//! let base = BasePath::from_script_name("/centre/public/index.php");
//! assert_eq!(base.asset("assets/css/app.css"), "/centre/public/assets/css/app.css");
//! assert_eq!(base.url("admin/pages", [("page", 2)]), "/centre/public/?p=admin/pages?p=page=2");
//! assert_eq!(e("<b>"), "&lt;b&gt;");
//! ```

mod base_path;
mod escape;
mod links;
mod page;

pub use base_path::{BasePath, ScriptName, SCRIPT_NAME_VAR};
pub use escape::{build_query, e, escape_html, escape_query};
pub use page::router;
