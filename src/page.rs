use axum::{extract::Query, response::Html, routing::get, Extension, Router};
use serde::Deserialize;

use crate::{e, BasePath, ScriptName};

const NAV: &[(&str, &str)] = &[
    ("Inici", "/"),
    ("Pàgines", "admin/pages"),
    ("Cerca", "cerca"),
];

/// Router serving the demo page at `/`. With a `script_name` every request
/// resolves its base path from it, otherwise from `SCRIPT_NAME`.
pub fn router(script_name: Option<ScriptName>) -> Router {
    let app = Router::new().route("/", get(index));
    match script_name {
        Some(script_name) => app.layer(Extension(script_name)),
        None => app,
    }
}

#[derive(Debug, Deserialize)]
struct Params {
    p: Option<String>,
    q: Option<String>,
}

async fn index(base: BasePath, Query(params): Query<Params>) -> Html<String> {
    let route = params.p.as_deref().unwrap_or("/");
    tracing::debug!(base = %base, route, "rendering page");

    let mut nav = "<ul>".to_string();
    for (name, path) in NAV {
        nav += &format!(
            "<li><a href=\"{}\">{}</a></li>",
            e(&base.url(path, Vec::<(&str, &str)>::new())),
            e(name),
        );
    }
    nav += "</ul>";

    let search = match &params.q {
        Some(q) => format!(
            "<p>Resultats per <em>{}</em> &middot; <a href=\"{}\">pàgina 2</a></p>",
            e(q),
            e(&base.url("cerca", [("q", q.as_str()), ("page", "2")])),
        ),
        None => String::new(),
    };

    let stylesheet = e(&base.asset("assets/css/app.css"));
    let logo = e(&base.asset("/assets/img/logo.png"));
    let title = e(route);

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="ca">
<head>
<meta charset="UTF-8">
<title>{title}</title>
<link rel="stylesheet" href="{stylesheet}">
</head>
<body>
<img src="{logo}" alt="">
<h1>{title}</h1>
{nav}
{search}
</body>
</html>
"#
    ))
}
