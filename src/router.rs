use crate::app::App;
use crate::errors::ServerError;
use crate::forms::FormData;
use crate::handlers;
use crate::responses::{redirect, stylesheet_response, ResultResp};
use astra::Request;
use std::io::Read;

const MAIN_CSS: &str = include_str!("../static/main.css");

/// Request as the handlers see it: decoded query and form body.
pub struct Ctx<'a> {
    pub app: &'a App,
    pub query: FormData,
    pub form: FormData,
}

pub fn handle(req: Request, app: &App) -> ResultResp {
    let (parts, mut body) = req.into_parts();
    let method = parts.method.as_str();
    let path = parts.uri.path();

    let mut raw = Vec::new();
    if method == "POST" {
        body.reader()
            .read_to_end(&mut raw)
            .map_err(|e| ServerError::BadRequest(format!("unreadable body: {e}")))?;
    }

    let ctx = Ctx {
        app,
        query: FormData::from_query(parts.uri.query()),
        form: FormData::from_body(&raw),
    };

    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    tracing::debug!(method, path, "request");

    match (method, segments.as_slice()) {
        ("GET", [""]) => redirect("/dashboard"),
        ("GET", ["static", "main.css"]) => stylesheet_response(MAIN_CSS),

        ("GET", ["dashboard"]) => handlers::dashboard::show(&ctx),

        ("GET", ["rooms", id]) => handlers::rooms::manage(&ctx, id),
        ("GET", ["rooms", id, "book"]) => handlers::rooms::booking_form(&ctx, id),
        ("POST", ["rooms", id, "book"]) => handlers::rooms::book(&ctx, id),
        ("POST", ["rooms", id, "repay"]) => handlers::rooms::repay(&ctx, id),
        ("POST", ["rooms", id, "check-in"]) => handlers::rooms::check_in(&ctx, id),
        ("POST", ["rooms", id, "cancel"]) => handlers::rooms::cancel(&ctx, id),

        ("GET", ["enquiries"]) => handlers::enquiries::list(&ctx),
        ("POST", ["enquiries"]) => handlers::enquiries::create(&ctx),
        ("GET", ["enquiries", id, "edit"]) => handlers::enquiries::edit_form(&ctx, parse_id(id)?),
        ("POST", ["enquiries", id]) => handlers::enquiries::update(&ctx, parse_id(id)?),
        ("POST", ["enquiries", id, "delete"]) => handlers::enquiries::delete(&ctx, parse_id(id)?),

        ("GET", ["reports"]) => handlers::reports::show(&ctx),
        ("GET", ["reports", "export"]) => handlers::reports::export(&ctx),

        ("GET", ["cancellations"]) => handlers::reports::cancellations(&ctx),

        _ => Err(ServerError::NotFound),
    }
}

fn parse_id(raw: &str) -> Result<i64, ServerError> {
    raw.parse().map_err(|_| ServerError::NotFound)
}

/// `/path?k=v&...` with the values percent-encoded.
pub fn location<V: AsRef<str>>(path: &str, pairs: &[(&str, V)]) -> String {
    if pairs.is_empty() {
        return path.to_string();
    }
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    for (k, v) in pairs {
        query.append_pair(k, v.as_ref());
    }
    format!("{path}?{}", query.finish())
}
