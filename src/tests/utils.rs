use crate::app::{App, Clock};
use crate::config::AppConfig;
use crate::db::connection::{init_db, Database};
use crate::responses::html_error_response;
use crate::router::handle;
use astra::{Body, Request, Response};
use chrono::{NaiveDate, NaiveDateTime};
use std::io::Read;
use std::ops::Deref;
use tempfile::TempDir;

/// A database file inside its own temp dir; both go away on drop.
pub struct ScratchDb {
    db: Database,
    _dir: TempDir,
}

impl Deref for ScratchDb {
    type Target = Database;

    fn deref(&self) -> &Database {
        &self.db
    }
}

/// A fresh database file. The schema is not applied.
pub fn make_db(name: &str) -> ScratchDb {
    let dir = tempfile::Builder::new()
        .prefix(&format!("frontdesk_{name}_"))
        .tempdir()
        .expect("temp dir");
    let path = dir.path().join("frontdesk.sqlite3");
    ScratchDb {
        db: Database::new(path.to_string_lossy().into_owned()),
        _dir: dir,
    }
}

/// An app whose database is removed when the test ends.
pub struct TestApp {
    app: App,
    _scratch: ScratchDb,
}

impl Deref for TestApp {
    type Target = App;

    fn deref(&self) -> &App {
        &self.app
    }
}

pub fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

/// App over a migrated scratch database with the clock pinned to `now`.
pub fn test_app(name: &str, now: NaiveDateTime) -> TestApp {
    let scratch = make_db(name);
    let app = App::new(AppConfig::for_db(scratch.path()), Clock::Fixed(now));
    init_db(&app.db).expect("schema applies");
    TestApp {
        app,
        _scratch: scratch,
    }
}

/// Runs a request through the router the same way the server closure does.
pub fn send(app: &App, req: Request) -> Response {
    match handle(req, app) {
        Ok(resp) => resp,
        Err(err) => html_error_response(err),
    }
}

pub fn get(app: &App, uri: &str) -> Response {
    let req = http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, req)
}

pub fn post(app: &App, uri: &str, form: &str) -> Response {
    let req = http::Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.as_bytes().to_vec()))
        .unwrap();
    send(app, req)
}

pub fn body_bytes(resp: Response) -> Vec<u8> {
    let mut body = resp.into_body();
    let mut out = Vec::new();
    body.reader().read_to_end(&mut out).unwrap();
    out
}

pub fn body_string(resp: Response) -> String {
    String::from_utf8(body_bytes(resp)).unwrap()
}

pub fn location(resp: &Response) -> String {
    resp.headers()
        .get("Location")
        .expect("redirect has a Location header")
        .to_str()
        .unwrap()
        .to_string()
}
