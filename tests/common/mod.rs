//! In-process mock of the shortener backend
//!
//! Serves `/conf.yaml` and the `/api/v1` endpoints on 127.0.0.1 with an
//! ephemeral port. Sessions are a `session=ok` cookie set by `login`.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::cookie::{Cookie, time::Duration as CookieDuration};
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use parking_lot::Mutex;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use tempfile::TempDir;

use linkfront::client::ServiceContext;
use linkfront::config::StaticConfig;
use linkfront::storage::FileSettingsStore;

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASS: &str = "hunter2";

#[derive(Default)]
pub struct BackendState {
    /// (original_url, short_key) in creation order
    pub records: Mutex<Vec<(String, String)>>,
    pub password: Mutex<String>,
    next_key: Mutex<u32>,
}

impl BackendState {
    fn new() -> Self {
        Self {
            password: Mutex::new(ADMIN_PASS.to_string()),
            ..Default::default()
        }
    }
}

type State = web::Data<Arc<BackendState>>;

fn logged_in(req: &HttpRequest) -> bool {
    req.cookie("session").is_some_and(|c| c.value() == "ok")
}

fn status(ok: bool) -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": ok }))
}

async fn conf_yaml(req: HttpRequest) -> HttpResponse {
    let host = req.connection_info().host().to_string();
    HttpResponse::Ok()
        .content_type("text/yaml")
        .body(format!("title: \"mock\"\nhostname: \"http://{}/\"\n", host))
}

#[derive(Deserialize)]
struct UrlForm {
    url: String,
}

async fn create_record(state: State, form: web::Form<UrlForm>) -> HttpResponse {
    let mut next = state.next_key.lock();
    *next += 1;
    let key = format!("k{}", next);
    state.records.lock().push((form.url.clone(), key.clone()));
    HttpResponse::Ok().json(json!({ "status": true, "data": { "shortened_key": key } }))
}

#[derive(Deserialize)]
struct SearchQuery {
    short_key: String,
}

async fn search_record(state: State, query: web::Query<SearchQuery>) -> HttpResponse {
    let records = state.records.lock();
    match records.iter().find(|(_, key)| *key == query.short_key) {
        Some((url, _)) => {
            HttpResponse::Ok().json(json!({ "status": true, "data": { "original_url": url } }))
        }
        None => HttpResponse::NotFound()
            .json(json!({ "status": false, "message": "Record not found", "data": null })),
    }
}

#[derive(Deserialize)]
struct LoginForm {
    username: String,
    password: String,
}

async fn login_handler(state: State, form: web::Form<LoginForm>) -> HttpResponse {
    if form.username == ADMIN_USER && form.password == *state.password.lock() {
        HttpResponse::Ok()
            .cookie(Cookie::build("session", "ok").path("/").finish())
            .json(json!({ "status": true }))
    } else {
        status(false)
    }
}

async fn logout() -> HttpResponse {
    HttpResponse::Ok()
        .cookie(
            Cookie::build("session", "")
                .path("/")
                .max_age(CookieDuration::ZERO)
                .finish(),
        )
        .json(json!({ "status": true }))
}

async fn admin_check(req: HttpRequest) -> HttpResponse {
    status(logged_in(&req))
}

async fn get_all_records(req: HttpRequest, state: State) -> HttpResponse {
    if !logged_in(&req) {
        return status(false);
    }
    let records: Map<String, Value> = state
        .records
        .lock()
        .iter()
        .map(|(url, key)| (url.clone(), Value::String(key.clone())))
        .collect();
    HttpResponse::Ok().json(json!({ "status": true, "data": { "records": records } }))
}

async fn delete_record(
    req: HttpRequest,
    state: State,
    form: web::Form<UrlForm>,
) -> HttpResponse {
    if !logged_in(&req) {
        return status(false);
    }
    let target = form.url.trim_start_matches('/');
    let mut records = state.records.lock();
    let before = records.len();
    records.retain(|(url, key)| key != target && url != target);
    status(records.len() < before)
}

async fn purge_all_records(req: HttpRequest, state: State) -> HttpResponse {
    if !logged_in(&req) {
        return status(false);
    }
    state.records.lock().clear();
    status(true)
}

#[derive(Deserialize)]
struct ChangePassForm {
    new_pass: String,
}

async fn change_pass(
    req: HttpRequest,
    state: State,
    form: web::Form<ChangePassForm>,
) -> HttpResponse {
    if !logged_in(&req) {
        return status(false);
    }
    *state.password.lock() = form.new_pass.clone();
    status(true)
}

async fn backend_status() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": true, "message": "It's alive!" }))
}

pub struct MockBackend {
    pub addr: SocketAddr,
    pub state: Arc<BackendState>,
}

impl MockBackend {
    /// Start the server on the current actix system.
    pub fn start() -> Self {
        let state = Arc::new(BackendState::new());
        let data = state.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::new(data.clone()))
                .route("/conf.yaml", web::get().to(conf_yaml))
                .service(
                    web::scope("/api/v1")
                        .route("/create_record", web::post().to(create_record))
                        .route("/search_record", web::get().to(search_record))
                        .route("/login", web::post().to(login_handler))
                        .route("/logout", web::post().to(logout))
                        .route("/admin_check", web::get().to(admin_check))
                        .route("/get_all_records", web::get().to(get_all_records))
                        .route("/delete_record", web::delete().to(delete_record))
                        .route("/purge_all_records", web::delete().to(purge_all_records))
                        .route("/change_pass", web::post().to(change_pass))
                        .route("/status", web::get().to(backend_status)),
                )
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind mock backend");

        let addr = server.addrs()[0];
        actix_rt::spawn(server.run());
        Self { addr, state }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn config(&self) -> StaticConfig {
        let mut config = StaticConfig::default();
        config.site.url = self.url();
        config.http.timeout_secs = Some(5);
        config
    }

    /// Context with settings persisted under `dir`.
    pub fn context(&self, dir: &TempDir) -> ServiceContext {
        let store = FileSettingsStore::arc(dir.path().join("state.json"));
        ServiceContext::with_store(Arc::new(self.config()), store)
    }

    pub fn record_count(&self) -> usize {
        self.state.records.lock().len()
    }
}

/// Log in through the client so the session cookie lands in the store.
pub async fn login(ctx: &ServiceContext) {
    let outcome = ctx
        .auth_service()
        .await
        .expect("auth service")
        .login(ADMIN_USER, ADMIN_PASS)
        .await;
    assert!(!outcome.is_error(), "login failed: {:?}", outcome);
}
