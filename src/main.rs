mod auth;
mod config;
mod errors;
mod form;
mod screen;
mod session;
mod template;
mod validation;

use std::sync::Arc;

use actix_session::storage::CookieSessionStore;
use actix_session::{Session, SessionMiddleware};
use actix_web::cookie::Key;
use actix_web::{web, App, HttpResponse, HttpServer};
use askama::Template;

use auth::{AuthService, LoggingAuthService};
use errors::AppError;
use form::{FormAction, LoginFormData, RegisterFormData};
use screen::ScreenRouter;
use validation::{FIELD_TOO_LONG, MAX_FIELD_LENGTH};

const SESSION_COOKIE: &str = "gatehouse";

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .append_header(("Location", location))
        .finish()
}

async fn index(router: ScreenRouter, session: Session) -> Result<HttpResponse, AppError> {
    let notice = session::take_flash(&session).unwrap_or_default();

    let content = match &router {
        ScreenRouter::Login(form) => template::screen::LoginTemplate::new(form, &notice).render()?,
        ScreenRouter::Register(form) => {
            template::screen::RegisterTemplate::new(form, &notice).render()?
        }
    };

    Ok(HttpResponse::Ok().content_type("text/html").body(content))
}

async fn login(
    mut router: ScreenRouter,
    session: Session,
    auth: web::Data<dyn AuthService>,
    form: web::Form<LoginFormData>,
) -> Result<HttpResponse, AppError> {
    let Some(login_form) = router.login_mut() else {
        log::debug!("login post while the login screen is not mounted");
        return Ok(see_other("/"));
    };

    if !form.fits() {
        log::debug!("login post rejected, field over {} characters", MAX_FIELD_LENGTH);
        session::flash(&session, FIELD_TOO_LONG)?;
        return Ok(see_other("/"));
    }

    match form.into_inner().apply_to(login_form) {
        FormAction::Update => {}
        FormAction::TogglePassword => login_form.on_toggle_show_password(),
        FormAction::Submit => {
            login_form.on_submit(auth.get_ref());
        }
    }

    session::store(&session, &router)?;

    Ok(see_other("/"))
}

async fn register(
    mut router: ScreenRouter,
    session: Session,
    auth: web::Data<dyn AuthService>,
    form: web::Form<RegisterFormData>,
) -> Result<HttpResponse, AppError> {
    let Some(register_form) = router.register_mut() else {
        log::debug!("register post while the register screen is not mounted");
        return Ok(see_other("/"));
    };

    if !form.fits() {
        log::debug!("register post rejected, field over {} characters", MAX_FIELD_LENGTH);
        session::flash(&session, FIELD_TOO_LONG)?;
        return Ok(see_other("/"));
    }

    match form.into_inner().apply_to(register_form) {
        FormAction::Update => {}
        FormAction::TogglePassword => register_form.on_toggle_show_password(),
        FormAction::Submit => {
            register_form.on_submit(auth.get_ref());
        }
    }

    session::store(&session, &router)?;

    Ok(see_other("/"))
}

async fn toggle(mut router: ScreenRouter, session: Session) -> Result<HttpResponse, AppError> {
    router.toggle();
    session::store(&session, &router)?;

    Ok(see_other("/"))
}

async fn default_handler() -> Result<HttpResponse, AppError> {
    let content = template::error::NotFoundErrorTemplate.render()?;

    Ok(HttpResponse::NotFound()
        .content_type("text/html")
        .body(content))
}

fn session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(SESSION_COOKIE.to_string())
        .cookie_secure(false)
        .build()
}

fn routes(cfg: &mut web::ServiceConfig) {
    cfg.default_service(web::route().to(default_handler))
        .route("/", web::get().to(index))
        .route("/login", web::post().to(login))
        .route("/register", web::post().to(register))
        .route("/toggle", web::post().to(toggle));
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let settings = config::Settings::from_env().map_err(std::io::Error::other)?;
    let auth: Arc<dyn AuthService> = Arc::new(LoggingAuthService);

    log::info!(
        "starting HTTP server at http://{}:{}",
        settings.host,
        settings.port
    );

    let key = settings.session_key.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::from(auth.clone()))
            .wrap(session_middleware(key.clone()))
            .wrap(actix_web::middleware::Logger::default())
            .configure(routes)
    })
    .bind((settings.host.as_str(), settings.port))?
    .workers(settings.workers)
    .run()
    .await
}
