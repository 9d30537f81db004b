use actix_session::{Session, SessionExt, SessionInsertError};
use actix_utils::future::{ready, Ready};
use actix_web::{dev::Payload, Error, FromRequest, HttpRequest};

use crate::screen::ScreenRouter;

const SCREEN_KEY: &str = "screen";
const FLASH_KEY: &str = "flash";

impl FromRequest for ScreenRouter {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    /// Loads the mounted screen from the session, or a fresh register screen if
    /// there is none or it can't be decoded.
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let session = req.get_session();

        let router = match session.get::<ScreenRouter>(SCREEN_KEY) {
            Ok(Some(router)) => router,
            Ok(None) => ScreenRouter::default(),
            Err(e) => {
                log::warn!("discarding unreadable screen state: {}", e);
                session.remove(SCREEN_KEY);
                ScreenRouter::default()
            }
        };

        ready(Ok(router))
    }
}

pub fn store(session: &Session, router: &ScreenRouter) -> Result<(), SessionInsertError> {
    session.insert(SCREEN_KEY, router)
}

/// Leaves a message for the next rendered page.
pub fn flash(session: &Session, message: &str) -> Result<(), SessionInsertError> {
    session.insert(FLASH_KEY, message)
}

/// Takes the pending message, if any. Each message is shown once.
pub fn take_flash(session: &Session) -> Option<String> {
    session.remove_as::<String>(FLASH_KEY).and_then(Result::ok)
}
