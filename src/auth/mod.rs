use serde::Serialize;

/// Credentials handed to the authentication backend on login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// Account details handed to the authentication backend on sign up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationRequest {
    pub email: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// Backend that actually logs users in and creates accounts.
///
/// Calls are fire-and-forget: the forms never wait on or inspect the outcome.
pub trait AuthService: Send + Sync {
    fn login(&self, request: &LoginRequest);

    fn register(&self, request: &RegistrationRequest);
}

/// Stand-in backend that only records submissions in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingAuthService;

impl AuthService for LoggingAuthService {
    fn login(&self, request: &LoginRequest) {
        log::info!("login submitted: {}", serde_json::json!(request));
    }

    fn register(&self, request: &RegistrationRequest) {
        log::info!("registration submitted: {}", serde_json::json!(request));
    }
}
