use serde::{Deserialize, Serialize};

use crate::form::{LoginForm, RegisterForm};

/// Which of the two screens is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    Register,
    Login,
}

impl Screen {
    pub fn other(self) -> Self {
        match self {
            Screen::Register => Screen::Login,
            Screen::Login => Screen::Register,
        }
    }
}

/// The mounted screen together with its form. Only one form exists at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenRouter {
    Register(RegisterForm),
    Login(LoginForm),
}

impl Default for ScreenRouter {
    fn default() -> Self {
        Self::mount(Screen::default())
    }
}

impl ScreenRouter {
    /// A fresh, empty form for `screen`.
    pub fn mount(screen: Screen) -> Self {
        match screen {
            Screen::Register => ScreenRouter::Register(RegisterForm::default()),
            Screen::Login => ScreenRouter::Login(LoginForm::default()),
        }
    }

    pub fn screen(&self) -> Screen {
        match self {
            ScreenRouter::Register(_) => Screen::Register,
            ScreenRouter::Login(_) => Screen::Login,
        }
    }

    /// Switches screens, dropping whatever was typed into the current form.
    pub fn toggle(&mut self) {
        let next = self.screen().other();
        log::debug!("switching screen from {:?} to {:?}", self.screen(), next);
        *self = Self::mount(next);
    }

    pub fn login_mut(&mut self) -> Option<&mut LoginForm> {
        match self {
            ScreenRouter::Login(form) => Some(form),
            ScreenRouter::Register(_) => None,
        }
    }

    pub fn register_mut(&mut self) -> Option<&mut RegisterForm> {
        match self {
            ScreenRouter::Register(form) => Some(form),
            ScreenRouter::Login(_) => None,
        }
    }
}
