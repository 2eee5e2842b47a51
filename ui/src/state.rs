use tables::Identity;
use yewdux::prelude::*;

#[derive(Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Unknown,
    SignedOut,
    SignedIn(Identity),
}

#[derive(Clone, PartialEq)]
pub enum ThemeMode {
    Light,
    Dark,
    System,
}

impl Default for ThemeMode {
    fn default() -> Self {
        Self::System
    }
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    pub theme_mode: ThemeMode,
    pub system_prefers_dark: bool,

    // Managed by use_session_restore and the sign-in/sign-out flows.
    pub session: SessionState,
}

impl State {
    pub fn is_dark_mode(&self) -> bool {
        match self.theme_mode {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => self.system_prefers_dark,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self.session, SessionState::SignedIn(_))
    }

    pub fn identity(&self) -> Option<&Identity> {
        match &self.session {
            SessionState::SignedIn(identity) => Some(identity),
            SessionState::Unknown | SessionState::SignedOut => None,
        }
    }

    pub fn sign_out(&mut self) {
        self.session = SessionState::SignedOut;
    }
}
