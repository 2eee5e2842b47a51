use std::cell::Cell;

pub mod use_fetch;
pub mod use_news;
pub mod use_products;
pub mod use_role;
pub mod use_session_restore;
pub mod use_sign_out;
pub mod use_system_theme;
pub mod use_title;

pub use use_fetch::{FetchHandle, use_fetch};
pub use use_news::{use_all_news, use_news, use_news_item};
pub use use_products::{use_product, use_products};
pub use use_role::{RoleHandle, use_role};
pub use use_session_restore::use_session_restore;
pub use use_sign_out::use_sign_out;
pub use use_system_theme::use_system_theme;
pub use use_title::use_title;

/// Lifecycle of one asynchronous read. Exactly one variant at a time;
/// a refetch or dependency change moves back to `Loading` rather than
/// holding stale data alongside an error.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> FetchState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

/// Monotonic tokens for the reads issued by one hook instance.
///
/// A completion only counts if its token is still the newest one, so a
/// response that was overtaken by a later request cannot clobber that
/// request's result.
#[derive(Debug, Default)]
pub struct RequestSeq {
    current: Cell<u64>,
}

impl RequestSeq {
    /// Start a new request, invalidating all earlier ones.
    pub fn issue(&self) -> u64 {
        let token = self.current.get() + 1;
        self.current.set(token);
        token
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.current.get() == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_request_invalidates_older_tokens() {
        let seq = RequestSeq::default();
        let first = seq.issue();
        assert!(seq.is_current(first));

        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn fetch_state_accessors() {
        let state: FetchState<i32> = FetchState::Idle;
        assert_eq!(state.data(), None);
        assert_eq!(state.error(), None);
        assert!(!state.is_loading());

        assert!(FetchState::<i32>::Loading.is_loading());
        assert_eq!(FetchState::Success(7).data(), Some(&7));

        let failed: FetchState<i32> = FetchState::Error("boom".to_string());
        assert_eq!(failed.error(), Some("boom"));
        assert_eq!(failed.data(), None);
    }
}
