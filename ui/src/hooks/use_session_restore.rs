use tables::ClientError;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{SessionState, State, get_table_client, session};

/// Hook to restore a persisted session on app startup.
///
/// With no stored token the session is immediately `SignedOut`. With
/// one, the auth service decides: a confirmed identity signs the user
/// back in, a rejection discards the token, and a network failure
/// leaves the token in place for the next page load.
#[hook]
pub fn use_session_restore() {
    let (_state, dispatch) = use_store::<State>();

    use_effect_with((), {
        let dispatch = dispatch.clone();
        move |_| {
            if session::load_session().is_none() {
                dispatch
                    .reduce_mut(|state| state.session = SessionState::SignedOut);
                return;
            }

            yew::platform::spawn_local(async move {
                let client = get_table_client();
                match client.identity().await {
                    Ok(identity) => {
                        dispatch.reduce_mut(|state| {
                            state.session = SessionState::SignedIn(identity);
                        });
                    }
                    Err(err) => {
                        tracing::warn!("session restore failed: {err}");
                        if matches!(err, ClientError::Service(..)) {
                            session::clear_session();
                        }
                        dispatch.reduce_mut(|state| {
                            state.session = SessionState::SignedOut;
                        });
                    }
                }
            });
        }
    });
}
