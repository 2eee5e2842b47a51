//! Persistence of the bearer session across page loads.

use tables::Session;

const SESSION_STORAGE_KEY: &str = "vektra.session";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_session() -> Option<Session> {
    let raw = local_storage()?.get_item(SESSION_STORAGE_KEY).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(err) => {
            tracing::warn!("discarding unreadable stored session: {err}");
            clear_session();
            None
        }
    }
}

pub fn store_session(session: &Session) {
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(session) {
        Ok(raw) => {
            let _ = storage.set_item(SESSION_STORAGE_KEY, &raw);
        }
        Err(err) => tracing::warn!("failed to serialize session: {err}"),
    }
}

pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(SESSION_STORAGE_KEY);
    }
}
