use crate::{Route, State, get_table_client, session};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

#[hook]
pub fn use_sign_out() -> Callback<MouseEvent> {
    let (_, dispatch) = use_store::<State>();
    let navigator = use_navigator().unwrap();

    Callback::from(move |_| {
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();

        yew::platform::spawn_local(async move {
            // The token may already be dead server-side; either way the
            // local session ends.
            let client = get_table_client();
            let _ = client.sign_out().await;

            session::clear_session();
            dispatch.reduce_mut(|state| state.sign_out());

            navigator.push(&Route::Home);
        });
    })
}
