use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use super::{FetchState, RequestSeq};

/// Generic fetch hook return type
pub struct FetchHandle<T> {
    pub state: FetchState<T>,
    pub refetch: Callback<()>,
}

impl<T> FetchHandle<T> {
    /// Render based on fetch state with contextual loading/error frames.
    ///
    /// - `Idle`/`Loading`: "Loading {context}..." frame
    /// - `Error`: "Error loading {context}: ..." frame
    /// - `Success`: call `render_fn` with the data
    ///
    /// # Arguments
    ///
    /// * `context` - Contextual string like "news" or "products"
    /// * `render_fn` - Function to render when data is available
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T) -> Html,
    {
        match &self.state {
            FetchState::Idle | FetchState::Loading => {
                html! {
                    <div class="text-center py-12">
                        <p class="text-neutral-600 dark:text-neutral-400">
                            {format!("Loading {}...", context)}
                        </p>
                    </div>
                }
            }
            FetchState::Error(error) => {
                html! {
                    <div class="p-4 rounded-md bg-red-50 \
                               dark:bg-red-900/20 border \
                               border-red-200 dark:border-red-800">
                        <p class="text-sm text-red-700 \
                                  dark:text-red-400">
                            {format!("Error loading {}: {}", context, error)}
                        </p>
                    </div>
                }
            }
            FetchState::Success(data) => render_fn(data),
        }
    }
}

/// Generic fetch hook composer.
///
/// Automatically fetches on mount and when `deps` change, and provides
/// refetch capability. The fetch function captures dependencies from
/// the closure; the deps parameter is used only for dependency tracking
/// in use_callback and use_effect_with.
///
/// Every triggered read gets a token from a per-instance [`RequestSeq`].
/// When requests overlap (a dependency changed or a refetch fired while
/// one was in flight), only the newest completion is applied; overtaken
/// responses are dropped on arrival.
///
/// # Example
///
/// ```rust
/// # use tables::{ProductId, rows::Product};
/// # use ui::get_table_client;
/// # use ui::hooks::{FetchHandle, use_fetch};
/// # use yew::prelude::*;
/// #[hook]
/// pub fn use_product(id: ProductId) -> FetchHandle<Option<Product>> {
///     use_fetch(id, move || async move {
///         let client = get_table_client();
///         client
///             .from("products")
///             .eq("id", id)
///             .fetch_maybe()
///             .await
///             .map_err(|e| e.to_string())
///     })
/// }
/// ```
#[hook]
pub fn use_fetch<T, D, F, Fut>(deps: D, fetch_fn: F) -> FetchHandle<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let state = use_state(FetchState::<T>::default);
    let seq = use_memo((), |_| RequestSeq::default());

    let refetch = {
        let state = state.clone();
        let seq = seq.clone();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback(deps.clone(), move |_, _| {
            let state = state.clone();
            let seq = seq.clone();
            let fetch_fn = fetch_fn.clone();

            yew::platform::spawn_local(async move {
                let token = seq.issue();
                state.set(FetchState::Loading);

                let outcome = fetch_fn().await;
                if !seq.is_current(token) {
                    // A newer request started while this one was in
                    // flight; its completion owns the state now.
                    return;
                }
                match outcome {
                    Ok(data) => state.set(FetchState::Success(data)),
                    Err(message) => {
                        tracing::error!("fetch failed: {message}");
                        state.set(FetchState::Error(message));
                    }
                }
            });
        })
    };

    // Auto-fetch on mount and when deps change
    {
        let refetch = refetch.clone();
        use_effect_with(deps, move |_| {
            refetch.emit(());
        });
    }

    FetchHandle {
        state: (*state).clone(),
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}
