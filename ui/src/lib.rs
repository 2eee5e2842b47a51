use tables::{NewsId, ProductId, TableClient};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

mod components;
mod contexts;
pub mod hooks;
mod logs;
mod pages;
pub mod session;
mod state;
pub mod theme;
mod utils;

pub use logs::init_logging;
pub use state::{SessionState, State, ThemeMode};

use components::{MainLayout, ToastContainer};
use contexts::toast::ToastProvider;
use hooks::{use_session_restore, use_system_theme};
use pages::{
    AdminNewsPage, AdminPage, AdminProductsPage, AdminUsersPage, HomePage,
    NewsDetailPage, NewsPage, NotFoundPage, ProductDetailPage, ProductsPage,
    SignInPage,
};

// Global table client - configurable via environment or same-origin fallback
pub fn get_table_client() -> TableClient {
    // Try environment variable first (set at build time)
    let address = option_env!("TABLES_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            // Fallback to same origin (current setup)
            let window = web_sys::window().unwrap();
            let location = window.location();
            location.origin().unwrap()
        });

    // The publishable key is shipped to every browser; it only selects
    // the project and anonymous access rules.
    let api_key =
        option_env!("TABLES_PUBLISHABLE_KEY").unwrap_or("sb_publishable_vektra_dev");

    let client = TableClient::new(address, api_key);
    match session::load_session() {
        Some(session) => client.with_bearer(session.access_token),
        None => client,
    }
}

#[function_component]
pub fn App() -> Html {
    let (_state, dispatch) = use_store::<State>();

    use_session_restore();
    use_system_theme();

    // Load the saved theme preference once at startup
    use_effect_with((), move |_| {
        let mode = theme::stored_theme_mode();
        dispatch.reduce_mut(|state| state.theme_mode = mode);
    });

    html! {
        <BrowserRouter>
            <ToastProvider>
                <Switch<Route> render={switch} />
                <ToastContainer />
            </ToastProvider>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/products")]
    Products,
    #[at("/products/:id")]
    ProductDetail { id: ProductId },
    #[at("/news")]
    News,
    #[at("/news/:id")]
    NewsDetail { id: NewsId },
    #[at("/sign-in")]
    SignIn,
    #[at("/admin")]
    Admin,
    #[at("/admin/news")]
    AdminNews,
    #[at("/admin/products")]
    AdminProducts,
    #[at("/admin/users")]
    AdminUsers,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    let page = match routes {
        Route::Home => html! { <HomePage /> },
        Route::Products => html! { <ProductsPage /> },
        Route::ProductDetail { id } => html! { <ProductDetailPage id={id} /> },
        Route::News => html! { <NewsPage /> },
        Route::NewsDetail { id } => html! { <NewsDetailPage id={id} /> },
        Route::SignIn => html! { <SignInPage /> },
        Route::Admin => html! { <AdminPage /> },
        Route::AdminNews => html! { <AdminNewsPage /> },
        Route::AdminProducts => html! { <AdminProductsPage /> },
        Route::AdminUsers => html! { <AdminUsersPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    };

    html! {
        <MainLayout>
            {page}
        </MainLayout>
    }
}
