pub mod api;
mod components;
pub mod config;
pub mod flows;
pub mod pages;
pub mod session;

use leptos::*;
use leptos_router::*;

use crate::{
    api::{BrowserClient, UnauthorizedApi},
    config::PortalConfig,
    pages::{login::Login, products::Products, register::Register, Page},
};

/// API handle shared by every page of the running application
pub type PortalApi = UnauthorizedApi<BrowserClient>;

#[component]
pub fn App(cx: Scope, config: PortalConfig) -> impl IntoView {
    let api = PortalApi::new(BrowserClient, config.backend_url);
    view! {
        cx,
        <Router>
            <main>
                <Routes>
                    <Route
                        path=Page::Login.path()
                        view=move |cx| view! { cx, <Login api=api/> }
                    />
                    <Route
                        path=Page::Register.path()
                        view=move |cx| view! { cx, <Register api=api/> }
                    />
                    <Route
                        path=Page::Products.path()
                        view=move |cx| view! { cx, <Products api=api/> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
