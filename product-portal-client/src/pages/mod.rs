use leptos::*;
use leptos_router::*;

pub mod login;
pub mod products;
pub mod register;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Register,
    Products,
}

impl Page {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Register => "/register",
            Self::Products => "/product",
        }
    }
}

/// Navigate to the page held by `next_page` as soon as a flow sets it
fn navigate_on(cx: Scope, next_page: ReadSignal<Option<Page>>) {
    let navigate = use_navigate(cx);
    create_effect(cx, move |_| {
        let Some(page) = next_page.get() else {
            return;
        };
        if let Err(error) = navigate(page.path(), NavigateOptions::default()) {
            log::error!("Could not navigate to {}. {error:?}", page.path());
        }
    });
}
