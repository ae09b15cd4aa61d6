use leptos::*;

#[component]
pub fn ErrorBanner<F>(cx: Scope, message: String, on_dismiss: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! { cx,
        <div class="error-banner" role="alert">
            <span>{message}</span>
            <button type="button" class="btn-close" aria-label="Dismiss" on:click=move |_| on_dismiss()></button>
        </div>
    }
}
