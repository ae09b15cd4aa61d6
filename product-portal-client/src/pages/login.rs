use leptos::*;
use leptos_router::*;
use product_portal_common::validate::LoginForm;

use super::{navigate_on, Page};
use crate::{components::field::FormField, flows::login, session::LocalTokenStore, PortalApi};

#[component]
pub fn Login(cx: Scope, api: PortalApi) -> impl IntoView {
    let email = create_rw_signal(cx, String::new());
    let password = create_rw_signal(cx, String::new());
    let (login_error, set_login_error) = create_signal(cx, None::<String>);
    let (next_page, set_next_page) = create_signal(cx, None::<Page>);
    let login_action = create_action(cx, move |form: &LoginForm| {
        let form = form.clone();
        async move {
            match login::submit(&api, &LocalTokenStore, &form).await {
                Ok(page) => set_next_page.set(Some(page)),
                Err(error) => set_login_error.set(Some(error.to_string())),
            }
        }
    });
    navigate_on(cx, next_page);

    let disabled = login_action.pending();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_login_error.set(None);
        login_action.dispatch(LoginForm {
            email: email.get(),
            password: password.get(),
        });
    };
    view! { cx,
        <div class="auth-container">
            <div class="auth-box">
                <h2 class="title">"Welcome Back"</h2>
                <p class="subtitle">"Login to your account"</p>
                <form class="form-container" on:submit=on_submit>
                    <FormField
                        id="email"
                        label="Email"
                        input_type="email"
                        placeholder="Enter your email"
                        value=email
                        set_value=email
                    />
                    <FormField
                        id="password"
                        label="Password"
                        input_type="password"
                        placeholder="Enter your password"
                        value=password
                        set_value=password
                    />
                    {move || {
                        login_error
                            .get()
                            .map(|err| view! { cx, <p class="error">{err}</p> })
                    }}
                    <button class="btn btn-primary" type="submit" prop:disabled=move || disabled.get()>
                        {move || if disabled.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <p class="footer">
                    "Don't have an account? "
                    <A href=Page::Register.path()>"Register"</A>
                </p>
            </div>
        </div>
    }
}
