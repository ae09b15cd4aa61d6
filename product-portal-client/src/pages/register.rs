use leptos::*;
use leptos_router::*;
use product_portal_common::validate::RegistrationForm;

use super::{navigate_on, Page};
use crate::{components::field::FormField, flows::register, PortalApi};

const REGISTERED_ALERT: &str = "Registration successful!";

#[component]
pub fn Register(cx: Scope, api: PortalApi) -> impl IntoView {
    let name = create_rw_signal(cx, String::new());
    let email = create_rw_signal(cx, String::new());
    let password = create_rw_signal(cx, String::new());
    let confirm_password = create_rw_signal(cx, String::new());
    let (register_error, set_register_error) = create_signal(cx, None::<String>);
    let (next_page, set_next_page) = create_signal(cx, None::<Page>);
    let register_action = create_action(cx, move |form: &RegistrationForm| {
        let form = form.clone();
        async move {
            match register::submit(&api, &form).await {
                Ok(page) => {
                    if let Err(error) = window().alert_with_message(REGISTERED_ALERT) {
                        log::error!("Could not show alert. {error:?}");
                    }
                    set_next_page.set(Some(page));
                }
                Err(error) => set_register_error.set(Some(error.to_string())),
            }
        }
    });
    navigate_on(cx, next_page);

    let disabled = register_action.pending();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_register_error.set(None);
        register_action.dispatch(RegistrationForm {
            name: name.get(),
            email: email.get(),
            password: password.get(),
            confirm_password: confirm_password.get(),
        });
    };
    view! { cx,
        <div class="auth-container">
            <div class="auth-box">
                <h2 class="title">"Create Account"</h2>
                <p class="subtitle">"Register a new account"</p>
                <form class="form-container" on:submit=on_submit>
                    <FormField
                        id="name"
                        label="Name"
                        input_type="text"
                        placeholder="Enter your name"
                        value=name
                        set_value=name
                    />
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
                        placeholder="Create a password"
                        value=password
                        set_value=password
                    />
                    <FormField
                        id="confirm-password"
                        label="Confirm Password"
                        input_type="password"
                        placeholder="Confirm your password"
                        value=confirm_password
                        set_value=confirm_password
                    />
                    {move || {
                        register_error
                            .get()
                            .map(|err| view! { cx, <p class="error">{err}</p> })
                    }}
                    <button class="btn btn-primary" type="submit" prop:disabled=move || disabled.get()>
                        {move || if disabled.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                <p class="footer">
                    "Already have an account? "
                    <A href=Page::Login.path()>"Login"</A>
                </p>
            </div>
        </div>
    }
}
