use leptos::*;

/// Labelled input showing `value` and reporting every edit through `set_value`
#[component]
pub fn FormField(
    cx: Scope,
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] set_value: SignalSetter<String>,
) -> impl IntoView {
    view! { cx,
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                class="form-control"
                type=input_type
                id=id
                name=id
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
            />
        </div>
    }
}
