use leptos::*;

/// Centered dialog over a backdrop. `buttons` go in the footer ahead of the cancel button.
#[component]
pub fn Modal<S1, S2, IV, IV2, F>(
    cx: Scope,
    id: S1,
    title: S2,
    body: IV,
    buttons: IV2,
    on_close: F,
) -> impl IntoView
where
    S1: Into<String>,
    S2: Into<String>,
    IV: IntoView,
    IV2: IntoView,
    F: Fn() + 'static,
{
    let id = id.into();
    view! { cx,
        <div id=format!("{id}-backdrop") class="modal-backdrop fade show" style="display: block;"></div>
        <div id=id class="modal fade show" tabindex="-1" style="display:block;">
            <div class="modal-dialog modal-dialog-centered">
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title">{title.into()}</h5>
                    </div>
                    <div class="modal-body">{body}</div>
                    <div class="modal-footer">
                        {buttons}
                        <button type="button" class="btn btn-secondary" on:click=move |_| on_close()>"Cancel"</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
