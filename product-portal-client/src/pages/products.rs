use leptos::*;

use crate::{
    components::{banner::ErrorBanner, field::FormField, modal::Modal, product_card::ProductCard},
    flows::products::{self, ProductDialog, ProductListing},
    session::LocalTokenStore,
    PortalApi,
};

#[component]
pub fn Products(cx: Scope, api: PortalApi) -> impl IntoView {
    let initial = create_local_resource(
        cx,
        || (),
        move |_| async move { products::load(&api, &LocalTokenStore).await },
    );
    // Listing fetched after the last successful save, shadowing the initial load
    let refreshed = create_rw_signal(cx, None::<ProductListing>);
    let reloading = create_rw_signal(cx, false);
    let listing = move || refreshed.get().or_else(|| initial.read(cx));

    let dialog = create_rw_signal(cx, ProductDialog::default());
    let dialog_open = create_memo(cx, move |_| dialog.with(|dialog| dialog.open));
    let name = Signal::derive(cx, move || dialog.with(|dialog| dialog.draft.name.clone()));
    let set_name = SignalSetter::map(cx, move |name| {
        dialog.update(|dialog| dialog.draft.name = name);
    });
    let price = Signal::derive(cx, move || dialog.with(|dialog| dialog.draft.price.clone()));
    let set_price = SignalSetter::map(cx, move |price| {
        dialog.update(|dialog| dialog.draft.price = price);
    });

    let save_action = create_action(cx, move |submitted: &ProductDialog| {
        let mut submitted = submitted.clone();
        async move {
            let created = products::create(&api, &LocalTokenStore, &mut submitted, |closed| {
                dialog.set(closed.clone());
                reloading.set(true);
            })
            .await;
            match created {
                Some(created) => {
                    refreshed.set(Some(created));
                    reloading.set(false);
                }
                None => dialog.set(submitted),
            }
        }
    });
    let saving = save_action.pending();

    let open_dialog = move |_: ev::MouseEvent| dialog.update(ProductDialog::show);
    let save = move |_: ev::MouseEvent| save_action.dispatch(dialog.get());
    let dismiss = move || {
        let mut current = listing();
        if let Some(current) = current.as_mut() {
            current.dismiss_notice();
        }
        refreshed.set(current);
    };

    view! { cx,
        <div class="container">
            {move || match listing() {
                Some(current) if !reloading.get() => {
                    let empty = current.products.is_empty();
                    view! { cx,
                        <div class="header">
                            <h1 class="title">"Products"</h1>
                            <p class="subtitle">"Browse our collection of products"</p>
                            <button class="btn btn-primary" on:click=open_dialog>"+ Add Product"</button>
                        </div>
                        {current
                            .banner()
                            .map(|message| view! { cx, <ErrorBanner message=message on_dismiss=dismiss/> })}
                        <div class="products-grid">
                            {current
                                .products
                                .into_iter()
                                .map(|product| view! { cx, <ProductCard product=product/> })
                                .collect::<Vec<_>>()}
                        </div>
                        {empty.then(|| view! { cx, <div class="empty-state"><p>"No products found"</p></div> })}
                    }
                        .into_view(cx)
                }
                _ => view! { cx, <div class="loading">"Loading products..."</div> }.into_view(cx),
            }}
            {move || {
                dialog_open
                    .get()
                    .then(|| {
                        view! { cx,
                            <Modal
                                id="add-product"
                                title="Add New Product"
                                body=view! { cx,
                                    <FormField
                                        id="product-name"
                                        label="Name"
                                        input_type="text"
                                        placeholder="Product name"
                                        value=name
                                        set_value=set_name
                                    />
                                    <FormField
                                        id="product-price"
                                        label="Price"
                                        input_type="number"
                                        placeholder="Product price"
                                        value=price
                                        set_value=set_price
                                    />
                                    {move || {
                                        dialog
                                            .with(|dialog| dialog.error.clone())
                                            .map(|err| view! { cx, <p class="error">{err}</p> })
                                    }}
                                }
                                buttons=view! { cx,
                                    <button
                                        type="button"
                                        class="btn btn-primary"
                                        prop:disabled=move || saving.get()
                                        on:click=save
                                    >
                                        {move || if saving.get() { "Saving..." } else { "Save" }}
                                    </button>
                                }
                                on_close=move || dialog.update(ProductDialog::close)
                            />
                        }
                    })
            }}
        </div>
    }
}
