use leptos::*;
use product_portal_common::{display::format_price, Product};

#[component]
pub fn ProductCard(cx: Scope, product: Product) -> impl IntoView {
    let price = format_price(product.price);
    let creator = product.creator_suffix().to_owned();
    view! { cx,
        <div class="product-card">
            <div class="product-image">
                <div class="image-placeholder">"🏍️"</div>
            </div>
            <div class="product-info">
                <h3 class="product-name">{product.name}</h3>
                <p class="product-price">{price}</p>
                <div class="product-meta">
                    <span class="meta-label">"Created By:"</span>
                    " "
                    {creator}
                </div>
            </div>
        </div>
    }
}
