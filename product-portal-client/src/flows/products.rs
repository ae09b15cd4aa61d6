use product_portal_common::{
    sample::fallback_products,
    validate::{FormValidator, ProductDraft, ProductDraftValidator},
    Product,
};

use super::{FlowError, FlowResult};
use crate::{
    api::{self, AuthorizedApi, HttpClient, UnauthorizedApi},
    session::TokenStore,
};

const SAMPLE_NOTICE: &str = "Showing mock data for demonstration";

/// Where the products of a [ProductListing] came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingSource {
    /// Fetched from the remote service
    Live,
    /// The fixed sample, shown because the fetch failed
    Sample,
}

/// Products currently rendered by the product screen. Never edited locally; replaced by a new
/// fetch after every mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductListing {
    pub products: Vec<Product>,
    pub source: ListingSource,
    /// Reason the live list could not be shown
    pub notice: Option<String>,
}

impl ProductListing {
    fn live(products: Vec<Product>) -> Self {
        Self {
            products,
            source: ListingSource::Live,
            notice: None,
        }
    }

    fn sample(reason: String) -> Self {
        Self {
            products: fallback_products(),
            source: ListingSource::Sample,
            notice: Some(reason),
        }
    }

    /// Banner text for a listing that fell back to the sample
    pub fn banner(&self) -> Option<String> {
        self.notice
            .as_ref()
            .map(|reason| format!("{reason} - {SAMPLE_NOTICE}"))
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

/// State of the product creation modal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDialog {
    pub open: bool,
    pub draft: ProductDraft,
    /// Message of the last failed save
    pub error: Option<String>,
}

impl ProductDialog {
    pub fn show(&mut self) {
        self.open = true;
        self.error = None;
    }

    /// Hide the modal, keeping what was typed
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Hide the modal and clear its inputs
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn authorize<'a, C, S>(
    api: &'a UnauthorizedApi<C>,
    tokens: &S,
) -> api::Result<AuthorizedApi<'a, C>>
where
    C: HttpClient,
    S: TokenStore,
{
    tokens
        .token()
        .map(|token| api.authorize(token))
        .ok_or(api::Error::MissingToken)
}

async fn fetch<C, S>(api: &UnauthorizedApi<C>, tokens: &S) -> api::Result<Vec<Product>>
where
    C: HttpClient,
    S: TokenStore,
{
    authorize(api, tokens)?.products().await
}

/// Fetch the product list with the stored token. Any failure, including a missing token, yields
/// the fixed sample list with a notice explaining why.
pub async fn load<C, S>(api: &UnauthorizedApi<C>, tokens: &S) -> ProductListing
where
    C: HttpClient,
    S: TokenStore,
{
    match fetch(api, tokens).await {
        Ok(products) => ProductListing::live(products),
        Err(error) => {
            log::warn!("Could not load products, falling back to sample data. {error}");
            ProductListing::sample(error.to_string())
        }
    }
}

async fn save<C, S>(
    api: &UnauthorizedApi<C>,
    tokens: &S,
    draft: &ProductDraft,
) -> FlowResult<()>
where
    C: HttpClient,
    S: TokenStore,
{
    let product = ProductDraftValidator::validate(draft).map_err(FlowError::Validation)?;
    authorize(api, tokens)?.create_product(&product).await?;
    log::info!("Created product {}", product.name);
    Ok(())
}

/// Submit the `dialog` draft. On success the dialog is reset, `on_saved` runs before the listing
/// is re-fetched and the refreshed listing is returned. On failure the dialog stays open with the
/// error set and nothing is re-fetched.
pub async fn create<C, S, F>(
    api: &UnauthorizedApi<C>,
    tokens: &S,
    dialog: &mut ProductDialog,
    on_saved: F,
) -> Option<ProductListing>
where
    C: HttpClient,
    S: TokenStore,
    F: FnOnce(&ProductDialog),
{
    dialog.error = None;
    let saved = save(api, tokens, &dialog.draft).await;
    if let Err(error) = saved {
        log::error!("Unable to create product: {error}");
        dialog.error = Some(error.to_string());
        return None;
    }
    dialog.reset();
    on_saved(dialog);
    Some(load(api, tokens).await)
}
