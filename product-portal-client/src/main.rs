use leptos::*;
use product_portal_client::{config::PortalConfig, App};

fn main() {
    console_error_panic_hook::set_once();
    let config = PortalConfig::from_env();
    if let Err(error) = console_log::init_with_level(config.log_level) {
        warn!("Could not start logging. {error}");
    }
    log::info!("Using backend at {}", config.backend_url);
    mount_to_body(move |cx| view! { cx, <App config=config/> })
}
