use anyhow::Result;
use log::info;
use serde_json::json;

use fin_backend::{initialize_backend, BackendConfig};

/// Headless session: seeds the backend, optionally navigates to the route
/// given as the first argument, and prints what a view layer would render.
fn main() -> Result<()> {
    env_logger::init();
    info!("Starting Fin shell");

    let config = BackendConfig::from_env()?;
    let mut app_state = initialize_backend(&config)?;

    if let Some(route) = std::env::args().nth(1) {
        app_state.select_page(&route);
    }

    let snapshot = json!({
        "role": app_state.role(),
        "theme": app_state.theme(),
        "sidebar_collapsed": app_state.is_sidebar_collapsed(),
        "sidebar": app_state.sidebar(),
        "active_route": app_state.page_router.current(),
        "view": app_state.active_view(),
    });
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
