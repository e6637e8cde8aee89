use std::sync::Arc;

use culinara_app::{bootstrap, default_data_dir, init_logging, install_error_hook, LogDestination};
use culinara_core::ConstantThemeProbe;

fn main() {
    init_logging(LogDestination::Terminal);
    install_error_hook(cfg!(debug_assertions));

    let mut app = match bootstrap(default_data_dir(), Arc::new(ConstantThemeProbe(true))) {
        Ok(app) => app,
        Err(err) => {
            log::error!("Failed to start: {err}");
            return;
        }
    };

    // Initial hydration pass; everything further is driven by the view layer.
    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    runtime.block_on(async {
        app.recipes.fetch_categories().await;
        app.recipes.search_recipes("").await;
    });

    log::info!(
        "Ready: {} categories, {} recipes, {} favorites",
        app.recipes.categories().len(),
        app.recipes.recipes().len(),
        app.recipes.favorites().len()
    );
}
