use leptos::prelude::*;
use petagenda_frontend::{App, config, init_logging};

// Use lol_alloc as the global allocator for smaller WASM size
#[cfg(target_arch = "wasm32")]
use lol_alloc::{AssumeSingleThreaded, FreeListAllocator};

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOCATOR: AssumeSingleThreaded<FreeListAllocator> =
    unsafe { AssumeSingleThreaded::new(FreeListAllocator::new()) };

pub fn main() {
    console_error_panic_hook::set_once();

    let (config, error) = config::load();
    init_logging(config.log_level);
    if let Some(error) = error {
        tracing::warn!(%error, "invalid build configuration, using defaults");
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
