use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        use app::App;
        use leptos::{mount_to_body, view};
        use wasm_bindgen::prelude::wasm_bindgen;
        use web_sys::console;

        /// Entry point invoked from index.html once the wasm module has loaded.
        #[wasm_bindgen]
        pub fn mount() {
            console_error_panic_hook::set_once();
            _ = console_log::init_with_level(log::Level::Debug);
            console::log_1(&"Preparing to mount step counter...".into());

            mount_to_body(|cx| {
                view! { cx, <App /> }
            });
        }
    }
}
