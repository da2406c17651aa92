//! Browser entry point: mounts the SPA onto `<body>`.
//!
//! Only meaningful when built for the browser with the `csr` feature;
//! a plain `cargo build` produces an empty binary so the logic crate can
//! be compiled and tested natively.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        leptos::mount::mount_to_body(cyberhunter_client::app::App);
    }
}
