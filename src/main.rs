mod app;
mod flyout;
mod home;
mod models;
mod services;
mod store;
pub mod utils;

use app::*;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(|| {
        view! { <App /> }
    })
}
