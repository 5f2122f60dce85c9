mod create_server;
mod members;
mod sidebar;

use leptos::prelude::*;

use crate::flyout::{FlyoutRequest, ProfileFlyout};

stylance::import_crate_style!(
    #[allow(dead_code)]
    style,
    "src/home/home.css"
);

#[component]
pub fn Home() -> impl IntoView {
    let active_server: RwSignal<Option<String>> = RwSignal::new(None);
    let flyout: RwSignal<Option<FlyoutRequest>> = RwSignal::new(None);

    view! {
        <div class=style::home_container>
            <sidebar::Sidebar active_server />
            <members::MemberList active_server flyout />
            <ProfileFlyout request=flyout />
        </div>
    }
}
