use gloo_timers::callback::Interval;
use leptos::html::Div;
use leptos::{logging::log, prelude::*, task::spawn_local};
use stylance::classes;
use wasm_bindgen::JsCast;

use crate::models::{Activity, Post, ServerMember, User, UserDetails};
use crate::services::get_user_details;
use crate::store::use_store;
use crate::utils::resize_observer::observe_height;
use crate::utils::time;
use crate::utils::window::use_window_properties;
use crate::utils::{on_document_mouseup, DocumentListenerHandle};

stylance::import_crate_style!(
    #[allow(dead_code)]
    style,
    "src/flyout/flyout.css"
);

const FLYOUT_WIDTH: f64 = 350.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FlyoutAnchor {
    Left,
    #[default]
    Right,
}

/// Everything a trigger element passes along when opening the flyout.
#[derive(Debug, Clone, PartialEq)]
pub struct FlyoutRequest {
    pub user_id: String,
    pub server_id: Option<String>,
    pub left: f64,
    pub top: f64,
    pub anchor: FlyoutAnchor,
    pub dm_pane: bool,
}

/// Profile flyout entry point. Closing means clearing the request signal, so
/// every dismissal path funnels through one place.
#[component]
pub fn ProfileFlyout(request: RwSignal<Option<FlyoutRequest>>) -> impl IntoView {
    let props = use_window_properties();
    let show_mobile = Memo::new(move |_| {
        let dm_pane = request.get().map(|r| r.dm_pane).unwrap_or(false);
        props.is_mobile_width() && !dm_pane
    });

    // A switch between mobile and desktop layout dismisses the flyout.
    Effect::new(move |prev: Option<bool>| {
        let mobile = show_mobile.get();
        if let Some(prev) = prev {
            if prev != mobile {
                request.set(None);
            }
        }
        mobile
    });

    view! {
        <Show when=move || request.get().is_some()>
            <Show
                when=move || !show_mobile.get()
                fallback=move || view! { <MobileFlyout request /> }
            >
                <DesktopProfileFlyout request />
            </Show>
        </Show>
    }
}

#[component]
fn DesktopProfileFlyout(
    request: RwSignal<Option<FlyoutRequest>>,
    #[prop(optional)] mobile: bool,
) -> impl IntoView {
    let store = use_store();
    let props = use_window_properties();

    let details: RwSignal<Option<UserDetails>> = RwSignal::new(None);
    let hover = RwSignal::new(false);
    let fetch_generation = StoredValue::new(0u64);

    let user_id = Memo::new(move |_| request.get().map(|r| r.user_id));

    // Refetch on every user change. A response that lost the race to a newer
    // request is dropped instead of overwriting current state.
    Effect::new(move |_| {
        let Some(user_id) = user_id.get() else { return };
        details.set(None);
        let generation = fetch_generation.with_value(|g| g + 1);
        fetch_generation.set_value(generation);
        spawn_local(async move {
            match get_user_details(user_id).await {
                Ok(result) => {
                    if fetch_generation.get_value() != generation {
                        return;
                    }
                    if let Some(post) = result.latest_post.clone() {
                        store.posts.push(post);
                    }
                    details.set(Some(result));
                }
                Err(e) => log!("Failed to fetch user details: {}", e),
            }
        });
    });

    // Displayed user: extended details once loaded, store record meanwhile.
    let user: Memo<Option<User>> = Memo::new(move |_| {
        if let Some(details) = details.get() {
            return Some(details.user.user);
        }
        user_id.get().and_then(|id| store.users.get(&id))
    });

    let member: Memo<Option<ServerMember>> = Memo::new(move |_| {
        request.get().and_then(|req| {
            let server_id = req.server_id?;
            store.members.get(&server_id, &req.user_id)
        })
    });

    let activity: Memo<Option<Activity>> = Memo::new(move |_| {
        user_id
            .get()
            .and_then(|id| store.users.get(&id))
            .and_then(|user| user.presence)
            .and_then(|presence| presence.activity)
    });

    let latest_post: Memo<Option<Post>> = Memo::new(move |_| {
        details
            .get()
            .and_then(|details| details.latest_post)
            .and_then(|post| store.posts.cached(&post.id))
    });

    // Elapsed label ticks once per second while an activity is shown; the
    // interval is released when the activity goes away or the flyout closes.
    let played_for = RwSignal::new(String::new());
    let ticker = StoredValue::new_local(None::<Interval>);
    Effect::new(move |_| {
        ticker.update_value(|slot| {
            slot.take();
        });
        let Some(activity) = activity.get() else { return };
        let started_at = activity.started_at;
        played_for.set(time::activity_elapsed(started_at));
        ticker.set_value(Some(Interval::new(1000, move || {
            played_for.set(time::activity_elapsed(started_at));
        })));
    });
    on_cleanup(move || {
        ticker.update_value(|slot| {
            slot.take();
        });
    });

    // The flyout measures itself and shifts up by however much it would
    // overflow the viewport.
    let flyout_ref: NodeRef<Div> = NodeRef::new();
    let flyout_height = observe_height(flyout_ref);
    let top = Memo::new(move |_| {
        let requested = request.get().map(|r| r.top).unwrap_or(0.0);
        let overflow = requested + flyout_height.get() - props.height.get();
        if overflow > 0.0 {
            (requested - overflow).max(0.0)
        } else {
            requested
        }
    });
    let left = Memo::new(move |_| {
        let Some(req) = request.get() else {
            return 0.0;
        };
        match req.anchor {
            FlyoutAnchor::Left => req.left,
            FlyoutAnchor::Right => req.left - FLYOUT_WIDTH,
        }
    });

    // Releasing the pointer outside the flyout, any modal, or the trigger
    // element closes the flyout. The handle drops with the component.
    let listener = StoredValue::new_local(None::<DocumentListenerHandle>);
    if !mobile {
        listener.set_value(Some(on_document_mouseup(move |event| {
            let Some(target) = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            else {
                return;
            };
            let flyout_selector = format!(".{}", style::flyout_container);
            if target.closest(&flyout_selector).ok().flatten().is_some() {
                return;
            }
            if target.closest(".modal").ok().flatten().is_some() {
                return;
            }
            if target.closest(".flyout-trigger").ok().flatten().is_some() {
                return;
            }
            request.set(None);
        })));
    }
    on_cleanup(move || {
        listener.update_value(|slot| {
            slot.take();
        });
    });

    let dm_pane = move || request.get().map(|r| r.dm_pane).unwrap_or(false);

    // Nothing renders until the details arrive.
    view! {
        <Show when=move || details.get().is_some()>
            <div
                node_ref=flyout_ref
                class=move || classes!(
                    "modal",
                    style::flyout_container,
                    if mobile { Some(style::mobile) } else { None },
                    if dm_pane() { Some(style::dm_pane) } else { None }
                )
                style:left=move || if mobile { String::new() } else { format!("{}px", left.get()) }
                style:top=move || if mobile { String::new() } else { format!("{}px", top.get()) }
                on:mouseenter=move |_| hover.set(true)
                on:mouseleave=move |_| hover.set(false)
            >
                <div class=style::flyout_inner>
                    <div class=style::details_row>
                        <div
                            class=move || classes!(
                                style::avatar,
                                if hover.get() { Some(style::avatar_hover) } else { None }
                            )
                        >
                            {move || {
                                user.get()
                                    .and_then(|user| user.username.chars().next())
                                    .unwrap_or('?')
                                    .to_string()
                            }}
                        </div>
                        <div class=style::name_column>
                            <span>
                                <span class=style::username>
                                    {move || user.get().map(|user| user.username).unwrap_or_default()}
                                </span>
                                <span class=style::user_tag>
                                    {move || {
                                        user.get().map(|user| format!(":{}", user.tag)).unwrap_or_default()
                                    }}
                                </span>
                            </span>
                            <span class=style::dim_text>
                                {move || {
                                    details
                                        .get()
                                        .map(|details| {
                                            format!(
                                                "{} Following | {} Followers",
                                                details.user.counts.following,
                                                details.user.counts.followers,
                                            )
                                        })
                                        .unwrap_or_default()
                                }}
                            </span>
                        </div>
                    </div>

                    <Show when=move || member.get().is_some()>
                        <FlyoutTitle title="Roles" />
                        <div class=style::roles_row>
                            <For
                                each=move || member.get().map(|member| member.roles).unwrap_or_default()
                                key=|role| role.name.clone()
                                children=move |role| {
                                    view! {
                                        <span
                                            class=style::role
                                            style:color=role.hex_color.clone().unwrap_or_default()
                                        >
                                            {role.name.clone()}
                                        </span>
                                    }
                                }
                            />
                        </div>
                    </Show>

                    <Show when=move || activity.get().is_some()>
                        <div class=style::activity_row>
                            <div class=style::activity_info>
                                <span>
                                    {move || activity.get().map(|a| a.action).unwrap_or_default()}
                                </span>
                                <span class=style::dim_text>
                                    {move || activity.get().map(|a| a.name).unwrap_or_default()}
                                </span>
                            </div>
                            <span>"For " {move || played_for.get()}</span>
                        </div>
                    </Show>

                    <Show when=move || {
                        details.get().and_then(|d| d.profile).and_then(|p| p.bio).is_some()
                    }>
                        <FlyoutTitle title="Bio" />
                        <p class=style::bio>
                            {move || {
                                details
                                    .get()
                                    .and_then(|d| d.profile)
                                    .and_then(|p| p.bio)
                                    .unwrap_or_default()
                            }}
                        </p>
                    </Show>

                    <Show when=move || latest_post.get().is_some()>
                        <FlyoutTitle title="Latest Post" />
                        {move || {
                            latest_post.get().map(|post| view! { <PostItem post /> })
                        }}
                    </Show>
                </div>
            </div>
        </Show>
    }
}

/// Bottom-sheet variant. A press that starts outside the sheet closes it.
#[component]
fn MobileFlyout(request: RwSignal<Option<FlyoutRequest>>) -> impl IntoView {
    let press_target = StoredValue::new_local(None::<web_sys::Element>);

    view! {
        <div
            class=style::mobile_background
            on:mousedown=move |event| {
                press_target.set_value(
                    event.target().and_then(|target| target.dyn_into::<web_sys::Element>().ok()),
                );
            }
            on:click=move |_| {
                let inside_modal = press_target.with_value(|target| {
                    target
                        .as_ref()
                        .and_then(|element| element.closest(".modal").ok().flatten())
                        .is_some()
                });
                if !inside_modal {
                    request.set(None);
                }
            }
        >
            <DesktopProfileFlyout request mobile=true />
        </div>
    }
}

#[component]
fn FlyoutTitle(title: &'static str) -> impl IntoView {
    view! {
        <div class=style::flyout_title>
            <span class=style::flyout_title_marker></span>
            <span>{title}</span>
        </div>
    }
}

#[component]
fn PostItem(post: Post) -> impl IntoView {
    view! {
        <div class=style::post_item>
            <p>{post.content}</p>
        </div>
    }
}
