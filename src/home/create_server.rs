use leptos::html::Input;
use leptos::{logging::log, prelude::*, task::spawn_local};

use crate::models::ApiError;
use crate::services::create_server;

stylance::import_crate_style!(
    #[allow(dead_code)]
    style,
    "src/home/home.css"
);

/// Submission state for the create-server form: an in-flight flag guarding
/// against duplicate concurrent submits, plus the last validation error.
#[derive(Clone, Copy)]
pub struct SubmitState {
    in_flight: RwSignal<bool>,
    error: RwSignal<Option<ApiError>>,
}

impl SubmitState {
    pub fn new() -> Self {
        Self {
            in_flight: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Claims the in-flight slot and clears any prior error. Returns false
    /// when a submission is already running, in which case nothing changes.
    pub fn try_begin(&self) -> bool {
        if self.in_flight.get_untracked() {
            return false;
        }
        self.error.set(None);
        self.in_flight.set(true);
        true
    }

    /// Records the outcome and releases the in-flight slot, on success and
    /// failure alike.
    pub fn finish(&self, result: Result<(), ApiError>) {
        if let Err(error) = result {
            self.error.set(Some(error));
        }
        self.in_flight.set(false);
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight.get()
    }

    pub fn error(&self) -> Option<ApiError> {
        self.error.get()
    }
}

/// Create-server form. The created server is not inserted optimistically;
/// it arrives through the push-event channel once the service confirms it.
#[component]
pub fn CreateServerPopup(visible: RwSignal<bool>) -> impl IntoView {
    let name_ref: NodeRef<Input> = NodeRef::new();
    let state = SubmitState::new();

    let on_submit = move || {
        if !state.try_begin() {
            return;
        }
        let name = name_ref.get().map(|input| input.value()).unwrap_or_default();
        spawn_local(async move {
            match create_server(name).await {
                Ok(server) => {
                    log!("Created server: {}", server.name);
                    state.finish(Ok(()));
                    visible.set(false);
                }
                Err(error) => state.finish(Err(error)),
            }
        });
    };

    view! {
        <div class=style::create_server_popup>
            <h2>"Create Server"</h2>
            <form on:submit=move |event| {
                event.prevent_default();
                on_submit();
            }>
                <input type="text" placeholder="Server Name" required node_ref=name_ref />
                <Show when=move || state.error().is_some()>
                    <p class=style::form_error>
                        {move || state.error().map(|error| error.message).unwrap_or_default()}
                    </p>
                </Show>
                <button type="submit" disabled=move || state.in_flight()>
                    {move || if state.in_flight() { "Creating..." } else { "Create" }}
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn second_submit_while_pending_is_rejected() {
        let owner = Owner::new();
        owner.set();

        let state = SubmitState::new();
        assert!(state.try_begin());
        assert!(state.in_flight());
        assert!(!state.try_begin());
    }

    #[test]
    fn failure_clears_in_flight_and_keeps_the_error() {
        let owner = Owner::new();
        owner.set();

        let state = SubmitState::new();
        assert!(state.try_begin());
        state.finish(Err(ApiError {
            message: "Name is too long.".to_string(),
            path: Some("name".to_string()),
        }));

        assert!(!state.in_flight());
        let error = state.error().unwrap();
        assert_eq!(error.message, "Name is too long.");
        assert_eq!(error.path.as_deref(), Some("name"));
    }

    #[test]
    fn later_success_clears_the_error() {
        let owner = Owner::new();
        owner.set();

        let state = SubmitState::new();
        state.try_begin();
        state.finish(Err(ApiError::new("taken")));
        assert!(state.error().is_some());

        assert!(state.try_begin());
        state.finish(Ok(()));
        assert!(state.error().is_none());
        assert!(!state.in_flight());
    }
}
