use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};

use crate::models::UserDetails;
use crate::utils::invoke;

#[derive(Serialize)]
struct GetUserDetailsArgs {
    user_id: String,
}

/// Fetches the extended profile payload for a user.
pub async fn get_user_details(user_id: String) -> Result<UserDetails, String> {
    let args = to_value(&GetUserDetailsArgs { user_id }).map_err(|e| e.to_string())?;
    let details = invoke("get_user_details", args)
        .await
        .map_err(|e| e.as_string().unwrap_or_default())?;
    from_value(details).map_err(|e| e.to_string())
}
