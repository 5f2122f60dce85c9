use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::JsValue;

use crate::models::{ApiError, Server};
use crate::utils::invoke;

#[derive(Serialize)]
struct CreateServerArgs {
    name: String,
}

/// Asks the service layer to create a server. Validation failures come back
/// as a structured `{message, path}` rejection.
pub async fn create_server(name: String) -> Result<Server, ApiError> {
    let args = to_value(&CreateServerArgs { name })
        .map_err(|e| ApiError::new(e.to_string()))?;
    match invoke("create_server", args).await {
        Ok(value) => from_value::<Server>(value).map_err(|e| ApiError::new(e.to_string())),
        Err(rejection) => Err(parse_rejection(rejection)),
    }
}

fn parse_rejection(rejection: JsValue) -> ApiError {
    from_value::<ApiError>(rejection.clone()).unwrap_or_else(|_| {
        ApiError::new(
            rejection
                .as_string()
                .unwrap_or_else(|| "Request failed".to_string()),
        )
    })
}
