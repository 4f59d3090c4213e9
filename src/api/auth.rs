//! Auth Endpoints

use tracing::info;

use super::{ApiClient, ApiError};
use crate::models::{LoginRequest, LoginResponse};

/// Exchange credentials for a token and store it with the returned profile
pub async fn login(api: &ApiClient, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
    let response: LoginResponse = api.post("/login", credentials).await?;
    api.session().sign_in(&response.token, response.user.as_ref());
    info!("[AUTH] login ok for {}", credentials.email);
    Ok(response)
}
