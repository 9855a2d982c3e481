use axum::Json;

const WELCOME_MESSAGE: &str = "Welcome to Secure SDLC Demo!";

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct WelcomeResponse {
    pub message: String,
}

#[tracing::instrument(name = "Welcome page")]
pub async fn index() -> Json<WelcomeResponse> {
    tracing::info!("Welcome message requested.");
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}
