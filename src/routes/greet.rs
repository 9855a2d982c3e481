use axum::{extract::Query, Json};

use crate::domain::SanitizedName;

#[derive(Debug)]
pub struct GreetingRequest {
    pub name: String,
}

impl From<Vec<(String, String)>> for GreetingRequest {
    // A repeated `name` keeps its first value.
    fn from(pairs: Vec<(String, String)>) -> Self {
        let name = pairs
            .into_iter()
            .find(|(key, _)| key == "name")
            .map(|(_, value)| value)
            .unwrap_or_default();
        Self { name }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct GreetingResponse {
    pub greeting: String,
}

impl From<&SanitizedName> for GreetingResponse {
    fn from(name: &SanitizedName) -> Self {
        Self {
            greeting: format!("Hello, {}!", name),
        }
    }
}

// The raw name never reaches the span, only its sanitized form.
#[tracing::instrument(
    name = "User greeting",
    skip(pairs),
    fields(sanitized_name = tracing::field::Empty)
)]
pub async fn greet(
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<GreetingResponse> {
    let request = GreetingRequest::from(pairs);
    let name = SanitizedName::from(request.name);
    tracing::Span::current().record("sanitized_name", name.as_ref());
    tracing::info!("Greeting requested.");
    Json(GreetingResponse::from(&name))
}
