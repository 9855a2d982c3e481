use crate::{configuration::Settings, routes};
use axum::{extract::Request, routing, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info_span;
use uuid::Uuid;

pub struct Application {
    port: u16,
    listener: TcpListener,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind(configuration.address()).await?;
        let port = listener.local_addr()?.port();
        tracing::info!(%port, "Listening on {}", configuration.address());
        Ok(Self { port, listener })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        axum::serve(self.listener, router()).await
    }
}

pub fn router() -> Router {
    Router::new()
        .route("/", routing::get(routes::index))
        .route("/greet", routing::get(routes::greet))
        .layer(TraceLayer::new_for_http().make_span_with(
            |request: &Request<_>| {
                let request_id = Uuid::now_v7();
                info_span!("Http Request", %request_id, request_uri = %request.uri())
            },
        ))
}
