use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{
    layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Installs a bunyan formatted JSON subscriber writing to `sink`.
///
/// `RUST_LOG` wins over `level` when set. Calling this more than once is a
/// no-op after the first successful install.
pub fn setup_tracing<Sink>(name: &str, level: &str, sink: Sink)
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "secure_sdlc_demo={},tower_http={}",
            level, level
        ))
    });
    if let Err(e) = tracing_subscriber::registry()
        .with(filter)
        .with(JsonStorageLayer)
        .with(BunyanFormattingLayer::new(name.into(), sink))
        .try_init()
    {
        tracing::debug!("Tracing subscriber already installed: {}", e);
    }
}
