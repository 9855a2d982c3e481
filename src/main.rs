use anyhow::Context;
use secure_sdlc_demo::{
    configuration::get_configuration, startup::Application,
    telemetry::setup_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing("secure_sdlc_demo", "info", std::io::stdout);
    let configuration =
        get_configuration().context("Could not read configuration.")?;

    let app = Application::build(configuration)
        .await
        .context("Could not bind the listener.")?;
    app.run_until_stopped().await?;
    Ok(())
}
