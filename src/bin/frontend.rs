use workflow_example::{config::Config, server, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    let config = Config::frontend()?;

    let listener = server::bind(&config).await?;
    server::serve(listener, server::frontend_router()).await
}
