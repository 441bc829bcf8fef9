use utm::api::{create_router, ServerConfig};
use utm::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing("info");

    let config = ServerConfig::from_env()?;
    let app = create_router();

    let listener = tokio::net::TcpListener::bind(config.addr).await?;

    tracing::info!(addr = %config.addr, "UTM conversion API listening");
    tracing::info!("GET  /api/to-utm?latitude=<lat>&longitude=<lon>[&unit=degrees|radians]");
    tracing::info!("GET  /api/to-latlon?easting=<e>&northing=<n>&zone=<z>[&hemisphere=north|south][&unit=...]");
    tracing::info!("POST /api/upload (multipart/form-data: csv file [+ unit])");

    axum::serve(listener, app).await?;
    Ok(())
}
