use driver_tracker::{router, AppState};
use driver_tracker::storage::{customers_path, load_customers, load_user, resolve_data_dir, user_path};
use std::{env, net::SocketAddr};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_dir = resolve_data_dir()?;
    fs::create_dir_all(&data_dir).await?;

    let customers_path = customers_path(&data_dir);
    let user_path = user_path(&data_dir);
    let customers = load_customers(&customers_path).await;
    let user = load_user(&user_path).await;

    let state = AppState::new(customers_path, user_path, customers, user);
    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
