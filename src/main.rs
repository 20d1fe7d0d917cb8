use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use vendor_portal::{config, core::PortalStore, errors::Result, session::Session};

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, non-fatal since variables can be set externally
    dotenvy::dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load fixtures and login settings
    let app_config = config::load_app_configuration()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;

    // 4. Seed the store
    let store = PortalStore::from_fixtures(app_config.fixtures);

    // 5. Log in and show the dashboard for the configured role
    let mut session = Session::new();
    let Some(user) = app_config.login else {
        warn!(
            "No login configured; set {} and {} to view a dashboard",
            config::users::ROLE_VAR,
            config::users::USER_VAR
        );
        return Ok(());
    };
    session.login(user.role, &user.name)?;

    let dashboard = session.dashboard(&store)?;
    println!("{dashboard}");

    session.logout();
    Ok(())
}
