use tracing::info;
use user_registry::app_system::{run_demo, setup_tracing};

fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting user registry demo");

    let summary = run_demo().map_err(|e| e.to_string())?;

    info!(
        registered = summary.registered,
        active = summary.active_ids.len(),
        "Demo completed successfully"
    );
    Ok(())
}
