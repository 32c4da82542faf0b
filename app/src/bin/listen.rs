//! Terminal notification listener: connects to a push hub's `/ws/ui` and
//! prints each notification as a toast.

use tokio_util::sync::CancellationToken;
use ui_bridge_lib::notifier::{self, ConsoleRenderer};
use ui_bridge_lib::services::log_buffer::LogBuffer;
use ui_events::Toaster;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let logs = LogBuffer::default();
    ui_bridge_lib::init_tracing(&logs);

    let config = ui_bridge_lib::init_foundation()?;
    let toaster = Toaster::new(config.toast_config(), ConsoleRenderer);
    if config.demo_toast {
        notifier::show_demo(&toaster);
    }

    let shutdown = CancellationToken::new();
    let ctrl_c = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutting down...");
        }
        ctrl_c.cancel();
    });

    notifier::run(&toaster, config.listener_config()?, shutdown).await
}
