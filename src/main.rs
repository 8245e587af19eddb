use std::process::exit;

use is_terminal::IsTerminal;
use server_icon_fix::{config::SearchPaths, prompt::DialogPrompter, run};
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const SERVER_ICON: &[u8] = include_bytes!("../res/server-icon.png");

// NOTE: run with, e.g. `RUST_LOG=debug server-icon-fix` for detailed logs
fn main() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .without_time()
                .with_line_number(true)
                // Don't output colours for logs not being printed to a terminal
                .with_ansi(std::io::stdout().is_terminal()),
        )
        .with(EnvFilter::from_default_env())
        .init();

    let search_paths = match SearchPaths::detect() {
        Ok(search_paths) => search_paths,
        Err(e) => {
            error!("{e}");
            exit(1);
        }
    };

    let outcome = run(&search_paths, &DialogPrompter, SERVER_ICON);
    debug!("Finished with {outcome:?}");
}
