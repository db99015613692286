use monster_catalogue::error::TerminalError;
use monster_catalogue::session::{Session, SessionOptions};
use monster_catalogue::utils::Terminal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Diagnostics go to stderr so they never interleave with the menu.
    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    println!("------------------------------------------------------------",);
    println!("  __  __  ___  _  _ ___ _____ ___ ___    ___   _   ___ ___  ",);
    println!(" |  \\/  |/ _ \\| \\| / __|_   _| __| _ \\  / __| /_\\ | _ \\   \\ ",);
    println!(" | |\\/| | (_) | .` \\__ \\ | | | _||   / | (__ / _ \\|   / |) |",);
    println!(" |_|  |_|\\___/|_|\\_|___/ |_| |___|_|_\\  \\___/_/ \\_\\_|_\\___/ ",);
    println!("                       VERSION:   {}", env!("CARGO_PKG_VERSION"));
    println!("------------------------------------------------------------",);

    let mut session = Session::new(Terminal::stdio(), SessionOptions::default());
    match session.run() {
        Ok(()) => {}
        Err(TerminalError::Closed) => tracing::info!("stdin closed, leaving the catalogue"),
        Err(e) => tracing::error!("{}", e),
    }
}
