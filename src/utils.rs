use tracing::subscriber::SetGlobalDefaultError;
use tracing::Level;

/// Installs a compact fmt subscriber as the global default. Library code only
/// emits events; binaries decide whether and where they are printed.
pub fn install_logger(verbose: bool) -> Result<(), SetGlobalDefaultError> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}
