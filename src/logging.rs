use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins; otherwise info, or debug with `--verbose`.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "kira_contentmod=debug"
        } else {
            "kira_contentmod=info"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
