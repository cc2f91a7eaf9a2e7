use clarg::ConsoleInterface;

#[cfg(feature = "tracing_debug")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    #[cfg(feature = "tracing_debug")]
    init_tracing();

    let program = std::env::args()
        .next()
        .unwrap_or_else(|| "gentest".to_string());
    let tokens = clarg::args();
    let tokens: Vec<&str> = tokens.iter().map(String::as_str).collect();

    if let Err(code) = gentest::run(&program, &tokens, &ConsoleInterface::default()) {
        std::process::exit(code);
    }
}
