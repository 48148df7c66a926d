use std::env;

use tracing_subscriber::EnvFilter;

pub fn command_line_str() -> String {
    let args: Vec<String> = env::args().collect();

    args.join(" ")
}

/// round `value` to `digits` decimal places.
///
/// rounding is done on the exact binary value through its decimal text, ties to even:
/// 0.125 -> 0.12, 0.375 -> 0.38, 0.05 -> 0.1 (0.05 is stored just above the tie).
/// non finite values and precisions beyond f64 are returned untouched
pub fn round_to(value: f64, digits: u32) -> f64 {
    if digits > 15 || !value.is_finite() {
        return value;
    }
    format!("{:.*}", digits as usize, value)
        .parse::<f64>()
        .unwrap_or(value)
}

/// stderr logger for the binaries. level comes from `RUST_LOG`, `warn` if unset
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
