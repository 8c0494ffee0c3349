//! Tracing setup for the `gigforge` binary
//!
//! Logs go to stderr so document bytes written to stdout stay clean.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "gigforge=debug,info"
    } else {
        "warn"
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` wins over `verbose`. Calling this twice is a no-op.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "warn");
        assert!(default_directive(true).contains("debug"));
    }

    #[test]
    fn test_init_twice() {
        init(false);
        init(true);
    }
}
