//! Cancellation wiring for traversal commands
//!
//! Ctrl-C sets the shared flag; `--timeout-ms` (or the store's configured
//! traversal timeout) adds a deadline.

use std::time::Duration;

use crate::cli::Cli;
use pathfinder_core::graph::CancelToken;
use pathfinder_core::store::GraphStore;

/// Effective traversal deadline. An explicit `--timeout-ms 0` disables the
/// configured one.
pub fn effective_timeout(cli_timeout_ms: Option<u64>, store: &GraphStore) -> Option<Duration> {
    match cli_timeout_ms {
        Some(0) => None,
        Some(ms) => Some(Duration::from_millis(ms)),
        None => store.config().traversal_timeout(),
    }
}

/// Build the token for one traversal and hook it up to Ctrl-C
pub fn traversal_token(cli: &Cli, store: &GraphStore) -> CancelToken {
    let token = CancelToken::new();
    let interrupted = token.clone();

    if let Err(e) = ctrlc::set_handler(move || {
        interrupted.cancel();
    }) {
        tracing::warn!(error = %e, "failed to install interrupt handler");
    }

    match effective_timeout(cli.timeout_ms, store) {
        Some(timeout) => {
            tracing::debug!(timeout = ?timeout, "traversal deadline set");
            token.with_deadline_from_now(timeout)
        }
        None => token,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathfinder_core::config::StoreConfig;

    #[test]
    fn test_effective_timeout() {
        let mut config = StoreConfig::default();
        config.traversal.timeout_ms = 500;
        let store = GraphStore::in_memory(config);

        assert_eq!(
            effective_timeout(None, &store),
            Some(Duration::from_millis(500))
        );
        assert_eq!(
            effective_timeout(Some(20), &store),
            Some(Duration::from_millis(20))
        );
        assert_eq!(effective_timeout(Some(0), &store), None);
    }
}
