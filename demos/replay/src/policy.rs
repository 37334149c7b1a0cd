//! Accept loop for the constant-action decision process.

use std::net::TcpListener;
use std::thread;
use std::time::Duration;

use tracing::{debug, info, warn};

use tp_core::Action;
use tp_protocol::{decode_message, serve_decisions};

/// Pause after a failed session before accepting again.
const RETRY_DELAY: Duration = Duration::from_millis(200);

/// Answer every state message with `action`, one client at a time.
///
/// A session that ends in an I/O error is logged and the next client is
/// accepted.  Returns after `max_sessions` sessions, or never with `None`.
pub fn serve_constant(listener: &TcpListener, action: Action, max_sessions: Option<u64>) -> u64 {
    let reply = format!("{} {}", action.acceleration, action.turn_rate);
    let mut sessions = 0;

    while max_sessions != Some(sessions) {
        let result = serve_decisions(listener, |request| {
            match decode_message(request) {
                Ok(state) => debug!(n_vehicles = state.vehicle_defs.n_vehicles(), "state message"),
                Err(e)    => warn!(error = %e, "undecodable state message"),
            }
            Some(reply.clone())
        });
        sessions += 1;

        match result {
            Ok(served) => info!(session = sessions, served, "session ended"),
            Err(e) => {
                warn!(session = sessions, error = %e, "session failed");
                thread::sleep(RETRY_DELAY);
            }
        }
    }
    sessions
}
