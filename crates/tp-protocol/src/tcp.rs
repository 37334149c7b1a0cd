//! Line-framed TCP transport.
//!
//! One persistent connection, opened once.  A request is the JSON message
//! followed by `\n`; a reply is one `\n`-terminated line.
//!
//! The channel keeps strict request/reply lockstep.  If a reply times out,
//! the request stays outstanding: the next `exchange` first waits for (and
//! discards) that late reply before sending anything new, so a reply is
//! never matched to the wrong request.
//!
//! A failed send may leave part of a request on the wire.  The peer would
//! read the next request glued onto it, so after any send error the channel
//! is broken and every later `exchange` fails with
//! [`ChannelError::Closed`].

use std::io::{self, BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream, ToSocketAddrs};
use std::time::Duration;

use tracing::{debug, info, trace, warn};

use tp_core::Action;

use crate::{parse_action, ChannelError, ChannelResult, DecisionChannel, Message};

/// A [`DecisionChannel`] over a single TCP connection.
pub struct TcpDecisionChannel {
    peer:           String,
    writer:         TcpStream,
    reader:         BufReader<TcpStream>,
    /// Bytes of a reply line received so far.
    partial:        Vec<u8>,
    awaiting_reply: bool,
    /// Set when a send failed part-way; the framing can no longer be trusted.
    broken:         bool,
    exchanges:      u64,
}

impl TcpDecisionChannel {
    /// Connect to the decision process at `addr`.
    ///
    /// With `timeout = None` every exchange blocks until the reply arrives,
    /// however long that takes.  With `Some(d)`, a send or receive that
    /// makes no progress for `d` fails with [`ChannelError::Timeout`].
    pub fn connect<A: ToSocketAddrs>(addr: A, timeout: Option<Duration>) -> ChannelResult<Self> {
        let stream = TcpStream::connect(addr)?;
        stream.set_nodelay(true)?;
        stream.set_read_timeout(timeout)?;
        stream.set_write_timeout(timeout)?;

        let peer = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_owned());
        info!(%peer, ?timeout, "connected to decision process");

        let reader = BufReader::new(stream.try_clone()?);
        Ok(Self {
            peer,
            writer: stream,
            reader,
            partial: Vec::new(),
            awaiting_reply: false,
            broken: false,
            exchanges: 0,
        })
    }

    /// Address of the decision process.
    pub fn peer(&self) -> &str {
        &self.peer
    }

    /// Number of completed exchanges.
    pub fn exchanges(&self) -> u64 {
        self.exchanges
    }

    /// `true` while a request has been sent and its reply not yet read.
    pub fn awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    /// `true` once a send has failed; no further exchange is attempted.
    pub fn is_broken(&self) -> bool {
        self.broken
    }

    fn send(&mut self, message: &Message) -> ChannelResult<()> {
        trace!(bytes = message.as_bytes().len(), "sending state message");
        if let Err(e) = write_line(&mut self.writer, message.as_bytes()) {
            self.broken = true;
            warn!(peer = %self.peer, error = %e, "send failed; channel is no longer usable");
            return Err(io_error(e));
        }
        self.awaiting_reply = true;
        Ok(())
    }

    fn receive(&mut self) -> ChannelResult<String> {
        loop {
            match self.reader.read_until(b'\n', &mut self.partial) {
                Ok(_) if self.partial.ends_with(b"\n") => {
                    let line = String::from_utf8_lossy(&self.partial).trim_end().to_owned();
                    self.partial.clear();
                    self.awaiting_reply = false;
                    trace!(reply = %line, "received reply");
                    return Ok(line);
                }
                // EOF, possibly mid-line.
                Ok(_) => return Err(ChannelError::Closed),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(io_error(e)),
            }
        }
    }
}

impl DecisionChannel for TcpDecisionChannel {
    fn exchange(&mut self, message: &Message) -> ChannelResult<Action> {
        if self.broken {
            return Err(ChannelError::Closed);
        }
        if self.awaiting_reply {
            let stale = self.receive()?;
            warn!(reply = %stale, "discarded late reply to an abandoned request");
        }
        self.send(message)?;
        let reply = self.receive()?;
        self.exchanges += 1;
        let action = parse_action(&reply)?;
        debug!(exchange = self.exchanges, %action, "decision received");
        Ok(action)
    }
}

fn write_line(writer: &mut TcpStream, bytes: &[u8]) -> io::Result<()> {
    writer.write_all(bytes)?;
    writer.write_all(b"\n")?;
    writer.flush()
}

fn io_error(e: io::Error) -> ChannelError {
    match e.kind() {
        io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => ChannelError::Timeout,
        io::ErrorKind::BrokenPipe
        | io::ErrorKind::ConnectionReset
        | io::ErrorKind::ConnectionAborted
        | io::ErrorKind::UnexpectedEof => ChannelError::Closed,
        _ => ChannelError::Transport(e),
    }
}

// ── Server side ───────────────────────────────────────────────────────────────

/// Accept one connection on `listener` and answer each request line with
/// `respond(line)`.
///
/// Returning `None` from `respond` closes the connection.  Returns the
/// number of requests answered once the peer disconnects or `respond`
/// stops.
pub fn serve_decisions<F>(listener: &TcpListener, mut respond: F) -> io::Result<u64>
where
    F: FnMut(&str) -> Option<String>,
{
    let (stream, peer) = listener.accept()?;
    info!(%peer, "decision client connected");

    let mut writer = stream.try_clone()?;
    let reader = BufReader::new(stream);
    let mut served = 0;

    for line in reader.lines() {
        let line = line?;
        let Some(reply) = respond(&line) else {
            break;
        };
        writer.write_all(reply.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        served += 1;
    }

    info!(%peer, served, "decision client disconnected");
    Ok(served)
}
