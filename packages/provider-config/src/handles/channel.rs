//! Socket channel factory seam

use std::fmt;
use std::io;
use std::net::SocketAddr;

use futures::future::BoxFuture;
use tokio::net::TcpStream;

/// Opens the raw client sockets the transport runs HTTP over
///
/// Supplying one lets callers share socket setup (and its worker threads)
/// between several clients.
pub trait SocketChannelFactory: Send + Sync + fmt::Debug {
    fn new_channel(&self, remote: SocketAddr) -> BoxFuture<'static, io::Result<TcpStream>>;
}
