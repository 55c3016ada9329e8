use std::io;
use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}

impl ServerError {
    /// True when the bind failed because another socket holds the address
    pub fn is_addr_in_use(&self) -> bool {
        matches!(
            self,
            ServerError::Bind { source, .. } if source.kind() == io::ErrorKind::AddrInUse
        )
    }
}
