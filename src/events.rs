use std::io;
use std::net::SocketAddr;

use crate::protocol::{CodecError, Message};

//injected at construction, tests swap in a recording sink
pub trait EventSink: Send + Sync {
    fn query_received(&self, query: &Message);

    fn datagram_dropped(&self, peer: SocketAddr, error: &CodecError);

    fn write_failure(&self, peer: SocketAddr, error: &io::Error);

    fn read_failure(&self, error: &io::Error);
}

pub struct LogSink;

impl EventSink for LogSink {
    fn query_received(&self, query: &Message) {
        debug!("dns query: {:?}", query);
    }

    fn datagram_dropped(&self, peer: SocketAddr, error: &CodecError) {
        error!("drop datagram from {}: {}", peer, error);
    }

    fn write_failure(&self, peer: SocketAddr, error: &io::Error) {
        error!("send reply to {} failed: {}", peer, error);
    }

    fn read_failure(&self, error: &io::Error) {
        error!("recv error: {:?}", error);
    }
}
