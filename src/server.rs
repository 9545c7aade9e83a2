use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::UdpSocket;

use crate::buffer::PacketBuffer;
use crate::events::EventSink;
use crate::protocol::{CodecError, Message, StaticAnswer};
use crate::system::Result;

//turns one request datagram into one reply datagram
pub trait MessageHandler: Send + Sync {
    fn handle(&self, datagram: &[u8]) -> std::result::Result<Vec<u8>, CodecError>;
}

pub struct StubResponder {
    static_answer: StaticAnswer,
    events: Arc<dyn EventSink>,
}

impl StubResponder {
    pub fn new(static_answer: StaticAnswer, events: Arc<dyn EventSink>) -> Self {
        StubResponder {
            static_answer,
            events,
        }
    }
}

impl MessageHandler for StubResponder {
    fn handle(&self, datagram: &[u8]) -> std::result::Result<Vec<u8>, CodecError> {
        let query = Message::decode(datagram)?;
        self.events.query_received(&query);
        let response = query.build_response(&self.static_answer);
        response.encode()
    }
}

pub struct DnsServer {
    socket: Arc<UdpSocket>,
    handler: Arc<dyn MessageHandler>,
    events: Arc<dyn EventSink>,
}

impl DnsServer {
    //only a failed bind is fatal, later errors go through the sink
    pub async fn bind(
        address: &str,
        handler: Arc<dyn MessageHandler>,
        events: Arc<dyn EventSink>,
    ) -> Result<Self> {
        let socket = Arc::new(UdpSocket::bind(address).await?);
        Ok(DnsServer {
            socket,
            handler,
            events,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }

    pub async fn run(&self) -> Result<()> {
        loop {
            match self.recv_datagram().await {
                Ok((buffer, peer)) => self.dispatch(buffer, peer),
                Err(e) => self.events.read_failure(&e),
            }
        }
    }

    async fn recv_datagram(&self) -> io::Result<(PacketBuffer, SocketAddr)> {
        let mut buffer = PacketBuffer::new();
        let (len, peer) = self.socket.recv_from(buffer.as_mut_slice()).await?;
        buffer.set_len(len);
        Ok((buffer, peer))
    }

    //every datagram is handled on its own task with its own buffer copy
    fn dispatch(&self, buffer: PacketBuffer, peer: SocketAddr) {
        let socket = self.socket.clone();
        let handler = self.handler.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            match handler.handle(buffer.datagram()) {
                Ok(reply) => {
                    if let Err(e) = socket.send_to(reply.as_slice(), peer).await {
                        events.write_failure(peer, &e);
                    }
                }
                Err(e) => events.datagram_dropped(peer, &e),
            }
        });
    }
}

#[cfg(test)]
pub mod tests {
    use std::io;
    use std::net::SocketAddr;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use tokio::net::UdpSocket;
    use tokio::time::{sleep, timeout};

    use crate::events::EventSink;
    use crate::protocol::message::tests::{get_valid_query, get_valid_query_bytes};
    use crate::protocol::{CodecError, Message, StaticAnswer};
    use crate::server::{DnsServer, MessageHandler, StubResponder};

    pub struct RecordingSink {
        pub queries: Mutex<Vec<Message>>,
        pub dropped: Mutex<Vec<(SocketAddr, CodecError)>>,
    }

    impl RecordingSink {
        pub fn new() -> Self {
            RecordingSink {
                queries: Mutex::new(Vec::new()),
                dropped: Mutex::new(Vec::new()),
            }
        }
    }

    impl EventSink for RecordingSink {
        fn query_received(&self, query: &Message) {
            self.queries.lock().unwrap().push(query.clone());
        }

        fn datagram_dropped(&self, peer: SocketAddr, error: &CodecError) {
            self.dropped.lock().unwrap().push((peer, error.clone()));
        }

        fn write_failure(&self, _peer: SocketAddr, _error: &io::Error) {}

        fn read_failure(&self, _error: &io::Error) {}
    }

    fn get_responder(sink: Arc<RecordingSink>) -> StubResponder {
        StubResponder::new(StaticAnswer::new("8.8.8.8".parse().unwrap(), 60), sink)
    }

    async fn bind_test_server(sink: Arc<RecordingSink>) -> SocketAddr {
        let handler = Arc::new(get_responder(sink.clone()));
        let server = DnsServer::bind("127.0.0.1:0", handler, sink)
            .await
            .unwrap();
        let address = server.local_addr().unwrap();
        tokio::spawn(async move {
            server.run().await.unwrap();
        });
        address
    }

    #[test]
    fn should_reply_with_answer_when_handle_given_valid_query() {
        let responder = get_responder(Arc::new(RecordingSink::new()));

        let reply = responder.handle(&get_valid_query_bytes()).unwrap();

        let response = Message::decode(&reply).unwrap();
        assert_eq!(0x1234, response.header.id);
        assert_eq!(true, response.header.response);
        assert_eq!(1, response.header.answer_count);
        assert_eq!("codecrafters.io", response.questions[0].name)
    }

    #[test]
    fn should_record_query_when_handle_given_valid_query() {
        let sink = Arc::new(RecordingSink::new());
        let responder = get_responder(sink.clone());

        responder.handle(&get_valid_query_bytes()).unwrap();

        let queries = sink.queries.lock().unwrap();
        assert_eq!(1, queries.len());
        assert_eq!("codecrafters.io", queries[0].questions[0].name)
    }

    #[test]
    fn should_fail_when_handle_given_short_datagram() {
        let responder = get_responder(Arc::new(RecordingSink::new()));

        let result = responder.handle(&[0u8; 5]);

        assert_eq!(Err(CodecError::ShortHeader { len: 5 }), result)
    }

    #[tokio::test]
    async fn should_answer_over_udp_when_run_given_standard_query() {
        let sink = Arc::new(RecordingSink::new());
        let address = bind_test_server(sink).await;
        let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();

        client
            .send_to(&get_valid_query_bytes(), address)
            .await
            .unwrap();

        let mut buf = [0u8; 512];
        let (len, _) = timeout(Duration::from_secs(5), client.recv_from(&mut buf))
            .await
            .unwrap()
            .unwrap();
        let response = Message::decode(&buf[..len]).unwrap();
        assert_eq!(0x1234, response.header.id);
        assert_eq!(true, response.header.response);
        assert_eq!(1, response.header.answer_count);
        assert_eq!("codecrafters.io", response.questions[0].name)
    }

    #[tokio::test]
    async fn should_keep_serving_when_run_given_undecodable_datagram() {
        let sink = Arc::new(RecordingSink::new());
        let address = bind_test_server(sink.clone()).await;
        let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();

        client.send_to(&[0xAB; 4], address).await.unwrap();

        for _ in 0..50 {
            if !sink.dropped.lock().unwrap().is_empty() {
                break;
            }
            sleep(Duration::from_millis(10)).await;
        }
        {
            let dropped = sink.dropped.lock().unwrap();
            assert_eq!(1, dropped.len());
            assert_eq!(client.local_addr().unwrap(), dropped[0].0);
            assert_eq!(CodecError::ShortHeader { len: 4 }, dropped[0].1);
        }

        client
            .send_to(&get_valid_query_bytes(), address)
            .await
            .unwrap();

        let mut buf = [0u8; 512];
        let (len, _) = timeout(Duration::from_secs(5), client.recv_from(&mut buf))
            .await
            .unwrap()
            .unwrap();
        let response = Message::decode(&buf[..len]).unwrap();
        assert_eq!(0x1234, response.header.id)
    }

    #[tokio::test]
    async fn should_serve_each_client_when_run_given_concurrent_queries() {
        let sink = Arc::new(RecordingSink::new());
        let address = bind_test_server(sink).await;
        let mut clients = Vec::new();
        for id in &[0x1111u16, 0x2222, 0x3333] {
            let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();
            let mut query = get_valid_query();
            query.header.id = *id;
            client
                .send_to(&query.encode().unwrap(), address)
                .await
                .unwrap();
            clients.push((*id, client));
        }

        for (id, client) in clients {
            let mut buf = [0u8; 512];
            let (len, _) = timeout(Duration::from_secs(5), client.recv_from(&mut buf))
                .await
                .unwrap()
                .unwrap();
            let response = Message::decode(&buf[..len]).unwrap();
            assert_eq!(id, response.header.id)
        }
    }
}
