#[macro_use]
extern crate log;

mod buffer;
mod config;
mod events;
mod protocol;
mod server;
mod system;

use std::env;
use std::sync::Arc;

use simple_logger::SimpleLogger;

use crate::events::LogSink;
use crate::protocol::StaticAnswer;
use crate::server::{DnsServer, StubResponder};
use crate::system::Result;

//dig @127.0.0.1 -p 2053 example.com
#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load(env::args())?;
    SimpleLogger::new().with_level(config.log_level).init()?;
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl_c event");
        std::process::exit(0);
    });
    let events = Arc::new(LogSink);
    let static_answer = StaticAnswer::new(config.answer_address, config.answer_ttl);
    let handler = Arc::new(StubResponder::new(static_answer, events.clone()));
    let server = DnsServer::bind(&config.bind_address, handler, events).await?;
    info!("listening on {}", server.local_addr()?);
    server.run().await
}
