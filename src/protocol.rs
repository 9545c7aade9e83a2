pub mod answer;
pub mod error;
pub mod header;
pub mod message;
pub mod name;
pub mod question;

pub use answer::{Answer, StaticAnswer};
pub use error::CodecError;
pub use header::Header;
pub use message::Message;
pub use question::Question;
