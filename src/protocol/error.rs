use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum CodecError {
    ShortHeader { len: usize },
    IncompleteLabel { needed: usize, available: usize },
    IncompleteName,
    PointerLoop { offset: usize },
    TruncatedQuestion { available: usize },
    LabelTooLong { len: usize },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CodecError::ShortHeader { len } => {
                write!(f, "header needs 12 bytes, datagram has {}", len)
            }
            CodecError::IncompleteLabel { needed, available } => {
                write!(f, "label declares {} bytes, only {} remain", needed, available)
            }
            CodecError::IncompleteName => {
                write!(f, "name runs past the end of the message")
            }
            CodecError::PointerLoop { offset } => {
                write!(f, "compression pointer loop at offset {}", offset)
            }
            CodecError::TruncatedQuestion { available } => {
                write!(
                    f,
                    "question needs 4 bytes for type and class, only {} remain",
                    available
                )
            }
            CodecError::LabelTooLong { len } => {
                write!(f, "label of {} bytes exceeds the 63 byte limit", len)
            }
        }
    }
}

impl Error for CodecError {}
