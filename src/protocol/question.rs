use crate::protocol::error::CodecError;
use crate::protocol::name;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Question {
    pub name: String,
    pub _type: u16,
    pub class: u16,
}

impl Question {
    pub fn decode(message: &[u8], offset: usize) -> Result<(Self, usize), CodecError> {
        let (name, name_len) = name::decode(message, offset)?;
        let fixed = offset + name_len;
        if message.len() < fixed + 4 {
            return Err(CodecError::TruncatedQuestion {
                available: message.len() - fixed,
            });
        }
        let _type = u16::from_be_bytes([message[fixed], message[fixed + 1]]);
        let class = u16::from_be_bytes([message[fixed + 2], message[fixed + 3]]);
        Ok((
            Question {
                name,
                _type,
                class,
            },
            name_len + 4,
        ))
    }

    pub fn encode_into(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
        name::encode_into(&self.name, out)?;
        out.extend(&self._type.to_be_bytes());
        out.extend(&self.class.to_be_bytes());
        Ok(())
    }
}
