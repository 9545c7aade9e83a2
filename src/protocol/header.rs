use crate::protocol::error::CodecError;

pub const HEADER_LEN: usize = 12;
pub const OPCODE_STANDARD_QUERY: u8 = 0;
pub const RCODE_NO_ERROR: u8 = 0;
pub const RCODE_NOT_IMPLEMENTED: u8 = 4;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Header {
    pub id: u16,
    pub response: bool,
    pub opcode: u8,
    pub authoritative: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    pub z: u8,
    pub rcode: u8,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl Header {
    pub fn decode(datagram: &[u8]) -> Result<Self, CodecError> {
        if datagram.len() < HEADER_LEN {
            return Err(CodecError::ShortHeader {
                len: datagram.len(),
            });
        }
        let flags_high = datagram[2];
        let flags_low = datagram[3];
        Ok(Header {
            id: u16::from_be_bytes([datagram[0], datagram[1]]),
            response: flags_high & 0x80 != 0,
            opcode: (flags_high >> 3) & 0x0F,
            authoritative: flags_high & 0x04 != 0,
            truncated: flags_high & 0x02 != 0,
            recursion_desired: flags_high & 0x01 != 0,
            recursion_available: flags_low & 0x80 != 0,
            z: (flags_low >> 4) & 0x07,
            rcode: flags_low & 0x0F,
            question_count: u16::from_be_bytes([datagram[4], datagram[5]]),
            answer_count: u16::from_be_bytes([datagram[6], datagram[7]]),
            authority_count: u16::from_be_bytes([datagram[8], datagram[9]]),
            additional_count: u16::from_be_bytes([datagram[10], datagram[11]]),
        })
    }

    pub fn encode_into(&self, out: &mut Vec<u8>) {
        let flags_high = ((self.response as u8) << 7)
            | ((self.opcode & 0x0F) << 3)
            | ((self.authoritative as u8) << 2)
            | ((self.truncated as u8) << 1)
            | (self.recursion_desired as u8);
        // reserved bits stay zero on the wire whatever z holds
        let flags_low = ((self.recursion_available as u8) << 7) | (self.rcode & 0x0F);
        out.extend(&self.id.to_be_bytes());
        out.push(flags_high);
        out.push(flags_low);
        out.extend(&self.question_count.to_be_bytes());
        out.extend(&self.answer_count.to_be_bytes());
        out.extend(&self.authority_count.to_be_bytes());
        out.extend(&self.additional_count.to_be_bytes());
    }
}
