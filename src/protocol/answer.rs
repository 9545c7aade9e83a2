use std::net::Ipv4Addr;

use crate::protocol::error::CodecError;
use crate::protocol::name;
use crate::protocol::question::Question;

//write only, answers are never parsed out of a request
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Answer {
    pub name: String,
    pub _type: u16,
    pub class: u16,
    pub ttl: u32,
    pub rdata: Vec<u8>,
}

impl Answer {
    pub fn encode_into(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
        name::encode_into(&self.name, out)?;
        out.extend(&self._type.to_be_bytes());
        out.extend(&self.class.to_be_bytes());
        out.extend(&self.ttl.to_be_bytes());
        out.extend(&(self.rdata.len() as u16).to_be_bytes());
        out.extend(&self.rdata);
        Ok(())
    }
}

//the one record this server ever hands out
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct StaticAnswer {
    pub address: Ipv4Addr,
    pub ttl: u32,
}

impl StaticAnswer {
    pub fn new(address: Ipv4Addr, ttl: u32) -> Self {
        StaticAnswer { address, ttl }
    }

    pub fn answer(&self, question: &Question) -> Answer {
        Answer {
            name: question.name.clone(),
            _type: question._type,
            class: question.class,
            ttl: self.ttl,
            rdata: self.address.octets().to_vec(),
        }
    }
}
