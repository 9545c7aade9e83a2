use crate::protocol::answer::{Answer, StaticAnswer};
use crate::protocol::error::CodecError;
use crate::protocol::header::{
    Header, HEADER_LEN, OPCODE_STANDARD_QUERY, RCODE_NOT_IMPLEMENTED, RCODE_NO_ERROR,
};
use crate::protocol::question::Question;

//only the question section of a request is ever parsed
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<Answer>,
}

impl Message {
    pub fn decode(datagram: &[u8]) -> Result<Self, CodecError> {
        let header = Header::decode(datagram)?;
        let mut questions = Vec::new();
        let mut offset = HEADER_LEN;
        for _ in 0..header.question_count {
            let (question, used) = Question::decode(datagram, offset)?;
            questions.push(question);
            offset += used;
        }
        Ok(Message {
            header,
            questions,
            answers: Vec::new(),
        })
    }

    pub fn build_response(&self, static_answer: &StaticAnswer) -> Message {
        let rcode = if self.header.opcode == OPCODE_STANDARD_QUERY {
            RCODE_NO_ERROR
        } else {
            RCODE_NOT_IMPLEMENTED
        };
        let answers: Vec<Answer> = self
            .questions
            .iter()
            .map(|question| static_answer.answer(question))
            .collect();
        Message {
            header: Header {
                id: self.header.id,
                response: true,
                opcode: self.header.opcode,
                authoritative: false,
                truncated: false,
                recursion_desired: self.header.recursion_desired,
                recursion_available: false,
                z: 0,
                rcode,
                question_count: self.questions.len() as u16,
                answer_count: answers.len() as u16,
                authority_count: 0,
                additional_count: 0,
            },
            questions: self.questions.clone(),
            answers,
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::with_capacity(HEADER_LEN);
        self.header.encode_into(&mut out);
        for question in &self.questions {
            question.encode_into(&mut out)?;
        }
        for answer in &self.answers {
            answer.encode_into(&mut out)?;
        }
        Ok(out)
    }
}
