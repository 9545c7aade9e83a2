use std::collections::HashSet;

use crate::protocol::error::CodecError;

const POINTER_TAG: u8 = 0xC0;
const POINTER_OFFSET_HIGH: u8 = 0x3F;
const MAX_LABEL_LEN: usize = 63;

pub fn encode(name: &str) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::with_capacity(name.len() + 2);
    encode_into(name, &mut out)?;
    Ok(out)
}

pub fn encode_into(name: &str, out: &mut Vec<u8>) -> Result<(), CodecError> {
    for label in name.split('.') {
        if label.len() > MAX_LABEL_LEN {
            return Err(CodecError::LabelTooLong { len: label.len() });
        }
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    Ok(())
}

//returns the dotted name and the bytes consumed at start itself, frozen
//at pointer position + 2 once the first pointer is followed
pub fn decode(message: &[u8], start: usize) -> Result<(String, usize), CodecError> {
    let mut labels: Vec<String> = Vec::new();
    let mut visited: HashSet<usize> = HashSet::new();
    let mut consumed = None;
    let mut pos = start;

    loop {
        let flag = *message.get(pos).ok_or(CodecError::IncompleteName)?;
        if flag & POINTER_TAG == POINTER_TAG {
            let low = *message.get(pos + 1).ok_or(CodecError::IncompleteName)?;
            let target = usize::from(u16::from_be_bytes([flag & POINTER_OFFSET_HIGH, low]));
            if target >= message.len() {
                return Err(CodecError::IncompleteName);
            }
            if !visited.insert(target) {
                return Err(CodecError::PointerLoop { offset: target });
            }
            if consumed.is_none() {
                consumed = Some(pos + 2 - start);
            }
            pos = target;
            continue;
        }
        if flag == 0 {
            // after a followed pointer pos may sit before start, so the
            // in-place count must only be computed lazily
            return Ok((labels.join("."), consumed.unwrap_or_else(|| pos + 1 - start)));
        }
        let len = flag as usize;
        let end = pos + 1 + len;
        if end > message.len() {
            return Err(CodecError::IncompleteLabel {
                needed: len,
                available: message.len() - pos - 1,
            });
        }
        labels.push(String::from_utf8_lossy(&message[pos + 1..end]).into_owned());
        pos = end;
    }
}
