pub const MAX_DATAGRAM_LEN: usize = 512;

//one received datagram, allocated fresh for every receive
pub struct PacketBuffer {
    buf: [u8; MAX_DATAGRAM_LEN],
    len: usize,
}

impl PacketBuffer {
    pub fn new() -> Self {
        PacketBuffer {
            buf: [0u8; MAX_DATAGRAM_LEN],
            len: 0,
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.buf
    }

    pub fn set_len(&mut self, len: usize) {
        self.len = len;
    }

    pub fn datagram(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}
