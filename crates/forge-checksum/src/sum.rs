use core::net::Ipv4Addr;

/// Byte offset of the header checksum inside an IPv4 header.
pub const IPV4_CHECKSUM_OFFSET: usize = 10;

/// Rolling one's-complement sum.
///
/// The accumulator is folded after every word, so it never exceeds `0xffff` and can absorb an
/// arbitrary amount of data. Input may arrive in slices of any length: an odd trailing byte is
/// held until the next call supplies its partner, and is padded with zero only when the sum is
/// read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Checksum {
    acc: u32,
    odd: Option<u8>,
}

impl Checksum {
    pub const fn new() -> Self {
        Self { acc: 0, odd: None }
    }

    /// Adds a big-endian word at the current stream position.
    pub fn add_u16(&mut self, word: u16) {
        match self.odd {
            None => self.fold_in(word),
            Some(_) => self.add_bytes(&word.to_be_bytes()),
        }
    }

    /// Adds `bytes` at the current stream position. An odd-length slice leaves its last byte
    /// pending for the next call.
    pub fn add_bytes(&mut self, mut bytes: &[u8]) {
        if let Some(hi) = self.odd.take() {
            match bytes {
                [] => {
                    self.odd = Some(hi);
                    return;
                }
                [lo, rest @ ..] => {
                    self.fold_in(u16::from_be_bytes([hi, *lo]));
                    bytes = rest;
                }
            }
        }
        let mut chunks = bytes.chunks_exact(2);
        for chunk in &mut chunks {
            self.fold_in(u16::from_be_bytes([chunk[0], chunk[1]]));
        }
        if let [last] = chunks.remainder() {
            self.odd = Some(*last);
        }
    }

    /// The folded sum, not complemented. A pending odd byte counts as zero-padded.
    pub fn sum(&self) -> u16 {
        let mut total = *self;
        if let Some(hi) = total.odd.take() {
            total.fold_in(u16::from_be_bytes([hi, 0]));
        }
        total.acc as u16
    }

    /// The value that goes into a header checksum field (host byte order).
    pub fn finish(&self) -> u16 {
        !self.sum()
    }

    fn fold_in(&mut self, word: u16) {
        let sum = self.acc + u32::from(word);
        self.acc = (sum & 0xffff) + (sum >> 16);
    }
}

pub fn ones_complement_sum(bytes: &[u8]) -> u16 {
    let mut csum = Checksum::new();
    csum.add_bytes(bytes);
    csum.sum()
}

/// RFC 1071 checksum of `bytes`.
pub fn internet_checksum(bytes: &[u8]) -> u16 {
    !ones_complement_sum(bytes)
}

/// Computes the header checksum of an IPv4 header, treating the stored checksum field as zero.
///
/// `header` should be exactly the header (fixed part plus options). Slices shorter than the
/// checksum field are summed as-is.
pub fn ipv4_header_checksum(header: &[u8]) -> u16 {
    let mut csum = Checksum::new();
    match header.get(..IPV4_CHECKSUM_OFFSET) {
        Some(head) => {
            csum.add_bytes(head);
            csum.add_bytes(header.get(IPV4_CHECKSUM_OFFSET + 2..).unwrap_or(&[]));
        }
        None => csum.add_bytes(header),
    }
    csum.finish()
}

/// TCP/UDP checksum over the IPv4 pseudo-header followed by `segment`.
///
/// The segment's own checksum field is summed as stored, so a segment carrying a correct checksum
/// yields `0`.
pub fn transport_checksum_ipv4(src: Ipv4Addr, dst: Ipv4Addr, protocol: u8, segment: &[u8]) -> u16 {
    let mut csum = Checksum::new();
    csum.add_bytes(&src.octets());
    csum.add_bytes(&dst.octets());
    csum.add_u16(u16::from(protocol));
    // Segments longer than 64 KiB cannot be carried by IPv4; the length word wraps like the wire
    // field would.
    csum.add_u16(segment.len() as u16);
    csum.add_bytes(segment);
    csum.finish()
}
