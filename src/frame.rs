use num_traits::ToPrimitive;

use crate::hal::{Bus, Session};
use crate::{Error, OpCode};

/// First byte of every frame.
pub const HEADER: u8 = 0x00;

/// Payload bytes converted per bus write.
const CHUNK: usize = 16;

/// A validated command frame: `[HEADER, opcode, payload...]`.
///
/// The frame borrows its payload, so any length can be sent without allocating.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a, P> {
    op: OpCode,
    payload: &'a [P],
}

impl<'a, P: ToPrimitive> Frame<'a, P> {
    /// Build the frame for `op` followed by `payload`.
    ///
    /// Every payload value must fit in a byte.
    pub fn new<E>(op: OpCode, payload: &'a [P]) -> Result<Self, Error<E>> {
        if let Some(index) = payload.iter().position(|value| value.to_u8().is_none()) {
            return Err(Error::InvalidByte { index });
        }
        Ok(Self { op, payload })
    }

    pub fn op_code(&self) -> OpCode {
        self.op
    }

    /// Number of bytes on the wire, header included.
    pub fn wire_len(&self) -> usize {
        self.payload.len() + 2
    }

    /// The frame bytes in wire order.
    pub fn bytes(&self) -> impl Iterator<Item = u8> + 'a {
        [HEADER, self.op.byte()]
            .into_iter()
            .chain(self.payload.iter().map(to_byte))
    }

    /// Write the frame within an acquired session.
    pub fn write<B: Bus>(&self, session: &mut Session<'_, B>) -> Result<(), B::Error> {
        session.write(&[HEADER, self.op.byte()])?;

        let mut buf = [0; CHUNK];
        for values in self.payload.chunks(CHUNK) {
            for (slot, value) in buf.iter_mut().zip(values) {
                *slot = to_byte(value);
            }
            session.write(&buf[..values.len()])?;
        }
        Ok(())
    }
}

// Payloads are checked in `Frame::new`.
fn to_byte<P: ToPrimitive>(value: &P) -> u8 {
    value.to_u8().unwrap_or_default()
}
