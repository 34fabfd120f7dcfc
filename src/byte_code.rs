use core::str::FromStr;

use crate::error::LookupError;

/// Operations understood by the motor controller firmware.
///
/// Each opcode is sent as the second byte of a [`Frame`](crate::Frame).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum OpCode {
    RegisterWrite = 0x01,
    ClearHost = 0x02,
    RaiseIfEqual = 0x03,
    RaiseIfLessThan = 0x04,
    SetPinMode = 0x05,
    RaiseIfGreaterThan = 0x06,
}

impl OpCode {
    /// Every opcode, in table order.
    pub const ALL: [OpCode; 6] = [
        OpCode::RegisterWrite,
        OpCode::ClearHost,
        OpCode::RaiseIfEqual,
        OpCode::RaiseIfLessThan,
        OpCode::SetPinMode,
        OpCode::RaiseIfGreaterThan,
    ];

    /// Look up the byte value of the opcode called `name`.
    pub fn resolve(name: &str) -> Result<u8, LookupError> {
        name.parse::<Self>().map(Self::byte)
    }

    /// The byte sent on the wire.
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// The symbolic name accepted by [`OpCode::resolve`].
    pub const fn name(self) -> &'static str {
        match self {
            OpCode::RegisterWrite => "register_write",
            OpCode::ClearHost => "clear_host",
            OpCode::RaiseIfEqual => "raise_if_equal",
            OpCode::RaiseIfLessThan => "raise_if_less_than",
            OpCode::SetPinMode => "set_pin_mode",
            OpCode::RaiseIfGreaterThan => "raise_if_greater_than",
        }
    }
}

impl FromStr for OpCode {
    type Err = LookupError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == name)
            .ok_or(LookupError::UnknownOpCode)
    }
}

impl TryFrom<u8> for OpCode {
    type Error = LookupError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|op| op.byte() == byte)
            .ok_or(LookupError::UnknownOpCode)
    }
}

impl From<OpCode> for u8 {
    fn from(op: OpCode) -> Self {
        op.byte()
    }
}
