use core::fmt;

/// A name or byte that is not in the opcode or register table.
///
/// Both tables fail the same way, so a lookup never yields a default value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LookupError {
    UnknownOpCode,
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::UnknownOpCode => f.write_str("unknown opcode"),
        }
    }
}

/// An error from sending a command, generic over the bus transport error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The opcode name is not in the opcode table.
    UnknownOpCode,

    /// The payload value at `index` does not fit in a byte.
    InvalidByte { index: usize },

    /// The bus transport reported a fault.
    Transmission(E),
}

impl<E> Error<E> {
    /// Returns the transport error, if this is a transmission fault.
    pub fn transmission(&self) -> Option<&E> {
        match self {
            Error::Transmission(error) => Some(error),
            _ => None,
        }
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownOpCode => f.write_str("unknown opcode"),
            Error::InvalidByte { index } => {
                write!(f, "payload value at index {} is not a byte", index)
            }
            Error::Transmission(error) => write!(f, "transmission failed: {:?}", error),
        }
    }
}
