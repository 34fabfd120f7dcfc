use core::str::FromStr;

use crate::error::LookupError;

/// Firmware-side registers addressed by [`OpCode::RegisterWrite`](crate::OpCode::RegisterWrite).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    Motor1PulseWidth = 0x01,
    Motor2PulseWidth = 0x02,
    Motor1Direction = 0x03,
    Motor2Direction = 0x04,
    Adc1 = 0x05,
    Gpio1 = 0x06,
}

impl Register {
    /// Every register, in table order.
    pub const ALL: [Register; 6] = [
        Register::Motor1PulseWidth,
        Register::Motor2PulseWidth,
        Register::Motor1Direction,
        Register::Motor2Direction,
        Register::Adc1,
        Register::Gpio1,
    ];

    /// Look up the byte value of the register called `name`.
    pub fn resolve(name: &str) -> Result<u8, LookupError> {
        name.parse::<Self>().map(Self::byte)
    }

    /// The byte sent on the wire.
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// The symbolic name accepted by [`Register::resolve`].
    pub const fn name(self) -> &'static str {
        match self {
            Register::Motor1PulseWidth => "motor1_pulse_width",
            Register::Motor2PulseWidth => "motor2_pulse_width",
            Register::Motor1Direction => "motor1_direction",
            Register::Motor2Direction => "motor2_direction",
            Register::Adc1 => "adc1",
            Register::Gpio1 => "gpio1",
        }
    }
}

impl FromStr for Register {
    type Err = LookupError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|register| register.name() == name)
            .ok_or(LookupError::UnknownOpCode)
    }
}

impl TryFrom<u8> for Register {
    type Error = LookupError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|register| register.byte() == byte)
            .ok_or(LookupError::UnknownOpCode)
    }
}

impl From<Register> for u8 {
    fn from(register: Register) -> Self {
        register.byte()
    }
}
