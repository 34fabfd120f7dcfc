use num_traits::ToPrimitive;

use crate::hal::{Bus, Session};
use crate::{Error, Frame, OpCode, Register};

/// Sends commands to the motor controller firmware over a [`Bus`].
///
/// `Firmware` is not thread-safe: calls must be serialized by the caller,
/// for example by holding it behind a mutex.
pub struct Firmware<B> {
    bus: B,
}

impl<B: Bus> Firmware<B> {
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Build the frame for `op` and `payload` without sending it.
    pub fn frame<P>(op: OpCode, payload: &[P]) -> Result<Frame<'_, P>, Error<B::Error>>
    where
        P: ToPrimitive,
    {
        Frame::new(op, payload)
    }

    /// Send `op` followed by `payload`.
    ///
    /// The frame is validated before the bus is acquired, so a bad payload
    /// never reaches the wire. A transport fault is returned unchanged and
    /// the bus is still released.
    pub fn send<P>(&mut self, op: OpCode, payload: &[P]) -> Result<(), Error<B::Error>>
    where
        P: ToPrimitive,
    {
        let frame = Self::frame(op, payload)?;
        trace!("sending {} with {} payload bytes", op.name(), payload.len());

        let mut session = Session::begin(&mut self.bus).map_err(|error| {
            warn!("failed to acquire bus");
            Error::Transmission(error)
        })?;

        frame.write(&mut session).map_err(|error| {
            warn!("failed to write {} byte frame", frame.wire_len());
            Error::Transmission(error)
        })
    }

    /// Send the opcode called `op_name` followed by `payload`.
    pub fn send_named<P>(&mut self, op_name: &str, payload: &[P]) -> Result<(), Error<B::Error>>
    where
        P: ToPrimitive,
    {
        let op = op_name.parse::<OpCode>().map_err(|_| {
            debug!("unknown opcode name");
            Error::<B::Error>::UnknownOpCode
        })?;
        self.send(op, payload)
    }

    /// Write `value` to `register`.
    pub fn register_write(
        &mut self,
        register: Register,
        value: u8,
    ) -> Result<(), Error<B::Error>> {
        self.send(OpCode::RegisterWrite, &[register.byte(), value])
    }

    pub fn clear_host(&mut self) -> Result<(), Error<B::Error>> {
        self.send::<u8>(OpCode::ClearHost, &[])
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    pub fn free(self) -> B {
        self.bus
    }
}

#[cfg(test)]
mod tests {
    use super::Firmware;
    use crate::hal::mock::{MockBus, MockError};
    use crate::{Error, OpCode, Register};

    #[test]
    fn register_write_frame() {
        let mut firmware = Firmware::new(MockBus::default());
        firmware.send_named("register_write", &[0x01u8, 0xFF]).unwrap();

        let bus = firmware.free();
        assert_eq!(bus.written(), &[0x00, 0x01, 0x01, 0xFF]);
        assert_eq!(bus.begins, 1);
        assert_eq!(bus.ends, 1);
    }

    #[test]
    fn empty_payload_frame() {
        let mut firmware = Firmware::new(MockBus::default());
        firmware.send_named::<u8>("clear_host", &[]).unwrap();

        assert_eq!(firmware.bus().written(), &[0x00, 0x02]);
    }

    #[test]
    fn typed_helpers() {
        let mut firmware = Firmware::new(MockBus::default());
        firmware.register_write(Register::Motor2Direction, 1).unwrap();
        firmware.clear_host().unwrap();

        let bus = firmware.bus();
        assert_eq!(bus.written(), &[0x00, 0x01, 0x04, 0x01, 0x00, 0x02]);
        assert_eq!(bus.begins, 2);
        assert_eq!(bus.ends, 2);
    }

    #[test]
    fn invalid_byte_writes_nothing() {
        let mut firmware = Firmware::new(MockBus::default());
        let result = firmware.send_named("register_write", &[256u16]);

        assert_eq!(result, Err(Error::InvalidByte { index: 0 }));
        let bus = firmware.bus();
        assert_eq!(bus.begins, 0);
        assert_eq!(bus.writes, 0);
        assert_eq!(bus.ends, 0);
    }

    #[test]
    fn unknown_opcode_writes_nothing() {
        let mut firmware = Firmware::new(MockBus::default());

        for name in ["not_a_real_name", "motor1_pulse_width"] {
            let result = firmware.send_named(name, &[0x01u8]);
            assert_eq!(result, Err(Error::UnknownOpCode));
        }
        assert_eq!(firmware.bus().begins, 0);
        assert_eq!(firmware.bus().writes, 0);
    }

    #[test]
    fn long_payload() {
        let mut firmware = Firmware::new(MockBus::default());
        firmware.send_named("raise_if_equal", &[0u8; 9]).unwrap();

        let payload: [u8; 40] = core::array::from_fn(|i| i as u8);
        firmware.send(OpCode::SetPinMode, &payload).unwrap();

        let bus = firmware.bus();
        assert_eq!(&bus.written()[..11], &[0x00, 0x03, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(&bus.written()[11..13], &[0x00, 0x05]);
        assert_eq!(&bus.written()[13..], &payload);
        assert_eq!(bus.begins, 2);
        assert_eq!(bus.ends, 2);
    }

    #[test]
    fn invalid_byte_late_in_long_payload_writes_nothing() {
        let mut payload = [0u16; 40];
        payload[33] = 300;

        let mut firmware = Firmware::new(MockBus::default());
        let result = firmware.send(OpCode::SetPinMode, &payload);

        assert_eq!(result, Err(Error::InvalidByte { index: 33 }));
        assert_eq!(firmware.bus().begins, 0);
        assert_eq!(firmware.bus().writes, 0);
    }

    #[test]
    fn write_fault_releases_bus_once() {
        let mut firmware = Firmware::new(MockBus::failing_after(2));
        let result = firmware.send(OpCode::RegisterWrite, &[0x01u8, 0xFF]);

        assert_eq!(result, Err(Error::Transmission(MockError::WriteFault)));
        let bus = firmware.bus();
        assert_eq!(bus.written(), &[0x00, 0x01]);
        assert_eq!(bus.begins, 1);
        assert_eq!(bus.ends, 1);
    }

    #[test]
    fn busy_bus() {
        let mut firmware = Firmware::new(MockBus::busy());
        let result = firmware.clear_host();

        assert_eq!(result, Err(Error::Transmission(MockError::Busy)));
        assert_eq!(firmware.bus().writes, 0);
        assert_eq!(firmware.bus().ends, 0);
    }

    #[test]
    fn borrowed_bus() {
        let mut bus = MockBus::default();
        Firmware::new(&mut bus)
            .register_write(Register::Motor1PulseWidth, 10)
            .unwrap();
        Firmware::new(&mut bus)
            .register_write(Register::Motor2PulseWidth, 20)
            .unwrap();

        assert_eq!(bus.written(), &[0, 1, 1, 10, 0, 1, 2, 20]);
        assert_eq!(bus.ends, 2);
    }

    #[test]
    fn frame_without_sending() {
        let frame = Firmware::<MockBus>::frame(OpCode::RaiseIfLessThan, &[3u8]).unwrap();
        assert_eq!(frame.bytes().collect::<Vec<_>>(), [0x00, 0x04, 0x03]);
    }
}
