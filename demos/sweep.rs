//! Sweep both motors up to full pulse width and back down.

mod stdout_bus;

use std::{thread, time::Duration};

use robot_core::{Error, Firmware, Register};
use stdout_bus::{step_ms, StdoutBus};

fn set_widths(firmware: &mut Firmware<StdoutBus>, width: u8) -> Result<(), Error<()>> {
    firmware.register_write(Register::Motor1PulseWidth, width)?;
    firmware.register_write(Register::Motor2PulseWidth, width)
}

fn main() -> Result<(), Error<()>> {
    let step = Duration::from_millis(step_ms(10));
    let mut firmware = Firmware::new(StdoutBus);

    firmware.register_write(Register::Motor1Direction, 1)?;
    firmware.register_write(Register::Motor2Direction, 1)?;

    for width in (0..=u8::MAX).chain((0..u8::MAX).rev()) {
        set_widths(&mut firmware, width)?;
        thread::sleep(step);
    }

    firmware.clear_host()
}
