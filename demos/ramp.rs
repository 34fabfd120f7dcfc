//! Ramp motor 1's pulse width through every value, one step at a time.
//!
//! Each value is sent as a framed `register_write` command rather than a raw byte.

mod stdout_bus;

use std::{thread, time::Duration};

use robot_core::{Firmware, Register};
use stdout_bus::{step_ms, StdoutBus};

fn main() {
    let step = Duration::from_millis(step_ms(1000));
    let mut firmware = Firmware::new(StdoutBus);

    for width in 0..=u8::MAX {
        println!("{}", width);
        firmware
            .register_write(Register::Motor1PulseWidth, width)
            .unwrap();
        thread::sleep(step);
    }
}
