use robot_core::Bus;

/// A bus that prints every frame instead of driving hardware.
pub struct StdoutBus;

impl Bus for StdoutBus {
    type Error = ();

    fn begin(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        println!("{:02x?}", bytes);
        Ok(())
    }

    fn end(&mut self) {}
}

/// Step delay in milliseconds from the first argument, or `default`.
pub fn step_ms(default: u64) -> u64 {
    std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(default)
}
