//! Bus transport abstraction.

#[cfg(test)]
pub(crate) mod mock;

pub mod spi;
pub use spi::{NoChipSelect, SpiBus, SpiError};

/// A synchronous peripheral bus that is acquired, written, and released.
///
/// Clock rate and pin configuration belong to whoever constructs the bus.
pub trait Bus {
    type Error;

    /// Acquire the bus.
    fn begin(&mut self) -> Result<(), Self::Error>;

    /// Write `bytes` in order.
    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Release the bus.
    fn end(&mut self);
}

impl<T: Bus + ?Sized> Bus for &mut T {
    type Error = T::Error;

    fn begin(&mut self) -> Result<(), Self::Error> {
        (&mut **self).begin()
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        (&mut **self).write(bytes)
    }

    fn end(&mut self) {
        (&mut **self).end()
    }
}

/// An acquired bus. The bus is released when the session is dropped.
pub struct Session<'a, B: Bus> {
    bus: &'a mut B,
}

impl<'a, B: Bus> Session<'a, B> {
    pub fn begin(bus: &'a mut B) -> Result<Self, B::Error> {
        bus.begin()?;
        trace!("bus acquired");
        Ok(Self { bus })
    }

    pub fn write(&mut self, bytes: &[u8]) -> Result<(), B::Error> {
        self.bus.write(bytes)
    }
}

impl<B: Bus> Drop for Session<'_, B> {
    fn drop(&mut self) {
        self.bus.end();
        trace!("bus released");
    }
}
