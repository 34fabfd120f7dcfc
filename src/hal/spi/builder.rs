use embedded_hal::blocking::spi::Write;
use embedded_hal::digital::v2::OutputPin;

use super::{NoChipSelect, SpiBus};

pub struct Builder<CS> {
    cs: CS,
}

impl Default for Builder<NoChipSelect> {
    fn default() -> Self {
        Self { cs: NoChipSelect }
    }
}

impl<CS> Builder<CS> {
    /// Drive `pin` low while the bus is acquired.
    pub fn chip_select<P>(self, pin: P) -> Builder<P>
    where
        P: OutputPin,
    {
        Builder { cs: pin }
    }

    pub fn build<SPI>(self, spi: SPI) -> SpiBus<SPI, CS>
    where
        SPI: Write<u8>,
        CS: OutputPin,
    {
        SpiBus::new(spi, self.cs)
    }
}
