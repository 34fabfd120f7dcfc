mod builder;
pub use builder::Builder;

use core::convert::Infallible;
use core::fmt;

use embedded_hal::blocking::spi::Write;
use embedded_hal::digital::v2::OutputPin;

use super::Bus;

/// A [`Bus`] over an `embedded-hal` SPI peripheral with an active-low chip select.
pub struct SpiBus<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI, CS> SpiBus<SPI, CS>
where
    SPI: Write<u8>,
    CS: OutputPin,
{
    pub fn new(spi: SPI, cs: CS) -> Self {
        Self { spi, cs }
    }

    pub fn free(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

impl<SPI, CS> Bus for SpiBus<SPI, CS>
where
    SPI: Write<u8>,
    CS: OutputPin,
{
    type Error = SpiError<SPI::Error, CS::Error>;

    fn begin(&mut self) -> Result<(), Self::Error> {
        self.cs.set_low().map_err(SpiError::ChipSelect)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.spi.write(bytes).map_err(SpiError::Spi)
    }

    fn end(&mut self) {
        if self.cs.set_high().is_err() {
            warn!("failed to deselect chip");
        }
    }
}

/// Chip select for buses where the peripheral drives CS itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoChipSelect;

impl OutputPin for NoChipSelect {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiError<S, P> {
    Spi(S),
    ChipSelect(P),
}

impl<S: fmt::Debug, P: fmt::Debug> fmt::Display for SpiError<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpiError::Spi(error) => write!(f, "spi write failed: {:?}", error),
            SpiError::ChipSelect(error) => write!(f, "chip select failed: {:?}", error),
        }
    }
}
