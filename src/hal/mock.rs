use super::Bus;

#[derive(Debug, PartialEq, Eq)]
pub enum MockError {
    Busy,
    WriteFault,
}

/// A bus that records every call.
#[derive(Default)]
pub struct MockBus {
    pub begins: usize,
    pub ends: usize,
    pub writes: usize,
    written: Vec<u8>,
    busy: bool,
    fail_after: Option<usize>,
}

impl MockBus {
    /// A bus that cannot be acquired.
    pub fn busy() -> Self {
        Self {
            busy: true,
            ..Self::default()
        }
    }

    /// A bus that faults once `n` bytes have been written.
    pub fn failing_after(n: usize) -> Self {
        Self {
            fail_after: Some(n),
            ..Self::default()
        }
    }

    pub fn written(&self) -> &[u8] {
        &self.written
    }
}

impl Bus for MockBus {
    type Error = MockError;

    fn begin(&mut self) -> Result<(), Self::Error> {
        self.begins += 1;
        if self.busy {
            Err(MockError::Busy)
        } else {
            Ok(())
        }
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.writes += 1;
        for &byte in bytes {
            if self.fail_after == Some(self.written.len()) {
                return Err(MockError::WriteFault);
            }
            self.written.push(byte);
        }
        Ok(())
    }

    fn end(&mut self) {
        self.ends += 1;
    }
}
