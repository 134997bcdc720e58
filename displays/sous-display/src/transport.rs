//! Display transport
//!
//! Frames commands and data for a 4-wire SPI panel. The data/command line
//! is low while an opcode is on the bus and high for parameters and pixel
//! data. Every call blocks until the bus reports completion.
//!
//! The transport is single-use after a failure: the first bus error halts
//! it and every later call returns [`TransportError::Halted`].

use sous_hal::{Delay, OutputPin, SpiBus};

use crate::error::TransportError;

/// Default largest single data write
pub const DEFAULT_MAX_CHUNK: usize = 1024;

/// Reset line settle time between edges
const RESET_SETTLE_MS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unreset,
    Ready,
    Halted,
}

/// Command/data framing over SPI with D/C and reset lines
pub struct DisplayTransport<SPI, DC, RST, D> {
    spi: SPI,
    dc: DC,
    rst: RST,
    delay: D,
    max_chunk: usize,
    state: State,
}

impl<SPI, DC, RST, D> DisplayTransport<SPI, DC, RST, D>
where
    SPI: SpiBus,
    DC: OutputPin,
    RST: OutputPin,
    D: Delay,
{
    /// Create a transport; `max_chunk` of zero selects the default
    pub fn new(spi: SPI, dc: DC, rst: RST, delay: D, max_chunk: usize) -> Self {
        Self {
            spi,
            dc,
            rst,
            delay,
            max_chunk: if max_chunk == 0 {
                DEFAULT_MAX_CHUNK
            } else {
                max_chunk
            },
            state: State::Unreset,
        }
    }

    /// Hardware reset: RST high, low, high with settle delays
    ///
    /// Must run once before any command.
    pub fn reset(&mut self) -> Result<(), TransportError> {
        if self.state == State::Halted {
            return Err(TransportError::Halted);
        }
        self.rst.set_high();
        self.delay.delay_ms(RESET_SETTLE_MS);
        self.rst.set_low();
        self.delay.delay_ms(RESET_SETTLE_MS);
        self.rst.set_high();
        self.delay.delay_ms(RESET_SETTLE_MS);
        self.state = State::Ready;
        Ok(())
    }

    /// Send one opcode with D/C low
    pub fn send_command(&mut self, op: u8) -> Result<(), TransportError> {
        self.check()?;
        self.dc.set_low();
        self.write(&[op])
    }

    /// Send data with D/C high, split into bounded chunks
    ///
    /// The first failing chunk aborts the rest and halts the transport.
    pub fn send_data(&mut self, data: &[u8]) -> Result<(), TransportError> {
        self.check()?;
        if data.is_empty() {
            return Ok(());
        }
        self.dc.set_high();
        for chunk in data.chunks(self.max_chunk) {
            self.write(chunk)?;
        }
        Ok(())
    }

    /// Opcode followed by its parameter bytes
    pub fn command_with(&mut self, op: u8, params: &[u8]) -> Result<(), TransportError> {
        self.send_command(op)?;
        self.send_data(params)
    }

    /// Block for a panel settle time
    pub fn settle(&mut self, ms: u32) {
        if ms > 0 {
            self.delay.delay_ms(ms);
        }
    }

    pub fn is_ready(&self) -> bool {
        self.state == State::Ready
    }

    pub fn is_halted(&self) -> bool {
        self.state == State::Halted
    }

    pub fn max_chunk(&self) -> usize {
        self.max_chunk
    }

    /// Give back the bus and pins
    pub fn release(self) -> (SPI, DC, RST, D) {
        (self.spi, self.dc, self.rst, self.delay)
    }

    fn check(&self) -> Result<(), TransportError> {
        match self.state {
            State::Ready => Ok(()),
            State::Unreset => Err(TransportError::NotReset),
            State::Halted => Err(TransportError::Halted),
        }
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        self.spi.write(bytes).map_err(|_| {
            self.state = State::Halted;
            TransportError::Bus
        })
    }
}

#[cfg(test)]
pub(crate) mod mock {
    //! Recording fakes for the panel bus

    use std::cell::RefCell;
    use std::rc::Rc;
    use std::vec::Vec;

    use sous_hal::{Delay, OutputPin, SpiBus};

    /// One bus-level event
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Wire {
        Command(u8),
        Data(Vec<u8>),
        Reset(bool),
        Delay(u32),
    }

    #[derive(Default)]
    pub struct Shared {
        pub log: Vec<Wire>,
        pub dc_high: bool,
        /// Fail the write with this index (0-based)
        pub fail_at: Option<usize>,
        pub writes: usize,
    }

    pub type Bus = Rc<RefCell<Shared>>;

    pub struct MockSpi(pub Bus);
    pub struct MockDc(pub Bus);
    pub struct MockRst(pub Bus);
    pub struct MockDelay(pub Bus);

    impl SpiBus for MockSpi {
        type Error = ();

        fn write(&mut self, data: &[u8]) -> Result<(), ()> {
            let mut bus = self.0.borrow_mut();
            let index = bus.writes;
            bus.writes += 1;
            if bus.fail_at == Some(index) {
                return Err(());
            }
            let entry = if bus.dc_high {
                Wire::Data(data.to_vec())
            } else {
                assert_eq!(data.len(), 1, "command writes are one byte");
                Wire::Command(data[0])
            };
            bus.log.push(entry);
            Ok(())
        }
    }

    impl OutputPin for MockDc {
        fn set_high(&mut self) {
            self.0.borrow_mut().dc_high = true;
        }

        fn set_low(&mut self) {
            self.0.borrow_mut().dc_high = false;
        }

        fn is_set_high(&self) -> bool {
            self.0.borrow().dc_high
        }
    }

    impl OutputPin for MockRst {
        fn set_high(&mut self) {
            self.0.borrow_mut().log.push(Wire::Reset(true));
        }

        fn set_low(&mut self) {
            self.0.borrow_mut().log.push(Wire::Reset(false));
        }

        fn is_set_high(&self) -> bool {
            false
        }
    }

    impl Delay for MockDelay {
        fn delay_ms(&mut self, ms: u32) {
            self.0.borrow_mut().log.push(Wire::Delay(ms));
        }

        fn delay_us(&mut self, _us: u32) {}
    }

    pub type MockTransport = super::DisplayTransport<MockSpi, MockDc, MockRst, MockDelay>;

    pub fn transport(max_chunk: usize) -> (MockTransport, Bus) {
        let bus: Bus = Rc::default();
        let t = super::DisplayTransport::new(
            MockSpi(bus.clone()),
            MockDc(bus.clone()),
            MockRst(bus.clone()),
            MockDelay(bus.clone()),
            max_chunk,
        );
        (t, bus)
    }

    /// Total data bytes logged after the last occurrence of `op`
    pub fn data_after(bus: &Bus, op: u8) -> Vec<u8> {
        let bus = bus.borrow();
        let start = bus
            .log
            .iter()
            .rposition(|w| *w == Wire::Command(op))
            .expect("command not sent");
        bus.log[start + 1..]
            .iter()
            .filter_map(|w| match w {
                Wire::Data(d) => Some(d.as_slice()),
                _ => None,
            })
            .flatten()
            .copied()
            .collect()
    }
}
