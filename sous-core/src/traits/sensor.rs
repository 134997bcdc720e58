//! Weight sensor trait

/// Errors that can occur while reading the load cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Converter never signalled a ready sample
    NotReady,
    /// Reading saturated the converter range
    OutOfRange,
}

/// Load cell behind an ADC front end
///
/// A reading averages several raw conversions. Implementations yield
/// while the converter is busy, so a reading may take a few hundred
/// milliseconds without holding the executor.
#[allow(async_fn_in_trait)]
pub trait WeightSensor {
    /// Re-zero the scale at the current load
    async fn tare(&mut self) -> Result<(), SensorError>;

    /// Averaged, tared weight in grams
    async fn read_grams(&mut self) -> Result<f32, SensorError>;
}
