use embassy_stm32::gpio::Input;
use object_counter::{Level, SensorPin};

/// Level-reading handle on the sensor pin.
///
/// The EXTI-driven input is owned by the edge task; this second handle on the
/// same pin only reads the input data register.
pub struct SensorInput(pub Input<'static>);

impl SensorPin for SensorInput {
    fn level(&mut self) -> Level {
        Level::from(self.0.is_high())
    }
}
