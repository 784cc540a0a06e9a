use defmt::info;
use embassy_stm32::gpio::Output;
use embassy_time::Timer;

use crate::types::DETECTION_SIGNAL;

/// How long the onboard LED stays on per detection
const PULSE_MS: u64 = 100;

#[embassy_executor::task]
pub async fn report_task(mut onboard_led: Output<'static>) {
    info!("Report task started");

    loop {
        let event = DETECTION_SIGNAL.wait().await;
        info!("Count: {}, Time: {} ms", event.count, event.timestamp_millis());

        onboard_led.set_high();
        Timer::after_millis(PULSE_MS).await;
        onboard_led.set_low();
    }
}
