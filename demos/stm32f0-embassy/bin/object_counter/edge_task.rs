use embassy_stm32::exti::ExtiInput;

use crate::types::SensorNotifier;

/// Runs on the interrupt executor. Only enqueues; no logging, no clock reads.
#[embassy_executor::task]
pub async fn edge_task(mut sensor: ExtiInput<'static>, notifier: SensorNotifier) {
    loop {
        sensor.wait_for_any_edge().await;
        notifier.notify();
    }
}
