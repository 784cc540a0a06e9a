use defmt::info;

use crate::types::SensorDispatcher;

#[embassy_executor::task]
pub async fn counter_task(mut dispatcher: SensorDispatcher) {
    info!(
        "Counter task started - debounce {} ms",
        dispatcher.counter().config().debounce_ms
    );

    dispatcher.run().await;
}
