use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use object_counter::{
    CounterConfig, DEFAULT_QUEUE_CAPACITY, DebounceCounter, DetectionEvent, Dispatcher,
    EdgeChannel, EdgeNotifier, PinId,
};

pub use stm32f0_embassy::sensor_input::SensorInput;
pub use stm32f0_embassy::time_wrapper::{EmbassyInstant, EmbassyTimeSource};

/// 50 ms debounce, sensor output pulled low when an object is in range
pub const COUNTER_CONFIG: CounterConfig = CounterConfig::DEFAULT;

/// Edge tokens buffered between counter task wake-ups
pub const QUEUE_CAPACITY: usize = DEFAULT_QUEUE_CAPACITY;

/// PC13 carries the sensor output
pub const SENSOR_PIN: PinId = PinId(13);

pub type SensorNotifier = EdgeNotifier<'static, CriticalSectionRawMutex, QUEUE_CAPACITY>;

pub type SensorCounter = DebounceCounter<'static, EmbassyInstant, SensorInput, EmbassyTimeSource>;

pub type DetectionSignal = Signal<CriticalSectionRawMutex, DetectionEvent<EmbassyInstant>>;

pub type SensorDispatcher = Dispatcher<
    'static,
    'static,
    CriticalSectionRawMutex,
    EmbassyInstant,
    SensorInput,
    EmbassyTimeSource,
    &'static DetectionSignal,
    QUEUE_CAPACITY,
>;

pub static TIME_SOURCE: EmbassyTimeSource = EmbassyTimeSource::new();

/// Channel from edge_task (interrupt priority) to counter_task
pub static EDGE_CHANNEL: EdgeChannel<CriticalSectionRawMutex, QUEUE_CAPACITY> = EdgeChannel::new();

/// Latest detection, published by counter_task for report_task
pub static DETECTION_SIGNAL: DetectionSignal = Signal::new();
