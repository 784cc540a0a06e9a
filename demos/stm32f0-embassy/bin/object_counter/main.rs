#![no_std]
#![no_main]

use core::future::pending;
use defmt::*;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_stm32::interrupt;
use embassy_stm32::interrupt::{InterruptExt, Priority};
use embassy_stm32::time::Hertz;
use embassy_stm32::{Config, Peripherals};
use object_counter::{DebounceCounter, Dispatcher, EdgeNotifier};
use {defmt_rtt as _, panic_probe as _};

mod counter_task;
mod edge_task;
mod report_task;
mod types;

use counter_task::counter_task;
use edge_task::edge_task;
use report_task::report_task;
use types::{
    COUNTER_CONFIG, DETECTION_SIGNAL, EDGE_CHANNEL, SENSOR_PIN, SensorCounter, SensorInput,
    TIME_SOURCE,
};

/// Runs edge_task at interrupt priority, preempting the thread-mode tasks.
/// The USB peripheral is unused, so its vector drives the executor.
static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn USB() {
    unsafe { EXECUTOR_HIGH.on_interrupt() }
}

/// Configure system clock with HSE and PLL
fn configure_clock() -> Config {
    let mut config = Config::default();
    {
        use embassy_stm32::rcc::*;
        config.rcc.hse = Some(Hse {
            freq: Hertz(8_000_000),
            mode: HseMode::Bypass,
        });
        config.rcc.pll = Some(Pll {
            src: PllSource::HSE,
            prediv: PllPreDiv::DIV2,
            mul: PllMul::MUL12,
        });
        config.rcc.sys = Sysclk::PLL1_P;
        config.rcc.ahb_pre = AHBPrescaler::DIV1;
        config.rcc.apb1_pre = APBPrescaler::DIV1;
    }
    config
}

/// Configure the TCRT5000 output on PC13 with pull-up and any-edge EXTI.
///
/// Returns the EXTI input for the edge task and a second handle on the same
/// pin for level reads in the counter task.
fn setup_sensor(p: &mut Peripherals) -> (ExtiInput<'static>, SensorInput) {
    let pc13_exti = unsafe { p.PC13.clone_unchecked() };
    let pc13_level = unsafe { p.PC13.clone_unchecked() };
    let exti13 = unsafe { p.EXTI13.clone_unchecked() };

    let edges = ExtiInput::new(pc13_exti, exti13, Pull::Up);
    let level = SensorInput(Input::new(pc13_level, Pull::Up));
    info!("TCRT5000 sensor initialized on PC13");

    (edges, level)
}

/// Configure onboard LED (PA5 on Nucleo board)
fn setup_onboard_led(p: &mut Peripherals) -> Output<'static> {
    let pa5 = unsafe { p.PA5.clone_unchecked() };
    let led = Output::new(pa5, Level::Low, Speed::Low);
    info!("Onboard LED configured on PA5");

    led
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("=== TCRT5000 Object Counter ===");
    info!("Starting initialization...");

    let config = configure_clock();
    let mut p = embassy_stm32::init(config);
    info!("Clock configured - system running at 48 MHz");

    let (edges, level) = setup_sensor(&mut p);
    let onboard_led = setup_onboard_led(&mut p);

    // Samples the pin once, so this must happen before edges are enabled.
    let counter: SensorCounter = DebounceCounter::new(level, &TIME_SOURCE, COUNTER_CONFIG);
    let dispatcher = Dispatcher::new(&EDGE_CHANNEL, counter, &DETECTION_SIGNAL);
    let notifier = EdgeNotifier::new(&EDGE_CHANNEL, SENSOR_PIN);

    info!("All hardware initialized successfully");

    interrupt::USB.set_priority(Priority::P1);
    let high_spawner = EXECUTOR_HIGH.start(interrupt::USB);
    high_spawner.spawn(edge_task(edges, notifier)).unwrap();

    spawner.spawn(counter_task(dispatcher)).unwrap();
    spawner.spawn(report_task(onboard_led)).unwrap();

    info!("=== Counter Ready ===");
    info!("Pass objects in front of the sensor; each one pulses the onboard LED");

    // Main task has no more work to do - all logic is in spawned tasks
    pending::<()>().await;
}
