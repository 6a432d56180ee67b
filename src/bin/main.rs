// xy-devkit entry point
//
// Boot sequence: logger -> rtos -> hardware -> calibration check ->
// handlers -> spawn input task.
// Main task: log gestures and Wi-Fi configuration resets.
//
// A bad band table or timing constant stops the boot here; the board
// must not run with ambiguous button decoding.

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_futures::select::{Either, select};
use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;
use log::{error, info, warn};

use xy_devkit::board::action::{register_board_handlers, start_device};
use xy_devkit::board::button::{DEBOUNCE_MS, LONG_PRESS_MS, XY_DEVKIT_BANDS};
use xy_devkit::board::pins::POLL_INTERVAL_MS;
use xy_devkit::board::xy_devkit::Hardware;
use xy_devkit::board::BandClassifier;
use xy_devkit::drivers::gesture::Timing;
use xy_devkit::drivers::input::InputDriver;
use xy_devkit::kernel::{BoardInput, GESTURES, WIFI_RESET, input_task};

extern crate alloc;

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);
    esp_alloc::heap_allocator!(size: 32 * 1024);

    info!("booting...");

    let timg0 = TimerGroup::new(unsafe { peripherals.TIMG0.clone_unchecked() });
    esp_rtos::start(timg0.timer0);
    info!("rtos started.");

    let hw = Hardware::init(peripherals);
    info!("hardware initialized.");

    let classifier = match BandClassifier::new(XY_DEVKIT_BANDS) {
        Ok(c) => c,
        Err(e) => {
            error!("input: button calibration rejected: {}", e);
            panic!("invalid button calibration");
        }
    };
    let timing = match Timing::from_millis(POLL_INTERVAL_MS, DEBOUNCE_MS, LONG_PRESS_MS) {
        Ok(t) => t,
        Err(e) => {
            error!("input: {}", e);
            panic!("invalid button timing");
        }
    };
    info!(
        "input: {} ladder bands, debounce {} ticks, long press {} ticks",
        classifier.bands().len(),
        timing.debounce_ticks(),
        timing.long_press_ticks()
    );

    let mut input: BoardInput = InputDriver::new(hw.input.into_sampler(), classifier, timing);
    register_board_handlers(&mut input);

    let ctx = start_device(hw.board);

    spawner.must_spawn(input_task(input, ctx));
    info!("input ready.");

    loop {
        match select(GESTURES.receive(), WIFI_RESET.wait()).await {
            Either::First(ev) => {
                info!("input: {} {:?}", ev.button, ev.gesture);
            }
            Either::Second(()) => {
                warn!("wifi: configuration cleared, waiting for provisioning");
            }
        }
    }
}
