// Embassy spawned tasks
//
//   • `input_task`: owns the InputDriver (and therefore the ADC and the
//                    BOOT pin) together with the DeviceContext the
//                    handlers act on.  Runs the poll pipeline on a fixed
//                    Ticker; handlers execute inside this task.
//
// The main task only observes: it drains GESTURES for logging and waits
// on WIFI_RESET to report a dropped Wi-Fi configuration.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker};
use esp_hal::gpio::Input;

use crate::apps::{ChatSession, ProvisioningState};
use crate::board::pins::POLL_INTERVAL_MS;
use crate::board::xy_devkit::{LadderAdc, XyDevKitV1};
use crate::board::DeviceContext;
use crate::drivers::input::{Event, InputDriver};

pub type BoardContext = DeviceContext<XyDevKitV1, ChatSession, ProvisioningState>;
pub type BoardInput = InputDriver<LadderAdc, Input<'static>, BoardContext>;

/// Capacity of the gesture channel.  A full channel drops events; the
/// handlers have already run by then, this is only an observer feed.
pub const GESTURE_CHANNEL_CAP: usize = 8;

pub static GESTURES: Channel<CriticalSectionRawMutex, Event, GESTURE_CHANNEL_CAP> = Channel::new();

/// Raised when a handler asked for the Wi-Fi configuration to be reset.
pub static WIFI_RESET: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// The input polling task.  Never returns.
#[embassy_executor::task]
pub async fn input_task(mut input: BoardInput, mut ctx: BoardContext) -> ! {
    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS as u64));

    loop {
        ticker.next().await;

        for ev in input.poll(&mut ctx).iter() {
            let _ = GESTURES.try_send(ev);
        }

        if ctx.wifi.take_reset_request() {
            WIFI_RESET.signal(());
        }
    }
}
