mod clock;
mod gracefull;
mod logs;
mod mark;
mod metrics;
mod window;

pub use self::clock::{Clock, DynClock, FixedClock, SystemClock};
pub use self::gracefull::shutdown_signal;
pub use self::logs::Logger;
pub use self::mark::mask_card_number;
pub use self::metrics::{Method, Metrics, Status};
pub use self::window::{DateWindow, day_range_window, month_window, thirty_day_window};
