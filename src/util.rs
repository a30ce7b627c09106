use web_sys::{self};

// Helper function to log to the browser console
pub fn console_log(message: &str) {
    web_sys::console::log_1(&message.into());
}

cfg_if::cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        pub fn log_message(message: &str) {
            console_log(message);
        }
    } else {
        pub fn log_message(message: &str) {
            log::info!("{}", message);
        }
    }
}

/// Prints `log` records at info level and above to stdout
struct StdoutLogger;

impl log::Log for StdoutLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::Info
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            println!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static STDOUT_LOGGER: StdoutLogger = StdoutLogger;

/// Send `flog!` output on native builds to stdout. Only the first logger
/// installed in a process takes effect, so a host that installs its own
/// logger keeps it and this call does nothing.
pub fn init_stdout_logger() {
    if log::set_logger(&STDOUT_LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Info);
    }
}

/// Log a formatted message. Goes to the browser console on wasm and to the
/// `log` facade everywhere else; native hosts need a logger installed, e.g.
/// with `init_stdout_logger`.
#[macro_export]
macro_rules! flog {
    ($($arg:tt)*) => {
        $crate::util::log_message(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! assert_close {
    ($left:expr, $right:expr, $tolerance:expr) => {
        let left = $left;
        let right = $right;
        let tol = $tolerance;
        let diff = (left - right).abs();
        if diff > tol {
            panic!(
                "assertion failed: {} ~= {} \
                (tolerance: {}, difference: {})",
                left, right, tol, diff
            );
        }
    };
}

#[macro_export]
macro_rules! assert_vec_close {
    ($left:expr, $right:expr, $tolerance:expr) => {
        let left = $left;
        let right = $right;
        let tol = $tolerance;
        for (a, b) in left.iter().zip(right.iter()) {
            $crate::assert_close!(a, b, tol);
        }
    };
}


#[cfg(test)]
mod util_tests {
    use log::{Level, Metadata};

    use super::*;

    #[test]
    fn stdout_logger_enables_info() {
        // Act
        init_stdout_logger();
        init_stdout_logger();
        flog!("rope of {} points", 3);

        // Assert
        let info = Metadata::builder().level(Level::Info).build();
        let debug = Metadata::builder().level(Level::Debug).build();
        assert!(log::logger().enabled(&info));
        assert!(!log::logger().enabled(&debug));
        assert_eq!(log::max_level(), log::LevelFilter::Info);
    }
}
