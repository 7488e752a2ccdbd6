//! Logging facade for the portblink crates.
//!
//! The macros in [`log`] forward to `defmt` or to the `log` crate depending on the enabled
//! feature, and compile to nothing otherwise. Format strings must restrict themselves to `{}`
//! placeholders so they stay valid for both backends.

#![cfg_attr(not(test), no_std)]

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("feature \"defmt\" and feature \"log\" cannot be enabled at the same time");

#[cfg(feature = "defmt")]
pub mod log {
    pub use defmt;

    #[macro_export]
    macro_rules! __trace {
        ($($arg:tt)*) => {{
            use $crate::log::defmt;
            defmt::trace!($($arg)*);
        }};
    }

    #[macro_export]
    macro_rules! __debug {
        ($($arg:tt)*) => {{
            use $crate::log::defmt;
            defmt::debug!($($arg)*);
        }};
    }

    #[macro_export]
    macro_rules! __info {
        ($($arg:tt)*) => {{
            use $crate::log::defmt;
            defmt::info!($($arg)*);
        }};
    }

    #[macro_export]
    macro_rules! __warn {
        ($($arg:tt)*) => {{
            use $crate::log::defmt;
            defmt::warn!($($arg)*);
        }};
    }

    #[macro_export]
    macro_rules! __error {
        ($($arg:tt)*) => {{
            use $crate::log::defmt;
            defmt::error!($($arg)*);
        }};
    }

    pub use __debug as debug;
    pub use __error as error;
    pub use __info as info;
    pub use __trace as trace;
    pub use __warn as warn;
}

#[cfg(all(feature = "log", not(feature = "defmt")))]
pub mod log {
    pub use ::log as facade;

    #[macro_export]
    macro_rules! __trace {
        ($($arg:tt)*) => {{
            $crate::log::facade::trace!($($arg)*);
        }};
    }

    #[macro_export]
    macro_rules! __debug {
        ($($arg:tt)*) => {{
            $crate::log::facade::debug!($($arg)*);
        }};
    }

    #[macro_export]
    macro_rules! __info {
        ($($arg:tt)*) => {{
            $crate::log::facade::info!($($arg)*);
        }};
    }

    #[macro_export]
    macro_rules! __warn {
        ($($arg:tt)*) => {{
            $crate::log::facade::warn!($($arg)*);
        }};
    }

    #[macro_export]
    macro_rules! __error {
        ($($arg:tt)*) => {{
            $crate::log::facade::error!($($arg)*);
        }};
    }

    pub use __debug as debug;
    pub use __error as error;
    pub use __info as info;
    pub use __trace as trace;
    pub use __warn as warn;
}

#[cfg(not(any(feature = "defmt", feature = "log")))]
pub mod log {
    #[macro_export]
    macro_rules! __stub {
        ($($arg:tt)*) => {{
            let _ = ($($arg)*); // Do nothing
        }};
    }

    pub use __stub as debug;
    pub use __stub as error;
    pub use __stub as info;
    pub use __stub as trace;
    pub use __stub as warn;
}

#[cfg(test)]
mod tests {
    use crate::log::{debug, error, info, trace, warn};

    #[test]
    fn macros_accept_format_arguments() {
        let base: u16 = 0x23;
        let pattern: u8 = 0xAA;
        trace!("phase {}", "high");
        debug!("port at {}", base);
        info!("direction {} at {}", pattern, base);
        warn!("nothing to warn about");
        error!("nothing failed: {}", 0u8);
    }

    #[cfg(feature = "log")]
    #[test]
    fn records_reach_installed_logger() {
        use std::sync::Mutex;

        struct Capture(Mutex<Vec<String>>);

        impl ::log::Log for Capture {
            fn enabled(&self, _metadata: &::log::Metadata<'_>) -> bool {
                true
            }

            fn log(&self, record: &::log::Record<'_>) {
                self.0
                    .lock()
                    .unwrap()
                    .push(format!("{} {}", record.level(), record.args()));
            }

            fn flush(&self) {}
        }

        static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));

        ::log::set_logger(&CAPTURE).unwrap();
        ::log::set_max_level(::log::LevelFilter::Trace);

        info!("port at {}", 0x23u16);
        trace!("phase {}", "low");

        let lines = CAPTURE.0.lock().unwrap();
        assert!(lines.iter().any(|line| line == "INFO port at 35"));
        assert!(lines.iter().any(|line| line == "TRACE phase low"));
    }
}
