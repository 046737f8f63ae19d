use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, filter::Targets, fmt, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt,
};

const APP_TARGET: &str = "greenfolio";

/// Warnings and errors are always shown; extraction and seeding failures
/// are reported only through them. `verbose` lowers the level to debug.
fn default_level(verbose: bool) -> (LevelFilter, &'static str) {
    if verbose {
        (LevelFilter::DEBUG, "debug")
    } else {
        (LevelFilter::WARN, "warn")
    }
}

fn app_filter(verbose: bool) -> Targets {
    let (level_filter, _) = default_level(verbose);
    Targets::new().with_target(APP_TARGET, level_filter)
}

/// Installs the global subscriber, writing to stderr so command output on
/// stdout stays clean. `RUST_LOG` overrides the level for other targets.
pub fn init_logging(verbose: bool) {
    let (_, level) = default_level(verbose);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().pretty().without_time().with_writer(std::io::stderr))
        .with(app_filter(verbose))
        .with(env_filter)
        .init();
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::fmt::Write;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::subscriber::DefaultGuard;
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer};

    /// Events recorded on the current thread while the guard is alive.
    #[derive(Clone, Default)]
    pub(crate) struct CapturedLogs(Arc<Mutex<Vec<(Level, String)>>>);

    impl CapturedLogs {
        pub(crate) fn contains(&self, level: Level, text: &str) -> bool {
            self.0
                .lock()
                .unwrap()
                .iter()
                .any(|(l, line)| *l == level && line.contains(text))
        }
    }

    struct LineVisitor(String);

    impl Visit for LineVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
            if !self.0.is_empty() {
                self.0.push(' ');
            }
            if field.name() == "message" {
                let _ = write!(self.0, "{value:?}");
            } else {
                let _ = write!(self.0, "{}={value:?}", field.name());
            }
        }
    }

    impl<S: Subscriber> Layer<S> for CapturedLogs {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = LineVisitor(String::new());
            event.record(&mut visitor);
            self.0
                .lock()
                .unwrap()
                .push((*event.metadata().level(), visitor.0));
        }
    }

    pub(crate) fn capture_logs() -> (CapturedLogs, DefaultGuard) {
        let logs = CapturedLogs::default();
        let guard = tracing_subscriber::registry()
            .with(logs.clone())
            .set_default();
        (logs, guard)
    }

    #[test]
    fn test_quiet_mode_keeps_warnings_and_errors() {
        let filter = app_filter(false);
        assert!(filter.would_enable("greenfolio::extract", &Level::WARN));
        assert!(filter.would_enable("greenfolio::seed", &Level::ERROR));
        assert!(!filter.would_enable("greenfolio::seed", &Level::INFO));
        assert!(!filter.would_enable("fjall", &Level::WARN));
    }

    #[test]
    fn test_verbose_mode_enables_debug() {
        let filter = app_filter(true);
        assert!(filter.would_enable("greenfolio::store::disk", &Level::DEBUG));
        assert!(!filter.would_enable("greenfolio", &Level::TRACE));
    }
}
