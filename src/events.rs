use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::thread;
use std::time::Duration;
use std::time::Instant;

/// How often [`Interrupt::wait`] looks at the flag
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Why the simulation stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The population reached zero
    Extinct,

    /// An interrupt was received
    Interrupted,
}

/// Cooperative cancellation flag. Cloning it shares the same flag.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    flag: Arc<AtomicBool>,
}

impl Interrupt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a flag that is raised when the process receives SIGINT (Ctrl-C).
    ///
    /// Only one handler can be installed per process.
    pub fn install() -> Result<Self, ctrlc::Error> {
        let interrupt = Self::new();
        let handle = interrupt.clone();

        ctrlc::set_handler(move || handle.raise())?;

        Ok(interrupt)
    }

    pub fn raise(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Sleep for `duration`, returning early with `true` if the flag gets raised.
    pub fn wait(&self, duration: Duration) -> bool {
        let start = Instant::now();

        loop {
            if self.is_raised() {
                return true;
            }

            let left = duration.saturating_sub(start.elapsed());
            if left.is_zero() {
                return false;
            }

            thread::sleep(left.min(POLL_INTERVAL));
        }
    }
}
