use std::io::{self, Write};
use std::time::{Duration, Instant};

const WIDTH: usize = 40;
const RENDER_THROTTLE: Duration = Duration::from_millis(500);

/// Console progress bar for bulk loads.  Re-renders at most every
/// `RENDER_THROTTLE` to avoid spamming the terminal on fast loops.
pub struct Progress {
    total: usize,
    processed: usize,
    start: Instant,
    last_render: Option<Instant>,
}

impl Progress {
    pub fn new(total: usize) -> Progress {
        Progress {
            total,
            processed: 0,
            start: Instant::now(),
            last_render: None,
        }
    }

    /// Advance by one unit and re-render if the throttle allows it.
    pub fn tick(&mut self) {
        self.processed = (self.processed + 1).min(self.total);
        let due = match self.last_render {
            Some(at) => at.elapsed() >= RENDER_THROTTLE,
            None => true,
        };
        if due || self.processed == self.total {
            self.render();
        }
    }

    /// Render the final state and move to a fresh line.
    pub fn finish(&mut self) {
        self.processed = self.total;
        self.render();
        eprintln!();
    }

    pub fn percent(&self) -> usize {
        if self.total == 0 {
            return 100;
        }
        100 * self.processed / self.total
    }

    fn filled(&self) -> usize {
        if self.total == 0 {
            return WIDTH;
        }
        WIDTH * self.processed / self.total
    }

    fn eta_secs(&self) -> f64 {
        if self.processed == 0 {
            return 0.0;
        }
        let per_entry = self.start.elapsed().as_secs_f64() / self.processed as f64;
        per_entry * (self.total - self.processed) as f64
    }

    fn render(&mut self) {
        self.last_render = Some(Instant::now());
        eprint!(
            "\r-> loading [{:<width$}] {}% ({:.0}s remaining)",
            "=".repeat(self.filled()),
            self.percent(),
            self.eta_secs(),
            width = WIDTH
        );
        io::stderr().flush().ok();
    }
}
