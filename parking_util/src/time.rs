use instant::Instant;

pub fn elapsed_seconds(since: Instant) -> f64 {
    let dt = since.elapsed();
    (dt.as_secs() as f64) + (f64::from(dt.subsec_nanos()) * 1e-9)
}

struct TimerSpan {
    name: String,
    started_at: Instant,
}

/// Hierarchial timing of phases, plus a place to collect warnings that shouldn't abort the
/// current operation. Everything is logged as it happens, and the warnings are repeated when the
/// Timer is dropped, to avoid having to scroll up and find them.
pub struct Timer {
    outermost_name: String,
    stack: Vec<TimerSpan>,
    results: Vec<String>,
    warnings: Vec<String>,
    quiet: bool,
}

impl Timer {
    pub fn new(name: &str) -> Timer {
        let mut t = Timer {
            outermost_name: name.to_string(),
            stack: Vec::new(),
            results: Vec::new(),
            warnings: Vec::new(),
            quiet: false,
        };
        t.start(name);
        t
    }

    /// A Timer that doesn't print a summary when it's dropped. Warnings are still logged.
    pub fn throwaway() -> Timer {
        let mut t = Timer::new("throwaway");
        t.quiet = true;
        t
    }

    pub fn start(&mut self, name: &str) {
        debug!("{}...", name);
        self.stack.push(TimerSpan {
            name: name.to_string(),
            started_at: Instant::now(),
        });
    }

    pub fn stop(&mut self, name: &str) {
        let span = match self.stack.pop() {
            Some(span) => span,
            None => {
                warn!("Timer stop({}) without a matching start", name);
                return;
            }
        };
        if span.name != name {
            warn!("Timer stop({}), but {} is the current phase", name, span.name);
        }
        let line = format!(
            "{}- {} took {}",
            "  ".repeat(self.stack.len()),
            span.name,
            prettyprint_time(elapsed_seconds(span.started_at))
        );
        debug!("{}", line);
        self.results.push(line);
    }

    /// Log a problem immediately, but also repeat it at the end.
    pub fn warn(&mut self, line: String) {
        warn!("{}", line);
        self.warnings.push(line);
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    // Used to end the scope of a timer early.
    pub fn done(self) {}
}

impl std::ops::Drop for Timer {
    fn drop(&mut self) {
        // Close anything the caller forgot about, then the outermost span itself.
        while let Some(span) = self.stack.last() {
            let name = span.name.clone();
            self.stop(&name);
        }
        if self.quiet {
            return;
        }

        info!("{} finished", self.outermost_name);
        for line in self.results.iter().rev() {
            debug!("{}", line);
        }
        if !self.warnings.is_empty() {
            info!("{} warnings:", prettyprint_usize(self.warnings.len()));
            for line in &self.warnings {
                info!("  {}", line);
            }
        }
    }
}

pub fn prettyprint_usize(x: usize) -> String {
    let num = format!("{}", x);
    let mut result = String::new();
    let mut i = num.len();
    for c in num.chars() {
        result.push(c);
        i -= 1;
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
    }
    result
}

pub fn prettyprint_time(seconds: f64) -> String {
    format!("{:.4}s", seconds)
}
