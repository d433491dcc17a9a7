use crate::constants::COUNTER_DURATION_MS;

/// Integer prefix of a `data-target` value, `parseInt` style: leading
/// whitespace and an optional sign are accepted, trailing junk is ignored.
pub fn parse_target(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (neg, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value: i64 = digits[..end].parse().ok()?;
    Some(if neg { -value } else { value })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: i64,
    pub finished: bool,
}

/// Linear count from 0 to `target`, started once and never restarted.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: i64,
    duration_ms: f64,
    started_at_ms: Option<f64>,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: i64) -> Self {
        Self::with_duration(target, COUNTER_DURATION_MS)
    }

    pub fn with_duration(target: i64, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms: duration_ms.max(0.0),
            started_at_ms: None,
            finished: false,
        }
    }

    /// Returns false if the animation had already been started.
    pub fn start(&mut self, now_ms: f64) -> bool {
        if self.started_at_ms.is_some() {
            return false;
        }
        self.started_at_ms = Some(now_ms);
        true
    }

    pub fn value_at(&self, now_ms: f64) -> i64 {
        let Some(start) = self.started_at_ms else {
            return 0;
        };
        let elapsed = (now_ms - start).max(0.0);
        if self.duration_ms <= 0.0 || elapsed >= self.duration_ms {
            return self.target;
        }
        (self.target as f64 * (elapsed / self.duration_ms)).floor() as i64
    }

    pub fn tick(&mut self, now_ms: f64) -> CounterFrame {
        let value = self.value_at(now_ms);
        if self.started_at_ms.is_some() && value == self.target {
            self.finished = true;
        }
        CounterFrame {
            value,
            finished: self.finished,
        }
    }

    #[inline]
    pub fn target(&self) -> i64 {
        self.target
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.started_at_ms.is_some()
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
