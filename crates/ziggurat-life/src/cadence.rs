/// Decides, once per frame, whether the frame commits a new generation.
///
/// `frames_per_step == 0` commits every frame; `N > 0` commits on every
/// N-th running frame. Pausing freezes the counter without resetting it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Cadence {
    frames_since_step: u32,
    frames_per_step: u32,
    paused: bool,
}

impl Cadence {
    pub fn new(frames_per_step: u32, paused: bool) -> Self {
        Self {
            frames_since_step: 0,
            frames_per_step,
            paused,
        }
    }

    /// Advances one frame. Returns `true` when this frame commits.
    pub fn tick(&mut self) -> bool {
        if self.paused {
            return false;
        }

        self.frames_since_step += 1;
        if self.frames_since_step >= self.frames_per_step {
            self.frames_since_step = 0;
            return true;
        }
        false
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn toggle_paused(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    #[inline]
    pub fn frames_per_step(&self) -> u32 {
        self.frames_per_step
    }

    #[inline]
    pub fn frames_since_step(&self) -> u32 {
        self.frames_since_step
    }

    /// Halves the delay. `1` drops to `0` (every frame); `0` stays `0`.
    pub fn speed_up(&mut self) -> u32 {
        self.frames_per_step /= 2;
        self.clamp_counter();
        self.frames_per_step
    }

    /// Doubles the delay. `0` steps to `1`, not to `0`.
    pub fn slow_down(&mut self) -> u32 {
        self.frames_per_step = match self.frames_per_step {
            0 => 1,
            n => n.saturating_mul(2),
        };
        self.frames_per_step
    }

    // Shrinking the delay below the running count would otherwise let the
    // counter sit above `frames_per_step - 1` until the next commit.
    fn clamp_counter(&mut self) {
        if self.frames_since_step >= self.frames_per_step {
            self.frames_since_step = self.frames_per_step.saturating_sub(1);
        }
    }
}

impl Default for Cadence {
    fn default() -> Self {
        Self::new(4, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commits(c: &mut Cadence, frames: usize) -> Vec<bool> {
        (0..frames).map(|_| c.tick()).collect()
    }

    // ── rate ──────────────────────────────────────────────────────────────

    #[test]
    fn zero_delay_commits_every_frame() {
        let mut c = Cadence::new(0, false);
        assert!(commits(&mut c, 10).into_iter().all(|b| b));
    }

    #[test]
    fn commits_on_every_nth_frame() {
        for n in 1..=8u32 {
            let mut c = Cadence::new(n, false);
            let got = commits(&mut c, (n * 5) as usize);
            for (i, committed) in got.iter().enumerate() {
                assert_eq!(*committed, (i + 1) % n as usize == 0, "n={n} frame={i}");
            }
        }
    }

    #[test]
    fn counter_stays_below_delay() {
        let mut c = Cadence::new(3, false);
        for _ in 0..20 {
            c.tick();
            assert!(c.frames_since_step() < 3);
        }
    }

    // ── pause ─────────────────────────────────────────────────────────────

    #[test]
    fn paused_never_commits() {
        let mut c = Cadence::new(0, true);
        assert!(commits(&mut c, 100).into_iter().all(|b| !b));
        assert_eq!(c.frames_since_step(), 0);
    }

    #[test]
    fn pause_keeps_counter() {
        let mut c = Cadence::new(4, false);
        commits(&mut c, 2);
        c.set_paused(true);
        commits(&mut c, 10);
        assert_eq!(c.frames_since_step(), 2);
        c.set_paused(false);
        assert_eq!(commits(&mut c, 2), [false, true]);
    }

    #[test]
    fn toggle_returns_new_state() {
        let mut c = Cadence::new(1, false);
        assert!(c.toggle_paused());
        assert!(!c.toggle_paused());
    }

    // ── speed ladder ──────────────────────────────────────────────────────

    #[test]
    fn slow_down_from_zero_goes_to_one() {
        let mut c = Cadence::new(0, false);
        assert_eq!(c.slow_down(), 1);
        assert_eq!(c.slow_down(), 2);
        assert_eq!(c.slow_down(), 4);
    }

    #[test]
    fn speed_up_halves_to_zero() {
        let mut c = Cadence::new(8, false);
        assert_eq!(c.speed_up(), 4);
        assert_eq!(c.speed_up(), 2);
        assert_eq!(c.speed_up(), 1);
        assert_eq!(c.speed_up(), 0);
        assert_eq!(c.speed_up(), 0);
    }

    #[test]
    fn speed_up_truncates_odd_delays() {
        let mut c = Cadence::new(5, false);
        assert_eq!(c.speed_up(), 2);
    }

    #[test]
    fn speed_up_clamps_running_counter() {
        let mut c = Cadence::new(8, false);
        commits(&mut c, 6);
        c.speed_up();
        assert!(c.frames_since_step() < c.frames_per_step());
        assert_eq!(commits(&mut c, 1), [true]);
    }
}
