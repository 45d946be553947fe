use crate::config::ShimmerConfig;

/// Driver state, observable through [`AnimationDriver::phase`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    /// Not advancing; progress frozen at its current value.
    Stopped,
    RunningForward,
    /// Bounce only: traveling from 1 back toward 0.
    RunningReverse,
    /// A finite run reached its loop count. Holds until an explicit `start`.
    Completed(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Travel {
    Forward,
    Reverse,
}

/// Time→progress state machine.
///
/// Hosts call [`tick`](Self::tick) once per display refresh with the elapsed
/// delta in seconds. The driver never blocks and owns no timer; when it is
/// not advancing it is simply idle.
///
/// Run gating, per tick: the driver advances iff `should_animate()` holds
/// (not reduced-motion-frozen, enabled, and any attached controller is live
/// and running) and it was not explicitly stopped. An explicit `stop()` holds
/// until `start()` or until a reconfiguration re-arms the machine.
///
/// Freeze vs. pin: any path into `Stopped` freezes stored progress where it
/// is. Reduced motion additionally pins the *rendered* progress to the
/// configured static percent (see [`render_progress`](Self::render_progress))
/// without ever mutating stored progress. The asymmetry is deliberate and
/// observable.
#[derive(Debug)]
pub struct AnimationDriver {
    config: ShimmerConfig,
    progress: f32,
    travel: Travel,
    loops_done: u32,
    running: bool,
    held: bool,
    completed: bool,
    completion_fired: bool,
    reduced_motion: bool,
}

impl AnimationDriver {
    pub fn new(config: ShimmerConfig) -> Self {
        Self {
            config,
            progress: 0.0,
            travel: Travel::Forward,
            loops_done: 0,
            running: false,
            held: false,
            completed: false,
            completion_fired: false,
            reduced_motion: false,
        }
    }

    #[inline]
    pub fn config(&self) -> &ShimmerConfig {
        &self.config
    }

    /// Raw stored progress in [0, 1], before easing and reduced-motion
    /// pinning.
    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Progress as handed to geometry and sampling: pinned to the static
    /// percent under reduced motion, otherwise eased stored progress.
    pub fn render_progress(&self) -> f32 {
        if self.reduced_frozen() {
            self.config.static_percent
        } else {
            self.config.easing.apply(self.progress)
        }
    }

    #[inline]
    pub fn loops_completed(&self) -> u32 {
        self.loops_done
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.running
    }

    pub fn phase(&self) -> Phase {
        if self.completed {
            Phase::Completed(self.loops_done)
        } else if !self.running {
            Phase::Stopped
        } else if self.travel == Travel::Reverse {
            Phase::RunningReverse
        } else {
            Phase::RunningForward
        }
    }

    /// Host accessibility signal: whether the system requests reduced motion.
    ///
    /// Stored progress is never mutated by this; only rendering is affected,
    /// and only when the config opts in.
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    /// The effective-run predicate.
    pub fn should_animate(&self) -> bool {
        !self.reduced_frozen()
            && self.config.enabled
            && self
                .config
                .controller
                .as_ref()
                .is_none_or(|c| c.drives_animation())
    }

    #[inline]
    fn reduced_frozen(&self) -> bool {
        self.config.respect_reduced_motion && self.reduced_motion
    }

    // ── explicit lifecycle ────────────────────────────────────────────────

    /// Restarts from zero: resets the loop count and begins a forward run.
    pub fn start(&mut self) {
        log::trace!("driver start");
        self.progress = 0.0;
        self.travel = Travel::Forward;
        self.loops_done = 0;
        self.completed = false;
        self.completion_fired = false;
        self.held = false;
        self.running = self.should_animate();
    }

    /// Freezes at the current progress. No reset; holds until `start()` or a
    /// reconfiguration.
    pub fn stop(&mut self) {
        log::trace!("driver stop at progress {:.3}", self.progress);
        self.held = true;
        self.running = false;
    }

    /// Returns to progress 0 with the loop count cleared, stopped.
    pub fn reset(&mut self) {
        self.progress = 0.0;
        self.travel = Travel::Forward;
        self.loops_done = 0;
        self.completed = false;
        self.completion_fired = false;
        self.held = true;
        self.running = false;
    }

    /// Swaps in a new configuration atomically between ticks.
    ///
    /// - A changed loop count resets the completed-loop count (and clears a
    ///   finished state).
    /// - A changed period retimes without jumping progress: progress is
    ///   normalized, so the next tick simply advances at the new rate.
    /// - `should_animate` is re-evaluated immediately; a reconfiguration
    ///   releases an explicit hold.
    pub fn reconfigure(&mut self, config: ShimmerConfig) {
        if config.loop_count != self.config.loop_count {
            self.loops_done = 0;
            self.completed = false;
            self.completion_fired = false;
        }
        self.config = config;
        self.held = false;
        self.running = !self.completed && self.should_animate();
    }

    // ── tick ──────────────────────────────────────────────────────────────

    /// Advances by `dt` seconds of wall time.
    pub fn tick(&mut self, dt: f32) {
        if self.completed {
            self.running = false;
            return;
        }
        if self.held || !self.should_animate() {
            // Freeze: progress keeps its value.
            if self.running {
                log::trace!("driver gated off at progress {:.3}", self.progress);
            }
            self.running = false;
            return;
        }
        self.running = true;

        let step = dt.max(0.0) / self.config.period.as_secs_f32();
        if self.config.loop_count > 0 {
            self.advance_finite(step);
        } else if self.config.bounce {
            self.advance_bounce(step);
        } else {
            self.advance_wrapping(step);
        }
    }

    /// Finite runs advance forward only; bounce is ignored.
    fn advance_finite(&mut self, step: f32) {
        self.travel = Travel::Forward;
        let mut p = self.progress + step;
        while p >= 1.0 {
            self.loops_done += 1;
            if self.loops_done >= self.config.loop_count {
                self.progress = 1.0;
                self.completed = true;
                self.running = false;
                log::debug!("driver completed after {} loops", self.loops_done);
                self.fire_completion();
                return;
            }
            p -= 1.0;
        }
        self.progress = p;
    }

    /// Seamless wrap: the sweep geometry makes progress 1 and progress 0
    /// pixel-identical, so wrapping is invisible.
    fn advance_wrapping(&mut self, step: f32) {
        self.travel = Travel::Forward;
        let mut p = self.progress + step;
        while p >= 1.0 {
            p -= 1.0;
            self.loops_done = self.loops_done.wrapping_add(1);
        }
        self.progress = p;
    }

    /// Bounce: reflect at both ends; position is continuous, only the
    /// derivative sign flips.
    fn advance_bounce(&mut self, step: f32) {
        let p = match self.travel {
            Travel::Forward => {
                let p = self.progress + step;
                if p > 1.0 {
                    self.travel = Travel::Reverse;
                    2.0 - p
                } else {
                    p
                }
            }
            Travel::Reverse => {
                let p = self.progress - step;
                if p < 0.0 {
                    self.travel = Travel::Forward;
                    self.loops_done = self.loops_done.wrapping_add(1);
                    -p
                } else {
                    p
                }
            }
        };
        self.progress = p.clamp(0.0, 1.0);
    }

    fn fire_completion(&mut self) {
        if self.completion_fired {
            return;
        }
        self.completion_fired = true;
        if let Some(cb) = self.config.on_complete.clone() {
            cb();
        }
    }
}
