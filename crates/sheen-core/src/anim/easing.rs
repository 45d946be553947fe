use std::fmt;
use std::rc::Rc;

/// Easing curve applied to raw linear progress before it reaches geometry.
///
/// Curves must be deterministic and pure; the driver may evaluate them any
/// number of times per tick. Input is clamped to [0, 1] before application.
#[derive(Clone, Default)]
pub enum Easing {
    /// Identity — progress is used as-is.
    #[default]
    Linear,
    /// Cubic ease-in (slow start).
    EaseIn,
    /// Cubic ease-out (slow finish).
    EaseOut,
    /// Cubic ease-in-out (smooth S-curve).
    EaseInOut,
    /// Caller-provided curve. Must be pure and map [0, 1] into [0, 1].
    Custom(Rc<dyn Fn(f32) -> f32>),
}

impl Easing {
    /// Applies the curve to a normalized progress value.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::Custom(f) => f(t),
        }
    }
}

impl fmt::Debug for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Linear => f.write_str("Linear"),
            Easing::EaseIn => f.write_str("EaseIn"),
            Easing::EaseOut => f.write_str("EaseOut"),
            Easing::EaseInOut => f.write_str("EaseInOut"),
            Easing::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_curves_fix_endpoints() {
        let curves = [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut];
        for c in curves {
            assert!((c.apply(0.0) - 0.0).abs() < 1e-6, "{c:?} at 0");
            assert!((c.apply(1.0) - 1.0).abs() < 1e-6, "{c:?} at 1");
        }
    }

    #[test]
    fn linear_is_identity() {
        assert_eq!(Easing::Linear.apply(0.37), 0.37);
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Easing::Linear.apply(-3.0), 0.0);
        assert_eq!(Easing::Linear.apply(7.0), 1.0);
    }

    #[test]
    fn custom_curve_is_invoked() {
        let c = Easing::Custom(Rc::new(|t| t * t));
        assert!((c.apply(0.5) - 0.25).abs() < 1e-6);
    }
}
