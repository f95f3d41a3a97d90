use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Cubic bezier timing curve with implicit endpoints (0,0) and (1,1).
///
/// Control points follow the CSS `cubic-bezier()` convention: `x1`/`x2`
/// stay in `[0, 1]`, `y1`/`y2` may overshoot.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    pub const LINEAR: CubicBezier = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
    pub const EASE: CubicBezier = CubicBezier::new(0.25, 0.1, 0.25, 1.0);
    pub const EASE_IN: CubicBezier = CubicBezier::new(0.42, 0.0, 1.0, 1.0);
    pub const EASE_OUT: CubicBezier = CubicBezier::new(0.0, 0.0, 0.58, 1.0);
    pub const EASE_IN_OUT: CubicBezier = CubicBezier::new(0.42, 0.0, 0.58, 1.0);

    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn is_linear(&self) -> bool {
        *self == Self::LINEAR
    }

    /// Remap a linear progress `t` in `[0, 1]` through the curve.
    ///
    /// Solves x(s) = t for the curve parameter with Newton iteration, then
    /// samples y(s). Endpoints are exact: apply(0) == 0 and apply(1) == 1.
    pub fn apply(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        if self.is_linear() {
            return t;
        }

        let max_iterations = 16;
        let epsilon = 1e-6;
        let mut s = t;

        for _ in 0..max_iterations {
            let x = self.sample_x(s);
            if (x - t).abs() < epsilon {
                break;
            }

            let dx_ds = self.sample_x_derivative(s);
            if dx_ds.abs() < epsilon {
                break;
            }

            s -= (x - t) / dx_ds;
            s = s.clamp(0.0, 1.0);
        }

        self.sample_y(s)
    }

    fn sample_x(&self, s: f64) -> f64 {
        let one_minus_s = 1.0 - s;
        3.0 * one_minus_s * one_minus_s * s * self.x1
            + 3.0 * one_minus_s * s * s * self.x2
            + s * s * s
    }

    fn sample_y(&self, s: f64) -> f64 {
        let one_minus_s = 1.0 - s;
        3.0 * one_minus_s * one_minus_s * s * self.y1
            + 3.0 * one_minus_s * s * s * self.y2
            + s * s * s
    }

    fn sample_x_derivative(&self, s: f64) -> f64 {
        let one_minus_s = 1.0 - s;
        3.0 * one_minus_s * one_minus_s * self.x1
            + 6.0 * one_minus_s * s * (self.x2 - self.x1)
            + 3.0 * s * s * (1.0 - self.x2)
    }

    pub fn to_css(&self) -> String {
        format!(
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

/// Track-level timing function: the CSS keywords plus a custom curve.
///
/// Serialized as the CSS timing-function text (`"ease-in-out"`,
/// `"cubic-bezier(0.4, 0, 0.2, 1)"`) so stored projects read like the CSS
/// they export to.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum EasingFunction {
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
    CubicBezier(CubicBezier),
}

impl EasingFunction {
    pub fn bezier(&self) -> CubicBezier {
        match self {
            EasingFunction::Linear => CubicBezier::LINEAR,
            EasingFunction::Ease => CubicBezier::EASE,
            EasingFunction::EaseIn => CubicBezier::EASE_IN,
            EasingFunction::EaseOut => CubicBezier::EASE_OUT,
            EasingFunction::EaseInOut => CubicBezier::EASE_IN_OUT,
            EasingFunction::CubicBezier(curve) => *curve,
        }
    }

    pub fn apply(&self, t: f64) -> f64 {
        match self {
            EasingFunction::Linear => t.clamp(0.0, 1.0),
            other => other.bezier().apply(t),
        }
    }

    pub fn to_css(&self) -> String {
        match self {
            EasingFunction::Linear => "linear".to_string(),
            EasingFunction::Ease => "ease".to_string(),
            EasingFunction::EaseIn => "ease-in".to_string(),
            EasingFunction::EaseOut => "ease-out".to_string(),
            EasingFunction::EaseInOut => "ease-in-out".to_string(),
            EasingFunction::CubicBezier(curve) => curve.to_css(),
        }
    }

    pub fn parse(text: &str) -> Option<Self> {
        match text.trim() {
            "linear" => Some(EasingFunction::Linear),
            "ease" => Some(EasingFunction::Ease),
            "ease-in" => Some(EasingFunction::EaseIn),
            "ease-out" => Some(EasingFunction::EaseOut),
            "ease-in-out" => Some(EasingFunction::EaseInOut),
            other => {
                let inner = other
                    .strip_prefix("cubic-bezier(")?
                    .strip_suffix(')')?;
                let parts: Vec<f64> = inner
                    .split(',')
                    .map(|p| p.trim().parse::<f64>())
                    .collect::<Result<_, _>>()
                    .ok()?;
                if parts.len() != 4 {
                    return None;
                }
                Some(EasingFunction::CubicBezier(CubicBezier::new(
                    parts[0], parts[1], parts[2], parts[3],
                )))
            }
        }
    }
}

impl Serialize for EasingFunction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for EasingFunction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        EasingFunction::parse(&text)
            .ok_or_else(|| D::Error::custom(format!("unknown easing function: {text}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bezier_endpoints_are_exact() {
        let curve = CubicBezier::EASE_IN_OUT;
        assert_eq!(curve.apply(0.0), 0.0);
        assert_eq!(curve.apply(1.0), 1.0);
    }

    #[test]
    fn linear_is_identity() {
        assert_eq!(EasingFunction::Linear.apply(0.25), 0.25);
        assert_eq!(CubicBezier::LINEAR.apply(0.75), 0.75);
    }

    #[test]
    fn ease_in_out_is_symmetric_at_midpoint() {
        let half = CubicBezier::EASE_IN_OUT.apply(0.5);
        assert!((half - 0.5).abs() < 1e-3, "midpoint was {half}");
    }

    #[test]
    fn easing_roundtrips_through_css_text() {
        let curve = EasingFunction::CubicBezier(CubicBezier::new(0.4, 0.0, 0.2, 1.0));
        let css = curve.to_css();
        assert_eq!(css, "cubic-bezier(0.4, 0, 0.2, 1)");
        assert_eq!(EasingFunction::parse(&css), Some(curve));
        assert_eq!(EasingFunction::parse("ease-in"), Some(EasingFunction::EaseIn));
        assert_eq!(EasingFunction::parse("spring"), None);
    }
}
