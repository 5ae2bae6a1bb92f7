use serde::{Deserialize, Serialize};

/// Hermite step between two edges. Coincident edges give a hard step.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge0 == edge1 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }

    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// A plateau of width `range` around `center` with smooth shoulders of
/// width `transition`. With `wrap`, the pulse repeats every whole turn.
pub fn smoothpulse(center: f32, range: f32, transition: f32, x: f32, wrap: bool) -> f32 {
    let edge1 = center - range / 2.0;
    let edge2 = center + range / 2.0;
    let edge0 = edge1 - transition;
    let edge3 = edge2 + transition;

    let pulse = |x: f32| smoothstep(edge0, edge1, x) - smoothstep(edge2, edge3, x);

    if wrap {
        let offset = if x > 0.5 { -1.0 } else { 1.0 };
        pulse(x).max(pulse(x + offset))
    } else {
        pulse(x)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdjustMode {
    /// Saturation and value/lightness are scaled by the adjustment.
    #[default]
    Multiply,
    /// Saturation and value/lightness are offset by the adjustment.
    Offset,
    /// Output the selection mask as `(0, 0, mask)`.
    Mask,
}

/// Adjust colours that lie within a hue/saturation/value window.
///
/// All triples are in the working hue model (HSL or HSV). Hue is always
/// offset by `adjust[0]`; the other two components follow `mode`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RangeAdjustment {
    pub adjust: [f32; 3],
    pub center: [f32; 3],
    pub range: [f32; 3],
    pub transition: [f32; 3],
    #[serde(default)]
    pub mode: AdjustMode,
}

impl RangeAdjustment {
    /// Membership of `color` in the window, from 0 (outside) to 1 (inside).
    pub fn mask(&self, color: [f32; 3]) -> f32 {
        let [h, s, vl] = color;
        let m_h = smoothpulse(self.center[0], self.range[0], self.transition[0], h, true);
        let m_s = smoothpulse(self.center[1], self.range[1], self.transition[1], s, false);
        let m_vl = smoothpulse(self.center[2], self.range[2], self.transition[2], vl, false);
        m_h.min(m_s.min(m_vl))
    }

    pub fn is_identity(&self) -> bool {
        match self.mode {
            AdjustMode::Multiply => self.adjust == [0.0, 1.0, 1.0],
            AdjustMode::Offset => self.adjust == [0.0, 0.0, 0.0],
            AdjustMode::Mask => false,
        }
    }

    pub fn apply(&self, color: [f32; 3]) -> [f32; 3] {
        let mix = self.mask(color);
        let [h, s, vl] = color;
        let blend = |original: f32, adjusted: f32| mix * adjusted + (1.0 - mix) * original;

        let adjusted = match self.mode {
            AdjustMode::Mask => [0.0, 0.0, mix],
            AdjustMode::Offset => [
                blend(h, h + self.adjust[0]),
                blend(s, s + self.adjust[1]),
                blend(vl, vl + self.adjust[2]),
            ],
            AdjustMode::Multiply => [
                blend(h, h + self.adjust[0]),
                blend(s, s * self.adjust[1]),
                blend(vl, vl * self.adjust[2]),
            ],
        };

        conform(adjusted)
    }
}

/// Wrap hue into `[0, 1)`, clamp saturation to `[0, 1]` and keep v/l positive.
pub fn conform(color: [f32; 3]) -> [f32; 3] {
    let [h, s, vl] = color;
    let h = h.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs.
    let h = if h >= 1.0 { 0.0 } else { h };
    [h, s.clamp(0.0, 1.0), vl.max(0.0)]
}

/// Free-function form of [`RangeAdjustment::apply`].
pub fn adjust_hue_saturation_range(
    adjust: [f32; 3],
    center: [f32; 3],
    range: [f32; 3],
    transition: [f32; 3],
    color: [f32; 3],
    mode: AdjustMode,
) -> [f32; 3] {
    RangeAdjustment {
        adjust,
        center,
        range,
        transition,
        mode,
    }
    .apply(color)
}
