use crossterm::style::Color;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Rgb {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl Rgb {
    pub(crate) const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub(crate) fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let ch = |a: u8, b: u8| -> u8 {
            let v = (a as f32 + (b as f32 - a as f32) * t).round() as i32;
            v.clamp(0, 255) as u8
        };
        Rgb::new(ch(self.r, other.r), ch(self.g, other.g), ch(self.b, other.b))
    }

    pub(crate) fn to_color(self, enable_color: bool) -> Color {
        if enable_color {
            Color::Rgb {
                r: self.r,
                g: self.g,
                b: self.b,
            }
        } else {
            // grey ramp keeps fades readable without colour
            let l = ((self.r as u16 + self.g as u16 + self.b as u16) / 3) as u8;
            if l > 170 {
                Color::White
            } else if l > 90 {
                Color::Grey
            } else {
                Color::DarkGrey
            }
        }
    }
}

pub(crate) const BG: Rgb = Rgb::new(22, 8, 18);
pub(crate) const TEXT: Rgb = Rgb::new(255, 228, 236);
pub(crate) const MUTED: Rgb = Rgb::new(190, 140, 165);
pub(crate) const ACCENT: Rgb = Rgb::new(255, 92, 141);
pub(crate) const SUCCESS: Rgb = Rgb::new(120, 230, 160);
pub(crate) const ERROR: Rgb = Rgb::new(255, 120, 90);
pub(crate) const DISABLED: Rgb = Rgb::new(110, 80, 95);
pub(crate) const FRAME: Rgb = Rgb::new(200, 110, 150);
pub(crate) const OVERLAY: Rgb = Rgb::new(8, 3, 7);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_hits_both_ends() {
        let a = Rgb::new(0, 100, 200);
        let b = Rgb::new(255, 0, 100);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 7.0), b);
    }
}
