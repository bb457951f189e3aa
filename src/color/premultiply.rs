
//! Conversion between premultiplied and straight (non-premultiplied) 16-bit channels.
//! Both directions round half up, so that premultiplying an un-premultiplied
//! color yields the original color for every valid premultiplied input.

use super::{Rgba16, StraightRgba16};

const MAX: u32 = 0xffff;

/// Scale a straight channel by its alpha, rounding half up.
#[inline]
pub fn premultiply(value: u16, alpha: u16) -> u16 {
    ((u32::from(value) * u32::from(alpha) + MAX / 2) / MAX) as u16
}

/// Undo the alpha scaling of a premultiplied channel, rounding half up.
/// Returns zero for fully transparent colors. The result is clamped,
/// so a channel slightly larger than alpha does not overflow.
#[inline]
pub fn unpremultiply(value: u16, alpha: u16) -> u16 {
    if alpha == 0 { return 0; }

    let alpha = u32::from(alpha);
    let value = (u32::from(value) * MAX + alpha / 2) / alpha;
    value.min(MAX) as u16
}

impl Rgba16 {

    /// Remove the alpha scaling from the color channels. Alpha is kept as is.
    #[inline]
    pub fn to_straight(self) -> StraightRgba16 {
        let Rgba16 { r, g, b, a } = self;

        if a == 0xffff {
            return StraightRgba16 { r, g, b, a };
        }

        StraightRgba16 {
            r: unpremultiply(r, a),
            g: unpremultiply(g, a),
            b: unpremultiply(b, a),
            a,
        }
    }
}

impl StraightRgba16 {

    /// Scale the color channels by alpha. Alpha is kept as is.
    #[inline]
    pub fn to_premultiplied(self) -> Rgba16 {
        let StraightRgba16 { r, g, b, a } = self;

        if a == 0xffff {
            return Rgba16 { r, g, b, a };
        }

        Rgba16 {
            r: premultiply(r, a),
            g: premultiply(g, a),
            b: premultiply(b, a),
            a,
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn transparent_has_no_color(){
        assert_eq!(unpremultiply(0, 0), 0);
        assert_eq!(unpremultiply(1234, 0), 0);
        assert_eq!(StraightRgba16 { r: 0xffff, g: 0x8000, b: 1, a: 0 }.to_premultiplied(), Rgba16 { r: 0, g: 0, b: 0, a: 0 });
    }

    #[test]
    fn opaque_is_identity(){
        let color = Rgba16 { r: 0x1234, g: 0xfedc, b: 0, a: 0xffff };
        assert_eq!(color.to_straight(), StraightRgba16 { r: 0x1234, g: 0xfedc, b: 0, a: 0xffff });
        assert_eq!(color.to_straight().to_premultiplied(), color);

        for value in [0, 1, 0x7fff, 0x8000, 0xfffe, 0xffff] {
            assert_eq!(premultiply(value, 0xffff), value);
            assert_eq!(unpremultiply(value, 0xffff), value);
        }
    }

    #[test]
    fn rounds_half_up(){
        // 1 * 0xffff / 2 = 32767.5
        assert_eq!(unpremultiply(1, 2), 32768);
        assert_eq!(premultiply(32768, 2), 1);
        assert_eq!(premultiply(0x8000, 0x8000), 0x4000);
    }

    #[test]
    fn channel_equal_to_alpha_stays_in_range(){
        for alpha in [1, 2, 3, 0x101, 0x7fff, 0xfffe] {
            assert_eq!(unpremultiply(alpha, alpha), 0xffff);
        }

        assert_eq!(unpremultiply(0xffff, 0xfffe), 0xffff, "clamped");
    }

    #[test]
    fn round_trip_small_alpha_exhaustive(){
        for alpha in 1 ..= 1024_u16 {
            for value in 0 ..= alpha {
                assert_eq!(premultiply(unpremultiply(value, alpha), alpha), value, "value {} alpha {}", value, alpha);
            }
        }
    }

    #[test]
    fn round_trip_colors(){
        for alpha in (0x400 ..= 0xffff_u32).step_by(509) {
            let alpha = alpha as u16;
            for value in (0 ..= u32::from(alpha)).step_by(97) {
                let value = value as u16;
                let color = Rgba16 { r: value, g: alpha - value, b: alpha, a: alpha };
                assert_eq!(color.to_straight().to_premultiplied(), color);
            }
        }
    }
}
