
//! Pixel colors and the conversions between the native pixel models.
//! Every model can be converted to the premultiplied `Rgba16`,
//! which is what the pixel readers and writers exchange.

pub mod premultiply;


/// Four 16-bit channels, alpha-premultiplied.
/// No color channel should be larger than `a`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Rgba16 {

    /// Red, scaled by alpha.
    pub r: u16,

    /// Green, scaled by alpha.
    pub g: u16,

    /// Blue, scaled by alpha.
    pub b: u16,

    /// Coverage.
    pub a: u16,
}

/// Four 16-bit channels, not premultiplied.
/// The color channels are independent of alpha.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct StraightRgba16 {

    /// Red.
    pub r: u16,

    /// Green.
    pub g: u16,

    /// Blue.
    pub b: u16,

    /// Coverage.
    pub a: u16,
}

/// A color in one of the native pixel models of the supported image layouts.
/// This is what the generic `Image::pixel` returns and `ImageMut::set_pixel` accepts.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Color {

    /// Premultiplied, 8 bits per channel.
    Rgba8([u8; 4]),

    /// Premultiplied, 16 bits per channel.
    Rgba16(Rgba16),

    /// Not premultiplied, 8 bits per channel.
    StraightRgba8([u8; 4]),

    /// Not premultiplied, 16 bits per channel.
    StraightRgba16(StraightRgba16),

    /// Coverage only, 8 bits.
    Alpha8(u8),

    /// Coverage only, 16 bits.
    Alpha16(u16),

    /// Opaque luma, 8 bits.
    Gray8(u8),

    /// Opaque luma, 16 bits.
    Gray16(u16),

    /// Opaque cyan, magenta, yellow and black, 8 bits each.
    Cmyk([u8; 4]),

    /// Opaque luma and chroma, 8 bits each.
    YCbCr([u8; 3]),

    /// Luma and chroma with straight alpha, 8 bits each.
    YCbCrAlpha([u8; 4]),
}

/// Expand an 8-bit value to the full 16-bit range, so that `0xff` becomes `0xffff`.
#[inline]
pub fn widen(value: u8) -> u16 {
    u16::from(value) * 0x101
}

/// Keep only the high byte of a 16-bit value.
#[inline]
pub fn narrow(value: u16) -> u8 {
    (value >> 8) as u8
}


impl Color {

    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::Rgba16(Rgba16::TRANSPARENT);

    /// Convert this color to premultiplied 16-bit channels.
    pub fn to_rgba16(self) -> Rgba16 {
        match self {
            Color::Rgba8(bytes) => Rgba16::from_bytes(bytes),
            Color::Rgba16(color) => color,
            Color::StraightRgba8(bytes) => StraightRgba16::from_bytes(bytes).to_premultiplied(),
            Color::StraightRgba16(color) => color.to_premultiplied(),
            Color::Alpha8(alpha) => Rgba16::from_alpha(widen(alpha)),
            Color::Alpha16(alpha) => Rgba16::from_alpha(alpha),
            Color::Gray8(luma) => Rgba16::from_gray(widen(luma)),
            Color::Gray16(luma) => Rgba16::from_gray(luma),
            Color::Cmyk(cmyk) => Rgba16::from_cmyk(cmyk),
            Color::YCbCr([y, cb, cr]) => Rgba16::from_ycbcr(y, cb, cr),
            Color::YCbCrAlpha([y, cb, cr, a]) => {
                let Rgba16 { r, g, b, .. } = Rgba16::from_ycbcr(y, cb, cr);
                StraightRgba16 { r, g, b, a: widen(a) }.to_premultiplied()
            },
        }
    }
}

impl From<Rgba16> for Color {
    fn from(color: Rgba16) -> Self { Color::Rgba16(color) }
}

impl From<StraightRgba16> for Color {
    fn from(color: StraightRgba16) -> Self { Color::StraightRgba16(color) }
}


impl Rgba16 {

    /// Fully transparent black.
    pub const TRANSPARENT: Rgba16 = Rgba16 { r: 0, g: 0, b: 0, a: 0 };

    /// Opaque black.
    pub const BLACK: Rgba16 = Rgba16 { r: 0, g: 0, b: 0, a: 0xffff };

    /// Opaque white.
    pub const WHITE: Rgba16 = Rgba16 { r: 0xffff, g: 0xffff, b: 0xffff, a: 0xffff };

    /// Create a color from premultiplied channels.
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Rgba16 { r, g, b, a }
    }

    /// Widen premultiplied 8-bit channels.
    #[inline]
    pub fn from_bytes([r, g, b, a]: [u8; 4]) -> Self {
        Rgba16 { r: widen(r), g: widen(g), b: widen(b), a: widen(a) }
    }

    /// Read big-endian premultiplied 16-bit channels.
    #[inline]
    pub fn from_be_bytes(bytes: [u8; 8]) -> Self {
        Rgba16 {
            r: u16::from_be_bytes([bytes[0], bytes[1]]),
            g: u16::from_be_bytes([bytes[2], bytes[3]]),
            b: u16::from_be_bytes([bytes[4], bytes[5]]),
            a: u16::from_be_bytes([bytes[6], bytes[7]]),
        }
    }

    /// Pure coverage without any color.
    #[inline]
    pub fn from_alpha(alpha: u16) -> Self {
        Rgba16 { r: 0, g: 0, b: 0, a: alpha }
    }

    /// An opaque gray.
    #[inline]
    pub fn from_gray(luma: u16) -> Self {
        Rgba16 { r: luma, g: luma, b: luma, a: 0xffff }
    }

    /// An opaque color from cyan, magenta, yellow and black.
    #[inline]
    pub fn from_cmyk([c, m, y, k]: [u8; 4]) -> Self {
        let white = 0xffff - u32::from(widen(k));
        let channel = |ink: u8| ((0xffff - u32::from(widen(ink))) * white / 0xffff) as u16;
        Rgba16 { r: channel(c), g: channel(m), b: channel(y), a: 0xffff }
    }

    /// An opaque color from luma and chroma, using the JFIF transform in 16-bit fixed point.
    #[inline]
    pub fn from_ycbcr(y: u8, cb: u8, cr: u8) -> Self {
        let luma = i32::from(y) * 0x10101;
        let cb = i32::from(cb) - 128;
        let cr = i32::from(cr) - 128;

        let channel = |value: i32| (value.clamp(0, 0xff_ffff) >> 8) as u16;

        Rgba16 {
            r: channel(luma + 91881 * cr),
            g: channel(luma - 22554 * cb - 46802 * cr),
            b: channel(luma + 116130 * cb),
            a: 0xffff,
        }
    }

    /// Narrow to premultiplied 8-bit channels.
    #[inline]
    pub fn to_bytes(self) -> [u8; 4] {
        [narrow(self.r), narrow(self.g), narrow(self.b), narrow(self.a)]
    }

    /// Premultiplied 16-bit channels as big-endian bytes.
    #[inline]
    pub fn to_be_bytes(self) -> [u8; 8] {
        let [r0, r1] = self.r.to_be_bytes();
        let [g0, g1] = self.g.to_be_bytes();
        let [b0, b1] = self.b.to_be_bytes();
        let [a0, a1] = self.a.to_be_bytes();
        [r0, r1, g0, g1, b0, b1, a0, a1]
    }

    /// The weighted luma of the color channels in 16-bit fixed point,
    /// approximating the ITU-R BT.601 coefficients.
    #[inline]
    fn luma_sum(self) -> u32 {
        19595 * u32::from(self.r) + 38470 * u32::from(self.g) + 7471 * u32::from(self.b) + (1 << 15)
    }

    /// Luma, 16 bits. Alpha is ignored.
    #[inline]
    pub fn to_gray16(self) -> u16 {
        (self.luma_sum() >> 16) as u16
    }

    /// Luma, 8 bits. Alpha is ignored.
    #[inline]
    pub fn to_gray8(self) -> u8 {
        (self.luma_sum() >> 24) as u8
    }

    /// Cyan, magenta, yellow and black. Alpha is ignored.
    /// Black has no ink except `k = 0xff`.
    #[inline]
    pub fn to_cmyk(self) -> [u8; 4] {
        let [r, g, b, _] = self.to_bytes();
        let (r, g, b) = (u32::from(r), u32::from(g), u32::from(b));

        let white = r.max(g).max(b);
        if white == 0 {
            return [0, 0, 0, 0xff];
        }

        let ink = |channel: u32| ((white - channel) * 0xff / white) as u8;
        [ink(r), ink(g), ink(b), (0xff - white) as u8]
    }

    /// Luma and chroma of the 8-bit color channels. Alpha is ignored.
    #[inline]
    pub fn to_ycbcr(self) -> [u8; 3] {
        let [r, g, b, _] = self.to_bytes();
        let (r, g, b) = (i32::from(r), i32::from(g), i32::from(b));

        let y = (19595 * r + 38470 * g + 7471 * b + (1 << 15)) >> 16;
        let cb = -11056 * r - 21712 * g + 32768 * b + (257 << 15);
        let cr = 32768 * r - 27440 * g - 5328 * b + (257 << 15);

        let chroma = |value: i32| (value >> 16).clamp(0, 0xff) as u8;
        [y as u8, chroma(cb), chroma(cr)]
    }

    /// Luma and chroma of the straight color, followed by 8-bit alpha.
    #[inline]
    pub fn to_ycbcr_alpha(self) -> [u8; 4] {
        let StraightRgba16 { r, g, b, a } = self.to_straight();
        let [y, cb, cr] = Rgba16 { r, g, b, a: 0xffff }.to_ycbcr();
        [y, cb, cr, narrow(a)]
    }
}

impl StraightRgba16 {

    /// Widen straight 8-bit channels.
    #[inline]
    pub fn from_bytes([r, g, b, a]: [u8; 4]) -> Self {
        StraightRgba16 { r: widen(r), g: widen(g), b: widen(b), a: widen(a) }
    }

    /// Read big-endian straight 16-bit channels.
    #[inline]
    pub fn from_be_bytes(bytes: [u8; 8]) -> Self {
        let Rgba16 { r, g, b, a } = Rgba16::from_be_bytes(bytes);
        StraightRgba16 { r, g, b, a }
    }

    /// Narrow to straight 8-bit channels.
    #[inline]
    pub fn to_bytes(self) -> [u8; 4] {
        [narrow(self.r), narrow(self.g), narrow(self.b), narrow(self.a)]
    }

    /// Straight 16-bit channels as big-endian bytes.
    #[inline]
    pub fn to_be_bytes(self) -> [u8; 8] {
        let StraightRgba16 { r, g, b, a } = self;
        Rgba16 { r, g, b, a }.to_be_bytes()
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn widen_and_narrow(){
        assert_eq!(widen(0), 0);
        assert_eq!(widen(0x80), 0x8080);
        assert_eq!(widen(0xff), 0xffff);

        for value in 0 ..= 255 {
            assert_eq!(narrow(widen(value)), value);
        }
    }

    #[test]
    fn big_endian_channels(){
        let color = Rgba16::new(0x0102, 0x0304, 0x0506, 0x0708);
        assert_eq!(color.to_be_bytes(), [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(Rgba16::from_be_bytes(color.to_be_bytes()), color);
    }

    #[test]
    fn alpha_has_no_color(){
        assert_eq!(Color::Alpha8(0x80).to_rgba16(), Rgba16::new(0, 0, 0, 0x8080));
        assert_eq!(Color::Alpha16(0x1234).to_rgba16(), Rgba16::new(0, 0, 0, 0x1234));
    }

    #[test]
    fn gray_is_opaque(){
        assert_eq!(Color::Gray8(0x40).to_rgba16(), Rgba16::new(0x4040, 0x4040, 0x4040, 0xffff));
        assert_eq!(Rgba16::WHITE.to_gray8(), 0xff);
        assert_eq!(Rgba16::WHITE.to_gray16(), 0xffff);
        assert_eq!(Rgba16::BLACK.to_gray16(), 0);
        assert_eq!(Rgba16::new(0x8080, 0x8080, 0x8080, 0xffff).to_gray8(), 0x80);
    }

    #[test]
    fn cmyk_extremes(){
        assert_eq!(Rgba16::WHITE.to_cmyk(), [0, 0, 0, 0]);
        assert_eq!(Rgba16::BLACK.to_cmyk(), [0, 0, 0, 0xff]);
        assert_eq!(Rgba16::new(0xffff, 0, 0, 0xffff).to_cmyk(), [0, 0xff, 0xff, 0]);

        assert_eq!(Color::Cmyk([0, 0, 0, 0]).to_rgba16(), Rgba16::WHITE);
        assert_eq!(Color::Cmyk([0, 0, 0, 0xff]).to_rgba16(), Rgba16::BLACK);
    }

    #[test]
    fn ycbcr_extremes(){
        assert_eq!(Rgba16::WHITE.to_ycbcr(), [0xff, 0x80, 0x80]);
        assert_eq!(Rgba16::BLACK.to_ycbcr(), [0, 0x80, 0x80]);
        assert_eq!(Color::YCbCr([0xff, 0x80, 0x80]).to_rgba16(), Rgba16::WHITE);
        assert_eq!(Color::YCbCr([0, 0x80, 0x80]).to_rgba16(), Rgba16::BLACK);
    }

    #[test]
    fn ycbcr_alpha_is_straight(){
        let half_white = Rgba16::new(0x8080, 0x8080, 0x8080, 0x8080);
        assert_eq!(half_white.to_ycbcr_alpha(), [0xff, 0x80, 0x80, 0x80]);
        assert_eq!(Color::YCbCrAlpha([0xff, 0x80, 0x80, 0x80]).to_rgba16(), half_white);
        assert_eq!(Color::YCbCrAlpha([0xff, 0x80, 0x80, 0]).to_rgba16(), Rgba16::TRANSPARENT);
    }

    #[test]
    fn straight_bytes_are_premultiplied_on_read(){
        assert_eq!(Color::StraightRgba8([0xff, 0, 0, 0]).to_rgba16(), Rgba16::TRANSPARENT);
        assert_eq!(Color::StraightRgba8([0xff, 0xff, 0xff, 0xff]).to_rgba16(), Rgba16::WHITE);
        assert_eq!(Color::StraightRgba8([0xff, 0, 0, 0x80]).to_rgba16(), Rgba16::new(0x8080, 0, 0, 0x8080));
    }
}
