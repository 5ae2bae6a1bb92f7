use num_traits::Float;

/// Float types the colour conversions run on.
pub trait Component: Float + From<f32> {}

impl<T: Float + From<f32>> Component for T {}

#[inline]
fn c<T: Component>(v: f32) -> T {
    <T as From<f32>>::from(v)
}

/// Hue in sixths of a turn, before normalisation.
#[inline]
fn hue_sextant<T: Component>(r: T, g: T, b: T, max: T, chroma: T) -> T {
    if chroma == T::zero() {
        T::zero()
    } else if max == r {
        (g - b) / chroma
    } else if max == g {
        c::<T>(2.0) + (b - r) / chroma
    } else {
        c::<T>(4.0) + (r - g) / chroma
    }
}

#[inline]
fn normalised_hue<T: Component>(r: T, g: T, b: T, max: T, chroma: T) -> T {
    let h = hue_sextant(r, g, b, max, chroma) / c(6.0);
    if h < T::zero() {
        h + T::one()
    } else {
        h
    }
}

/// Assemble RGB from chroma, the secondary component and the hue sector.
#[inline]
fn from_sector<T: Component>(h6: T, chroma: T, x: T, m: T) -> [T; 3] {
    let zero = T::zero();
    let sector = h6.floor().to_i32().unwrap_or(0);
    let (r, g, b) = match sector {
        0 => (chroma, x, zero),
        1 => (x, chroma, zero),
        2 => (zero, chroma, x),
        3 => (zero, x, chroma),
        4 => (x, zero, chroma),
        _ => (chroma, zero, x),
    };
    [r + m, g + m, b + m]
}

#[inline]
fn hue_to_sextants<T: Component>(h: T) -> T {
    let h = if h == T::one() { T::zero() } else { h };
    h * c(6.0)
}

pub fn rgb_to_hsl<T: Component>(color: [T; 3]) -> [T; 3] {
    let [r, g, b] = color;
    let max = r.max(g.max(b));
    let min = r.min(g.min(b));
    let chroma = max - min;
    let l = (max + min) / c(2.0);
    let h = normalised_hue(r, g, b, max, chroma);

    let s = if l > T::zero() && l < T::one() {
        (max - l) / l.min(T::one() - l)
    } else {
        T::zero()
    };

    [h, s, l]
}

pub fn hsl_to_rgb<T: Component>(color: [T; 3]) -> [T; 3] {
    let [h, s, l] = color;
    let h6 = hue_to_sextants(h);
    let chroma = (T::one() - (c::<T>(2.0) * l - T::one()).abs()) * s;
    let x = chroma * (T::one() - ((h6 % c(2.0)) - T::one()).abs());
    let m = l - chroma / c(2.0);
    from_sector(h6, chroma, x, m)
}

pub fn rgb_to_hsv<T: Component>(color: [T; 3]) -> [T; 3] {
    let [r, g, b] = color;
    let max = r.max(g.max(b));
    let min = r.min(g.min(b));
    let chroma = max - min;
    let h = normalised_hue(r, g, b, max, chroma);
    let s = if max > T::zero() { chroma / max } else { T::zero() };
    [h, s, max]
}

pub fn hsv_to_rgb<T: Component>(color: [T; 3]) -> [T; 3] {
    let [h, s, v] = color;
    let h6 = hue_to_sextants(h);
    let chroma = v * s;
    let x = chroma * (T::one() - ((h6 % c(2.0)) - T::one()).abs());
    let m = v - chroma;
    from_sector(h6, chroma, x, m)
}
