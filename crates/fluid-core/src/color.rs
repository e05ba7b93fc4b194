use rand::Rng;

/// Roll a random color inside the given HSL bands, returned as [0, 1] RGB
/// floats. Reversed bands are swapped rather than rejected.
pub fn random_color(
    rng: &mut impl Rng,
    hue: (f32, f32),
    saturation: (f32, f32),
    lightness: (f32, f32),
) -> [f32; 3] {
    let (min_h, max_h) = ordered(hue);
    let (min_s, max_s) = ordered(saturation);
    let (min_l, max_l) = ordered(lightness);

    hsl_to_rgb(
        rng.gen_range(min_h..=max_h),
        rng.gen_range(min_s..=max_s),
        rng.gen_range(min_l..=max_l),
    )
}

/// HSL (hue in degrees) to RGB floats in [0, 1].
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> [f32; 3] {
    let f = |n: f32| {
        let k = (n + hue / 30.0) % 12.0;
        let a = saturation * lightness.min(1.0 - lightness);

        lightness - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0)
    };

    [f(0.0), f(8.0), f(4.0)]
}

fn ordered(range: (f32, f32)) -> (f32, f32) {
    if range.1 < range.0 {
        (range.1, range.0)
    } else {
        range
    }
}
