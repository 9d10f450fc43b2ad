//! Colourspaces composed with the appearance model.

use approx::assert_abs_diff_eq;
use colour_appearance::prelude::*;
use colour_math::{first_order_colour_fit, D65};
use colour_primaries::{c_log, srgb};
use colour_transfer::bt1886;

#[test]
fn c_log_through_ciecam02() {
    let space = c_log().unwrap();
    let white = space.rgb_to_xyz(space.encode_rgb(Vec3::ONE)) * 100.0;
    let cond = ViewingConditions::new(64.0, 20.0, Surround::Dim).unwrap();
    let env = Environment::new(white, &cond).unwrap();

    for encoded in [
        Vec3::new(0.35, 0.31, 0.28),
        Vec3::new(0.5, 0.2, 0.4),
        Vec3::new(0.12, 0.45, 0.6),
    ] {
        let xyz = space.rgb_to_xyz(encoded) * 100.0;
        let spec = env.forward(xyz).unwrap();
        let back = env.reverse(&spec.into()).unwrap();
        let rgb = space.xyz_to_rgb(back / 100.0);

        for i in 0..3 {
            assert_abs_diff_eq!(rgb[i], encoded[i], epsilon = 1e-4);
        }
    }
}

#[test]
fn srgb_white_is_d65() {
    let space = srgb().unwrap();
    let white = space.rgb_to_xyz(Vec3::ONE);
    let expected = space.primaries.white_xyz();
    for i in 0..3 {
        assert_abs_diff_eq!(white[i], expected[i], epsilon = 1e-12);
    }

    // The xy-derived white and the tabulated D65 tristimulus values differ
    // in Z by about 2.3e-4.
    assert_abs_diff_eq!(white.x, D65.x, epsilon = 1e-4);
    assert_abs_diff_eq!(white.y, D65.y, epsilon = 1e-12);
    assert_abs_diff_eq!(white.z, D65.z, epsilon = 5e-4);
}

#[test]
fn fit_recovers_primary_matrix() {
    let space = srgb().unwrap();
    let rgb: Vec<Vec3> = (0..24)
        .map(|i| {
            let t = i as f64 / 23.0;
            Vec3::new(t, (t * 7.0).fract(), (t * 13.0).fract())
        })
        .collect();
    let xyz: Vec<Vec3> = rgb.iter().map(|&v| space.to_xyz * v).collect();

    let fit = first_order_colour_fit(&rgb, &xyz).unwrap();
    for i in 0..3 {
        for j in 0..3 {
            assert_abs_diff_eq!(fit.m[i][j], space.to_xyz.m[i][j], epsilon = 1e-9);
        }
    }
}

#[test]
fn bt1886_display_feeds_ciecam02() {
    // Grey signal on a reference display, judged against the display white.
    let white_nits = bt1886::eotf(1.0, bt1886::DEFAULT_L_B, bt1886::DEFAULT_L_W);
    let grey_nits = bt1886::eotf(0.5, bt1886::DEFAULT_L_B, bt1886::DEFAULT_L_W);
    let white = D65 * 100.0;
    let grey = D65 * (100.0 * grey_nits / white_nits);

    let cond = ViewingConditions::new(white_nits / 5.0, 20.0, Surround::Dim)
        .unwrap()
        .with_discount_illuminant(true);
    let spec = xyz_to_ciecam02(grey, white, &cond).unwrap();

    assert!(spec.lightness > 0.0 && spec.lightness < 100.0);
    assert!(spec.chroma < 0.01);

    let v = bt1886::oetf(grey_nits, bt1886::DEFAULT_L_B, bt1886::DEFAULT_L_W);
    assert_abs_diff_eq!(v, 0.5, epsilon = 1e-12);
}
