//! Sparse settings overlay.
//!
//! Hosts pass a loosely-typed settings object. Each recognised key is
//! validated on its own and either applied to the [`DecodeParams`] record or
//! skipped. Nothing here fails: wrong shapes, wrong types and unknown keys
//! leave the corresponding parameter as it was.

use serde_json::{Map, Value};
use tracing::trace;

use super::params::{DecodeParams, ParamString};

/// Applies one settings value to the record. Returns whether it was applied.
type Setter = fn(&mut DecodeParams, &Value) -> bool;

/// Recognised keys in application order.
const OVERLAYS: &[(&str, Setter)] = &[
    // Arrays
    ("greybox", |p, v| set_array(&mut p.greybox, v, as_u32)),
    ("cropbox", |p, v| set_array(&mut p.cropbox, v, as_u32)),
    ("aber", |p, v| set_array(&mut p.aber, v, as_f64)),
    ("gamm", |p, v| set_array(&mut p.gamm, v, as_f64)),
    ("userMul", |p, v| set_array(&mut p.user_mul, v, as_f32)),
    ("userCblack", |p, v| set_array(&mut p.user_cblack, v, as_i32)),
    // Floats
    ("bright", |p, v| set_scalar(&mut p.bright, v, as_f32)),
    ("threshold", |p, v| set_scalar(&mut p.threshold, v, as_f32)),
    ("autoBrightThr", |p, v| set_scalar(&mut p.auto_bright_thr, v, as_f32)),
    ("adjustMaximumThr", |p, v| {
        set_scalar(&mut p.adjust_maximum_thr, v, as_f32)
    }),
    ("expShift", |p, v| set_scalar(&mut p.exp_shift, v, as_f32)),
    ("expPreser", |p, v| set_scalar(&mut p.exp_preser, v, as_f32)),
    // Integers
    ("halfSize", |p, v| set_scalar(&mut p.half_size, v, as_i32)),
    ("fourColorRgb", |p, v| set_scalar(&mut p.four_color_rgb, v, as_i32)),
    ("highlight", |p, v| set_scalar(&mut p.highlight, v, as_i32)),
    ("useAutoWb", |p, v| set_scalar(&mut p.use_auto_wb, v, as_i32)),
    ("useCameraWb", |p, v| set_scalar(&mut p.use_camera_wb, v, as_i32)),
    ("useCameraMatrix", |p, v| {
        set_scalar(&mut p.use_camera_matrix, v, as_i32)
    }),
    ("outputColor", |p, v| set_scalar(&mut p.output_color, v, as_i32)),
    ("outputBps", |p, v| set_scalar(&mut p.output_bps, v, as_i32)),
    ("outputTiff", |p, v| set_scalar(&mut p.output_tiff, v, as_i32)),
    ("outputFlags", |p, v| set_scalar(&mut p.output_flags, v, as_i32)),
    ("userFlip", |p, v| set_scalar(&mut p.user_flip, v, as_i32)),
    ("userQual", |p, v| set_scalar(&mut p.user_qual, v, as_i32)),
    ("userBlack", |p, v| set_scalar(&mut p.user_black, v, as_i32)),
    ("userSat", |p, v| set_scalar(&mut p.user_sat, v, as_i32)),
    ("medPasses", |p, v| set_scalar(&mut p.med_passes, v, as_i32)),
    ("noAutoBright", |p, v| set_scalar(&mut p.no_auto_bright, v, as_i32)),
    ("useFujiRotate", |p, v| set_scalar(&mut p.use_fuji_rotate, v, as_i32)),
    ("greenMatching", |p, v| set_scalar(&mut p.green_matching, v, as_i32)),
    ("dcbIterations", |p, v| set_scalar(&mut p.dcb_iterations, v, as_i32)),
    ("dcbEnhanceFl", |p, v| set_scalar(&mut p.dcb_enhance_fl, v, as_i32)),
    ("fbddNoiserd", |p, v| set_scalar(&mut p.fbdd_noiserd, v, as_i32)),
    ("expCorrec", |p, v| set_scalar(&mut p.exp_correc, v, as_i32)),
    ("noAutoScale", |p, v| set_scalar(&mut p.no_auto_scale, v, as_i32)),
    ("noInterpolation", |p, v| {
        set_scalar(&mut p.no_interpolation, v, as_i32)
    }),
    // Owned strings
    ("outputProfile", |p, v| set_string(&mut p.output_profile, v)),
    ("cameraProfile", |p, v| set_string(&mut p.camera_profile, v)),
    ("badPixels", |p, v| set_string(&mut p.bad_pixels, v)),
    ("darkFrame", |p, v| set_string(&mut p.dark_frame, v)),
];

/// Every settings key the overlay understands.
pub fn recognized_keys() -> impl Iterator<Item = &'static str> {
    OVERLAYS.iter().map(|(key, _)| *key)
}

/// Apply a sparse settings object onto `params`.
///
/// `None`, `null` and non-object values are a no-op. Returns the number of
/// keys that were applied.
pub fn apply_settings(params: &mut DecodeParams, settings: Option<&Value>) -> usize {
    match settings {
        Some(Value::Object(map)) => apply_map(params, map),
        _ => 0,
    }
}

fn apply_map(params: &mut DecodeParams, map: &Map<String, Value>) -> usize {
    let mut applied = 0;
    for (key, setter) in OVERLAYS {
        let Some(value) = map.get(*key) else {
            continue;
        };
        if setter(params, value) {
            applied += 1;
        } else {
            trace!(key = *key, "ignoring setting with unexpected shape");
        }
    }
    applied
}

impl DecodeParams {
    /// Engine defaults with `settings` applied on top.
    pub fn with_overlay(settings: Option<&Value>) -> Self {
        let mut params = Self::default();
        apply_settings(&mut params, settings);
        params
    }
}

fn set_scalar<T>(target: &mut T, value: &Value, convert: fn(&Value) -> Option<T>) -> bool {
    match convert(value) {
        Some(v) => {
            *target = v;
            true
        }
        None => false,
    }
}

/// Arrays are applied all-or-nothing and only at the exact arity.
fn set_array<T: Copy, const N: usize>(
    target: &mut [T; N],
    value: &Value,
    convert: fn(&Value) -> Option<T>,
) -> bool {
    let Some(items) = value.as_array() else {
        return false;
    };
    if items.len() != N {
        return false;
    }
    let mut staged = *target;
    for (slot, item) in staged.iter_mut().zip(items) {
        match convert(item) {
            Some(v) => *slot = v,
            None => return false,
        }
    }
    *target = staged;
    true
}

fn set_string(target: &mut ParamString, value: &Value) -> bool {
    match value {
        Value::String(s) => target.set(s),
        _ => false,
    }
}

/// Numeric view of a dynamic value. Booleans count as 0/1; strings are not
/// parsed.
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

fn as_f64(value: &Value) -> Option<f64> {
    as_number(value)
}

fn as_f32(value: &Value) -> Option<f32> {
    as_number(value).map(|n| n as f32)
}

/// Truncates toward zero, saturating at the type bounds.
fn as_i32(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(i.clamp(i32::MIN as i64, i32::MAX as i64) as i32),
            None => n.as_f64().map(|f| f as i32),
        },
        _ => as_number(value).map(|n| n as i32),
    }
}

fn as_u32(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => match n.as_u64() {
            Some(u) => Some(u.min(u32::MAX as u64) as u32),
            None => n.as_f64().map(|f| f as u32),
        },
        _ => as_number(value).map(|n| n as u32),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    proptest! {
        /// Property: a greybox of any arity other than 4 never changes the record.
        #[test]
        fn prop_greybox_wrong_arity_ignored(
            values in prop::collection::vec(0u32..10_000, 0..10)
                .prop_filter("arity must differ", |v| v.len() != 4),
        ) {
            let mut p = DecodeParams::new();
            p.greybox = [1, 2, 3, 4];
            apply_settings(&mut p, Some(&json!({ "greybox": values })));
            prop_assert_eq!(p.greybox, [1, 2, 3, 4]);
        }

        /// Property: in-range integers are applied exactly.
        #[test]
        fn prop_integer_fields_exact(value in any::<i32>()) {
            let mut p = DecodeParams::new();
            apply_settings(&mut p, Some(&json!({ "medPasses": value })));
            prop_assert_eq!(p.med_passes, value);
        }

        /// Property: the overlay never panics on arbitrary scalar input.
        #[test]
        fn prop_scalar_garbage_never_panics(
            f in any::<f64>(),
            s in ".*",
            b in any::<bool>(),
        ) {
            let mut p = DecodeParams::new();
            let settings = json!({
                "bright": f,
                "halfSize": s.clone(),
                "outputProfile": s,
                "noAutoBright": b,
                "cropbox": [f, f, f, f],
            });
            apply_settings(&mut p, Some(&settings));
        }
    }
}
