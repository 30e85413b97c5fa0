//! The full decode parameter record.

use std::ffi::{CStr, CString};

use serde::{Serialize, Serializer};

/// An optional, exclusively owned string parameter (profile and frame
/// paths).
///
/// The engine consumes these as C strings, so the value is stored as a
/// [`CString`]. The only mutators are [`ParamString::set`] and
/// [`ParamString::release`]; both drop the previous allocation before the
/// field changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamString(Option<CString>);

impl ParamString {
    /// Replace the stored value.
    ///
    /// An empty `value` leaves the field unset. Values with an interior NUL
    /// cannot be handed to the engine and are rejected without touching the
    /// current value. Returns whether the field was updated.
    pub fn set(&mut self, value: &str) -> bool {
        if value.is_empty() {
            self.release();
            return true;
        }
        match CString::new(value) {
            Ok(owned) => {
                self.release();
                self.0 = Some(owned);
                true
            }
            Err(_) => false,
        }
    }

    /// Free the stored value, leaving the field unset.
    pub fn release(&mut self) {
        drop(self.0.take());
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref().and_then(|s| s.to_str().ok())
    }

    /// Borrow the value as a C string for FFI engines.
    pub fn as_c_str(&self) -> Option<&CStr> {
        self.0.as_deref()
    }
}

impl Serialize for ParamString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_str().serialize(serializer)
    }
}

/// Every decode parameter the engine accepts.
///
/// [`Default`] yields the engine's own defaults. Integer flags use `i32`
/// because the engine treats them as C ints (booleans are 0/1).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodeParams {
    /// Region used for white balance averaging: x, y, width, height.
    pub greybox: [u32; 4],
    /// Output crop: x, y, width, height.
    pub cropbox: [u32; 4],
    /// Chromatic aberration correction multipliers.
    pub aber: [f64; 4],
    /// Gamma curve: power, toe slope, then engine-computed values.
    pub gamm: [f64; 6],
    pub user_mul: [f32; 4],
    pub user_cblack: [i32; 4],

    pub bright: f32,
    pub threshold: f32,
    pub auto_bright_thr: f32,
    pub adjust_maximum_thr: f32,
    pub exp_shift: f32,
    pub exp_preser: f32,

    pub half_size: i32,
    pub four_color_rgb: i32,
    pub highlight: i32,
    pub use_auto_wb: i32,
    pub use_camera_wb: i32,
    pub use_camera_matrix: i32,
    pub output_color: i32,
    pub output_bps: i32,
    pub output_tiff: i32,
    pub output_flags: i32,
    pub user_flip: i32,
    pub user_qual: i32,
    pub user_black: i32,
    pub user_sat: i32,
    pub med_passes: i32,
    pub no_auto_bright: i32,
    pub use_fuji_rotate: i32,
    pub green_matching: i32,
    pub dcb_iterations: i32,
    pub dcb_enhance_fl: i32,
    pub fbdd_noiserd: i32,
    pub exp_correc: i32,
    pub no_auto_scale: i32,
    pub no_interpolation: i32,

    pub output_profile: ParamString,
    pub camera_profile: ParamString,
    pub bad_pixels: ParamString,
    pub dark_frame: ParamString,
}

impl Default for DecodeParams {
    fn default() -> Self {
        Self {
            greybox: [0, 0, u32::MAX, u32::MAX],
            cropbox: [0, 0, u32::MAX, u32::MAX],
            aber: [1.0; 4],
            gamm: [0.45, 4.5, 0.0, 0.0, 0.0, 0.0],
            user_mul: [0.0; 4],
            user_cblack: [-1; 4],
            bright: 1.0,
            threshold: 0.0,
            auto_bright_thr: 0.01,
            adjust_maximum_thr: 0.75,
            exp_shift: 1.0,
            exp_preser: 0.0,
            half_size: 0,
            four_color_rgb: 0,
            highlight: 0,
            use_auto_wb: 0,
            use_camera_wb: 0,
            use_camera_matrix: 1,
            output_color: 1,
            output_bps: 8,
            output_tiff: 0,
            output_flags: 0,
            user_flip: -1,
            user_qual: -1,
            user_black: -1,
            user_sat: -1,
            med_passes: 0,
            no_auto_bright: 0,
            use_fuji_rotate: 1,
            green_matching: 0,
            dcb_iterations: 0,
            dcb_enhance_fl: 0,
            fbdd_noiserd: 0,
            exp_correc: 0,
            no_auto_scale: 0,
            no_interpolation: 0,
            output_profile: ParamString::default(),
            camera_profile: ParamString::default(),
            bad_pixels: ParamString::default(),
            dark_frame: ParamString::default(),
        }
    }
}

impl DecodeParams {
    /// Create a record holding the engine defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Free every owned string parameter.
    pub fn release_strings(&mut self) {
        self.output_profile.release();
        self.camera_profile.release();
        self.bad_pixels.release();
        self.dark_frame.release();
    }

    /// Release owned strings, then restore engine defaults.
    pub fn reset(&mut self) {
        self.release_strings();
        *self = Self::default();
    }

    /// Number of string parameters currently holding a value.
    pub fn owned_string_count(&self) -> usize {
        [
            &self.output_profile,
            &self.camera_profile,
            &self.bad_pixels,
            &self.dark_frame,
        ]
        .iter()
        .filter(|s| s.is_set())
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_string_set_and_replace() {
        let mut s = ParamString::default();
        assert!(!s.is_set());

        assert!(s.set("/profiles/sRGB.icc"));
        assert_eq!(s.as_str(), Some("/profiles/sRGB.icc"));

        assert!(s.set("/profiles/AdobeRGB.icc"));
        assert_eq!(s.as_str(), Some("/profiles/AdobeRGB.icc"));
    }

    #[test]
    fn test_param_string_empty_clears() {
        let mut s = ParamString::default();
        s.set("dark.pgm");
        assert!(s.set(""));
        assert!(!s.is_set());
        assert_eq!(s.as_c_str(), None);
    }

    #[test]
    fn test_param_string_interior_nul_rejected() {
        let mut s = ParamString::default();
        s.set("keep.txt");
        assert!(!s.set("bad\0path"));
        assert_eq!(s.as_str(), Some("keep.txt"));
    }

    #[test]
    fn test_param_string_serializes_as_option() {
        let mut s = ParamString::default();
        assert_eq!(serde_json::to_value(&s).unwrap(), serde_json::Value::Null);
        s.set("a");
        assert_eq!(serde_json::to_value(&s).unwrap(), serde_json::json!("a"));
    }

    #[test]
    fn test_defaults_match_engine() {
        let p = DecodeParams::new();
        assert_eq!(p.gamm[0], 0.45);
        assert_eq!(p.gamm[1], 4.5);
        assert_eq!(p.user_black, -1);
        assert_eq!(p.user_cblack, [-1; 4]);
        assert_eq!(p.output_bps, 8);
        assert_eq!(p.use_camera_matrix, 1);
        assert_eq!(p.owned_string_count(), 0);
    }

    #[test]
    fn test_reset_releases_strings_and_restores_defaults() {
        let mut p = DecodeParams::new();
        p.half_size = 1;
        p.bad_pixels.set("bad.txt");
        p.dark_frame.set("dark.pgm");
        assert_eq!(p.owned_string_count(), 2);

        p.reset();
        assert_eq!(p, DecodeParams::default());
        assert_eq!(p.owned_string_count(), 0);
    }
}
