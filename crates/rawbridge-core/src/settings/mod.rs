//! Decode settings: the typed parameter record and the sparse overlay that
//! populates it from host configuration.
//!
//! # Recognised keys
//!
//! | Kind | Keys |
//! |------|------|
//! | arrays | `greybox[4]`, `cropbox[4]`, `aber[4]`, `gamm[6]`, `userMul[4]`, `userCblack[4]` |
//! | floats | `bright`, `threshold`, `autoBrightThr`, `adjustMaximumThr`, `expShift`, `expPreser` |
//! | integers | `halfSize`, `fourColorRgb`, `highlight`, `useAutoWb`, `useCameraWb`, `useCameraMatrix`, `outputColor`, `outputBps`, `outputTiff`, `outputFlags`, `userFlip`, `userQual`, `userBlack`, `userSat`, `medPasses`, `noAutoBright`, `useFujiRotate`, `greenMatching`, `dcbIterations`, `dcbEnhanceFl`, `fbddNoiserd`, `expCorrec`, `noAutoScale`, `noInterpolation` |
//! | strings | `outputProfile`, `cameraProfile`, `badPixels`, `darkFrame` |

mod overlay;
mod params;

pub use overlay::{apply_settings, recognized_keys};
pub use params::{DecodeParams, ParamString};
