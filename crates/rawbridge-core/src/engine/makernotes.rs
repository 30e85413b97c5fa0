//! Manufacturer maker-note records.
//!
//! Each brand has a fixed field schema. Field names on the wire follow the
//! engine's own naming so hosts can cross-reference the engine documentation.
//! Records default to zeroed values; the engine only fills the section that
//! matches the camera that produced the file.

use serde::{Deserialize, Serialize};

/// All maker-note sections exposed by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MakernotesRecord {
    pub common: CommonMakernotes,
    pub canon: CanonMakernotes,
    pub nikon: NikonMakernotes,
    pub fuji: FujiMakernotes,
    pub sony: SonyMakernotes,
    pub panasonic: PanasonicMakernotes,
    pub olympus: OlympusMakernotes,
    pub pentax: PentaxMakernotes,
    pub hasselblad: HasselbladMakernotes,
    pub ricoh: RicohMakernotes,
    pub samsung: SamsungMakernotes,
    pub kodak: KodakMakernotes,
    pub phaseone: PhaseOneMakernotes,
}

/// One autofocus information record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AfInfoItem {
    #[serde(rename = "AFInfoData_tag")]
    pub tag: u32,
    #[serde(rename = "AFInfoData_order")]
    pub order: i16,
    #[serde(rename = "AFInfoData_version")]
    pub version: u32,
    #[serde(rename = "AFInfoData_length")]
    pub length: u32,
}

/// Brand-independent maker-note values.
///
/// `afdata` holds the engine's AF slots; only the first `afcount` of them
/// carry data. `afcount` is read from the engine but never emitted: the
/// projected list length carries it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CommonMakernotes {
    #[serde(rename = "FlashEC")]
    pub flash_ec: f32,
    #[serde(rename = "FlashGN")]
    pub flash_gn: f32,
    pub camera_temperature: f32,
    pub sensor_temperature: f32,
    pub sensor_temperature2: f32,
    pub lens_temperature: f32,
    pub ambient_temperature: f32,
    pub battery_temperature: f32,
    #[serde(rename = "exifAmbientTemperature")]
    pub exif_ambient_temperature: f32,
    #[serde(rename = "exifHumidity")]
    pub exif_humidity: f32,
    #[serde(rename = "exifPressure")]
    pub exif_pressure: f32,
    #[serde(rename = "exifWaterDepth")]
    pub exif_water_depth: f32,
    #[serde(rename = "exifAcceleration")]
    pub exif_acceleration: f32,
    #[serde(rename = "exifCameraElevationAngle")]
    pub exif_camera_elevation_angle: f32,
    #[serde(rename = "real_ISO")]
    pub real_iso: f32,
    #[serde(rename = "exifExposureIndex")]
    pub exif_exposure_index: f32,
    pub color_space: u16,
    #[serde(rename = "firmware")]
    pub firmware: String,
    pub exposure_calibration_shift: f32,
    #[serde(rename = "afcount", skip_serializing)]
    pub afcount: i32,
    #[serde(rename = "afdata")]
    pub afdata: Vec<AfInfoItem>,
}

/// Canon maker notes: levels, metering, flash, stabilization and sensor
/// geometry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CanonMakernotes {
    pub color_data_ver: i32,
    pub color_data_sub_ver: i32,
    pub specular_white_level: i32,
    pub normal_white_level: i32,
    pub channel_black_level: [i32; 4],
    pub average_black_level: i32,
    #[serde(rename = "multishot")]
    pub multishot: [u32; 4],
    pub metering_mode: i16,
    pub spot_metering_mode: i16,
    pub flash_metering_mode: u8,
    pub flash_exposure_lock: i16,
    pub exposure_mode: i16,
    #[serde(rename = "AESetting")]
    pub ae_setting: i16,
    pub image_stabilization: i16,
    pub flash_mode: i16,
    pub flash_activity: i16,
    pub flash_bits: i16,
    pub manual_flash_output: i16,
    pub flash_output: i16,
    pub flash_guide_number: i16,
    pub continuous_drive: i16,
    pub sensor_width: i16,
    pub sensor_height: i16,
    #[serde(rename = "AFMicroAdjMode")]
    pub af_micro_adj_mode: i32,
    #[serde(rename = "AFMicroAdjValue")]
    pub af_micro_adj_value: f32,
    pub makernotes_flip: i16,
    pub record_mode: i16,
    #[serde(rename = "SRAWQuality")]
    pub sraw_quality: i16,
    #[serde(rename = "wbi")]
    pub wbi: u32,
    #[serde(rename = "RF_lensID")]
    pub rf_lens_id: i16,
    pub auto_lighting_optimizer: i32,
    pub highlight_tone_priority: i32,
    pub quality: i16,
    pub canon_log: i32,
    #[serde(rename = "ISOgain")]
    pub iso_gain: [f32; 2],
}

/// Sensor crop used by high-speed capture modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorCrop {
    pub cleft: u16,
    pub ctop: u16,
    pub cwidth: u16,
    pub cheight: u16,
}

/// Nikon maker notes: flash, AF fine tune, lens data and crop geometry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct NikonMakernotes {
    pub exposure_bracket_value: f64,
    #[serde(rename = "ActiveDLighting")]
    pub active_d_lighting_setting: u16,
    pub shooting_mode: u8,
    pub image_stabilization: [u8; 7],
    pub vibration_reduction: u8,
    pub flash_setting: String,
    pub flash_type: String,
    pub flash_exposure_compensation: [u8; 4],
    pub external_flash_exposure_comp: [u8; 4],
    pub flash_exposure_bracket_value0: u8,
    pub flash_exposure_bracket_value1: u8,
    pub flash_exposure_bracket_value2: u8,
    pub flash_exposure_bracket_value3: u8,
    pub flash_mode: u8,
    pub flash_exposure_compensation2: i8,
    pub flash_exposure_compensation3: i8,
    pub flash_exposure_compensation4: i8,
    pub flash_source: u8,
    pub flash_firmware0: u8,
    pub flash_firmware1: u8,
    pub external_flash_flags: u8,
    pub flash_control_commander_mode: u8,
    pub flash_output_and_compensation: u8,
    pub flash_focal_length: u8,
    #[serde(rename = "FlashGNDistance")]
    pub flash_gn_distance: u8,
    pub flash_group_output_and_compensation: [u8; 4],
    pub flash_group_control_mode0: u8,
    pub flash_group_control_mode1: u8,
    pub flash_group_control_mode2: u8,
    pub flash_group_control_mode3: u8,
    pub flash_color_filter: u8,
    #[serde(rename = "NEFCompression")]
    pub nef_compression: u16,
    pub exposure_mode: i32,
    pub exposure_program: i32,
    #[serde(rename = "nMEshots")]
    pub n_me_shots: i32,
    #[serde(rename = "MEgainOn")]
    pub me_gain_on: i32,
    #[serde(rename = "ME_WB")]
    pub me_wb: [f64; 4],
    #[serde(rename = "AFFineTune")]
    pub af_fine_tune: u8,
    #[serde(rename = "AFFineTuneIndex")]
    pub af_fine_tune_index: u8,
    #[serde(rename = "AFFineTuneAdj")]
    pub af_fine_tune_adj: i8,
    pub lens_data_version: u32,
    pub flash_info_version: u32,
    pub color_balance_version: u32,
    #[serde(rename = "key")]
    pub key: u8,
    #[serde(rename = "NEFBitDepth")]
    pub nef_bit_depth: [u16; 4],
    pub high_speed_crop_format: u16,
    pub sensor_high_speed_crop: SensorCrop,
    pub sensor_width: u16,
    pub sensor_height: u16,
    #[serde(rename = "Active_D_Lighting")]
    pub active_d_lighting: u16,
    pub shot_info_version: u32,
    pub makernotes_flip: i16,
    pub roll_angle: f64,
    pub pitch_angle: f64,
    pub yaw_angle: f64,
}

/// Fujifilm maker notes: dynamic range, film simulation, focus and RAF
/// layout tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct FujiMakernotes {
    pub expo_mid_point_shift: f32,
    pub dynamic_range: u16,
    pub film_mode: u16,
    pub dynamic_range_setting: u16,
    pub development_dynamic_range: u16,
    pub auto_dynamic_range: u16,
    #[serde(rename = "DRangePriority")]
    pub d_range_priority: u16,
    #[serde(rename = "DRangePriorityAuto")]
    pub d_range_priority_auto: u16,
    #[serde(rename = "DRangePriorityFixed")]
    pub d_range_priority_fixed: u16,
    pub brightness_compensation: f32,
    pub focus_mode: u16,
    #[serde(rename = "AFMode")]
    pub af_mode: u16,
    pub focus_pixel: [u16; 2],
    pub priority_settings: u16,
    pub focus_settings: u32,
    #[serde(rename = "AF_C_Settings")]
    pub af_c_settings: u32,
    pub focus_warning: u16,
    pub image_stabilization: [u16; 3],
    pub flash_mode: u16,
    #[serde(rename = "WB_Preset")]
    pub wb_preset: u16,
    pub shutter_type: u16,
    pub exr_mode: u16,
    #[serde(rename = "Macro")]
    pub macro_mode: u16,
    pub rating: u32,
    pub crop_mode: u16,
    pub serial_signature: String,
    #[serde(rename = "SensorID")]
    pub sensor_id: String,
    #[serde(rename = "RAFVersion")]
    pub raf_version: String,
    #[serde(rename = "RAFDataGeneration")]
    pub raf_data_generation: i32,
    #[serde(rename = "RAFDataVersion")]
    pub raf_data_version: u16,
    #[serde(rename = "isTSNERDTS")]
    pub is_tsnerdts: i32,
    pub drive_mode: i16,
    pub black_level: [u16; 9],
    #[serde(rename = "RAFData_ImageSizeTable")]
    pub raf_data_image_size_table: [u32; 32],
    pub auto_bracketing: i32,
    pub sequence_number: i32,
    pub series_length: i32,
    pub pixel_shift_offset: [f32; 2],
    pub image_count: i32,
}

/// Sony maker notes: sequence info, AF areas, noise reduction, pixel shift
/// and the raw layout (`prd_*`) block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SonyMakernotes {
    #[serde(rename = "CameraType")]
    pub camera_type: u16,
    #[serde(rename = "Sony0x9400_version")]
    pub sony_0x9400_version: u8,
    #[serde(rename = "Sony0x9400_ReleaseMode2")]
    pub sony_0x9400_release_mode2: u8,
    #[serde(rename = "Sony0x9400_SequenceImageNumber")]
    pub sony_0x9400_sequence_image_number: u32,
    #[serde(rename = "Sony0x9400_SequenceLength1")]
    pub sony_0x9400_sequence_length1: u8,
    #[serde(rename = "Sony0x9400_SequenceFileNumber")]
    pub sony_0x9400_sequence_file_number: u32,
    #[serde(rename = "Sony0x9400_SequenceLength2")]
    pub sony_0x9400_sequence_length2: u8,
    #[serde(rename = "AFAreaModeSetting")]
    pub af_area_mode_setting: u8,
    #[serde(rename = "AFAreaMode")]
    pub af_area_mode: u16,
    #[serde(rename = "FlexibleSpotPosition")]
    pub flexible_spot_position: [u16; 2],
    #[serde(rename = "AFPointSelected")]
    pub af_point_selected: u8,
    #[serde(rename = "AFPointSelected_0x201e")]
    pub af_point_selected_0x201e: u8,
    #[serde(rename = "AFType")]
    pub af_type: i16,
    #[serde(rename = "FocusLocation")]
    pub focus_location: [u16; 4],
    #[serde(rename = "FocusPosition")]
    pub focus_position: u16,
    #[serde(rename = "AFMicroAdjValue")]
    pub af_micro_adj_value: i8,
    #[serde(rename = "AFMicroAdjOn")]
    pub af_micro_adj_on: i8,
    #[serde(rename = "AFMicroAdjRegisteredLenses")]
    pub af_micro_adj_registered_lenses: u8,
    #[serde(rename = "VariableLowPassFilter")]
    pub variable_low_pass_filter: u16,
    #[serde(rename = "LongExposureNoiseReduction")]
    pub long_exposure_noise_reduction: u32,
    #[serde(rename = "HighISONoiseReduction")]
    pub high_iso_noise_reduction: u16,
    #[serde(rename = "HDR")]
    pub hdr: [u16; 2],
    pub group2010: u16,
    pub group9050: u16,
    pub real_iso_offset: u16,
    #[serde(rename = "MeteringMode_offset")]
    pub metering_mode_offset: u16,
    #[serde(rename = "ExposureProgram_offset")]
    pub exposure_program_offset: u16,
    #[serde(rename = "ReleaseMode2_offset")]
    pub release_mode2_offset: u16,
    #[serde(rename = "MinoltaCamID")]
    pub minolta_cam_id: u32,
    pub firmware: f32,
    #[serde(rename = "ImageCount3_offset")]
    pub image_count3_offset: u16,
    #[serde(rename = "ImageCount3")]
    pub image_count3: u32,
    #[serde(rename = "ElectronicFrontCurtainShutter")]
    pub electronic_front_curtain_shutter: u32,
    #[serde(rename = "MeteringMode2")]
    pub metering_mode2: u16,
    #[serde(rename = "SonyDateTime")]
    pub sony_date_time: String,
    #[serde(rename = "ShotNumberSincePowerUp")]
    pub shot_number_since_power_up: u32,
    #[serde(rename = "PixelShiftGroupPrefix")]
    pub pixel_shift_group_prefix: u16,
    #[serde(rename = "PixelShiftGroupID")]
    pub pixel_shift_group_id: u32,
    #[serde(rename = "nShotsInPixelShiftGroup")]
    pub n_shots_in_pixel_shift_group: i8,
    #[serde(rename = "numInPixelShiftGroup")]
    pub num_in_pixel_shift_group: i8,
    #[serde(rename = "prd_ImageHeight")]
    pub prd_image_height: u16,
    #[serde(rename = "prd_ImageWidth")]
    pub prd_image_width: u16,
    #[serde(rename = "prd_Total_bps")]
    pub prd_total_bps: u16,
    #[serde(rename = "prd_Active_bps")]
    pub prd_active_bps: u16,
    #[serde(rename = "prd_StorageMethod")]
    pub prd_storage_method: u16,
    #[serde(rename = "prd_BayerPattern")]
    pub prd_bayer_pattern: u16,
    #[serde(rename = "SonyRawFileType")]
    pub sony_raw_file_type: u16,
    #[serde(rename = "RAWFileType")]
    pub raw_file_type: u16,
    #[serde(rename = "RawSizeType")]
    pub raw_size_type: u16,
    #[serde(rename = "Quality")]
    pub quality: u32,
    #[serde(rename = "FileFormat")]
    pub file_format: u16,
    #[serde(rename = "MetaVersion")]
    pub meta_version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PanasonicMakernotes {
    pub compression: u16,
    pub black_level_dim: u16,
    pub black_level: [f32; 8],
    pub multishot: u32,
    #[serde(rename = "gamma")]
    pub gamma: f32,
    #[serde(rename = "HighISOMultiplier")]
    pub high_iso_multiplier: [i32; 3],
    pub focus_step_near: i16,
    pub focus_step_count: i16,
    pub zoom_position: u32,
    pub lens_manufacturer: u32,
}

/// Olympus maker notes. `AFAreas` always carries 64 entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OlympusMakernotes {
    pub camera_type2: [u8; 6],
    pub valid_bits: u16,
    pub drive_mode: [i32; 5],
    pub color_space: u16,
    pub focus_mode: [u16; 2],
    pub auto_focus: u16,
    #[serde(rename = "AFPoint")]
    pub af_point: u16,
    #[serde(rename = "AFAreas")]
    pub af_areas: Vec<u32>,
    #[serde(rename = "AFPointSelected")]
    pub af_point_selected: [f64; 2],
    #[serde(rename = "AFResult")]
    pub af_result: u16,
    #[serde(rename = "AFFineTune")]
    pub af_fine_tune: u8,
    #[serde(rename = "AFFineTuneAdj")]
    pub af_fine_tune_adj: [i16; 3],
    pub aspect_frame_left: u32,
    pub aspect_frame_top: u32,
    pub aspect_frame_width: u32,
    pub aspect_frame_height: u32,
    #[serde(rename = "Panorama_mode")]
    pub panorama_mode: i32,
    #[serde(rename = "Panorama_frameNum")]
    pub panorama_frame_num: i32,
}

/// Number of AF area slots in the Olympus record.
pub const OLYMPUS_AF_AREAS: usize = 64;

impl Default for OlympusMakernotes {
    fn default() -> Self {
        Self {
            camera_type2: [0; 6],
            valid_bits: 0,
            drive_mode: [0; 5],
            color_space: 0,
            focus_mode: [0; 2],
            auto_focus: 0,
            af_point: 0,
            af_areas: vec![0; OLYMPUS_AF_AREAS],
            af_point_selected: [0.0; 2],
            af_result: 0,
            af_fine_tune: 0,
            af_fine_tune_adj: [0; 3],
            aspect_frame_left: 0,
            aspect_frame_top: 0,
            aspect_frame_width: 0,
            aspect_frame_height: 0,
            panorama_mode: 0,
            panorama_frame_num: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PentaxMakernotes {
    pub drive_mode: [u8; 4],
    pub focus_mode: [u16; 2],
    #[serde(rename = "AFPointSelected")]
    pub af_point_selected: [u16; 2],
    #[serde(rename = "AFPointSelected_Area")]
    pub af_point_selected_area: u16,
    #[serde(rename = "AFPointsInFocus_version")]
    pub af_points_in_focus_version: i32,
    #[serde(rename = "AFPointsInFocus")]
    pub af_points_in_focus: u32,
    pub focus_position: u16,
    #[serde(rename = "AFAdjustment")]
    pub af_adjustment: i16,
    #[serde(rename = "AFPointMode")]
    pub af_point_mode: u8,
    pub multi_exposure: u8,
    pub quality: u16,
}

/// Hasselblad maker notes, including the 4x3 maker-note colour matrix.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct HasselbladMakernotes {
    #[serde(rename = "BaseISO")]
    pub base_iso: i32,
    pub gain: f64,
    pub sensor: String,
    pub sensor_unit: String,
    pub host_body: String,
    pub sensor_code: i32,
    pub sensor_sub_code: i32,
    pub coating_code: i32,
    #[serde(rename = "uncropped")]
    pub uncropped: i32,
    pub capture_sequence_initiator: String,
    pub sensor_unit_connector: String,
    #[serde(rename = "format")]
    pub format: i32,
    #[serde(rename = "nIFD_CM")]
    pub n_ifd_cm: [i32; 2],
    pub recommended_crop: [i32; 2],
    #[serde(rename = "mnColorMatrix")]
    pub mn_color_matrix: [[f64; 3]; 4],
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RicohMakernotes {
    #[serde(rename = "AFStatus")]
    pub af_status: u16,
    #[serde(rename = "AFAreaXPosition")]
    pub af_area_x_position: [u32; 2],
    #[serde(rename = "AFAreaYPosition")]
    pub af_area_y_position: [u32; 2],
    #[serde(rename = "AFAreaMode")]
    pub af_area_mode: u16,
    pub sensor_width: u32,
    pub sensor_height: u32,
    pub cropped_image_width: u32,
    pub cropped_image_height: u32,
    pub wide_adapter: u16,
    pub crop_mode: u16,
    #[serde(rename = "NDFilter")]
    pub nd_filter: u16,
    pub auto_bracketing: u16,
    pub macro_mode: u16,
    pub flash_mode: u16,
    pub flash_exposure_comp: f64,
    pub manual_flash_output: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SamsungMakernotes {
    pub image_size_full: [u32; 4],
    pub image_size_crop: [u32; 4],
    pub color_space0: i32,
    pub color_space1: i32,
    #[serde(rename = "key")]
    pub key: [u32; 11],
    pub digital_gain: f64,
    pub device_type: i32,
    pub lens_firmware: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KodakMakernotes {
    #[serde(rename = "BlackLevelTop")]
    pub black_level_top: u16,
    #[serde(rename = "BlackLevelBottom")]
    pub black_level_bottom: u16,
    pub offset_left: i16,
    pub offset_top: i16,
    #[serde(rename = "clipBlack")]
    pub clip_black: u16,
    #[serde(rename = "clipWhite")]
    pub clip_white: u16,
    pub val018percent: u32,
    pub val100percent: u32,
    pub val170percent: u32,
    #[serde(rename = "MakerNoteKodak8a")]
    pub maker_note_kodak_8a: i16,
    #[serde(rename = "ISOCalibrationGain")]
    pub iso_calibration_gain: f32,
    #[serde(rename = "AnalogISO")]
    pub analog_iso: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PhaseOneMakernotes {
    pub software: String,
    pub system_type: String,
    pub firmware_string: String,
    pub system_model: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canon_wire_names() {
        let value = serde_json::to_value(CanonMakernotes::default()).unwrap();
        for key in [
            "ColorDataVer",
            "ChannelBlackLevel",
            "multishot",
            "AESetting",
            "AFMicroAdjMode",
            "SRAWQuality",
            "wbi",
            "RF_lensID",
            "CanonLog",
            "ISOgain",
        ] {
            assert!(value.get(key).is_some(), "missing Canon key {key}");
        }
    }

    #[test]
    fn test_nikon_high_speed_crop_is_nested() {
        let mut nikon = NikonMakernotes::default();
        nikon.sensor_high_speed_crop.cwidth = 4000;
        let value = serde_json::to_value(&nikon).unwrap();
        assert_eq!(value["SensorHighSpeedCrop"]["cwidth"], 4000);
        assert!(value.get("Active_D_Lighting").is_some());
        assert!(value.get("ActiveDLighting").is_some());
        assert!(value.get("nMEshots").is_some());
        for key in [
            "FlashExposureBracketValue0",
            "FlashExposureBracketValue3",
            "FlashFirmware0",
            "FlashFirmware1",
            "FlashGroupControlMode0",
            "FlashGroupControlMode3",
        ] {
            assert!(value[key].is_number(), "missing Nikon key {key}");
        }
        assert!(value.get("FlashFirmware").is_none());
    }

    #[test]
    fn test_olympus_aspect_frame_keys() {
        let oly = OlympusMakernotes {
            aspect_frame_width: 4608,
            ..Default::default()
        };
        let value = serde_json::to_value(&oly).unwrap();
        assert_eq!(value["AspectFrameWidth"], 4608);
        for key in ["AspectFrameLeft", "AspectFrameTop", "AspectFrameHeight"] {
            assert_eq!(value[key], 0, "missing Olympus key {key}");
        }
        assert!(value.get("AspectFrame").is_none());
    }

    #[test]
    fn test_samsung_color_space_keys() {
        let json = serde_json::json!({ "ColorSpace0": 1, "ColorSpace1": 2 });
        let samsung: SamsungMakernotes = serde_json::from_value(json).unwrap();
        assert_eq!((samsung.color_space0, samsung.color_space1), (1, 2));
        let value = serde_json::to_value(&samsung).unwrap();
        assert_eq!(value["ColorSpace0"], 1);
        assert_eq!(value["ColorSpace1"], 2);
        assert!(value.get("ColorSpace").is_none());
    }

    #[test]
    fn test_olympus_default_has_all_af_areas() {
        let oly = OlympusMakernotes::default();
        assert_eq!(oly.af_areas.len(), OLYMPUS_AF_AREAS);
    }

    #[test]
    fn test_hasselblad_matrix_shape() {
        let value = serde_json::to_value(HasselbladMakernotes::default()).unwrap();
        let matrix = value["mnColorMatrix"].as_array().unwrap();
        assert_eq!(matrix.len(), 4);
        assert!(matrix.iter().all(|row| row.as_array().unwrap().len() == 3));
    }

    #[test]
    fn test_partial_record_deserializes_with_defaults() {
        let json = serde_json::json!({
            "canon": { "ColorDataVer": 7 },
            "common": { "afcount": 1, "afdata": [{ "AFInfoData_tag": 9 }] }
        });
        let record: MakernotesRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.canon.color_data_ver, 7);
        assert_eq!(record.canon.normal_white_level, 0);
        assert_eq!(record.common.afdata[0].tag, 9);
        assert_eq!(record.nikon, NikonMakernotes::default());
    }
}
