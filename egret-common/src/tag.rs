//! TIFF/EXIF/GPS/DNG tag identifiers and the static tag-name table.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// A 16-bit TIFF tag identifier.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct Tag(pub u16);

impl Tag {
    /// List of offsets of nested raw directories
    pub const SUB_IFDS: Self = Self(0x14A);
    pub const STRIP_OFFSETS: Self = Self(0x111);
    pub const STRIP_BYTE_COUNTS: Self = Self(0x117);
    pub const JPEG_INTERCHANGE_FORMAT: Self = Self(0x201);
    pub const JPEG_INTERCHANGE_FORMAT_LENGTH: Self = Self(0x202);

    pub const EXIF_IFD_POINTER: Self = Self(0x8769);
    pub const GPS_INFO_IFD_POINTER: Self = Self(0x8825);
    pub const INTEROPERABILITY_IFD_POINTER: Self = Self(0xA005);

    /// Whether this tag's value is the absolute offset of a nested directory
    ///
    /// [`Tag::SUB_IFDS`] is not listed here: its value is a list of offsets
    /// rather than a single one and needs dedicated handling.
    pub fn points_to_ifd(self) -> bool {
        matches!(
            self,
            Self::EXIF_IFD_POINTER | Self::GPS_INFO_IFD_POINTER | Self::INTEROPERABILITY_IFD_POINTER
        )
    }

    pub fn name(self) -> Option<&'static str> {
        lookup_tag_name(self)
    }
}

/// Well-known name for a tag id
///
/// ```
/// # use egret_common::tag::{lookup_tag_name, Tag};
/// assert_eq!(lookup_tag_name(Tag(0x110)), Some("Model"));
/// assert_eq!(lookup_tag_name(Tag(0x8769)), Some("Exif_IFD"));
/// assert_eq!(lookup_tag_name(Tag(0xFFFE)), None);
/// ```
pub fn lookup_tag_name(tag: Tag) -> Option<&'static str> {
    TAG_NAMES.get(&tag.0).copied()
}

static TAG_NAMES: Lazy<HashMap<u16, &'static str>> = Lazy::new(|| HashMap::from(ENTRIES));

const ENTRIES: [(u16, &str); 379] = [
    (0x0, "GPSVersionID"),
    (0x1, "GPSLatitudeRef"),
    (0x2, "GPSLatitude"),
    (0x3, "GPSLongitudeRef"),
    (0x4, "GPSLongitude"),
    (0x5, "GPSAltitudeRef"),
    (0x6, "GPSAltitude"),
    (0x7, "GPSTimeStamp"),
    (0x8, "GPSSatellites"),
    (0x9, "GPSStatus"),
    (0xA, "GPSMeasureMode"),
    (0xB, "GPSDOP"),
    (0xC, "GPSSpeedRef"),
    (0xD, "GPSSpeed"),
    (0xE, "GPSTrackRef"),
    (0xF, "GPSTrack"),
    (0x10, "GPSImgDirectionRef"),
    (0x11, "GPSImgDirection"),
    (0x12, "GPSMapDatum"),
    (0x13, "GPSDestLatitudeRef"),
    (0x14, "GPSDestLatitude"),
    (0x15, "GPSDestLongitudeRef"),
    (0x16, "GPSDestLongitude"),
    (0x17, "GPSDestBearingRef"),
    (0x18, "GPSDestBearing"),
    (0x19, "GPSDestDistanceRef"),
    (0x1A, "GPSDestDistance"),
    (0x1B, "GPSProcessingMethod"),
    (0x1C, "GPSAreaInformation"),
    (0x1D, "GPSDateStamp"),
    (0x1E, "GPSDifferential"),
    (0xFE, "NewSubfileType"),
    (0xFF, "SubfileType"),
    (0x100, "ImageWidth"),
    (0x101, "ImageLength"),
    (0x102, "BitsPerSample"),
    (0x103, "Compression"),
    (0x106, "PhotometricInterpretation"),
    (0x107, "Threshholding"),
    (0x108, "CellWidth"),
    (0x109, "CellLength"),
    (0x10A, "FillOrder"),
    (0x10D, "DocumentName"),
    (0x10E, "ImageDescription"),
    (0x10F, "Make"),
    (0x110, "Model"),
    (0x111, "StripOffsets"),
    (0x112, "Orientation"),
    (0x115, "SamplesPerPixel"),
    (0x116, "RowsPerStrip"),
    (0x117, "StripByteCounts"),
    (0x118, "MinSampleValue"),
    (0x119, "MaxSampleValue"),
    (0x11A, "XResolution"),
    (0x11B, "YResolution"),
    (0x11C, "PlanarConfiguration"),
    (0x11D, "PageName"),
    (0x11E, "XPosition"),
    (0x11F, "YPosition"),
    (0x120, "FreeOffsets"),
    (0x121, "FreeByteCounts"),
    (0x122, "GrayResponseUnit"),
    (0x123, "GrayResponseCurve"),
    (0x124, "T4Options"),
    (0x125, "T6Options"),
    (0x128, "ResolutionUnit"),
    (0x129, "PageNumber"),
    (0x12D, "TransferFunction"),
    (0x131, "Software"),
    (0x132, "DateTime"),
    (0x13B, "Artist"),
    (0x13C, "HostComputer"),
    (0x13D, "Predictor"),
    (0x13E, "WhitePoint"),
    (0x13F, "PrimaryChromaticities"),
    (0x140, "ColorMap"),
    (0x141, "HalftoneHints"),
    (0x142, "TileWidth"),
    (0x143, "TileLength"),
    (0x144, "TileOffsets"),
    (0x145, "TileByteCounts"),
    (0x146, "BadFaxLines"),
    (0x147, "CleanFaxData"),
    (0x148, "ConsecutiveBadFaxLines"),
    (0x14A, "SubIFDs"),
    (0x14C, "InkSet"),
    (0x14D, "InkNames"),
    (0x14E, "NumberOfInks"),
    (0x150, "DotRange"),
    (0x151, "TargetPrinter"),
    (0x152, "ExtraSamples"),
    (0x153, "SampleFormat"),
    (0x154, "SMinSampleValue"),
    (0x155, "SMaxSampleValue"),
    (0x156, "TransferRange"),
    (0x157, "ClipPath"),
    (0x158, "XClipPathUnits"),
    (0x159, "YClipPathUnits"),
    (0x15A, "Indexed"),
    (0x15B, "JPEGTables"),
    (0x15F, "OPIProxy"),
    (0x190, "GlobalParametersIFD"),
    (0x191, "ProfileType"),
    (0x192, "FaxProfile"),
    (0x193, "CodingMethods"),
    (0x194, "VersionYear"),
    (0x195, "ModeNumber"),
    (0x1B1, "Decode"),
    (0x1B2, "DefaultImageColor"),
    (0x200, "JPEGProc"),
    (0x201, "JPEGInterchangeFormat"),
    (0x202, "JPEGInterchangeFormatLength"),
    (0x203, "JPEGRestartInterval"),
    (0x205, "JPEGLosslessPredictors"),
    (0x206, "JPEGPointTransforms"),
    (0x207, "JPEGQTables"),
    (0x208, "JPEGDCTables"),
    (0x209, "JPEGACTables"),
    (0x211, "YCbCrCoefficients"),
    (0x212, "YCbCrSubSampling"),
    (0x213, "YCbCrPositioning"),
    (0x214, "ReferenceBlackWhite"),
    (0x22F, "StripRowCounts"),
    (0x2BC, "XMP"),
    (0x4746, "Image.Rating"),
    (0x4749, "Image.RatingPercent"),
    (0x800D, "ImageID"),
    (0x80A4, "Wang_Annotation"),
    (0x828D, "CFARepeatPatternDim"),
    (0x828E, "CFAPattern"),
    (0x828F, "BatteryLevel"),
    (0x8298, "Copyright"),
    (0x829A, "ExposureTime"),
    (0x829D, "FNumber"),
    (0x82A5, "MD_FileTag"),
    (0x82A6, "MD_ScalePixel"),
    (0x82A7, "MD_ColorTable"),
    (0x82A8, "MD_LabName"),
    (0x82A9, "MD_SampleInfo"),
    (0x82AA, "MD_PrepDate"),
    (0x82AB, "MD_PrepTime"),
    (0x82AC, "MD_FileUnits"),
    (0x830E, "ModelPixelScaleTag"),
    (0x83BB, "IPTC_NAA"),
    (0x847E, "INGR_Packet_Data_Tag"),
    (0x847F, "INGR_Flag_Registers"),
    (0x8480, "IrasB_Transformation_Matrix"),
    (0x8482, "ModelTiepointTag"),
    (0x84E0, "Site"),
    (0x84E1, "ColorSequence"),
    (0x84E2, "IT8Header"),
    (0x84E3, "RasterPadding"),
    (0x84E4, "BitsPerRunLength"),
    (0x84E5, "BitsPerExtendedRunLength"),
    (0x84E6, "ColorTable"),
    (0x84E7, "ImageColorIndicator"),
    (0x84E8, "BackgroundColorIndicator"),
    (0x84E9, "ImageColorValue"),
    (0x84EA, "BackgroundColorValue"),
    (0x84EB, "PixelIntensityRange"),
    (0x84EC, "TransparencyIndicator"),
    (0x84ED, "ColorCharacterization"),
    (0x84EE, "HCUsage"),
    (0x84EF, "TrapIndicator"),
    (0x84F0, "CMYKEquivalent"),
    (0x84F1, "Reserved"),
    (0x84F2, "Reserved"),
    (0x84F3, "Reserved"),
    (0x85D8, "ModelTransformationTag"),
    (0x8649, "Photoshop"),
    (0x8769, "Exif_IFD"),
    (0x8773, "InterColorProfile"),
    (0x87AC, "ImageLayer"),
    (0x87AF, "GeoKeyDirectoryTag"),
    (0x87B0, "GeoDoubleParamsTag"),
    (0x87B1, "GeoAsciiParamsTag"),
    (0x8822, "ExposureProgram"),
    (0x8824, "SpectralSensitivity"),
    (0x8825, "GPSInfo"),
    (0x8827, "ISOSpeedRatings"),
    (0x8828, "OECF"),
    (0x8829, "Interlace"),
    (0x882A, "TimeZoneOffset"),
    (0x882B, "SelfTimeMode"),
    (0x8830, "SensitivityType"),
    (0x8831, "StandardOutputSensitivity"),
    (0x8832, "RecommendedExposureIndex"),
    (0x8833, "ISOSpeed"),
    (0x8834, "ISOSpeedLatitudeyyy"),
    (0x8835, "ISOSpeedLatitudezzz"),
    (0x885C, "HylaFAX_FaxRecvParams"),
    (0x885D, "HylaFAX_FaxSubAddress"),
    (0x885E, "HylaFAX_FaxRecvTime"),
    (0x9000, "ExifVersion"),
    (0x9003, "DateTimeOriginal"),
    (0x9004, "DateTimeDigitized"),
    (0x9101, "ComponentsConfiguration"),
    (0x9102, "CompressedBitsPerPixel"),
    (0x9201, "ShutterSpeedValue"),
    (0x9202, "ApertureValue"),
    (0x9203, "BrightnessValue"),
    (0x9204, "ExposureBiasValue"),
    (0x9205, "MaxApertureValue"),
    (0x9206, "SubjectDistance"),
    (0x9207, "MeteringMode"),
    (0x9208, "LightSource"),
    (0x9209, "Flash"),
    (0x920A, "FocalLength"),
    (0x920B, "FlashEnergy"),
    (0x920C, "SpatialFrequencyResponse"),
    (0x920D, "Noise"),
    (0x920E, "FocalPlaneXResolution"),
    (0x920F, "FocalPlaneYResolution"),
    (0x9210, "FocalPlaneResolutionUnit"),
    (0x9211, "ImageNumber"),
    (0x9212, "SecurityClassification"),
    (0x9213, "ImageHistory"),
    (0x9214, "SubjectLocation"),
    (0x9215, "ExposureIndex"),
    (0x9216, "TIFF_EPStandardID"),
    (0x9217, "SensingMethod"),
    (0x927C, "MakerNote"),
    (0x9286, "UserComment"),
    (0x9290, "SubsecTime"),
    (0x9291, "SubsecTimeOriginal"),
    (0x9292, "SubsecTimeDigitized"),
    (0x935C, "ImageSourceData"),
    (0x9C9B, "XPTitle"),
    (0x9C9C, "XPComment"),
    (0x9C9D, "XPAuthor"),
    (0x9C9E, "XPKeywords"),
    (0x9C9F, "XPSubject"),
    (0xA000, "FlashpixVersion"),
    (0xA001, "ColorSpace"),
    (0xA002, "PixelXDimension"),
    (0xA003, "PixelYDimension"),
    (0xA004, "RelatedSoundFile"),
    (0xA005, "Interoperability_IFD"),
    (0xA20B, "FlashEnergy"),
    (0xA20C, "SpatialFrequencyResponse"),
    (0xA20E, "FocalPlaneXResolution"),
    (0xA20F, "FocalPlaneYResolution"),
    (0xA210, "FocalPlaneResolutionUnit"),
    (0xA214, "SubjectLocation"),
    (0xA215, "ExposureIndex"),
    (0xA217, "SensingMethod"),
    (0xA300, "FileSource"),
    (0xA301, "SceneType"),
    (0xA302, "CFAPattern"),
    (0xA401, "CustomRendered"),
    (0xA402, "ExposureMode"),
    (0xA403, "WhiteBalance"),
    (0xA404, "DigitalZoomRatio"),
    (0xA405, "FocalLengthIn35mmFilm"),
    (0xA406, "SceneCaptureType"),
    (0xA407, "GainControl"),
    (0xA408, "Contrast"),
    (0xA409, "Saturation"),
    (0xA40A, "Sharpness"),
    (0xA40B, "DeviceSettingDescription"),
    (0xA40C, "SubjectDistanceRange"),
    (0xA420, "ImageUniqueID"),
    (0xA430, "CameraOwnerName"),
    (0xA431, "BodySerialNumber"),
    (0xA432, "LensSpecification"),
    (0xA433, "LensMake"),
    (0xA434, "LensModel"),
    (0xA435, "LensSerialNumber"),
    (0xA480, "GDAL_METADATA"),
    (0xA481, "GDAL_NODATA"),
    (0xBC01, "PixelFormat"),
    (0xBC02, "Transformation"),
    (0xBC03, "Uncompressed"),
    (0xBC04, "ImageType"),
    (0xBC80, "ImageWidth"),
    (0xBC81, "ImageHeight"),
    (0xBC82, "WidthResolution"),
    (0xBC83, "HeightResolution"),
    (0xBCC0, "ImageOffset"),
    (0xBCC1, "ImageByteCount"),
    (0xBCC2, "AlphaOffset"),
    (0xBCC3, "AlphaByteCount"),
    (0xBCC4, "ImageDataDiscard"),
    (0xBCC5, "AlphaDataDiscard"),
    (0xC427, "Oce_Scanjob_Description"),
    (0xC428, "Oce_Application_Selector"),
    (0xC429, "Oce_Identification_Number"),
    (0xC42A, "Oce_ImageLogic_Characteristics"),
    (0xC4A5, "PrintImageMatching"),
    (0xC612, "DNGVersion"),
    (0xC613, "DNGBackwardVersion"),
    (0xC614, "UniqueCameraModel"),
    (0xC615, "LocalizedCameraModel"),
    (0xC616, "CFAPlaneColor"),
    (0xC617, "CFALayout"),
    (0xC618, "LinearizationTable"),
    (0xC619, "BlackLevelRepeatDim"),
    (0xC61A, "BlackLevel"),
    (0xC61B, "BlackLevelDeltaH"),
    (0xC61C, "BlackLevelDeltaV"),
    (0xC61D, "WhiteLevel"),
    (0xC61E, "DefaultScale"),
    (0xC61F, "DefaultCropOrigin"),
    (0xC620, "DefaultCropSize"),
    (0xC621, "ColorMatrix1"),
    (0xC622, "ColorMatrix2"),
    (0xC623, "CameraCalibration1"),
    (0xC624, "CameraCalibration2"),
    (0xC625, "ReductionMatrix1"),
    (0xC626, "ReductionMatrix2"),
    (0xC627, "AnalogBalance"),
    (0xC628, "AsShotNeutral"),
    (0xC629, "AsShotWhiteXY"),
    (0xC62A, "BaselineExposure"),
    (0xC62B, "BaselineNoise"),
    (0xC62C, "BaselineSharpness"),
    (0xC62D, "BayerGreenSplit"),
    (0xC62E, "LinearResponseLimit"),
    (0xC62F, "CameraSerialNumber"),
    (0xC630, "LensInfo"),
    (0xC631, "ChromaBlurRadius"),
    (0xC632, "AntiAliasStrength"),
    (0xC633, "ShadowScale"),
    (0xC634, "DNGPrivateData"),
    (0xC635, "MakerNoteSafety"),
    (0xC65A, "CalibrationIlluminant1"),
    (0xC65B, "CalibrationIlluminant2"),
    (0xC65C, "BestQualityScale"),
    (0xC65D, "RawDataUniqueID"),
    (0xC660, "Alias_Layer_Metadata"),
    (0xC68B, "OriginalRawFileName"),
    (0xC68C, "OriginalRawFileData"),
    (0xC68D, "ActiveArea"),
    (0xC68E, "MaskedAreas"),
    (0xC68F, "AsShotICCProfile"),
    (0xC690, "AsShotPreProfileMatrix"),
    (0xC691, "CurrentICCProfile"),
    (0xC692, "CurrentPreProfileMatrix"),
    (0xC6BF, "ColorimetricReference"),
    (0xC6F3, "CameraCalibrationSignature"),
    (0xC6F4, "ProfileCalibrationSignature"),
    (0xC6F5, "ExtraCameraProfiles"),
    (0xC6F6, "AsShotProfileName"),
    (0xC6F7, "NoiseReductionApplied"),
    (0xC6F8, "ProfileName"),
    (0xC6F9, "ProfileHueSatMapDims"),
    (0xC6FA, "ProfileHueSatMapData1"),
    (0xC6FB, "ProfileHueSatMapData2"),
    (0xC6FC, "ProfileToneCurve"),
    (0xC6FD, "ProfileEmbedPolicy"),
    (0xC6FE, "ProfileCopyright"),
    (0xC714, "ForwardMatrix1"),
    (0xC715, "ForwardMatrix2"),
    (0xC716, "PreviewApplicationName"),
    (0xC717, "PreviewApplicationVersion"),
    (0xC718, "PreviewSettingsName"),
    (0xC719, "PreviewSettingsDigest"),
    (0xC71A, "PreviewColorSpace"),
    (0xC71B, "PreviewDateTime"),
    (0xC71C, "RawImageDigest"),
    (0xC71D, "OriginalRawFileDigest"),
    (0xC71E, "SubTileBlockSize"),
    (0xC71F, "RowInterleaveFactor"),
    (0xC725, "ProfileLookTableDims"),
    (0xC726, "ProfileLookTableData"),
    (0xC740, "OpcodeList1"),
    (0xC741, "OpcodeList2"),
    (0xC74E, "OpcodeList3"),
    (0xC761, "NoiseProfile"),
    (0xC791, "OriginalDefaultFinalSize"),
    (0xC792, "OriginalBestQualityFinalSize"),
    (0xC793, "OriginalDefaultCropSize"),
    (0xC7A3, "ProfileHueSatMapEncoding"),
    (0xC7A4, "ProfileLookTableEncoding"),
    (0xC7A5, "BaselineExposureOffset"),
    (0xC7A6, "DefaultBlackRender"),
    (0xC7A7, "NewRawImageDigest"),
    (0xC7A8, "RawToPreviewGain"),
    (0xC7B5, "DefaultUserCrop"),
];
