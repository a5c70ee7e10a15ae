//! The pyradiomics to XNAT name table.
//!
//! Entry order is the element order of the assessor document, and the stat
//! order inside each entry is the child order of that model's element.

use super::{MappingEntry, StatMapping};

const fn stat(csv_stat: &'static str, output_stat: &'static str) -> StatMapping {
    StatMapping {
        csv_stat,
        output_stat,
    }
}

const GENERAL_INFO: &[StatMapping] = &[
    // Seeded from the command line, not read from the CSV.
    stat("scanId", "scanId"),
    stat("maskFile", "maskFile"),
    stat("filter", "filter"),
    stat("BoundingBox", "boundingBox"),
    stat("EnabledImageTypes", "enabledImageTypes"),
    stat("GeneralSettings", "generalSettings"),
    stat("ImageHash", "imageHash"),
    stat("ImageSpacing", "imageSpacing"),
    stat("MaskHash", "maskHash"),
    stat("Version", "version"),
    stat("VolumeNum", "volumeNum"),
    stat("VoxelNum", "voxelNum"),
];

const FIRST_ORDER: &[StatMapping] = &[
    stat("10Percentile", "percentile10"),
    stat("90Percentile", "percentile90"),
    stat("Energy", "energy"),
    stat("Entropy", "entropy"),
    stat("InterquartileRange", "interquartileRange"),
    stat("Kurtosis", "kurtosis"),
    stat("Maximum", "maximum"),
    stat("MeanAbsoluteDeviation", "meanAbsoluteDeviation"),
    stat("Mean", "mean"),
    stat("Median", "median"),
    stat("Minimum", "minimum"),
    stat("Range", "range"),
    stat("RobustMeanAbsoluteDeviation", "robustMeanAbsoluteDeviation"),
    stat("RootMeanSquared", "rootMeanSquared"),
    stat("Skewness", "skewness"),
    stat("TotalEnergy", "totalEnergy"),
    stat("Uniformity", "uniformity"),
    stat("Variance", "variance"),
];

const SHAPE: &[StatMapping] = &[
    stat("Elongation", "elongation"),
    stat("Flatness", "flatness"),
    stat("LeastAxisLength", "leastAxisLength"),
    stat("MajorAxisLength", "majorAxisLength"),
    stat("Maximum2DDiameterColumn", "maximum2DDiameterColumn"),
    stat("Maximum2DDiameterRow", "maximum2DDiameterRow"),
    stat("Maximum2DDiameterSlice", "maximum2DDiameterSlice"),
    stat("Maximum3DDiameter", "maximum3DDiameter"),
    stat("MeshVolume", "meshVolume"),
    stat("MinorAxisLength", "minorAxisLength"),
    stat("Sphericity", "sphericity"),
    stat("SurfaceArea", "surfaceArea"),
    stat("SurfaceVolumeRatio", "surfaceVolumeRatio"),
    stat("VoxelVolume", "voxelVolume"),
];

const GLCM: &[StatMapping] = &[
    stat("Autocorrelation", "autocorrelation"),
    stat("ClusterProminence", "clusterProminence"),
    stat("ClusterShade", "clusterShade"),
    stat("ClusterTendency", "clusterTendency"),
    stat("Contrast", "contrast"),
    stat("Correlation", "correlation"),
    stat("DifferenceAverage", "differenceAverage"),
    stat("DifferenceEntropy", "differenceEntropy"),
    stat("DifferenceVariance", "differenceVariance"),
    stat("Id", "id"),
    stat("Idm", "idm"),
    stat("Idmn", "idmn"),
    stat("Idn", "idn"),
    stat("Imc1", "imc1"),
    stat("Imc2", "imc2"),
    stat("InverseVariance", "inverseVariance"),
    stat("JointAverage", "jointAverage"),
    stat("JointEnergy", "jointEnergy"),
    stat("JointEntropy", "jointEntropy"),
    stat("MCC", "mcc"),
    stat("MaximumProbability", "maximumProbability"),
    stat("SumAverage", "sumAverage"),
    stat("SumEntropy", "sumEntropy"),
    stat("SumSquares", "sumSquares"),
];

const GLRLM: &[StatMapping] = &[
    stat("GrayLevelNonUniformity", "grayLevelNonUniformity"),
    stat("GrayLevelNonUniformityNormalized", "grayLevelNonUniformityNormalized"),
    stat("GrayLevelVariance", "grayLevelVariance"),
    stat("HighGrayLevelRunEmphasis", "highGrayLevelRunEmphasis"),
    stat("LongRunEmphasis", "longRunEmphasis"),
    stat("LongRunHighGrayLevelEmphasis", "longRunHighGrayLevelEmphasis"),
    stat("LongRunLowGrayLevelEmphasis", "longRunLowGrayLevelEmphasis"),
    stat("LowGrayLevelRunEmphasis", "lowGrayLevelRunEmphasis"),
    stat("RunEntropy", "runEntropy"),
    stat("RunLengthNonUniformity", "runLengthNonUniformity"),
    stat("RunLengthNonUniformityNormalized", "runLengthNonUniformityNormalized"),
    stat("RunPercentage", "runPercentage"),
    stat("RunVariance", "runVariance"),
    stat("ShortRunEmphasis", "shortRunEmphasis"),
    stat("ShortRunHighGrayLevelEmphasis", "shortRunHighGrayLevelEmphasis"),
    stat("ShortRunLowGrayLevelEmphasis", "shortRunLowGrayLevelEmphasis"),
];

const GLSZM: &[StatMapping] = &[
    stat("GrayLevelNonUniformity", "grayLevelNonUniformity"),
    stat("GrayLevelNonUniformityNormalized", "grayLevelNonUniformityNormalized"),
    stat("GrayLevelVariance", "grayLevelVariance"),
    stat("HighGrayLevelZoneEmphasis", "highGrayLevelZoneEmphasis"),
    stat("LargeAreaEmphasis", "largeAreaEmphasis"),
    stat("LargeAreaHighGrayLevelEmphasis", "largeAreaHighGrayLevelEmphasis"),
    stat("LargeAreaLowGrayLevelEmphasis", "largeAreaLowGrayLevelEmphasis"),
    stat("LowGrayLevelZoneEmphasis", "lowGrayLevelZoneEmphasis"),
    stat("SizeZoneNonUniformity", "sizeZoneNonUniformity"),
    stat("SizeZoneNonUniformityNormalized", "sizeZoneNonUniformityNormalized"),
    stat("SmallAreaEmphasis", "smallAreaEmphasis"),
    stat("SmallAreaHighGrayLevelEmphasis", "smallAreaHighGrayLevelEmphasis"),
    stat("SmallAreaLowGrayLevelEmphasis", "smallAreaLowGrayLevelEmphasis"),
    stat("ZoneEntropy", "zoneEntropy"),
    stat("ZonePercentage", "zonePercentage"),
    stat("ZoneVariance", "zoneVariance"),
];

const GLDM: &[StatMapping] = &[
    stat("DependenceEntropy", "dependenceEntropy"),
    stat("DependenceNonUniformity", "dependenceNonUniformity"),
    stat("DependenceNonUniformityNormalized", "dependenceNonUniformityNormalized"),
    stat("DependenceVariance", "dependenceVariance"),
    stat("GrayLevelNonUniformity", "grayLevelNonUniformity"),
    stat("GrayLevelVariance", "grayLevelVariance"),
    stat("HighGrayLevelEmphasis", "highGrayLevelEmphasis"),
    stat("LargeDependenceEmphasis", "largeDependenceEmphasis"),
    stat("LargeDependenceHighGrayLevelEmphasis", "largeDependenceHighGrayLevelEmphasis"),
    stat("LargeDependenceLowGrayLevelEmphasis", "largeDependenceLowGrayLevelEmphasis"),
    stat("LowGrayLevelEmphasis", "lowGrayLevelEmphasis"),
    stat("SmallDependenceEmphasis", "smallDependenceEmphasis"),
    stat("SmallDependenceHighGrayLevelEmphasis", "smallDependenceHighGrayLevelEmphasis"),
    stat("SmallDependenceLowGrayLevelEmphasis", "smallDependenceLowGrayLevelEmphasis"),
];

const NGTDM: &[StatMapping] = &[
    stat("Busyness", "busyness"),
    stat("Coarseness", "coarseness"),
    stat("Complexity", "complexity"),
    stat("Contrast", "contrast"),
    stat("Strength", "strength"),
];

/// Every model the assessor schema knows about, in document order.
pub const MAPPING_TABLE: &[MappingEntry] = &[
    MappingEntry {
        csv_model: "general_info",
        output_model: "generalInfo",
        stats: GENERAL_INFO,
    },
    MappingEntry {
        csv_model: "firstorder",
        output_model: "firstorder",
        stats: FIRST_ORDER,
    },
    MappingEntry {
        csv_model: "shape",
        output_model: "shape",
        stats: SHAPE,
    },
    MappingEntry {
        csv_model: "glcm",
        output_model: "glcm",
        stats: GLCM,
    },
    MappingEntry {
        csv_model: "glrlm",
        output_model: "glrlm",
        stats: GLRLM,
    },
    MappingEntry {
        csv_model: "glszm",
        output_model: "glszm",
        stats: GLSZM,
    },
    MappingEntry {
        csv_model: "gldm",
        output_model: "gldm",
        stats: GLDM,
    },
    MappingEntry {
        csv_model: "ngtdm",
        output_model: "ngtdm",
        stats: NGTDM,
    },
];
