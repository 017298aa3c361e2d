// Static table of gateway operations

use crate::vision::features::{Detail, VisualFeature};

/// Which remote Computer Vision call an endpoint issues.
#[derive(Debug, Clone, Copy)]
pub enum RemoteCall {
    Analyze {
        features: &'static [VisualFeature],
        details: &'static [Detail],
    },
    DetectObjects,
    Describe,
    RecognizeText,
}

/// How to shape the remote result before responding.
#[derive(Debug, Clone, Copy)]
pub enum ResultShape {
    /// Pass the whole result object through unmodified.
    Whole,
    /// Narrow the result to one named sub-field.
    Field(&'static str),
}

/// One gateway operation: a remote call plus a result projection.
/// Seven entries of this descriptor replace seven near-identical handlers.
#[derive(Debug, Clone, Copy)]
pub struct VisionOp {
    pub name: &'static str,
    pub call: RemoteCall,
    pub shape: ResultShape,
}

const FULL_FEATURE_SET: &[VisualFeature] = &[
    VisualFeature::ImageType,
    VisualFeature::Faces,
    VisualFeature::Adult,
    VisualFeature::Categories,
    VisualFeature::Color,
    VisualFeature::Tags,
    VisualFeature::Description,
    VisualFeature::Objects,
    VisualFeature::Brands,
];

pub const ANALYZE: VisionOp = VisionOp {
    name: "analyze",
    call: RemoteCall::Analyze {
        features: FULL_FEATURE_SET,
        details: &[Detail::Landmarks],
    },
    shape: ResultShape::Whole,
};

pub const TAGS: VisionOp = VisionOp {
    name: "tags",
    call: RemoteCall::Analyze {
        features: &[VisualFeature::Tags],
        details: &[],
    },
    shape: ResultShape::Field("tags"),
};

pub const OBJECTS: VisionOp = VisionOp {
    name: "objects",
    call: RemoteCall::DetectObjects,
    shape: ResultShape::Whole,
};

pub const DESCRIBE: VisionOp = VisionOp {
    name: "describe",
    call: RemoteCall::Describe,
    shape: ResultShape::Whole,
};

pub const TEXT: VisionOp = VisionOp {
    name: "text",
    call: RemoteCall::RecognizeText,
    shape: ResultShape::Whole,
};

pub const FACES: VisionOp = VisionOp {
    name: "faces",
    call: RemoteCall::Analyze {
        features: &[VisualFeature::Faces],
        details: &[],
    },
    shape: ResultShape::Field("faces"),
};

pub const COLORS: VisionOp = VisionOp {
    name: "colors",
    call: RemoteCall::Analyze {
        features: &[VisualFeature::Color],
        details: &[],
    },
    shape: ResultShape::Field("color"),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_requests_every_feature_category() {
        match ANALYZE.call {
            RemoteCall::Analyze { features, details } => {
                assert_eq!(features.len(), 9);
                assert_eq!(details, &[Detail::Landmarks][..]);
            }
            _ => panic!("analyze must be a composite call"),
        }
    }

    #[test]
    fn narrowed_ops_project_their_sub_field() {
        for (op, field) in [(TAGS, "tags"), (FACES, "faces"), (COLORS, "color")] {
            match op.shape {
                ResultShape::Field(f) => assert_eq!(f, field),
                _ => panic!("{} must project a sub-field", op.name),
            }
        }
    }
}
