// Visual feature and detail identifiers for composite analysis

/// Visual feature categories accepted by the Computer Vision `analyze`
/// operation, passed as the `visualFeatures` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualFeature {
    ImageType,
    Faces,
    Adult,
    Categories,
    Color,
    Tags,
    Description,
    Objects,
    Brands,
}

impl VisualFeature {
    /// The wire name for the `visualFeatures` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            VisualFeature::ImageType => "ImageType",
            VisualFeature::Faces => "Faces",
            VisualFeature::Adult => "Adult",
            VisualFeature::Categories => "Categories",
            VisualFeature::Color => "Color",
            VisualFeature::Tags => "Tags",
            VisualFeature::Description => "Description",
            VisualFeature::Objects => "Objects",
            VisualFeature::Brands => "Brands",
        }
    }
}

/// Domain-specific detail flags for the `details` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detail {
    Landmarks,
}

impl Detail {
    pub fn as_str(&self) -> &'static str {
        match self {
            Detail::Landmarks => "Landmarks",
        }
    }
}

/// Join a feature list into the comma-separated query parameter value.
pub fn join_features(features: &[VisualFeature]) -> String {
    features
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

/// Join a detail list into the comma-separated query parameter value.
pub fn join_details(details: &[Detail]) -> String {
    details
        .iter()
        .map(|d| d.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn features_join_comma_separated() {
        let joined = join_features(&[
            VisualFeature::Tags,
            VisualFeature::Faces,
            VisualFeature::Color,
        ]);
        assert_eq!(joined, "Tags,Faces,Color");
    }

    #[test]
    fn single_feature_has_no_separator() {
        assert_eq!(join_features(&[VisualFeature::Tags]), "Tags");
    }

    #[test]
    fn details_join() {
        assert_eq!(join_details(&[Detail::Landmarks]), "Landmarks");
    }
}
