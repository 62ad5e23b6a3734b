//! Static descriptions of the models offered on the model-select step.

use super::model::ModelKind;

/// Human-facing metadata for one selectable model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelInfo {
    pub kind: ModelKind,
    pub name: &'static str,
    pub family: &'static str,
    pub description: &'static str,
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
}

pub const MODEL_CATALOG: [ModelInfo; 2] = [
    ModelInfo {
        kind: ModelKind::LogisticRegression,
        name: "Logistic Regression",
        family: "Linear Classifier",
        description: "Linear model for binary classification",
        pros: &[
            "Fast training",
            "Good for linearly separable data",
            "Provides probability estimates",
        ],
        cons: &["Assumes linear relationship", "May underfit complex data"],
    },
    ModelInfo {
        kind: ModelKind::DecisionTree,
        name: "Decision Tree",
        family: "Tree-based Classifier",
        description: "Tree-based model for classification and regression",
        pros: &[
            "Easy to interpret",
            "Handles non-linear data",
            "No feature scaling needed",
        ],
        cons: &["Prone to overfitting", "Can be unstable"],
    },
];

impl ModelKind {
    pub fn info(self) -> &'static ModelInfo {
        match self {
            Self::LogisticRegression => &MODEL_CATALOG[0],
            Self::DecisionTree => &MODEL_CATALOG[1],
        }
    }

    pub fn display_name(self) -> &'static str {
        self.info().name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_model_once() {
        for kind in ModelKind::ALL {
            assert_eq!(kind.info().kind, kind);
            assert_eq!(
                MODEL_CATALOG.iter().filter(|info| info.kind == kind).count(),
                1
            );
        }
        assert_eq!(ModelKind::DecisionTree.display_name(), "Decision Tree");
    }
}
