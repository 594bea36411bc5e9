//! Decoder and evaluator for XGBoost `gbtree` JSON artifacts.
//!
//! Reads the JSON document produced by XGBoost's `save_model`, keeping only
//! what inference needs: the flattened per-tree node arrays, the
//! tree-to-class map, and the learner dimensions. Scalar learner parameters
//! are stored as JSON strings by the format and parsed here.

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::error::PredictionError;

#[derive(Debug, Deserialize)]
struct ModelDoc {
    learner: Learner,
}

#[derive(Debug, Deserialize)]
struct Learner {
    gradient_booster: GradientBooster,
    learner_model_param: LearnerModelParam,
}

#[derive(Debug, Deserialize)]
struct GradientBooster {
    name: String,
    model: BoosterModel,
}

#[derive(Debug, Deserialize)]
struct BoosterModel {
    trees: Vec<Tree>,
    /// Class group each tree contributes its margin to.
    tree_info: Vec<u32>,
}

#[derive(Debug, Deserialize)]
struct LearnerModelParam {
    base_score: String,
    num_class: String,
    num_feature: String,
}

/// One regression tree in flattened-array form. A node is a leaf when its
/// `left_children` entry is -1; `split_conditions` holds the split threshold
/// for internal nodes and the output value for leaves.
#[derive(Debug, Deserialize)]
struct Tree {
    left_children: Vec<i32>,
    right_children: Vec<i32>,
    split_indices: Vec<u32>,
    split_conditions: Vec<f32>,
}

impl Tree {
    fn validate(&self, num_feature: usize) -> Result<()> {
        let nodes = self.left_children.len();
        if self.right_children.len() != nodes
            || self.split_indices.len() != nodes
            || self.split_conditions.len() != nodes
        {
            bail!("node arrays disagree on length");
        }
        if nodes == 0 {
            bail!("tree has no nodes");
        }
        for node in 0..nodes {
            let left = self.left_children[node];
            if left < 0 {
                continue;
            }
            let right = self.right_children[node];
            // Children must sit at higher indices than their parent, which
            // also guarantees traversal terminates.
            if (left as usize) <= node || (left as usize) >= nodes {
                bail!("node {node} has left child {left} outside the tree");
            }
            if right <= node as i32 || (right as usize) >= nodes {
                bail!("node {node} has right child {right} outside the tree");
            }
            let split = self.split_indices[node] as usize;
            if split >= num_feature {
                bail!("node {node} splits on feature {split} outside input width {num_feature}");
            }
        }
        Ok(())
    }

    fn leaf_value(&self, features: &[f32]) -> f32 {
        let mut node = 0usize;
        loop {
            let left = self.left_children[node];
            if left < 0 {
                return self.split_conditions[node];
            }
            node = if features[self.split_indices[node] as usize] < self.split_conditions[node] {
                left as usize
            } else {
                self.right_children[node] as usize
            };
        }
    }
}

/// An immutable multi-class boosted-tree classifier.
#[derive(Debug)]
pub struct GbTreeModel {
    trees: Vec<Tree>,
    tree_info: Vec<u32>,
    num_class: usize,
    num_feature: usize,
    base_score: f32,
}

impl GbTreeModel {
    /// Decode an artifact from its raw JSON bytes and validate it for
    /// inference. All structural problems surface here, at load time, so
    /// that [`GbTreeModel::predict`] only has to check the input width.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let doc: ModelDoc =
            serde_json::from_slice(bytes).context("not a valid model document")?;
        let learner = doc.learner;

        if learner.gradient_booster.name != "gbtree" {
            bail!(
                "unsupported booster {:?}, only gbtree artifacts can be served",
                learner.gradient_booster.name
            );
        }

        let params = &learner.learner_model_param;
        let num_class: usize = params
            .num_class
            .parse()
            .context("num_class is not an integer")?;
        let num_feature: usize = params
            .num_feature
            .parse()
            .context("num_feature is not an integer")?;
        let base_score: f32 = params
            .base_score
            .parse()
            .context("base_score is not a number")?;
        if num_class < 2 {
            bail!("model declares {num_class} classes, expected a multi-class classifier");
        }

        let model = learner.gradient_booster.model;
        if model.tree_info.len() != model.trees.len() {
            bail!(
                "tree_info maps {} trees but {} are present",
                model.tree_info.len(),
                model.trees.len()
            );
        }
        if let Some(&group) = model.tree_info.iter().find(|&&g| g as usize >= num_class) {
            bail!("tree_info references class group {group} outside {num_class} classes");
        }
        for (index, tree) in model.trees.iter().enumerate() {
            tree.validate(num_feature)
                .with_context(|| format!("tree {index} is malformed"))?;
        }

        Ok(Self {
            trees: model.trees,
            tree_info: model.tree_info,
            num_class,
            num_feature,
            base_score,
        })
    }

    /// Input width the model was trained on.
    pub fn num_features(&self) -> usize {
        self.num_feature
    }

    pub fn num_classes(&self) -> usize {
        self.num_class
    }

    /// Predict the class index for one encoded feature vector.
    ///
    /// Each tree is walked to a leaf and its value added to the margin of
    /// the class group `tree_info` assigns it to; the predicted class is the
    /// argmax over margins, with ties resolving to the lowest index.
    pub fn predict(&self, features: &[f32]) -> Result<usize, PredictionError> {
        if features.len() != self.num_feature {
            return Err(PredictionError::FeatureWidth {
                expected: self.num_feature,
                actual: features.len(),
            });
        }

        let mut margins = vec![self.base_score; self.num_class];
        for (tree, &group) in self.trees.iter().zip(&self.tree_info) {
            margins[group as usize] += tree.leaf_value(features);
        }

        let mut best = 0;
        for (class, margin) in margins.iter().enumerate().skip(1) {
            if *margin > margins[best] {
                best = class;
            }
        }
        Ok(best)
    }
}
