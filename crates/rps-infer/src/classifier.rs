use crate::{Backend, InferError, ModelSource, Session, preprocess};
use rps_base::Tensor;

/// Result of one forward pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Index of the highest score.
    pub index: usize,
    /// Raw per-class scores as produced by the model.
    pub scores: Vec<f32>,
}

/// Index of the largest score. The first maximum wins; NaN never wins.
pub fn argmax(scores: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (index, &score) in scores.iter().enumerate() {
        if score.is_nan() {
            continue;
        }
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((index, score)),
        }
    }
    best.map(|(index, _)| index)
}

/// Single-input, single-output image classifier.
///
/// Owns its model session for its whole lifetime. Every call to `classify`
/// is one forward pass on one frame; nothing is remembered between calls.
pub struct Classifier {
    session: Box<dyn Session>,
    input_name: String,
    output_name: String,
    input_size: u32,
}

impl std::fmt::Debug for Classifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Classifier")
            .field("input_name", &self.input_name)
            .field("output_name", &self.output_name)
            .field("input_size", &self.input_size)
            .finish()
    }
}

impl Classifier {
    /// Wrap a loaded session. The model's first input and first output are used.
    pub fn new(session: Box<dyn Session>, input_size: u32) -> Result<Self, InferError> {
        let input_name = session
            .input_names()
            .first()
            .cloned()
            .ok_or_else(|| InferError::ModelLoad("model has no inputs".to_string()))?;
        let output_name = session
            .output_names()
            .first()
            .cloned()
            .ok_or_else(|| InferError::ModelLoad("model has no outputs".to_string()))?;
        if input_size == 0 {
            return Err(InferError::Shape("input size must be non-zero".to_string()));
        }

        Ok(Self {
            session,
            input_name,
            output_name,
            input_size,
        })
    }

    /// Load a model through `backend` and wrap it.
    pub fn load(
        backend: &dyn Backend,
        model: ModelSource,
        input_size: u32,
    ) -> Result<Self, InferError> {
        let session = backend.load_model(model)?;
        Self::new(session, input_size)
    }

    pub fn input_size(&self) -> u32 {
        self.input_size
    }

    /// Preprocess `frame`, run the model once and pick the best class.
    ///
    /// No confidence threshold is applied: the top score wins even when it is low.
    pub fn classify(&mut self, frame: &Tensor<u8>) -> Result<Prediction, InferError> {
        let input = preprocess(frame, self.input_size)?;
        let mut outputs = self
            .session
            .run(&[(self.input_name.as_str(), input)])?;
        let scores = outputs
            .remove(&self.output_name)
            .ok_or_else(|| InferError::MissingOutput(self.output_name.clone()))?
            .data;

        let index = argmax(&scores)
            .ok_or_else(|| InferError::Shape("model output has no usable scores".to_string()))?;
        log::debug!("model output scores: {:?}", scores);
        log::debug!("predicted index: {}", index);

        Ok(Prediction { index, scores })
    }
}
