use crate::Gesture;
use rps_base::Tensor;
use rps_infer::{Classifier, InferError};

/// Something that can tell which gesture a frame shows.
pub trait GestureRecognizer {
    fn recognize(&mut self, frame: &Tensor<u8>) -> Result<Gesture, InferError>;
}

/// Output index 0, 1, 2 is Rock, Paper, Scissors; anything else is `Unknown`.
impl GestureRecognizer for Classifier {
    fn recognize(&mut self, frame: &Tensor<u8>) -> Result<Gesture, InferError> {
        let prediction = self.classify(frame)?;
        let gesture = Gesture::from_index(prediction.index);
        if !gesture.is_playable() {
            log::warn!(
                "classifier index {} is outside the label table",
                prediction.index
            );
        }
        Ok(gesture)
    }
}
