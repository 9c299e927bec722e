/// Scores a set of predictions against the ground truth
pub trait Evaluate {
    fn evaluate(&self, true_y: &[usize], pred_y: &[usize]) -> f64;
}

/// Fraction of predictions that exactly match their label.
///
/// Both sequences are expected to be index-aligned and of equal length. An
/// empty input scores `0.0`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Accuracy;

impl Evaluate for Accuracy {
    fn evaluate(&self, true_y: &[usize], pred_y: &[usize]) -> f64 {
        debug_assert_eq!(true_y.len(), pred_y.len());

        if true_y.is_empty() {
            return 0.0;
        }

        let num_correct = true_y
            .iter()
            .zip(pred_y.iter())
            .filter(|(actual, predicted)| actual == predicted)
            .count();

        num_correct as f64 / true_y.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_exact_matches() {
        let accuracy = Accuracy.evaluate(&[2, 2, 1, 1], &[2, 1, 0, 1]);

        assert_eq!(accuracy, 0.5);
    }

    #[test]
    fn perfect_and_empty() {
        assert_eq!(Accuracy.evaluate(&[0, 9, 4], &[0, 9, 4]), 1.0);
        assert_eq!(Accuracy.evaluate(&[], &[]), 0.0);
    }
}
