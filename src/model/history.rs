use serde::Serialize;

/// One row of a [`TrainingHistory`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EpochRecord {
    pub epoch: usize,
    pub accuracy: f64,
    pub loss: f64,
}

/// Per-epoch accuracy and loss recorded by one `train` call
#[derive(Debug, Clone, Default)]
pub struct TrainingHistory {
    pub epochs: Vec<usize>,
    pub accuracies: Vec<f64>,
    pub losses: Vec<f64>,
}

impl TrainingHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            epochs: Vec::with_capacity(capacity),
            accuracies: Vec::with_capacity(capacity),
            losses: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, epoch: usize, accuracy: f64, loss: f64) {
        self.epochs.push(epoch);
        self.accuracies.push(accuracy);
        self.losses.push(loss);
    }

    pub fn len(&self) -> usize {
        self.epochs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.epochs.is_empty()
    }

    /// Rows in epoch order
    pub fn records(&self) -> impl Iterator<Item = EpochRecord> + '_ {
        self.epochs
            .iter()
            .zip(self.accuracies.iter())
            .zip(self.losses.iter())
            .map(|((&epoch, &accuracy), &loss)| EpochRecord {
                epoch,
                accuracy,
                loss,
            })
    }

    /// (epoch, accuracy) pairs, ready for plotting
    pub fn accuracy_points(&self) -> Vec<(f64, f64)> {
        self.epochs
            .iter()
            .zip(self.accuracies.iter())
            .map(|(&epoch, &accuracy)| (epoch as f64, accuracy))
            .collect()
    }

    /// (epoch, loss) pairs, ready for plotting
    pub fn loss_points(&self) -> Vec<(f64, f64)> {
        self.epochs
            .iter()
            .zip(self.losses.iter())
            .map(|(&epoch, &loss)| (epoch as f64, loss))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_follow_push_order() {
        let mut history = TrainingHistory::with_capacity(2);
        history.push(0, 0.1, 2.3);
        history.push(1, 0.5, 1.9);

        let records: Vec<EpochRecord> = history.records().collect();

        assert_eq!(history.len(), 2);
        assert_eq!(
            records[1],
            EpochRecord {
                epoch: 1,
                accuracy: 0.5,
                loss: 1.9
            }
        );
        assert_eq!(history.loss_points(), vec![(0.0, 2.3), (1.0, 1.9)]);
    }
}
