use burn::{
    module::Module,
    nn::{Linear, LinearConfig, Relu},
    tensor::{activation::softmax, backend::Backend, Tensor},
};

/// Number of input features (28x28 greyscale pixels)
pub const INPUT_DIM: usize = 784;
/// Number of output classes
pub const NUM_CLASSES: usize = 10;
/// Widths of the hidden layers, in order
pub const HIDDEN_DIMS: [usize; 3] = [512, 64, 32];

/// Fixed 784 → 512 → 64 → 32 → 10 perceptron.
///
/// The three hidden layers use ReLU and the output layer is normalized with a
/// softmax over the class dimension, so `forward` returns one probability
/// distribution per input row.
#[derive(Module, Debug)]
pub struct Mlp<B: Backend> {
    fc1: Linear<B>,
    fc2: Linear<B>,
    fc3: Linear<B>,
    fc4: Linear<B>,
    activation: Relu,
}

impl<B: Backend> Mlp<B> {
    /// Build the layers on `device` with the framework's default initializer
    pub fn new(device: &B::Device) -> Self {
        let [h1, h2, h3] = HIDDEN_DIMS;

        Self {
            fc1: LinearConfig::new(INPUT_DIM, h1).init(device),
            fc2: LinearConfig::new(h1, h2).init(device),
            fc3: LinearConfig::new(h2, h3).init(device),
            fc4: LinearConfig::new(h3, NUM_CLASSES).init(device),
            activation: Relu::new(),
        }
    }

    /// Maps a `[n, 784]` batch to `[n, 10]` class probabilities
    pub fn forward(&self, input: Tensor<B, 2>) -> Tensor<B, 2> {
        let x = self.activation.forward(self.fc1.forward(input));
        let x = self.activation.forward(self.fc2.forward(x));
        let x = self.activation.forward(self.fc3.forward(x));

        softmax(self.fc4.forward(x), 1)
    }
}
