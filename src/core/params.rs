use crate::prelude::*;
use crate::config::ModelConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Weights and biases of the two dense layers.
///
/// `w1: input×hidden`, `b1: 1×hidden`, `w2: hidden×output`, `b2: 1×output`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Parameters {
    pub w1: Array2<f64>,
    pub b1: Array2<f64>,
    pub w2: Array2<f64>,
    pub b2: Array2<f64>,
}

/// Gradients of the cost with respect to each tensor of `Parameters`, same shapes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Gradients {
    pub dw1: Array2<f64>,
    pub db1: Array2<f64>,
    pub dw2: Array2<f64>,
    pub db2: Array2<f64>,
}

impl Parameters {
    /// Weights drawn from `N(0, init_std)` with an rng seeded from `init_seed`, biases zero.
    pub fn init(config: &ModelConfig) -> Result<Self> {
        config.validate()?;
        let normal = Normal::new(0.0, config.init_std)
            .map_err(|e| NNError::InvalidConfiguration(format!("init_std: {}", e)))?;
        let mut rng = StdRng::seed_from_u64(config.init_seed);

        let w1 = Array2::random_using((config.input_size, config.hidden_size), normal, &mut rng);
        let w2 = Array2::random_using((config.hidden_size, config.output_size), normal, &mut rng);

        Ok(Self {
            w1,
            b1: Array2::zeros((1, config.hidden_size)),
            w2,
            b2: Array2::zeros((1, config.output_size)),
        })
    }

    pub fn from_arrays(
        w1: Array2<f64>,
        b1: Array2<f64>,
        w2: Array2<f64>,
        b2: Array2<f64>,
    ) -> Result<Self> {
        let params = Self { w1, b1, w2, b2 };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        let hidden = self.w1.ncols();
        let output = self.w2.ncols();
        if self.b1.dim() != (1, hidden) {
            return Err(NNError::ShapeMismatch(format!(
                "b1 is {:?}, expected (1, {})",
                self.b1.dim(),
                hidden
            )));
        }
        if self.w2.nrows() != hidden {
            return Err(NNError::ShapeMismatch(format!(
                "w2 is {:?} but w1 has {} hidden units",
                self.w2.dim(),
                hidden
            )));
        }
        if self.b2.dim() != (1, output) {
            return Err(NNError::ShapeMismatch(format!(
                "b2 is {:?}, expected (1, {})",
                self.b2.dim(),
                output
            )));
        }
        Ok(())
    }

    pub fn input_size(&self) -> usize {
        self.w1.nrows()
    }

    pub fn hidden_size(&self) -> usize {
        self.w1.ncols()
    }

    pub fn output_size(&self) -> usize {
        self.w2.ncols()
    }

    pub fn num_params(&self) -> usize {
        self.w1.len() + self.b1.len() + self.w2.len() + self.b2.len()
    }
}

impl Gradients {
    pub fn matches(&self, params: &Parameters) -> bool {
        self.dw1.dim() == params.w1.dim()
            && self.db1.dim() == params.b1.dim()
            && self.dw2.dim() == params.w2.dim()
            && self.db2.dim() == params.b2.dim()
    }
}
