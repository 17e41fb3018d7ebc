use crate::prelude::*;
use crate::config::TrainConfig;
use crate::core::metrics;
use crate::data::Split;
use tracing::{debug, info, warn};

/// Final parameters plus one cost value per epoch, in epoch order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrainingRun {
    pub params: Parameters,
    pub costs: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct Trainer {
    pub config: TrainConfig,
}

impl Trainer {
    pub fn new(config: TrainConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Full-batch gradient descent for exactly `config.epochs` epochs.
    ///
    /// Each epoch runs a forward pass, records the cost, back propagates and
    /// replaces the parameters with `p - lr * g`. There is no early stopping.
    pub fn fit(&self, x: &Array2<f64>, y: &Array2<f64>, initial: Parameters) -> Result<TrainingRun> {
        if x.nrows() == 0 {
            return Err(NNError::EmptyDataset);
        }
        if x.nrows() != y.nrows() {
            return Err(NNError::ShapeMismatch(format!(
                "{} samples but {} targets",
                x.nrows(),
                y.nrows()
            )));
        }
        initial.validate()?;
        debug!(
            samples = x.nrows(),
            hidden = initial.hidden_size(),
            epochs = self.config.epochs,
            learning_rate = self.config.learning_rate,
            "starting training"
        );

        let mut params = initial;
        let mut costs = Vec::with_capacity(self.config.epochs);

        for epoch in 0..self.config.epochs {
            let cache = forward(x, &params)?;

            let epoch_cost = cost(&cache.a2, y)?;
            if !epoch_cost.is_finite() {
                warn!(epoch, cost = epoch_cost, "cost is not finite");
            }
            costs.push(epoch_cost);

            let grads = backward(x, y, &cache, &params)?;
            params = gradient_step(&params, &grads, self.config.learning_rate)?;

            if self.config.report_every > 0 && epoch % self.config.report_every == 0 {
                info!("Epoch {}, Cost: {:.4}", epoch, epoch_cost);
            }
        }

        Ok(TrainingRun { params, costs })
    }
}

/// A trained two-layer sigmoid network.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TwoLayerNet {
    pub params: Parameters,
}

impl TwoLayerNet {
    pub fn new(params: Parameters) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Output layer activations, one row of class scores per sample.
    pub fn predict_proba(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        Ok(forward(x, &self.params)?.a2)
    }

    pub fn predict(&self, x: &Array2<f64>) -> Result<Vec<usize>> {
        Ok(metrics::predict_classes(&self.predict_proba(x)?))
    }

    /// Cost on a held-out set with indicator-encoded targets.
    pub fn evaluate(&self, x: &Array2<f64>, y: &Array2<f64>) -> Result<f64> {
        cost(&self.predict_proba(x)?, y)
    }

    /// Percentage of samples whose predicted class equals the label.
    pub fn accuracy(&self, x: &Array2<f64>, labels: &[usize]) -> Result<f64> {
        metrics::accuracy(&self.predict(x)?, labels)
    }

    pub fn summary(&self) -> String {
        let p = &self.params;
        let mut res = "\nModel TwoLayerNet\n".to_string();
        res.push_str("-------------------------------------------------------------\n");
        res.push_str("Layer (Type)\t\t Output shape\t\t No.of params\n");
        for (name, w, b) in [("hidden", &p.w1, &p.b1), ("output", &p.w2, &p.b2)] {
            res.push_str(&format!(
                "{} (Dense, sigmoid)\t  (None, {})\t\t  {}\n",
                name,
                b.len(),
                w.len() + b.len()
            ));
        }
        res.push_str("-------------------------------------------------------------\n");
        res.push_str(&format!("Total params: {}\n", p.num_params()));
        res
    }
}

impl From<TrainingRun> for TwoLayerNet {
    fn from(run: TrainingRun) -> Self {
        Self { params: run.params }
    }
}

/// Outcome of training on a split and scoring the held-out partition.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub run: TrainingRun,
    pub stats: MinMaxStats,
    pub test_cost: f64,
    pub test_accuracy: f64,
}

/// Normalizes with training extrema, encodes labels, trains from seeded
/// parameters and evaluates once on the test partition.
pub fn train_and_evaluate(split: &Split, config: &Config) -> Result<Evaluation> {
    config.validate()?;
    let model = &config.model;
    if split.train.num_features() != model.input_size {
        return Err(NNError::ShapeMismatch(format!(
            "dataset has {} features but input_size is {}",
            split.train.num_features(),
            model.input_size
        )));
    }

    let stats = MinMaxStats::fit(&split.train.features)?;
    let x_train = stats.transform(&split.train.features)?;
    let x_test = stats.transform(&split.test.features)?;
    let y_train = one_hot(&split.train.labels, model.output_size)?;
    let y_test = one_hot(&split.test.labels, model.output_size)?;

    let initial = Parameters::init(model)?;
    let run = Trainer::new(config.train)?.fit(&x_train, &y_train, initial)?;

    let net = TwoLayerNet::new(run.params.clone())?;
    let test_cost = net.evaluate(&x_test, &y_test)?;
    let test_accuracy = net.accuracy(&x_test, &split.test.labels)?;

    Ok(Evaluation {
        run,
        stats,
        test_cost,
        test_accuracy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModelConfig;

    // one tight cluster per class in 4-d
    fn toy_problem() -> (Array2<f64>, Vec<usize>) {
        let x = array![
            [0.0, 0.1, 0.0, 0.1],
            [0.1, 0.0, 0.1, 0.0],
            [0.1, 0.1, 0.0, 0.0],
            [0.5, 0.5, 0.5, 0.5],
            [0.4, 0.6, 0.5, 0.4],
            [0.6, 0.5, 0.4, 0.5],
            [1.0, 0.9, 1.0, 0.9],
            [0.9, 1.0, 0.9, 1.0],
            [1.0, 1.0, 0.9, 0.9],
        ];
        (x, vec![0, 0, 0, 1, 1, 1, 2, 2, 2])
    }

    fn trainer(epochs: usize) -> Trainer {
        Trainer::new(TrainConfig {
            epochs,
            report_every: 0,
            ..TrainConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_fit_runs_exactly_epochs() {
        let (x, labels) = toy_problem();
        let y = one_hot(&labels, 3).unwrap();
        let initial = Parameters::init(&ModelConfig::default()).unwrap();
        let run = trainer(37).fit(&x, &y, initial.clone()).unwrap();
        assert_eq!(run.costs.len(), 37);
        assert_eq!(run.params.w1.dim(), initial.w1.dim());
        assert_ne!(run.params, initial);
    }

    #[test]
    fn test_first_cost_is_cost_of_initial_params() {
        let (x, labels) = toy_problem();
        let y = one_hot(&labels, 3).unwrap();
        let initial = Parameters::init(&ModelConfig::default()).unwrap();
        let expected = cost(&forward(&x, &initial).unwrap().a2, &y).unwrap();
        let run = trainer(3).fit(&x, &y, initial).unwrap();
        assert_eq!(run.costs[0], expected);
    }

    #[test]
    fn test_fit_is_deterministic() {
        let (x, labels) = toy_problem();
        let y = one_hot(&labels, 3).unwrap();
        let initial = Parameters::init(&ModelConfig::default()).unwrap();
        let a = trainer(200).fit(&x, &y, initial.clone()).unwrap();
        let b = trainer(200).fit(&x, &y, initial).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fit_learns_toy_problem() {
        let (x, labels) = toy_problem();
        let y = one_hot(&labels, 3).unwrap();
        let config = ModelConfig {
            init_std: 0.5,
            ..ModelConfig::default()
        };
        let run = Trainer::new(TrainConfig {
            learning_rate: 2.0,
            epochs: 3000,
            report_every: 0,
        })
        .unwrap()
        .fit(&x, &y, Parameters::init(&config).unwrap())
        .unwrap();
        assert!(run.costs[run.costs.len() - 1] < run.costs[0]);

        let net = TwoLayerNet::from(run);
        assert_eq!(net.predict(&x).unwrap(), labels);
        assert_eq!(net.accuracy(&x, &labels).unwrap(), 100.0);
        assert!(net.evaluate(&x, &y).unwrap() < 0.1);
    }

    #[test]
    fn test_fit_rejects_bad_input() {
        let (x, labels) = toy_problem();
        let y = one_hot(&labels[..5], 3).unwrap();
        let initial = Parameters::init(&ModelConfig::default()).unwrap();
        assert!(matches!(
            trainer(1).fit(&x, &y, initial.clone()),
            Err(NNError::ShapeMismatch(_))
        ));

        let empty = Array2::<f64>::zeros((0, 4));
        let y = Array2::<f64>::zeros((0, 3));
        assert!(matches!(trainer(1).fit(&empty, &y, initial), Err(NNError::EmptyDataset)));
    }

    #[test]
    fn test_trainer_rejects_bad_config() {
        assert!(Trainer::new(TrainConfig { epochs: 0, ..TrainConfig::default() }).is_err());
        assert!(Trainer::new(TrainConfig { learning_rate: -0.1, ..TrainConfig::default() }).is_err());
    }

    #[test]
    fn test_summary() {
        let net = TwoLayerNet::new(Parameters::init(&ModelConfig::default()).unwrap()).unwrap();
        let summary = net.summary();
        assert!(summary.contains("Total params: 43"));
        assert!(summary.contains("(None, 5)"));
        assert!(summary.contains("(None, 3)"));
    }
}
