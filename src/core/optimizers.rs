use crate::prelude::*;

/// One batch gradient-descent update, `p - learning_rate * g` for every tensor.
///
/// Returns a new parameter set; the input is left untouched.
pub fn gradient_step(
    params: &Parameters,
    grads: &Gradients,
    learning_rate: f64,
) -> Result<Parameters> {
    if !grads.matches(params) {
        return Err(NNError::ShapeMismatch(
            "gradient shapes do not match parameter shapes".to_string(),
        ));
    }
    Ok(Parameters {
        w1: &params.w1 - &(learning_rate * &grads.dw1),
        b1: &params.b1 - &(learning_rate * &grads.db1),
        w2: &params.w2 - &(learning_rate * &grads.dw2),
        b2: &params.b2 - &(learning_rate * &grads.db2),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> Parameters {
        Parameters::from_arrays(
            array![[1., 2.], [3., 4.]],
            array![[0., 0.]],
            array![[1.], [-1.]],
            array![[0.5]],
        )
        .unwrap()
    }

    #[test]
    fn test_gradient_step() {
        let grads = Gradients {
            dw1: array![[1., 0.], [0., 1.]],
            db1: array![[2., -2.]],
            dw2: array![[0.5], [0.5]],
            db2: array![[1.]],
        };
        let next = gradient_step(&params(), &grads, 0.5).unwrap();
        assert_eq!(next.w1, array![[0.5, 2.], [3., 3.5]]);
        assert_eq!(next.b1, array![[-1., 1.]]);
        assert_eq!(next.w2, array![[0.75], [-1.25]]);
        assert_eq!(next.b2, array![[0.]]);
    }

    #[test]
    fn test_gradient_step_leaves_input_unchanged() {
        let p = params();
        let grads = Gradients {
            dw1: Array2::ones((2, 2)),
            db1: Array2::ones((1, 2)),
            dw2: Array2::ones((2, 1)),
            db2: Array2::ones((1, 1)),
        };
        let _ = gradient_step(&p, &grads, 1.0).unwrap();
        assert_eq!(p, params());
    }

    #[test]
    fn test_gradient_step_shape_mismatch() {
        let grads = Gradients {
            dw1: Array2::ones((2, 3)),
            db1: Array2::ones((1, 2)),
            dw2: Array2::ones((2, 1)),
            db2: Array2::ones((1, 1)),
        };
        assert!(gradient_step(&params(), &grads, 0.1).is_err());
    }
}
