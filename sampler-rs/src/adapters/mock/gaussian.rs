use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

use crate::errors::SamplerError;

/// Functionality to add some Gaussian noise.
#[derive(Clone, Debug)]
pub(super) struct GaussianNoise {
    normal: Normal<f64>,
}

impl GaussianNoise {
    /// Creates new distribution from mean and stdev. Fails if stdev is not finite and positive.
    pub(super) fn new(mean: f64, stdev: f64) -> Result<Self, SamplerError> {
        if !(stdev.is_finite() && stdev > 0.0) {
            return Err(SamplerError::Other(format!(
                "Invalid noise standard deviation {}",
                stdev
            )));
        }
        let normal = Normal::new(mean, stdev).map_err(|e| SamplerError::Other(e.to_string()))?;
        Ok(Self { normal })
    }

    pub(super) fn draw_sample(&self, rng: &mut StdRng) -> f64 {
        self.normal.sample(rng)
    }

    pub(super) fn add_noise(&self, rng: &mut StdRng, data: [f64; 3]) -> [f64; 3] {
        data.map(|d| d + self.draw_sample(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_gaussian_new() {
        let noise = GaussianNoise::new(0.0, 1.0).unwrap();
        assert_eq!(noise.normal.mean(), 0.0);
        assert_eq!(noise.normal.std_dev(), 1.0);
        assert!(GaussianNoise::new(0.0, -1.0).is_err());
    }

    #[test]
    fn test_gaussian_rejects_degenerate_stdev() {
        assert!(GaussianNoise::new(0.0, 0.0).is_err());
        assert!(GaussianNoise::new(0.0, f64::NAN).is_err());
        assert!(GaussianNoise::new(0.0, f64::INFINITY).is_err());
        assert!(matches!(
            GaussianNoise::new(0.0, -0.5),
            Err(SamplerError::Other(_))
        ));
    }

    #[test]
    fn test_add_noise() {
        let stdev = 0.01;
        let mut rng = StdRng::seed_from_u64(7);
        let noise = GaussianNoise::new(0.0, stdev).unwrap();
        let data = [1.0, 2.0, 3.0];
        let result = noise.add_noise(&mut rng, data);
        for (r, d) in result.iter().zip(data.iter()) {
            assert!((r - d).abs() <= 6.0 * stdev);
        }
    }
}
