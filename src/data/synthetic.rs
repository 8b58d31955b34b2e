//! # Synthetic Student Data
//!
//! Generates student performance records from a fixed, documented distribution:
//!
//! ```text
//!   attendance ~ U[60, 100)
//!   homework   ~ U[50, 100)
//!   test_score ~ U[50, 100)
//!   final      = 0.4 * attendance + 0.3 * homework + 0.3 * test_score + N(0, noise_std)
//! ```
//!
//! `final` is clamped to `[0, 100]`. The random source is injected so runs can be reproduced
//! with a seeded generator.
//!
//! ```rust
//! use gradecast::data::synthetic::{generate_students, SyntheticConfig};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(1);
//! let students = generate_students(200, &SyntheticConfig::default(), &mut rng).unwrap();
//! assert_eq!(students.len(), 200);
//! ```

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::data::student::StudentRecord;
use crate::error::{Error, Result};

/// Parameters of the synthetic distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticConfig {
    /// Half-open range attendance is drawn from.
    pub attendance_range: (f64, f64),
    pub homework_range: (f64, f64),
    pub test_score_range: (f64, f64),
    /// Weights of attendance, homework and test score in the final score.
    pub weights: [f64; 3],
    /// Standard deviation of the Gaussian noise added to the final score.
    pub noise_std: f64,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            attendance_range: (60.0, 100.0),
            homework_range: (50.0, 100.0),
            test_score_range: (50.0, 100.0),
            weights: [0.4, 0.3, 0.3],
            noise_std: 5.0,
        }
    }
}

impl SyntheticConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Customize the noise standard deviation.
    pub fn with_noise_std(mut self, noise_std: f64) -> Self {
        self.noise_std = noise_std;
        self
    }

    /// Customize the feature weights of the final score.
    pub fn with_weights(mut self, weights: [f64; 3]) -> Self {
        self.weights = weights;
        self
    }

    fn validate(&self) -> Result<()> {
        for (name, (lo, hi)) in [
            ("attendance", self.attendance_range),
            ("homework", self.homework_range),
            ("test_score", self.test_score_range),
        ] {
            if !lo.is_finite() || !hi.is_finite() || lo >= hi {
                return Err(Error::InvalidConfig(format!(
                    "{name} range [{lo}, {hi}) is empty"
                )));
            }
            if !(hi - lo).is_finite() {
                return Err(Error::InvalidConfig(format!(
                    "{name} range [{lo}, {hi}) is too wide to sample"
                )));
            }
        }
        if !self.noise_std.is_finite() || self.noise_std < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "noise_std must be finite and >= 0, got {}",
                self.noise_std
            )));
        }
        Ok(())
    }
}

/// Draws `n` student records with 1-based sequential ids.
///
/// # Errors
///
/// [`Error::InvalidConfig`] if a range is empty or too wide to sample, or the noise deviation is
/// negative or not finite.
pub fn generate_students<R: Rng + ?Sized>(
    n: usize,
    config: &SyntheticConfig,
    rng: &mut R,
) -> Result<Vec<StudentRecord>> {
    config.validate()?;
    let noise = Normal::new(0.0, config.noise_std)
        .map_err(|e| Error::InvalidConfig(format!("noise distribution: {e}")))?;
    let [w_att, w_hw, w_test] = config.weights;

    let students = (0..n)
        .map(|i| {
            let attendance = rng.gen_range(config.attendance_range.0..config.attendance_range.1);
            let homework = rng.gen_range(config.homework_range.0..config.homework_range.1);
            let test_score = rng.gen_range(config.test_score_range.0..config.test_score_range.1);
            let final_score = (w_att * attendance
                + w_hw * homework
                + w_test * test_score
                + noise.sample(&mut *rng))
            .clamp(0.0, 100.0);

            StudentRecord {
                id: i + 1,
                attendance,
                homework,
                test_score,
                final_score,
            }
        })
        .collect();

    Ok(students)
}
