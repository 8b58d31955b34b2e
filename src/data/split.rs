use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};

/// Shuffles `records` and splits them into `(train, test)`.
///
/// The training part holds the first `floor(len * ratio)` shuffled records and keeps their
/// shuffled order, which later becomes the reference store's tie-break order.
///
/// # Errors
///
/// [`Error::InvalidSplitRatio`] if `ratio` is not within `[0, 1]`.
pub fn train_test_split<T, R: Rng + ?Sized>(
    mut records: Vec<T>,
    ratio: f64,
    rng: &mut R,
) -> Result<(Vec<T>, Vec<T>)> {
    if !(0.0..=1.0).contains(&ratio) {
        return Err(Error::InvalidSplitRatio(ratio));
    }

    let train_size = (records.len() as f64 * ratio) as usize;
    records.shuffle(rng);
    let test = records.split_off(train_size);
    Ok((records, test))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_split_sizes() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let (train, test) = train_test_split((0..200).collect::<Vec<_>>(), 0.8, &mut rng).unwrap();
        assert_eq!(train.len(), 160);
        assert_eq!(test.len(), 40);

        let (train, test) = train_test_split((0..7).collect::<Vec<_>>(), 0.5, &mut rng).unwrap();
        assert_eq!(train.len(), 3);
        assert_eq!(test.len(), 4);
    }

    #[test]
    fn test_split_partitions_input() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let (train, test) = train_test_split((0..50).collect::<Vec<_>>(), 0.6, &mut rng).unwrap();
        let mut all: Vec<i32> = train.into_iter().chain(test).collect();
        all.sort_unstable();
        assert_eq!(all, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_split_extremes() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let (train, test) = train_test_split(vec![1, 2, 3], 1.0, &mut rng).unwrap();
        assert_eq!((train.len(), test.len()), (3, 0));
        let (train, test) = train_test_split(vec![1, 2, 3], 0.0, &mut rng).unwrap();
        assert_eq!((train.len(), test.len()), (0, 3));
    }

    #[test]
    fn test_invalid_ratio() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        assert!(matches!(
            train_test_split(vec![1, 2, 3], 1.5, &mut rng),
            Err(Error::InvalidSplitRatio(r)) if r == 1.5
        ));
        assert!(train_test_split(vec![1], f64::NAN, &mut rng).is_err());
    }
}
