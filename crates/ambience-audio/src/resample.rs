//! Sample-rate reduction for the lower-rate output tier.

/// Downsamples by keeping every `factor`-th sample, starting at index 0.
///
/// No anti-alias filtering is applied. A factor of 0 or 1 returns the input
/// unchanged. The output has `ceil(len / factor)` samples.
pub fn downsample(samples: &[f64], factor: usize) -> Vec<f64> {
    if factor <= 1 {
        return samples.to_vec();
    }
    samples.iter().step_by(factor).copied().collect()
}

/// Integer decimation factor between two rates.
///
/// Returns 1 when `target_rate` is zero or not below `source_rate`.
pub fn decimation_factor(source_rate: u32, target_rate: u32) -> usize {
    if target_rate == 0 || target_rate >= source_rate {
        return 1;
    }
    (source_rate / target_rate) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downsample_by_two() {
        let input = vec![0.0, 0.1, 0.2, 0.3, 0.4];
        assert_eq!(downsample(&input, 2), vec![0.0, 0.2, 0.4]);
    }

    #[test]
    fn test_factor_one_and_zero_pass_through() {
        let input = vec![0.5, -0.5, 0.25];
        assert_eq!(downsample(&input, 1), input);
        assert_eq!(downsample(&input, 0), input);
    }

    #[test]
    fn test_empty_input() {
        assert!(downsample(&[], 2).is_empty());
    }

    #[test]
    fn test_catalog_lengths() {
        let master = vec![0.0; 352_800];
        assert_eq!(downsample(&master, 2).len(), 176_400);
    }

    #[test]
    fn test_decimation_factor() {
        assert_eq!(decimation_factor(44100, 22050), 2);
        assert_eq!(decimation_factor(44100, 11025), 4);
        assert_eq!(decimation_factor(44100, 44100), 1);
        assert_eq!(decimation_factor(22050, 44100), 1);
        assert_eq!(decimation_factor(44100, 0), 1);
    }
}
