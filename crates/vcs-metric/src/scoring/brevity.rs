/// `min(1, generated_len / reference_len)` over chunk counts. An empty
/// reference yields 0.
pub fn brevity_penalty(generated_len: usize, reference_len: usize) -> f64 {
    if reference_len == 0 {
        return 0.0;
    }
    (generated_len as f64 / reference_len as f64).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_lengths_have_no_penalty() {
        assert_eq!(brevity_penalty(9, 9), 1.0);
    }

    #[test]
    fn short_generation_is_penalised() {
        assert!((brevity_penalty(5, 9) - 0.556).abs() < 1e-3);
    }

    #[test]
    fn longer_generation_is_capped() {
        assert_eq!(brevity_penalty(12, 9), 1.0);
    }

    #[test]
    fn empty_reference_is_zero() {
        assert_eq!(brevity_penalty(3, 0), 0.0);
    }
}
