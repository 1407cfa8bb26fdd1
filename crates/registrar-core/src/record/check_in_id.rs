//! Random badge code generation.

use rand::Rng;

const LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generates a badge code: one uppercase letter followed by a number in
/// `1000..=9999`.
///
/// Used to pre-fill the form. Codes are not checked for uniqueness.
pub fn generate_check_in_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let letter = LETTERS[rng.gen_range(0..LETTERS.len())] as char;
    let number: u16 = rng.gen_range(1000..=9999);
    format!("{letter}{number}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::validator::is_valid_check_in_id;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generated_ids_match_pattern() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2_000 {
            let id = generate_check_in_id(&mut rng);
            assert!(is_valid_check_in_id(&id), "generated {id}");
        }
    }

    #[test]
    fn test_same_seed_same_ids() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(generate_check_in_id(&mut a), generate_check_in_id(&mut b));
    }

    #[test]
    fn test_numeric_part_never_starts_with_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..2_000 {
            let id = generate_check_in_id(&mut rng);
            let number: u16 = id[1..].parse().unwrap();
            assert!((1000..=9999).contains(&number));
        }
    }
}
