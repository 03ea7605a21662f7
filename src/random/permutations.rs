//! Uniform random permutations of `1..=N`.

use crate::error::{AlgoError, Result};
use rand::Rng;

/// Uniform integer in `[inf, sup]`.
pub fn random_num<R: Rng + ?Sized>(inf: usize, sup: usize, rng: &mut R) -> usize {
    debug_assert!(sup >= inf);
    rng.random_range(inf..=sup)
}

/// Random permutation of `1..=n` built with a Fisher-Yates shuffle.
///
/// Starts from the identity and, for each position `i`, swaps it with a
/// uniformly chosen position in `[i, n-1]`.
pub fn generate_perm<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Vec<i32>> {
    if n == 0 {
        return Err(AlgoError::GenerationFailed(
            "permutation size must be positive".to_string(),
        ));
    }
    let top = i32::try_from(n).map_err(|_| {
        AlgoError::GenerationFailed(format!("permutation size {} does not fit in i32", n))
    })?;

    let mut perm: Vec<i32> = Vec::new();
    perm.try_reserve_exact(n)?;
    perm.extend(1..=top);

    for i in 0..n {
        let j = random_num(i, n - 1, rng);
        perm.swap(i, j);
    }
    Ok(perm)
}

/// `n_perms` independent permutations of size `n`.
pub fn generate_permutations<R: Rng + ?Sized>(
    n_perms: usize,
    n: usize,
    rng: &mut R,
) -> Result<Vec<Vec<i32>>> {
    let mut perms = Vec::new();
    perms.try_reserve_exact(n_perms)?;
    for _ in 0..n_perms {
        perms.push(generate_perm(n, rng)?);
    }
    Ok(perms)
}
