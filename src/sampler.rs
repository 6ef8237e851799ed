use rand::Rng;

/// One Poisson draw via Knuth's multiplication method.
///
/// Multiplies uniform(0,1) draws into a running product until it falls to
/// exp(-lambda); the number of draws needed, minus one, is the sample.
/// Requires `lambda > 0` (the rate floor guarantees this). The returned
/// count is unbounded above, but values far beyond lambda are exponentially
/// improbable.
pub fn poisson_draw<R: Rng>(rng: &mut R, lambda: f64) -> u32 {
    let limit = (-lambda).exp();
    let mut k = 0u32;
    let mut p = 1.0_f64;
    loop {
        p *= rng.gen_range(0.0..1.0);
        if p <= limit {
            return k;
        }
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn same_seed_yields_same_draws() {
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(poisson_draw(&mut a, 1.35), poisson_draw(&mut b, 1.35));
        }
    }

    #[test]
    fn sample_mean_tracks_lambda() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let n = 20_000;
        for lambda in [0.5, 1.35, 2.7] {
            let sum: u64 = (0..n).map(|_| poisson_draw(&mut rng, lambda) as u64).sum();
            let mean = sum as f64 / n as f64;
            // Standard error is sqrt(lambda / n) < 0.012 here; 0.06 is 5 sigma.
            assert!(
                (mean - lambda).abs() < 0.06,
                "mean {mean} drifted from lambda {lambda}"
            );
        }
    }

    #[test]
    fn floored_rate_is_mostly_goalless() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let n = 10_000usize;
        let zeros = (0..n).filter(|_| poisson_draw(&mut rng, 0.1) == 0).count();
        // exp(-0.1) ~ 0.905 of draws should be zero.
        assert!(zeros as f64 / n as f64 > 0.88);
        assert!(zeros < n, "a floored rate must still score occasionally");
    }
}
