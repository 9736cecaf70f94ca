use num_bigint::BigInt;
use rand::Rng;
use serde_json::json;
use shamir_core::combinations::Combinations;
use shamir_core::error::ReconstructError;
use shamir_core::lagrange;
use shamir_core::points::parse_share_set;
use shamir_core::reconstruct::RobustReconstructor;
use shamir_core::share::Share;

fn eval_poly(coeffs: &[i64], x: i64) -> BigInt {
    let mut acc = BigInt::from(0);
    for &coeff in coeffs.iter().rev() {
        acc = acc * x + coeff;
    }
    acc
}

fn shares_from_poly(coeffs: &[i64], n: i64) -> Vec<Share> {
    (1..=n).map(|x| Share::new(x, eval_poly(coeffs, x))).collect()
}

#[test]
fn all_correct_shares_reconstruct_cleanly() {
    // P(x) = 5 + 2x, four shares, threshold three.
    let shares = shares_from_poly(&[5, 2], 4);
    let result = RobustReconstructor::new(3)
        .unwrap()
        .reconstruct(&shares)
        .unwrap();

    assert_eq!(result.secret, BigInt::from(5));
    assert_eq!(result.inlier_count, 4);
    assert!(result.wrong_positions.is_empty());
}

#[test]
fn one_corrupted_share_is_identified() {
    let mut shares = shares_from_poly(&[5, 2], 4);
    shares[2].y = BigInt::from(999);
    let result = RobustReconstructor::new(3)
        .unwrap()
        .reconstruct(&shares)
        .unwrap();

    assert_eq!(result.secret, BigInt::from(5));
    assert_eq!(result.inlier_count, 3);
    assert_eq!(result.wrong_positions, vec![2]);
    assert_eq!(result.wrong_share_indices(&shares), vec![3]);
}

#[test]
fn insufficient_shares_are_a_fatal_error() {
    let shares = shares_from_poly(&[5, 2], 2);
    let outcome = RobustReconstructor::new(3).unwrap().reconstruct(&shares);
    assert_eq!(
        outcome.unwrap_err(),
        ReconstructError::InsufficientShares {
            required: 3,
            provided: 2,
        }
    );
}

#[test]
fn fractional_only_share_sets_are_a_fatal_error() {
    // The only 3-subset interpolates to P(0) = 1/3.
    let shares = vec![
        Share::new(1, BigInt::from(1)),
        Share::new(2, BigInt::from(2)),
        Share::new(4, BigInt::from(5)),
    ];
    let outcome = RobustReconstructor::new(3).unwrap().reconstruct(&shares);
    assert_eq!(
        outcome.unwrap_err(),
        ReconstructError::NoConsistentReconstruction
    );
}

#[test]
fn reconstruction_is_deterministic() {
    let mut shares = shares_from_poly(&[11, -4, 9], 7);
    shares[1].y = BigInt::from(-55);
    shares[5].y = BigInt::from(1_000_000);

    let reconstructor = RobustReconstructor::new(3).unwrap();
    let first = reconstructor.reconstruct(&shares).unwrap();
    let second = reconstructor.reconstruct(&shares).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.wrong_positions, vec![1, 5]);
    assert_eq!(first.secret, BigInt::from(11));
}

#[test]
fn no_valid_subset_outscores_the_winner() {
    let mut shares = shares_from_poly(&[5, 2], 5);
    shares[2].y = BigInt::from(999);
    let k = 3;
    let result = RobustReconstructor::new(k)
        .unwrap()
        .reconstruct(&shares)
        .unwrap();

    for subset in Combinations::new(shares.len(), k) {
        let xs: Vec<i64> = subset.iter().map(|&p| shares[p].x).collect();
        let ys: Vec<BigInt> =
            subset.iter().map(|&p| shares[p].y.clone()).collect();
        let Ok(at_zero) = lagrange::interpolate_at_zero(&xs, &ys) else {
            continue;
        };
        if !at_zero.is_integer() {
            continue;
        }
        let score = shares
            .iter()
            .filter(|share| {
                match lagrange::interpolate_at(&xs, &ys, share.x) {
                    Ok(value) => {
                        value.is_integer() && value.numer() == &share.y
                    }
                    Err(_) => false,
                }
            })
            .count();
        assert!(score <= result.inlier_count);
    }
}

#[test]
fn share_documents_reconstruct_end_to_end() {
    // P(x) = 5 + 2x with one tampered share and mixed-base values.
    let document = r#"{
        "keys": { "n": 4, "k": 3 },
        "1": { "base": "10", "value": "7" },
        "2": { "base": "2", "value": "1001" },
        "3": { "base": "16", "value": "3e7" },
        "4": { "base": "10", "value": "13" }
    }"#;

    let set = parse_share_set(document).unwrap();
    assert_eq!(set.shares.len(), 4);

    let result = RobustReconstructor::new(set.k)
        .unwrap()
        .reconstruct(&set.shares)
        .unwrap();
    assert_eq!(result.secret, BigInt::from(5));
    assert_eq!(result.wrong_share_indices(&set.shares), vec![3]);
}

#[test]
fn base36_literals_with_large_secrets_reconstruct() {
    // Quadratic with a secret far beyond any fixed-width integer.
    let secret = BigInt::parse_bytes(
        b"987654321098765432109876543210987654321",
        10,
    )
    .unwrap();
    let coeffs =
        [secret.clone(), BigInt::from(12345), BigInt::from(67890)];
    let eval = |x: i64| -> BigInt {
        let x = BigInt::from(x);
        &coeffs[0] + &coeffs[1] * &x + &coeffs[2] * &x * &x
    };

    let mut entries = serde_json::Map::new();
    entries.insert("keys".into(), json!({ "n": 5, "k": 3 }));
    for x in 1..=5i64 {
        let y = if x == 2 { eval(x) + 1 } else { eval(x) };
        entries.insert(
            x.to_string(),
            json!({ "base": 36, "value": y.to_str_radix(36) }),
        );
    }
    let document = serde_json::Value::Object(entries).to_string();

    let set = parse_share_set(&document).unwrap();
    let result = RobustReconstructor::new(set.k)
        .unwrap()
        .reconstruct(&set.shares)
        .unwrap();

    assert_eq!(result.secret, secret);
    assert_eq!(result.inlier_count, 4);
    assert_eq!(result.wrong_share_indices(&set.shares), vec![2]);
}

#[test]
fn random_single_corruptions_are_always_outvoted() {
    let mut rng = rand::rng();
    for _ in 0..10 {
        let coeffs: Vec<i64> =
            (0..3).map(|_| rng.random_range(-1000..1000)).collect();
        let mut shares = shares_from_poly(&coeffs, 6);

        let victim = rng.random_range(0..shares.len());
        shares[victim].y += BigInt::from(rng.random_range(1..1000));

        let result = RobustReconstructor::new(3)
            .unwrap()
            .reconstruct(&shares)
            .unwrap();

        assert_eq!(result.secret, BigInt::from(coeffs[0]));
        assert_eq!(result.inlier_count, shares.len() - 1);
        assert_eq!(result.wrong_positions, vec![victim]);
    }
}
