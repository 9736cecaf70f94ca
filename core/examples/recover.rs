use shamir_core::points::parse_share_set;
use shamir_core::reconstruct::RobustReconstructor;

// Shares of P(x) = 5 + 2x at x = 1..=4, with share 3 tampered and the
// values spelled in mixed bases.
const DOCUMENT: &str = r#"{
    "keys": { "n": 4, "k": 3 },
    "1": { "base": "10", "value": "7" },
    "2": { "base": "16", "value": "9" },
    "3": { "base": "10", "value": "999" },
    "4": { "base": "2", "value": "1101" }
}"#;

fn main() {
    let share_set = parse_share_set(DOCUMENT).expect("document should parse");
    let reconstructor = RobustReconstructor::new(share_set.k)
        .expect("declared threshold should be valid");
    let result = reconstructor
        .reconstruct(&share_set.shares)
        .expect("a consistent subset should exist");

    println!("secret={}", result.secret);
    let wrong = result
        .wrong_share_indices(&share_set.shares)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    println!("wrong_share_indices=[{wrong}]");
    println!(
        "{} of {} supplied shares lie on the reconstructed polynomial",
        result.inlier_count,
        share_set.shares.len()
    );
}
