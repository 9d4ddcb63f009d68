//! Algebraic laws checked against a plain integer-set reference.
//!
//! Every operation is compared with the same operation applied to the
//! `BTreeSet<i64>` images of its operands, over randomly generated values
//! bounded by `MAX_VALUE`.

use super::*;
use crate::error::RangeError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

const MAX_VALUE: i64 = 25;
const ROUNDS: usize = 2_000;

type Reference = BTreeSet<i64>;

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Atomic range with both ends in `1..=max`, empty one time in ten.
fn random_atomic(rng: &mut StdRng, max: i64) -> AtomicRange {
    if rng.gen_bool(0.1) {
        return AtomicRange::empty();
    }
    AtomicRange::new(rng.gen_range(1..=max), rng.gen_range(1..=max)).unwrap()
}

/// Set built from a random sample of `1..=max`, possibly empty.
fn random_set(rng: &mut StdRng, max: i64) -> RangeSet {
    let amount = rng.gen_range(0..=max as usize);
    let values = rand::seq::index::sample(rng, max as usize, amount)
        .into_iter()
        .map(|index| index as i64 + 1);
    RangeSet::from_values(values).unwrap()
}

/// Either shape; sets are left unnormalized to exercise both dispatch paths.
fn random_range(rng: &mut StdRng, max: i64) -> Range {
    if rng.gen_bool(0.5) {
        Range::Atomic(random_atomic(rng, max))
    } else {
        Range::Set(random_set(rng, max))
    }
}

fn image(range: &impl RangeLike) -> Reference {
    range.to_set()
}

#[cfg(test)]
mod set_equivalence {
    use super::*;

    #[test]
    fn range_operations_match_reference() {
        let mut rng = rng(1);
        for _ in 0..ROUNDS {
            let a = random_range(&mut rng, MAX_VALUE);
            let b = random_range(&mut rng, MAX_VALUE);
            let (sa, sb) = (image(&a), image(&b));

            assert_eq!(image(&a.union(&b)), &sa | &sb, "{a} | {b}");
            assert_eq!(image(&a.intersection(&b)), &sa & &sb, "{a} & {b}");
            assert_eq!(image(&a.difference(&b)), &sa - &sb, "{a} - {b}");
            assert_eq!(image(&a.symmetric_difference(&b)), &sa ^ &sb, "{a} ^ {b}");
        }
    }

    #[test]
    fn atomic_operations_match_reference() {
        let mut rng = rng(2);
        for _ in 0..ROUNDS {
            let a = random_atomic(&mut rng, MAX_VALUE);
            let b = random_atomic(&mut rng, MAX_VALUE);
            let (sa, sb) = (image(&a), image(&b));

            assert_eq!(image(&(a | b)), &sa | &sb, "{a} | {b}");
            assert_eq!(image(&(a & b)), &sa & &sb, "{a} & {b}");
            assert_eq!(image(&(a - b)), &sa - &sb, "{a} - {b}");
            assert_eq!(image(&(a ^ b)), &sa ^ &sb, "{a} ^ {b}");
            assert_eq!(a.overlaps(&b), !(&sa & &sb).is_empty());
        }
    }

    #[test]
    fn set_operations_match_reference() {
        let mut rng = rng(3);
        for _ in 0..ROUNDS {
            let a = random_set(&mut rng, MAX_VALUE);
            let b = random_set(&mut rng, MAX_VALUE);
            let c = random_atomic(&mut rng, MAX_VALUE);
            let (sa, sb, sc) = (image(&a), image(&b), image(&c));

            assert_eq!(image(&(&a | &b)), &sa | &sb);
            assert_eq!(image(&(&a & &b)), &sa & &sb);
            assert_eq!(image(&(&a - &b)), &sa - &sb);
            assert_eq!(image(&(&a ^ &b)), &sa ^ &sb);
            assert_eq!(image(&(&c - &a)), &sc - &sa);
            assert_eq!(image(&(&a - &c)), &sa - &sc);
        }
    }

    #[test]
    fn results_stay_consolidated() {
        let mut rng = rng(4);
        for _ in 0..ROUNDS {
            let a = random_range(&mut rng, MAX_VALUE);
            let b = random_range(&mut rng, MAX_VALUE);
            for result in [
                a.union(&b),
                a.intersection(&b),
                a.difference(&b),
                a.symmetric_difference(&b),
                a.remove(&b),
                a.insert(&b).unwrap(),
            ] {
                assert!(assertions::is_consolidated(result.pieces()), "{result}");
            }
        }
    }
}

#[cfg(test)]
mod ordering_equivalence {
    use super::*;

    #[test]
    fn relations_match_reference() {
        let mut rng = rng(5);
        for _ in 0..ROUNDS {
            let a = random_range(&mut rng, MAX_VALUE);
            // Bias towards related pairs so subset checks are not vacuous.
            let b = if rng.gen_bool(0.3) {
                a.union(&random_atomic(&mut rng, MAX_VALUE))
            } else {
                random_range(&mut rng, MAX_VALUE)
            };
            let (sa, sb) = (image(&a), image(&b));

            assert_eq!(a == b, sa == sb, "{a} == {b}");
            assert_eq!(a != b, sa != sb, "{a} != {b}");
            assert_eq!(a <= b, sa.is_subset(&sb), "{a} <= {b}");
            assert_eq!(a >= b, sa.is_superset(&sb), "{a} >= {b}");
            assert_eq!(a < b, sa.is_subset(&sb) && sa != sb, "{a} < {b}");
            assert_eq!(a > b, sa.is_superset(&sb) && sa != sb, "{a} > {b}");
        }
    }

    #[test]
    fn atomic_relations_match_reference() {
        let mut rng = rng(6);
        for _ in 0..ROUNDS {
            let a = random_atomic(&mut rng, MAX_VALUE);
            let b = random_atomic(&mut rng, MAX_VALUE);
            let (sa, sb) = (image(&a), image(&b));

            assert_eq!(a == b, sa == sb);
            assert_eq!(a.is_subset(&b), sa.is_subset(&sb));
            assert_eq!(a.is_proper_superset(&b), sa.is_superset(&sb) && sa != sb);
            assert_eq!(a <= b, sa.is_subset(&sb));
        }
    }
}

#[cfg(test)]
mod structure {
    use super::*;

    #[test]
    fn consolidation_is_idempotent() {
        let mut rng = rng(7);
        for _ in 0..ROUNDS {
            let pieces: Vec<AtomicRange> = (0..rng.gen_range(0..6))
                .map(|_| random_atomic(&mut rng, MAX_VALUE))
                .collect();
            let expected: Reference = pieces.iter().flat_map(|p| p.iter()).collect();

            let set = RangeSet::from(pieces);
            assert!(assertions::is_consolidated(set.as_slice()));
            assert_eq!(image(&set), expected);

            let mut again = set.clone();
            again.consolidate();
            assert_eq!(again.as_slice(), set.as_slice());
        }
    }

    #[test]
    fn from_values_round_trips_through_values() {
        let mut rng = rng(8);
        for _ in 0..ROUNDS {
            let set = random_set(&mut rng, MAX_VALUE);
            assert_eq!(RangeSet::from_values(set.values()).unwrap(), set);
            assert_eq!(set.len(), set.to_vec().len() as u64);
        }
    }

    #[test]
    fn split_recombines() {
        let mut rng = rng(9);
        for _ in 0..ROUNDS {
            let a = random_range(&mut rng, MAX_VALUE);
            let n = rng.gen_range(-2..=MAX_VALUE + 2);
            let (left, right) = a.split(n);

            assert_eq!(left.union(&right), a, "split {a} at {n}");
            assert!(left.intersection(&right).is_empty());
            assert!(left.values().all(|v| v < n));
            assert!(right.values().all(|v| v >= n));
        }
    }

    #[test]
    fn overhangs_partition() {
        let mut rng = rng(10);
        for _ in 0..ROUNDS {
            let a = random_range(&mut rng, MAX_VALUE);
            let b = random_range(&mut rng, MAX_VALUE);
            let left = a.left_overhang(&b);
            let middle = a.intersection(&b.span());
            let right = a.right_overhang(&b);

            assert_eq!(left.union(&middle).union(&right), a, "{a} against {b}");
            assert!(left.intersection(&middle).is_empty());
            assert!(left.intersection(&right).is_empty());
            assert!(middle.intersection(&right).is_empty());

            let (first, last) = b.span().bounds().unwrap_or((i64::MAX, i64::MAX));
            let expected_left: Reference = image(&a).into_iter().filter(|&v| v < first).collect();
            let expected_right: Reference = image(&a).into_iter().filter(|&v| v > last).collect();
            assert_eq!(image(&left), expected_left);
            assert_eq!(image(&right), expected_right);
        }
    }

    #[test]
    fn overhangs_against_atomic_partition() {
        let mut rng = rng(11);
        for _ in 0..ROUNDS {
            let a = random_atomic(&mut rng, MAX_VALUE);
            let b = random_atomic(&mut rng, MAX_VALUE);
            let pieces = [a.left_overhang(&b), a.intersection(&b), a.right_overhang(&b)];
            let whole: RangeSet = pieces.iter().copied().collect();
            assert_eq!(whole, a);
            assert_eq!(
                pieces.iter().map(AtomicRange::len).sum::<u64>(),
                a.len(),
                "overhangs of {a} against {b} overlap"
            );
        }
    }
}

#[cfg(test)]
mod positional {
    use super::*;

    /// Reference model of excising the positions `cut` covers.
    fn remove_model(values: &Reference, cut: &AtomicRange) -> Reference {
        let (first, last) = cut.bounds().unwrap();
        let width = cut.len() as i64;
        values
            .iter()
            .filter_map(|&v| match v {
                v if v < first => Some(v),
                v if v > last => Some(v - width),
                _ => None,
            })
            .collect()
    }

    /// Reference model of opening a gap at `gap.start` and filling it.
    fn insert_model(values: &Reference, gap: &AtomicRange) -> Reference {
        let first = gap.start().unwrap();
        let width = gap.len() as i64;
        values
            .iter()
            .map(|&v| if v < first { v } else { v + width })
            .chain(gap.iter())
            .collect()
    }

    #[test]
    fn remove_atomic_matches_model() {
        let mut rng = rng(12);
        for _ in 0..ROUNDS {
            let a = random_range(&mut rng, MAX_VALUE);
            let cut = random_atomic(&mut rng, MAX_VALUE);
            if cut.is_empty() {
                assert_eq!(a.remove(&cut), a);
                continue;
            }
            assert_eq!(image(&a.remove(&cut)), remove_model(&image(&a), &cut), "{a} remove {cut}");
        }
    }

    #[test]
    fn insert_atomic_matches_model() {
        let mut rng = rng(13);
        for _ in 0..ROUNDS {
            let a = random_range(&mut rng, MAX_VALUE);
            let gap = random_atomic(&mut rng, MAX_VALUE);
            if gap.is_empty() {
                assert_eq!(a.insert(&gap).unwrap(), a);
                continue;
            }
            assert_eq!(image(&a.insert(&gap).unwrap()), insert_model(&image(&a), &gap), "{a} insert {gap}");
        }
    }

    #[test]
    fn remove_undoes_insert() {
        let mut rng = rng(14);
        for _ in 0..ROUNDS {
            let a = random_range(&mut rng, MAX_VALUE);
            let b = random_atomic(&mut rng, MAX_VALUE);
            assert_eq!(a.insert(&b).unwrap().remove(&b), a, "{a} with {b}");
        }
    }

    #[test]
    fn multi_piece_edits_apply_rightmost_first() {
        let mut rng = rng(15);
        for _ in 0..ROUNDS {
            let a = random_set(&mut rng, MAX_VALUE);
            let cuts = random_set(&mut rng, MAX_VALUE);
            let expected = cuts
                .iter()
                .rev()
                .fold(image(&a), |acc, cut| remove_model(&acc, cut));
            assert_eq!(image(&a.remove(&cuts)), expected, "{a} remove {cuts}");

            let expected = cuts
                .iter()
                .rev()
                .fold(image(&a), |acc, gap| insert_model(&acc, gap));
            assert_eq!(image(&a.insert(&cuts).unwrap()), expected, "{a} insert {cuts}");
        }
    }

    #[test]
    fn translate_matches_reference() {
        let mut rng = rng(16);
        for _ in 0..ROUNDS {
            let a = random_range(&mut rng, MAX_VALUE);
            let n = rng.gen_range(-5..=5);
            let shifted: Reference = image(&a).into_iter().map(|v| v + n).collect();
            match a.translate(n) {
                Ok(moved) => assert_eq!(image(&moved), shifted),
                Err(RangeError::InvalidValue(_)) => {
                    assert!(shifted.first().is_some_and(|&v| v < 1));
                }
                Err(other) => panic!("unexpected error {other}"),
            }
        }
    }
}

#[cfg(test)]
mod scenarios {
    use super::*;
    use crate::render::{render, RenderOptions};

    fn ar(start: i64, end: i64) -> AtomicRange {
        AtomicRange::new(start, end).unwrap()
    }

    #[test]
    fn overlapping_atomics() {
        let (a, b) = (ar(5, 15), ar(10, 20));
        assert_eq!(a & b, ar(10, 15));
        assert_eq!(a | b, ar(5, 20));
        assert_eq!(a - b, ar(5, 9));
    }

    #[test]
    fn disjoint_atomics() {
        let (a, b) = (ar(5, 15), ar(20, 25));
        let union = a | b;
        assert!(union.is_disjoint());
        assert_eq!(union.to_string(), "{5-15, 20-25}");
        assert_eq!(a - b, a);
    }

    #[test]
    fn strict_inner_difference() {
        let diff = ar(5, 15) - ar(8, 10);
        assert_eq!(diff.to_string(), "{5-7, 11-15}");
    }

    #[test]
    fn rendered_bar() {
        let set = RangeSet::from(vec![ar(1, 3), ar(7, 9)]);
        let options = RenderOptions::default()
            .with_start(1)
            .with_end(9)
            .with_chars('-', '█');
        assert_eq!(render(&set, &options).unwrap(), "███---███");
    }

    #[test]
    fn empty_collection_is_empty_range() {
        let set = RangeSet::from_values(Vec::new()).unwrap();
        assert!(set.is_empty());
        assert_eq!(set, AtomicRange::empty());
        assert_eq!(set.to_string(), "-");
    }

    #[test]
    fn remove_shifts_tail_down() {
        let set = RangeSet::from(ar(1, 10));
        let removed = set.remove(&ar(5, 7));
        assert_eq!(removed, ar(1, 7));
        assert_eq!(removed.len(), 7);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_support {
    use super::*;

    #[test]
    fn atomic_json_shape() {
        let range = AtomicRange::new(3, 7).unwrap();
        assert_eq!(serde_json::to_string(&range).unwrap(), r#"{"start":3,"end":7}"#);
        assert_eq!(
            serde_json::to_string(&AtomicRange::empty()).unwrap(),
            r#"{"start":null,"end":null}"#
        );
    }

    #[test]
    fn atomic_deserialization_validates() {
        let swapped: AtomicRange = serde_json::from_str(r#"{"start":9,"end":2}"#).unwrap();
        assert_eq!(swapped, AtomicRange::new(2, 9).unwrap());
        assert!(serde_json::from_str::<AtomicRange>(r#"{"start":0,"end":7}"#).is_err());
        assert!(serde_json::from_str::<AtomicRange>(r#"{"start":3,"end":null}"#).is_err());
    }

    #[test]
    fn set_consolidates_on_deserialization() {
        let json = r#"[{"start":5,"end":9},{"start":1,"end":4},{"start":20,"end":20}]"#;
        let set: RangeSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.to_string(), "{1-9, 20}");

        let back = serde_json::to_string(&set).unwrap();
        assert_eq!(back, r#"[{"start":1,"end":9},{"start":20,"end":20}]"#);
        let range: Range = serde_json::from_str(&back).unwrap();
        assert_eq!(range, set);
    }
}
