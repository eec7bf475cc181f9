use std::collections::HashMap;
use std::time::Instant;

use anyhow::Result;
use lib::cli::{self, Report};
use lib::prelude::*;

fn main() -> Result<()> {
    let opts = cli::Opts::parse()?;
    let (input, path) = lib::input!("d01.txt");

    let start = Instant::now();

    let (part1, part2) = match solve(input) {
        Ok(output) => output,
        Err(error) => return Err(cli::error_context(path, input, error)),
    };

    Report::new(part1, part2, start.elapsed()).print(&opts)?;
    Ok(())
}

fn solve(mut input: Input<'_>) -> Result<(u64, i64)> {
    let mut left = ArrayVec::<i64, 1024>::new();
    let mut right = ArrayVec::<i64, 1024>::new();

    for pair in input.lines::<(i64, i64)>() {
        let (l, r) = pair?;
        left.try_push(l)?;
        right.try_push(r)?;
    }

    log::debug!("parsed {} pairs", left.len());

    let part1 = distance(&mut left, &mut right);
    let part2 = similarity(&left, &right);
    Ok((part1, part2))
}

/// Total distance: pair up both columns in sorted order and sum the absolute
/// differences.
fn distance(left: &mut [i64], right: &mut [i64]) -> u64 {
    left.sort_unstable();
    right.sort_unstable();

    left.iter()
        .zip(right.iter())
        .map(|(l, r)| l.abs_diff(*r))
        .sum()
}

/// Similarity score: each value in the left column times the number of times
/// it appears in the right column.
fn similarity(left: &[i64], right: &[i64]) -> i64 {
    let mut frequency = HashMap::new();

    for r in right {
        *frequency.entry(*r).or_insert(0i64) += 1;
    }

    left.iter()
        .map(|l| l * frequency.get(l).copied().unwrap_or_default())
        .sum()
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    use super::{distance, similarity, solve};

    const SAMPLE: &[u8] = b"3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n";

    #[test]
    fn sample_answers() -> Result<()> {
        let (part1, part2) = solve(Input::new(SAMPLE, 0))?;
        assert_eq!(part1, 11);
        assert_eq!(part2, 31);
        Ok(())
    }

    #[test]
    fn distance_is_symmetric() {
        let mut a = [3, 4, 2, 1, 3, 3];
        let mut b = [4, 3, 5, 3, 9, 3];
        let mut c = a;
        let mut d = b;
        assert_eq!(distance(&mut a, &mut b), distance(&mut d, &mut c));
    }

    #[test]
    fn disjoint_columns_have_zero_similarity() {
        assert_eq!(similarity(&[1, 2, 3], &[4, 5, 6]), 0);
    }

    #[test]
    fn insensitive_to_pair_order() -> Result<()> {
        let forward = solve(Input::new(SAMPLE, 0))?;
        let reversed = solve(Input::new(b"3   3\n3   9\n1   3\n2   5\n4   3\n3   4\n", 0))?;
        assert_eq!(forward, reversed);
        Ok(())
    }

    #[test]
    fn negative_columns() -> Result<()> {
        let (part1, part2) = solve(Input::new(b"-2   -5\n-5   -2\n", 0))?;
        assert_eq!(part1, 0);
        assert_eq!(part2, -7);
        Ok(())
    }

    #[test]
    fn over_capacity_is_an_error() {
        let mut text = String::new();

        for n in 0..1025 {
            text.push_str(&format!("{n}   {n}\n"));
        }

        assert!(solve(Input::new(text.as_bytes(), 0)).is_err());
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert!(solve(Input::new(b"3   x\n", 0)).is_err());
        assert!(solve(Input::new(b"3\n", 0)).is_err());
        assert!(solve(Input::new(b"3   4   5\n", 0)).is_err());
    }
}
