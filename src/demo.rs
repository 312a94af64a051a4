//! Sorts a handful of sample arrays and reports each one before and after sorting.

use std::io::{self, Write};

use rand::{distributions::Uniform, rngs::StdRng, Rng, SeedableRng};

use crate::{
    constants::{DEMO_RANDOM_LEN, DEMO_REVERSE_LEN, DEMO_SEED, DEMO_VALUE_RANGE},
    sort,
};

/// Writes the demonstration to `out`, one blank line between cases.
pub fn run<W: Write>(out: &mut W) -> io::Result<()> {
    let mut example = vec![5, 2, 4, 6, 1, 3];
    write_array(out, "Original array", &example)?;
    sort(&mut example);
    write_array(out, "Sorted array", &example)?;

    let mut empty: Vec<i32> = Vec::new();
    writeln!(out, "\nSorting empty array...")?;
    sort(&mut empty);
    writeln!(out, "Result: {}", describe(&empty))?;

    let mut single = vec![10];
    writeln!(out, "\nSorting single element array...")?;
    sort(&mut single);
    writeln!(out, "Result: {}", describe(&single))?;

    let reverse = (1..=DEMO_REVERSE_LEN as i32).rev().collect();
    sort_and_report(out, "reverse-sorted", reverse)?;

    let mut rng = StdRng::seed_from_u64(DEMO_SEED);
    let range = Uniform::from(DEMO_VALUE_RANGE);
    let random = (0..DEMO_RANDOM_LEN).map(|_| rng.sample(&range)).collect();
    sort_and_report(out, "random", random)
}

fn sort_and_report<W: Write>(out: &mut W, name: &str, mut v: Vec<i32>) -> io::Result<()> {
    writeln!(out, "\nSorting {name} array...")?;
    write_array(out, "Original array", &v)?;
    sort(&mut v);
    write_array(out, "Sorted array", &v)
}

fn write_array<W: Write>(out: &mut W, label: &str, v: &[i32]) -> io::Result<()> {
    write!(out, "{label}: ")?;
    for x in v {
        write!(out, "{x} ")?;
    }
    writeln!(out)
}

fn describe(v: &[i32]) -> String {
    if v.is_empty() {
        "empty".to_string()
    } else {
        format!("{v:?}")
    }
}
