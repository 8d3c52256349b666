//! Pre-2018 rounds: the judge hands out an input file and expects an output
//! file back. Save the downloaded input next to this file, adjust `FILENAME`
//! and run the solution; answers land in `FILENAME.out`.

use std::{
    fs,
    io::{BufWriter, Write},
};

const FILENAME: &str = "tests";

fn solve(a: i64, b: i64) -> i64 {
    a + b
}

fn main() -> std::io::Result<()> {
    let input = fs::read_to_string(format!("{FILENAME}.in"))?;
    let mut lines = input.lines();
    let mut out = BufWriter::new(fs::File::create(format!("{FILENAME}.out"))?);

    let t: usize = lines.next().unwrap_or("0").trim().parse().unwrap();
    for case in 1..=t {
        let nums: Vec<i64> = lines
            .next()
            .unwrap_or_default()
            .split_whitespace()
            .map(|s| s.parse().unwrap())
            .collect();
        writeln!(out, "Case #{case}: {}", solve(nums[0], nums[1]))?;
    }
    Ok(())
}
