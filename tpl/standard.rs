//! Since 2018 solutions are submitted as source code and talk to the judge
//! over stdin/stdout.

use std::io::{self, BufRead, BufWriter, Write};

fn solve(a: i64, b: i64) -> i64 {
    a + b
}

fn main() {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines().map(|l| l.unwrap());
    let mut out = BufWriter::new(io::stdout().lock());

    let t: usize = lines.next().unwrap().trim().parse().unwrap();
    for case in 1..=t {
        let nums: Vec<i64> = lines
            .next()
            .unwrap()
            .split_whitespace()
            .map(|s| s.parse().unwrap())
            .collect();
        writeln!(out, "Case #{case}: {}", solve(nums[0], nums[1])).unwrap();
    }
}
