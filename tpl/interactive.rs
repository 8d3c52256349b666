//! Interactive rounds: every query must be flushed before reading the reply.
//! The judge answers `-1` on malformed input or a wrong answer and then
//! stops talking, so exit right away instead of waiting for more input.
//!
//! Sample problem: among `n` numbers (a power of 3) find the single heavy
//! one. Each query weighs two groups, written as `left # right`; the reply is
//! `l`, `r` or `b` (balanced).

use std::{
    io::{self, BufRead, Write},
    process,
};

struct Judge<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Judge<R, W> {
    fn read_line(&mut self) -> String {
        let mut line = String::new();
        self.input.read_line(&mut line).unwrap();
        let line = line.trim().to_string();
        if line == "-1" {
            process::exit(0);
        }
        line
    }

    fn send(&mut self, msg: &str) {
        writeln!(self.output, "{msg}").unwrap();
        self.output.flush().unwrap();
    }
}

fn solve<R: BufRead, W: Write>(judge: &mut Judge<R, W>, n: usize) -> usize {
    let (mut start, mut end) = (0, n);
    while end - start > 1 {
        let third = (end - start) / 3;
        let group = |from: usize| {
            (from..from + third)
                .map(|x| x.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };
        judge.send(&format!("{} # {}", group(start), group(start + third)));
        match judge.read_line().as_str() {
            "r" => start += third,
            "b" => start += 2 * third,
            _ => {}
        }
        end = start + third;
    }
    start
}

fn main() {
    let mut judge = Judge {
        input: io::stdin().lock(),
        output: io::stdout().lock(),
    };
    let t: usize = judge.read_line().parse().unwrap();
    for _ in 0..t {
        let line = judge.read_line();
        let n: usize = line.split_whitespace().next().unwrap().parse().unwrap();
        let heavy = solve(&mut judge, n);
        judge.send(&heavy.to_string());
        judge.read_line();
    }
}
