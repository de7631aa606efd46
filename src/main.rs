use itertools::Itertools;

use crate::sequence::build_sequence;

mod sequence;

fn main() {
    let input = std::io::read_to_string(std::io::stdin()).unwrap();
    let mut tokens = input
        .split_ascii_whitespace()
        .map(|token| token.parse::<usize>().unwrap());
    let t = tokens.next().unwrap();
    for _ in 0..t {
        let n = tokens.next().unwrap();
        let m = tokens.next().unwrap();
        let _k = tokens.next().unwrap();
        let sequence = build_sequence(n, m);
        println!("{}", sequence.iter().join(" "));
    }
}
