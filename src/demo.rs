use crate::stack::{Element, Stack};

use std::io::Write;

#[allow(unused_imports)]
use log::{debug, info, trace};

/// Number of values the binary pushes before draining.
pub const PUSH_COUNT: u32 = 10;

pub fn run(out: &mut impl Write) -> anyhow::Result<Stack> {
    run_with_count(PUSH_COUNT, out)
}

/// Pushes `0..count` then pops until empty, writing one `pop: <value>` line
/// per element. Returns the drained stack.
pub fn run_with_count(count: u32, out: &mut impl Write) -> anyhow::Result<Stack> {
    let mut stack = Stack::new();

    for i in 0..count {
        stack.push(Element::from(i));
    }

    debug!("pushed {} values", stack.len());

    while !stack.is_empty() {
        writeln!(out, "pop: {}", stack.pop()?)?;
    }

    info!("stack drained");

    Ok(stack)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_of(count: u32) -> (String, Stack) {
        let mut buf = Vec::new();
        let stack = run_with_count(count, &mut buf).unwrap();

        (String::from_utf8(buf).unwrap(), stack)
    }

    #[test]
    fn prints_nine_down_to_zero() {
        let mut buf = Vec::new();
        let stack = run(&mut buf).unwrap();

        let expected = "pop: 9\npop: 8\npop: 7\npop: 6\npop: 5\n\
                        pop: 4\npop: 3\npop: 2\npop: 1\npop: 0\n";

        assert_eq!(String::from_utf8(buf).unwrap(), expected);
        assert!(stack.is_empty());
    }

    #[test]
    fn zero_count_prints_nothing() {
        let (out, stack) = output_of(0);

        assert!(out.is_empty());
        assert!(stack.is_empty());
    }

    #[test]
    fn line_count_matches_push_count() {
        let (out, _) = output_of(3);

        assert_eq!(out.lines().collect::<Vec<_>>(), ["pop: 2", "pop: 1", "pop: 0"]);
    }
}
