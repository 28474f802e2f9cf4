//! Camel cards: rank five-card hands and total up the bids

use aoc_parser::{expect_end, parse_integer, parse_whitespace, take};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::cmp::Ordering;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 7, tags = ["parser", "camel-cards"])]
pub struct Solver;

/// Card labels from weakest to strongest under the standard rules
const LABELS: &[u8] = b"23456789TJQKA";
const JACK: u8 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

impl HandType {
    /// Classify from group sizes, with `wildcards` joining the largest group
    fn from_groups(mut groups: Vec<u8>, wildcards: u8) -> Self {
        groups.sort_unstable_by(|a, b| b.cmp(a));
        match groups.first_mut() {
            Some(largest) => *largest += wildcards,
            None => groups.push(wildcards),
        }

        match groups.as_slice() {
            [5, ..] => HandType::FiveOfAKind,
            [4, ..] => HandType::FourOfAKind,
            [3, 2, ..] => HandType::FullHouse,
            [3, ..] => HandType::ThreeOfAKind,
            [2, 2, ..] => HandType::TwoPair,
            [2, ..] => HandType::OnePair,
            _ => HandType::HighCard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rules {
    Standard,
    /// `J` is a joker: it counts as any card but ranks below `2`
    Wildcard,
}

impl Rules {
    fn rank(self, label: u8) -> u8 {
        match self {
            Rules::Standard => label,
            Rules::Wildcard => match label.cmp(&JACK) {
                Ordering::Less => label + 1,
                Ordering::Equal => 0,
                Ordering::Greater => label,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    /// Indices into `23456789TJQKA`
    pub labels: [u8; 5],
    pub bid: u64,
}

impl Hand {
    pub fn hand_type(&self, rules: Rules) -> HandType {
        let mut counts = [0u8; LABELS.len()];
        for &label in &self.labels {
            counts[usize::from(label)] += 1;
        }

        let wildcards = match rules {
            Rules::Standard => 0,
            Rules::Wildcard => std::mem::take(&mut counts[usize::from(JACK)]),
        };
        let groups = counts.into_iter().filter(|&n| n > 0).collect();

        HandType::from_groups(groups, wildcards)
    }

    fn strength(&self, rules: Rules) -> (HandType, [u8; 5]) {
        (self.hand_type(rules), self.labels.map(|label| rules.rank(label)))
    }
}

fn parse_hand(number: usize, line: &str) -> Result<Hand, ParseError> {
    let at_line = |e: aoc_parser::ParseError| e.at_line(number);

    let (cards, cursor) = take(line, 0, 5).map_err(at_line)?;
    let cursor = parse_whitespace(line, cursor);
    let (bid, cursor) = parse_integer(line, cursor).map_err(at_line)?;
    expect_end(line, cursor).map_err(at_line)?;

    let mut labels = [0u8; 5];
    for (slot, card) in labels.iter_mut().zip(cards.bytes()) {
        let label = LABELS.iter().position(|&l| l == card).ok_or_else(|| {
            ParseError::InvalidFormat(format!("line {number}: unknown card in hand {cards:?}"))
        })?;
        *slot = label as u8;
    }

    Ok(Hand { labels, bid })
}

/// Sum of each bid times its rank, weakest hand ranked 1
pub fn total_winnings(hands: &[Hand], rules: Rules) -> u64 {
    let mut ranked: Vec<_> = hands.iter().map(|h| (h.strength(rules), h.bid)).collect();
    ranked.sort_unstable();

    ranked
        .iter()
        .zip(1..)
        .map(|((_, bid), rank)| bid * rank)
        .sum()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Hand>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        aoc_parser::lines(input)
            .filter(|(_, line)| !line.is_empty())
            .map(|(number, line)| parse_hand(number, line))
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_winnings(shared, Rules::Standard).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_winnings(shared, Rules::Wildcard).to_string())
    }
}
