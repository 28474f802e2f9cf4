//! Scratchcards: `Card <id>: <winning numbers> | <numbers you have>`

use anyhow::anyhow;
use aoc_parser::{expect, parse_integer, parse_whitespace, peek};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::{HashMap, HashSet};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 4, tags = ["parser", "scratchcards"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: u32,
    pub winners: HashSet<u32>,
    pub selections: HashSet<u32>,
}

/// Which part of a card line the cursor is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CardSection {
    Header,
    Winners,
    Selections,
}

pub fn parse_card(line: &str) -> Result<Card, aoc_parser::ParseError> {
    let mut cursor = 0;
    let mut section = CardSection::Header;

    let mut id = 0;
    let mut winners = HashSet::new();
    let mut selections = HashSet::new();

    while cursor < line.len() {
        match section {
            CardSection::Header => {
                cursor = expect(line, cursor, "Card")?;
                cursor = parse_whitespace(line, cursor);
                (id, cursor) = parse_integer(line, cursor)?;
                cursor = expect(line, cursor, ":")?;
                cursor = parse_whitespace(line, cursor);
                section = CardSection::Winners;
            }
            CardSection::Winners => {
                if peek(line, cursor) == Some('|') {
                    cursor = parse_whitespace(line, cursor + 1);
                    section = CardSection::Selections;
                    continue;
                }
                let (winner, next) = parse_integer(line, cursor)?;
                winners.insert(winner);
                cursor = parse_whitespace(line, next);
            }
            CardSection::Selections => {
                let (selection, next) = parse_integer(line, cursor)?;
                selections.insert(selection);
                cursor = parse_whitespace(line, next);
            }
        }
    }

    // A card must reach the separator; this reports the missing `|`
    if section != CardSection::Selections {
        expect(line, cursor, "|")?;
    }

    Ok(Card {
        id,
        winners,
        selections,
    })
}

impl Card {
    pub fn matches(&self) -> usize {
        self.selections.intersection(&self.winners).count()
    }

    /// `None` once the doubled score no longer fits in a `u64`
    pub fn points(&self) -> Option<u64> {
        match self.matches() {
            0 => Some(0),
            n => 1u64.checked_shl(u32::try_from(n - 1).ok()?),
        }
    }
}

/// Total number of cards once every win has handed out its copies
pub fn count_cards(cards: &[Card]) -> u64 {
    let mut copies: HashMap<u32, u64> = HashMap::new();

    for card in cards {
        let held = copies.get(&card.id).copied().unwrap_or(0);
        for offset in 1..=card.matches() as u32 {
            *copies.entry(card.id + offset).or_default() += 1 + held;
        }
    }

    cards.len() as u64 + copies.values().sum::<u64>()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Card>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(aoc_parser::parse_lines(input, parse_card)?)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .try_fold(0u64, |total, card| {
                card.points().and_then(|points| total.checked_add(points))
            })
            .map(|total| total.to_string())
            .ok_or_else(|| SolveError::SolveFailed(anyhow!("card points overflow u64").into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_cards(shared).to_string())
    }
}
