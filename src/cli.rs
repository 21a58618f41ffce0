#![cfg(feature = "std")]

//! Terminal collaborators: reading a human's targets and printing the match.

use std::io::{self, BufRead, Write};

use anyhow::bail;

use crate::{
    board::Board,
    common::{ShotError, ShotOutcome},
    coord::Coordinate,
    game::{Match, MatchObserver, Side, TurnReport},
};

/// Status line shown after a resolved shot.
pub fn outcome_message(outcome: ShotOutcome) -> &'static str {
    match outcome {
        ShotOutcome::Missed => "Missed!",
        ShotOutcome::Wounded { .. } => "Ship wounded!",
        ShotOutcome::Destroyed => "Ship destroyed!",
    }
}

/// Message shown to a human whose target was rejected.
pub fn rejection_message(error: &ShotError) -> &'static str {
    match error {
        ShotError::OutOfRange(_) => "You are trying to shoot off the board!",
        ShotError::AlreadyTargeted(_) => "You have already shot at this cell",
    }
}

/// Parse a `"row col"` line into a 1-indexed pair.
pub fn parse_target(line: &str) -> Result<(i64, i64), &'static str> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = parts.as_slice() else {
        return Err("Enter 2 coordinates!");
    };
    match (row.parse::<u32>(), col.parse::<u32>()) {
        (Ok(r), Ok(c)) => Ok((r as i64, c as i64)),
        _ => Err("Enter numbers!"),
    }
}

/// Join two renders line by line.
pub fn side_by_side(left: &[String], right: &[String]) -> Vec<String> {
    let width = left.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let rows = left.len().max(right.len());
    (0..rows)
        .map(|i| {
            let l = left.get(i).map(String::as_str).unwrap_or("");
            let r = right.get(i).map(String::as_str).unwrap_or("");
            let pad = width - l.chars().count();
            format!("{}{}          {}", l, " ".repeat(pad), r)
        })
        .collect()
}

/// Reads targets from a line-oriented input and reports back on an output.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}

impl<R: BufRead, W: Write> crate::player::TargetSource for Console<R, W> {
    fn read_target(&mut self) -> anyhow::Result<(i64, i64)> {
        loop {
            write!(self.output, "Your move: ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("input closed");
            }
            match parse_target(&line) {
                Ok(target) => return Ok(target),
                Err(msg) => writeln!(self.output, " {} ", msg)?,
            }
        }
    }

    fn report_rejected(&mut self, target: Coordinate, error: &ShotError) {
        if let Err(e) = writeln!(self.output, "{}", rejection_message(error)) {
            log::warn!("could not report rejected target {:?}: {}", target, e);
        }
    }
}

/// Prints both boards and the result of every shot to stdout.
#[derive(Debug, Default)]
pub struct ConsoleObserver;

impl ConsoleObserver {
    fn print_boards(&self, game: &Match) {
        let human = game.board(Side::Human).render(false);
        let computer = game.board(Side::Computer).render(false);
        println!("{}", "-".repeat(66));
        for line in side_by_side(&titled("User board:", human), &titled("Computer board:", computer)) {
            println!("{}", line);
        }
        println!("{}", "-".repeat(66));
    }
}

fn titled(title: &str, mut rows: Vec<String>) -> Vec<String> {
    rows.insert(0, title.to_string());
    rows
}

impl MatchObserver for ConsoleObserver {
    fn turn_started(&mut self, game: &Match, side: Side) {
        self.print_boards(game);
        match side {
            Side::Human => println!("User's move!"),
            Side::Computer => println!("Computer's move!"),
        }
    }

    fn shot_resolved(&mut self, _game: &Match, report: &TurnReport) {
        if report.side == Side::Computer {
            println!("Computer move: {}", report.target);
        }
        println!("{}", outcome_message(report.outcome));
    }

    fn finished(&mut self, game: &Match, winner: Side) {
        self.print_boards(game);
        match winner {
            Side::Human => println!("You won!"),
            Side::Computer => println!("Computer won!"),
        }
    }
}

/// Banner printed once before the first move.
pub fn greet(board: &Board) {
    println!("------------------------------------------------------------------");
    println!("                  Welcome to Sea Battle!");
    println!("------------------------------------------------------------------");
    println!("     Input format: row col (1 to {})", board.size());
}
