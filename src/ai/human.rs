use std::io::{self, BufRead, Cursor, Stdin, Stdout, Write};

use crate::error::AgentError;
use crate::game::{Coord, GameState};

use super::agent::Agent;

/// Where typed moves come from, one line at a time.
pub trait LineSource {
    /// Append one line to `buf`; 0 means end of input.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

// Stdin locks per line, so two console seats can share it.
impl LineSource for Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineSource for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Reads moves typed as `row col` from a line-based input.
pub struct HumanAgent<R, W> {
    input: R,
    output: W,
}

impl HumanAgent<Stdin, Stdout> {
    /// Console player on stdin/stdout
    pub fn stdio() -> Self {
        HumanAgent::new(io::stdin(), io::stdout())
    }
}

impl<R: LineSource, W: Write> HumanAgent<R, W> {
    pub fn new(input: R, output: W) -> Self {
        HumanAgent { input, output }
    }

    /// Why `line` is not a playable move, if it isn't
    fn parse(line: &str, state: &GameState) -> Result<Coord, String> {
        let mut fields = line.split_whitespace().map(str::parse::<usize>);
        let (Some(Ok(row)), Some(Ok(col)), None) =
            (fields.next(), fields.next(), fields.next())
        else {
            return Err("Invalid numbers, try again.".to_string());
        };
        if row >= state.rows() {
            return Err(format!("Row out of range [0,{}), try again.", state.rows()));
        }
        if col >= state.cols() {
            return Err(format!("Column out of range [0,{}), try again.", state.cols()));
        }
        let at = Coord::new(row, col);
        if !state.can_play_at(at) {
            return Err("Square already taken, try again.".to_string());
        }
        Ok(at)
    }
}

impl<R: LineSource, W: Write> Agent for HumanAgent<R, W> {
    fn choose_move(&mut self, state: &mut GameState) -> Result<Coord, AgentError> {
        loop {
            write!(self.output, "Where? (row col) ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(AgentError::InputAbandoned);
            }

            match Self::parse(&line, state) {
                Ok(at) => return Ok(at),
                Err(msg) => writeln!(self.output, "{msg}")?,
            }
        }
    }

    fn name(&self) -> &str {
        "Human"
    }
}
