//! Interactive move source reading from a line-based stream.

use std::io::{BufRead, Stdout, StdinLock, Write};

use crate::core::{Move, Shape};
use crate::error::SourceError;

use super::{MoveRequest, MoveSource};

/// Prompts a human for shape, x and y until a legal move is entered.
pub struct HumanSource<R, W> {
    name: String,
    input: R,
    output: W,
}

impl HumanSource<StdinLock<'static>, Stdout> {
    /// A human at the terminal.
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanSource<R, W> {
    /// Create a human source over any reader/writer pair.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Consume the source, returning its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, prompt: &str) -> Result<String, SourceError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SourceError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn show_request(&mut self, request: &MoveRequest<'_>) -> Result<(), SourceError> {
        let view = request.obligation;
        let must_move = match (view.responding, view.shape) {
            (true, Some(shape)) => format!("their {shape}"),
            _ => "any".to_string(),
        };
        writeln!(
            self.output,
            "It is {}'s move, who must move {must_move} piece next.",
            view.player
        )?;
        if let (false, Some(shape)) = (view.responding, view.shape) {
            writeln!(self.output, "(The {shape} moved last and cannot move again.)")?;
        }

        writeln!(self.output, "Valid moves are:")?;
        for mv in request.legal {
            writeln!(self.output, "  {} {} {}", mv.shape, mv.x, mv.y)?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> MoveSource for HumanSource<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, request: &MoveRequest<'_>) -> Result<Move, SourceError> {
        self.show_request(request)?;

        loop {
            writeln!(self.output, "Input your move request.")?;
            let shape = self.ask("shape (e.g. \"wave\"): ")?;
            let x = self.ask("x (e.g. 2): ")?;
            let y = self.ask("y (e.g. 1): ")?;

            let parsed = (shape.parse::<Shape>(), x.parse::<i8>(), y.parse::<i8>());
            let (shape, x, y) = match parsed {
                (Ok(shape), Ok(x), Ok(y)) => (shape, x, y),
                (Err(err), _, _) => {
                    writeln!(self.output, "ERROR: {err}")?;
                    continue;
                }
                _ => {
                    writeln!(self.output, "ERROR: x and y must be whole numbers")?;
                    continue;
                }
            };

            let mv = Move::new(request.player(), shape, x, y);
            writeln!(self.output, "Your move: {mv}")?;
            if request.legal.contains(&mv) {
                return Ok(mv);
            }
            writeln!(self.output, "This is not a valid move!")?;
        }
    }
}
