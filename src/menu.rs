//! Interactive text calculator: choose a function from a menu, enter an angle in radians, get the result.
//! Reads lines from any `BufRead` and writes to any `Write`, so it runs on stdin/stdout as well as in tests.
use crate::trig::trig_functions::{TrigFunction, TrigResult};
use log::{info, warn};
use std::io::{self, BufRead, Write};
use strum::{EnumCount, IntoEnumIterator};
use tabled::{builder::Builder, settings::Style};
use thiserror::Error;

/// index of the "Exit" entry, right after the six functions
pub const EXIT_OPTION: usize = TrigFunction::COUNT;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("input ended")]
    EndOfInput,
}

/// rejected user input; the message is shown and the question is asked again
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("Invalid input. You must input an integer from 0-{max}.")]
    NotAnInteger { max: usize },
    #[error("Invalid input. You must input an integer from 0-{max}.")]
    OutOfRange { max: usize },
    #[error("Invalid input. You must input a numerical value.")]
    NotANumber,
    #[error("Invalid input. The angle must be a finite number.")]
    NotFinite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Function(TrigFunction),
    Exit,
}

/// one computed value, kept for the summary printed at exit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub function: TrigFunction,
    pub angle: f64,
    pub result: TrigResult,
}

impl Evaluation {
    pub fn new(function: TrigFunction, angle: f64) -> Evaluation {
        Evaluation {
            function,
            angle,
            result: function.evaluate(angle),
        }
    }

    /// "<abbrev>(<angle>) = <result>"
    pub fn format(&self, precision: Option<usize>) -> String {
        let result = match precision {
            Some(p) => format!("{:.*}", p, self.result),
            None => format!("{}", self.result),
        };
        format!("{}({}) = {}", self.function.abbrev(), self.angle, result)
    }
}

/// menu entries in display order: the six functions, then Exit
pub fn menu_options() -> Vec<String> {
    TrigFunction::iter()
        .map(|f| f.to_string())
        .chain(std::iter::once("Exit".to_string()))
        .collect()
}

pub fn parse_selection(line: &str) -> Result<Choice, InputError> {
    let selection: i64 = line
        .trim()
        .parse()
        .map_err(|_| InputError::NotAnInteger { max: EXIT_OPTION })?;
    if selection < 0 || selection as usize > EXIT_OPTION {
        return Err(InputError::OutOfRange { max: EXIT_OPTION });
    }
    let index = selection as usize;
    if index == EXIT_OPTION {
        return Ok(Choice::Exit);
    }
    TrigFunction::iter()
        .nth(index)
        .map(Choice::Function)
        .ok_or(InputError::OutOfRange { max: EXIT_OPTION })
}

pub fn parse_angle(line: &str) -> Result<f64, InputError> {
    let angle: f64 = line.trim().parse().map_err(|_| InputError::NotANumber)?;
    if !angle.is_finite() {
        return Err(InputError::NotFinite);
    }
    Ok(angle)
}

pub struct Menu<R: BufRead, W: Write> {
    input: R,
    output: W,
    precision: Option<usize>,
    history: Vec<Evaluation>,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, precision: Option<usize>) -> Menu<R, W> {
        Menu {
            input,
            output,
            precision,
            history: Vec::new(),
        }
    }

    pub fn history(&self) -> &[Evaluation] {
        &self.history
    }

    fn read_line(&mut self) -> Result<String, MenuError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(MenuError::EndOfInput);
        }
        Ok(line)
    }

    fn select_trig_function(&mut self) -> Result<Choice, MenuError> {
        let options = menu_options();
        loop {
            writeln!(self.output, "Which would you like to approximate?")?;
            for (i, option) in options.iter().enumerate() {
                writeln!(self.output, "[{}]: {}", i, option)?;
            }
            self.output.flush()?;
            let line = self.read_line()?;
            match parse_selection(&line) {
                Ok(choice) => return Ok(choice),
                Err(e) => {
                    warn!("rejected menu selection {:?}", line.trim());
                    writeln!(self.output, "{}\n", e)?;
                }
            }
        }
    }

    fn get_angle_from_user(&mut self, function: TrigFunction) -> Result<f64, MenuError> {
        loop {
            writeln!(
                self.output,
                "What angle would you like to get the {} of?",
                function.to_string().to_lowercase()
            )?;
            self.output.flush()?;
            let line = self.read_line()?;
            match parse_angle(&line) {
                Ok(angle) => return Ok(angle),
                Err(e) => {
                    warn!("rejected angle {:?}", line.trim());
                    writeln!(self.output, "{}", e)?;
                }
            }
        }
    }

    /// one round: selection, angle, result. Returns false once Exit is chosen
    fn step(&mut self) -> Result<bool, MenuError> {
        let function = match self.select_trig_function()? {
            Choice::Exit => return Ok(false),
            Choice::Function(function) => function,
        };
        let angle = self.get_angle_from_user(function)?;
        let evaluation = Evaluation::new(function, angle);
        let line = evaluation.format(self.precision);
        info!("{}", line);
        writeln!(self.output, "{}", line)?;
        self.history.push(evaluation);

        writeln!(self.output, "Press Enter to continue.")?;
        self.output.flush()?;
        self.read_line()?;
        Ok(true)
    }

    /// runs until Exit is chosen or the input ends, then logs a summary of the session
    pub fn run(&mut self) -> Result<(), MenuError> {
        loop {
            match self.step() {
                Ok(true) => {}
                Ok(false) => break,
                Err(MenuError::EndOfInput) => {
                    info!("input ended, leaving the calculator");
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        if let Some(table) = self.summary_table() {
            info!("\n \n SESSION SUMMARY \n \n {}", table);
        }
        Ok(())
    }

    /// table of all evaluations of the session, None if nothing was computed
    pub fn summary_table(&self) -> Option<String> {
        if self.history.is_empty() {
            return None;
        }
        let mut builder = Builder::default();
        builder.push_record(["function", "angle", "result"].map(String::from));
        for evaluation in &self.history {
            let result = match self.precision {
                Some(p) => format!("{:.*}", p, evaluation.result),
                None => evaluation.result.to_string(),
            };
            builder.push_record([
                evaluation.function.to_string(),
                evaluation.angle.to_string(),
                result,
            ]);
        }
        let mut table = builder.build();
        table.with(Style::modern_rounded());
        Some(table.to_string())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
