//! Models for the Tenner grid puzzle.
//!
//! A Tenner grid has `n` rows of 10 cells. Every row contains the digits 0 to 9 exactly once, two
//! cells which touch (horizontally, vertically or diagonally) never hold the same digit, and the
//! cells of every column sum to the number given below that column. Some cells are filled in
//! beforehand.

use std::fmt::Display;
use std::fmt::Formatter;

use clap::ValueEnum;
use log::debug;

use crate::basic_types::ModelError;
use crate::constraints;
use crate::constraints::TableRelation;
use crate::engine::search::Solution;
use crate::engine::variables::DomainId;
use crate::engine::Csp;

/// The number of columns of a Tenner grid.
pub const TENNER_WIDTH: usize = 10;

/// How the row constraints of a Tenner grid are encoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum TennerEncoding {
    /// A binary not-equal table between every pair of cells of a row; column sums are tables
    /// enumerated from the cartesian product of the column's domains.
    BinaryNotEqual,
    /// One all-different constraint per row; column sums are linear equalities.
    #[default]
    AllDifferent,
}

/// The starting position of a Tenner grid: the pre-set cells and the column sums.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TennerBoard {
    cells: Vec<[Option<i32>; TENNER_WIDTH]>,
    sums: [i32; TENNER_WIDTH],
}

impl TennerBoard {
    /// Create a board from its rows, where `-1` marks an empty cell, and the column sums.
    pub fn new(rows: Vec<Vec<i32>>, sums: Vec<i32>) -> Result<Self, ModelError> {
        if rows.is_empty() {
            return Err(ModelError::InvalidBoard("the board has no rows".to_owned()));
        }

        let sums: [i32; TENNER_WIDTH] = sums.try_into().map_err(|sums: Vec<i32>| {
            ModelError::InvalidBoard(format!(
                "expected {TENNER_WIDTH} column sums, got {}",
                sums.len()
            ))
        })?;

        let cells = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| parse_row(index, row))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TennerBoard { cells, sums })
    }

    pub fn num_rows(&self) -> usize {
        self.cells.len()
    }

    /// The pre-set value of a cell, if any.
    pub fn cell(&self, row: usize, column: usize) -> Option<i32> {
        self.cells[row][column]
    }

    pub fn column_sum(&self, column: usize) -> i32 {
        self.sums[column]
    }
}

fn parse_row(index: usize, row: Vec<i32>) -> Result<[Option<i32>; TENNER_WIDTH], ModelError> {
    if row.len() != TENNER_WIDTH {
        return Err(ModelError::InvalidBoard(format!(
            "row {index} has {} cells, expected {TENNER_WIDTH}",
            row.len()
        )));
    }

    let mut cells = [None; TENNER_WIDTH];
    for (column, value) in row.into_iter().enumerate() {
        cells[column] = match value {
            -1 => None,
            0..=9 => Some(value),
            _ => {
                return Err(ModelError::InvalidBoard(format!(
                    "cell ({index}, {column}) holds {value}, expected -1 or a digit"
                )))
            }
        };
    }

    Ok(cells)
}

/// A Tenner grid as a [`Csp`], together with the variable of every cell.
#[derive(Debug)]
pub struct TennerModel {
    pub csp: Csp,
    /// `cells[row][column]` is the variable of that cell.
    pub cells: Vec<Vec<DomainId>>,
}

impl TennerModel {
    /// Build the model of `board`.
    ///
    /// Every cell becomes a variable named `V{row}{column}`. A pre-set cell has its value as the
    /// only element of its domain and is assigned to it; an empty cell can take any digit which is
    /// not pre-set elsewhere in its row.
    pub fn build(board: &TennerBoard, encoding: TennerEncoding) -> Result<TennerModel, ModelError> {
        let mut csp = Csp::new(format!("Tenner ({encoding:?})"));
        let mut cells = Vec::with_capacity(board.num_rows());

        for row in 0..board.num_rows() {
            let preset: Vec<i32> = (0..TENNER_WIDTH)
                .filter_map(|column| board.cell(row, column))
                .collect();

            let mut variables = Vec::with_capacity(TENNER_WIDTH);
            for column in 0..TENNER_WIDTH {
                let name = format!("V{row}{column}");
                let variable = match board.cell(row, column) {
                    Some(value) => {
                        let variable = csp.new_variable(name, [value])?;
                        csp.assign(variable, value);
                        variable
                    }
                    None => csp.new_variable(
                        name,
                        (0..=9).filter(|digit| !preset.contains(digit)),
                    )?,
                };
                variables.push(variable);
            }
            cells.push(variables);
        }

        let mut model = TennerModel { csp, cells };
        model.add_row_constraints(encoding)?;
        model.add_adjacency_constraints()?;
        model.add_column_constraints(board, encoding)?;

        debug!(
            "Built {} with {} variables and {} constraints",
            model.csp.name(),
            model.csp.num_variables(),
            model.csp.num_constraints()
        );

        Ok(model)
    }

    fn add_row_constraints(&mut self, encoding: TennerEncoding) -> Result<(), ModelError> {
        for row in 0..self.cells.len() {
            match encoding {
                TennerEncoding::BinaryNotEqual => {
                    for first in 0..TENNER_WIDTH {
                        for second in first + 1..TENNER_WIDTH {
                            self.add_not_equal(row, first, row, second)?;
                        }
                    }
                }
                TennerEncoding::AllDifferent => {
                    let _ = self.csp.add_constraint(
                        format!("AllDiff(R{row})"),
                        self.cells[row].clone(),
                        constraints::all_different(),
                    )?;
                }
            }
        }

        Ok(())
    }

    /// Cells in consecutive rows which touch vertically or diagonally differ.
    fn add_adjacency_constraints(&mut self) -> Result<(), ModelError> {
        for row in 1..self.cells.len() {
            for column in 0..TENNER_WIDTH {
                let below = column.saturating_sub(1)..=(column + 1).min(TENNER_WIDTH - 1);
                for other in below {
                    self.add_not_equal(row - 1, column, row, other)?;
                }
            }
        }

        Ok(())
    }

    fn add_column_constraints(
        &mut self,
        board: &TennerBoard,
        encoding: TennerEncoding,
    ) -> Result<(), ModelError> {
        for column in 0..TENNER_WIDTH {
            let scope: Vec<DomainId> = self.cells.iter().map(|row| row[column]).collect();
            let sum = board.column_sum(column);
            let name = format!("Sum(C{column})");

            let _ = match encoding {
                TennerEncoding::BinaryNotEqual => {
                    let domains: Vec<Vec<i32>> = scope
                        .iter()
                        .map(|&variable| self.csp.initial_domain(variable).to_vec())
                        .collect();
                    let relation = TableRelation::from_product(&domains, |tuple| {
                        tuple.iter().sum::<i32>() == sum
                    });
                    self.csp.add_constraint(name, scope, relation)?
                }
                TennerEncoding::AllDifferent => {
                    let arity = scope.len();
                    self.csp
                        .add_constraint(name, scope, constraints::sum_equals(arity, sum))?
                }
            };
        }

        Ok(())
    }

    /// Add a not-equal table between two cells, enumerated from their initial domains.
    fn add_not_equal(
        &mut self,
        first_row: usize,
        first_column: usize,
        second_row: usize,
        second_column: usize,
    ) -> Result<(), ModelError> {
        let first = self.cells[first_row][first_column];
        let second = self.cells[second_row][second_column];

        let domains = [
            self.csp.initial_domain(first).to_vec(),
            self.csp.initial_domain(second).to_vec(),
        ];
        let relation = TableRelation::from_product(&domains, |tuple| tuple[0] != tuple[1]);

        let name = format!(
            "NotEqual({},{})",
            self.csp.variable_name(first),
            self.csp.variable_name(second)
        );
        let _ = self.csp.add_constraint(name, [first, second], relation)?;

        Ok(())
    }

    /// The filled-in grid described by `solution`.
    pub fn read_solution(&self, solution: &Solution) -> TennerGrid {
        TennerGrid(
            self.cells
                .iter()
                .map(|row| row.iter().map(|&cell| solution.get_value(cell)).collect())
                .collect(),
        )
    }
}

/// A completely filled-in Tenner grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TennerGrid(pub Vec<Vec<i32>>);

impl Display for TennerGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let separator = format!("{}+", "+---".repeat(TENNER_WIDTH));

        for row in &self.0 {
            writeln!(f, "{separator}")?;
            for value in row {
                write!(f, "| {value} ")?;
            }
            writeln!(f, "|")?;
        }

        write!(f, "{separator}")
    }
}
