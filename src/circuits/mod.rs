// src/circuits/mod.rs

//! Defines structures for representing and building ordered sequences of
//! register operations (`qecho::operations::Operation`).
//!
//! Circuits here are what the byte-level echo hands to a `CircuitBackend`:
//! a fixed-width register, X gates encoding the input bits, an echo-specific
//! gate layer, and a final measurement.

use crate::operations::{Gate, Operation};
use std::fmt;

/// An ordered sequence of operations on a register of `width` qubits.
///
/// The width grows to cover every qubit an added operation references, and
/// can be declared up front so idle qubits still belong to the register.
#[derive(Clone, PartialEq)]
pub struct Circuit {
    width: usize,
    operations: Vec<Operation>,
}

impl Circuit {
    /// Creates a new, empty circuit.
    pub fn new() -> Self {
        Self {
            width: 0,
            operations: Vec::new(),
        }
    }

    /// Creates an empty circuit over `width` qubits.
    pub fn with_width(width: usize) -> Self {
        Self {
            width,
            operations: Vec::new(),
        }
    }

    /// Adds a single operation to the end of the circuit's sequence.
    pub fn add_operation(&mut self, op: Operation) {
        if let Some(max) = op.involved_qubits().into_iter().max() {
            self.width = self.width.max(max + 1);
        }
        self.operations.push(op);
    }

    /// Adds multiple operations from an iterator to the end of the circuit's sequence.
    pub fn add_operations<I>(&mut self, ops: I)
    where
        I: IntoIterator<Item = Operation>,
    {
        for op in ops {
            self.add_operation(op);
        }
    }

    /// Number of qubits in the register.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns a slice containing the ordered sequence of operations in this circuit.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Returns the total number of operations defined in the circuit.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` if the circuit contains no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl Default for Circuit {
    fn default() -> Self {
        Self::new()
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// A helper struct for programmatically constructing `Circuit` instances using method chaining.
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    /// Creates a new, empty CircuitBuilder.
    pub fn new() -> Self {
        Self { circuit: Circuit::new() }
    }

    /// Starts a builder over a register of `width` qubits.
    pub fn with_width(width: usize) -> Self {
        Self {
            circuit: Circuit::with_width(width),
        }
    }

    /// Adds a single operation to the circuit being built.
    pub fn add_op(mut self, op: Operation) -> Self {
        self.circuit.add_operation(op);
        self
    }

    /// Adds multiple operations from an iterator to the circuit being built.
    pub fn add_ops<I>(mut self, ops: I) -> Self
    where
        I: IntoIterator<Item = Operation>,
    {
        self.circuit.add_operations(ops);
        self
    }

    /// Shorthand for `Operation::Apply`.
    pub fn gate(self, target: usize, gate: Gate) -> Self {
        self.add_op(Operation::Apply { target, gate })
    }

    /// Shorthand for `Operation::ControlledFlip`.
    pub fn cx(self, control: usize, target: usize) -> Self {
        self.add_op(Operation::ControlledFlip { control, target })
    }

    /// Measures every qubit of the register declared so far.
    pub fn measure_all(self) -> Self {
        let targets: Vec<usize> = (0..self.circuit.width).collect();
        self.add_op(Operation::Measure { targets })
    }

    /// Finalizes the construction process and returns the built `Circuit`.
    pub fn build(self) -> Circuit {
        self.circuit
    }
}

impl Default for CircuitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "qecho::Circuit[{} operations on {} qubits]", self.operations.len(), self.width)?;
        if self.operations.is_empty() {
            return Ok(());
        }

        const GATE_WIDTH: usize = 5;
        const WIRE: &str = "─────";
        const H_WIRE: char = '─';

        fn format_gate(symbol: &str) -> String {
            let slen = symbol.chars().count();
            if slen >= GATE_WIDTH {
                return symbol.chars().take(GATE_WIDTH).collect();
            }
            let total = GATE_WIDTH - slen;
            let pre = total / 2;
            format!(
                "{}{}{}",
                H_WIRE.to_string().repeat(pre),
                symbol,
                H_WIRE.to_string().repeat(total - pre)
            )
        }

        let mut grid: Vec<Vec<String>> = vec![vec![WIRE.to_string(); self.operations.len()]; self.width];
        for (t, op) in self.operations.iter().enumerate() {
            match op {
                Operation::Apply { target, gate } => grid[*target][t] = format_gate(gate.symbol()),
                Operation::ControlledFlip { control, target } => {
                    grid[*control][t] = format_gate("@");
                    grid[*target][t] = format_gate("X");
                    let (lo, hi) = ((*control).min(*target), (*control).max(*target));
                    for row in grid.iter_mut().take(hi).skip(lo + 1) {
                        row[t] = format_gate("│");
                    }
                }
                Operation::Measure { targets } => {
                    for q in targets {
                        grid[*q][t] = format_gate("M");
                    }
                }
            }
        }

        let label_width = format!("q{}", self.width.saturating_sub(1)).len();
        for (q, row) in grid.iter().enumerate() {
            writeln!(f, "{:<width$}: {}", format!("q{}", q), row.join(""), width = label_width)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
