// src/simulation/engine.rs
use crate::core::echo_constants::MAX_SIMULATED_QUBITS;
use crate::core::{EchoError, RandomSource, Result};
use crate::operations::Operation;
use crate::simulation::SimulationResult;
use num_complex::Complex;
use num_traits::{One, Zero};

/// State-vector engine over a register of `width` qubits.
///
/// Qubit `q` is bit `q` of the basis-state index, so index 1 is |0…01> with
/// q0 set. The vector has `2^width` entries; width is capped by
/// `MAX_SIMULATED_QUBITS`.
#[derive(Debug)]
pub(crate) struct SimulationEngine {
    width: usize,
    amplitudes: Vec<Complex<f64>>,
}

impl SimulationEngine {
    /// Initializes the register to |0...0>.
    pub(crate) fn init(width: usize) -> Result<Self> {
        if width == 0 {
            return Err(EchoError::simulation("Cannot initialize a register with zero qubits"));
        }
        if width > MAX_SIMULATED_QUBITS {
            return Err(EchoError::simulation(format!(
                "Register of {} qubits exceeds the {}-qubit simulation limit",
                width, MAX_SIMULATED_QUBITS
            )));
        }
        let dim = 1usize << width;
        let mut amplitudes = vec![Complex::zero(); dim];
        amplitudes[0] = Complex::one();
        Ok(Self { width, amplitudes })
    }

    pub(crate) fn state(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    /// Applies a single non-measurement operation to the register.
    pub(crate) fn apply_operation(&mut self, op: &Operation) -> Result<()> {
        match op {
            Operation::Apply { target, gate } => {
                self.check_index(*target)?;
                self.apply_single_qubit_gate(*target, &gate.matrix());
            }
            Operation::ControlledFlip { control, target } => {
                self.check_index(*control)?;
                self.check_index(*target)?;
                if control == target {
                    return Err(EchoError::simulation("Control and target qubits cannot be the same"));
                }
                self.apply_controlled_flip(*control, *target);
            }
            Operation::Measure { .. } => {
                return Err(EchoError::simulation(
                    "Measure operation should not be passed directly to apply_operation",
                ));
            }
        }
        Ok(())
    }

    /// Samples one basis state from `|amplitude|²`, collapses the register
    /// onto it and records the targets' bits.
    pub(crate) fn measure(&mut self, targets: &[usize], rng: &mut dyn RandomSource, result: &mut SimulationResult) -> Result<()> {
        if targets.is_empty() {
            return Ok(());
        }
        for target in targets {
            self.check_index(*target)?;
        }

        let total: f64 = self.amplitudes.iter().map(|c| c.norm_sqr()).sum();
        if !total.is_finite() || total < 1e-12 {
            return Err(EchoError::simulation("Register has no measurable amplitude"));
        }

        let sample = rng.next_unit() * total;
        let mut cumulative = 0.0;
        let mut chosen = None;
        let mut last_nonzero = 0;
        for (k, amp) in self.amplitudes.iter().enumerate() {
            let p = amp.norm_sqr();
            if p <= 0.0 {
                continue;
            }
            last_nonzero = k;
            cumulative += p;
            if sample < cumulative {
                chosen = Some(k);
                break;
            }
        }
        // Rounding can leave the sample just past the final cumulative sum.
        let chosen = chosen.unwrap_or(last_nonzero);

        self.amplitudes.iter_mut().for_each(|c| *c = Complex::zero());
        self.amplitudes[chosen] = Complex::one();

        for target in targets {
            let bit = ((chosen >> target) & 1) as u8;
            result.record(*target, bit);
        }
        Ok(())
    }

    fn check_index(&self, qubit: usize) -> Result<()> {
        if qubit >= self.width {
            return Err(EchoError::simulation(format!(
                "Qubit {} is outside the {}-qubit register",
                qubit, self.width
            )));
        }
        Ok(())
    }

    /// Applies a 2x2 matrix to every amplitude pair differing only at `target`.
    fn apply_single_qubit_gate(&mut self, target: usize, matrix: &[[Complex<f64>; 2]; 2]) {
        let mask = 1usize << target;
        for i0 in 0..self.amplitudes.len() {
            if i0 & mask != 0 {
                continue;
            }
            let i1 = i0 | mask;
            let psi_0 = self.amplitudes[i0];
            let psi_1 = self.amplitudes[i1];
            self.amplitudes[i0] = matrix[0][0] * psi_0 + matrix[0][1] * psi_1;
            self.amplitudes[i1] = matrix[1][0] * psi_0 + matrix[1][1] * psi_1;
        }
    }

    /// Swaps the target's amplitude pairs inside the control=1 subspace.
    fn apply_controlled_flip(&mut self, control: usize, target: usize) {
        let c_mask = 1usize << control;
        let t_mask = 1usize << target;
        for i in 0..self.amplitudes.len() {
            if i & c_mask != 0 && i & t_mask == 0 {
                self.amplitudes.swap(i, i | t_mask);
            }
        }
    }
}
