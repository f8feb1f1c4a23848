/*!

A solver for systems of linear Diophantine equations, using the method of
auxiliary variables (Aryabhata/Bond elimination): repeatedly simplify by
coefficient GCD, detect inconsistency, pick a pivot term, and either solve
for it directly or introduce a fresh variable to shrink its coefficient,
until the system collapses to a set of concrete assignments or proves
itself unsolvable.

Typical use goes through [`parser::parse`] to build an [`EquationSystem`],
then [`Solver`] to solve it, then optionally [`Validator`] to double-check
the witness:

```no_run
use diophantine::{parser, Solver, Validator};

let system = parser::parse(std::io::Cursor::new("1 2\n2 3 1 5 2\n"))?;
let mut solver = Solver::new(system.clone());
match solver.solve()? {
    Some(solution) => {
        let validator = Validator::new(system);
        assert!(validator.is_valid_solution(&solution));
    }
    None => println!("no solution"),
}
# Ok::<(), diophantine::Error>(())
```

*/

mod bigint;
mod deduced_equation;
mod equation;
mod error;
pub mod logging;
pub mod parser;
mod solver;
mod sum;
mod system;
mod term;
mod validator;
mod variable;

pub use bigint::BigInt;
pub use deduced_equation::DeducedEquation;
pub use equation::{Equation, SimplificationResult};
pub use error::{Error, Result};
pub use solver::{Assignment, Solution, Solver};
pub use sum::Sum;
pub use system::EquationSystem;
pub use term::Term;
pub use validator::Validator;
pub use variable::VariableId;
