//! End-to-end scenarios driven through the public parser/solver/validator
//! API, covering the reference cases from the crate's problem-file format.

use diophantine::{parser, BigInt, Solver, Validator};

#[test]
fn s1_two_equation_system_has_a_solution() {
    // 7x0 + 12x1 + 31x2 = 17
    // 3x0 + 5x1 + 14x2 = 7
    let input = "2 3\n3 7 1 12 2 31 3\n3 3 1 5 2 14 3\n";
    let system = parser::parse(input.as_bytes()).unwrap();

    let mut solver = Solver::new(system.clone());
    let solution = solver.solve().unwrap().expect("S1 is solvable");

    let validator = Validator::new(system);
    assert!(validator.is_valid_solution(&solution));
}

#[test]
fn s2_inconsistent_gcd_has_no_solution() {
    // 7x0 + 21x1 + 28x2 = 8: gcd(7,21,28)=7 does not divide 8.
    // 3x0 + 5x1 + 14x2 = 7
    let input = "2 3\n3 7 1 21 2 28 3\n3 3 1 5 2 14 3\n";
    let system = parser::parse(input.as_bytes()).unwrap();
    let mut solver = Solver::new(system);
    assert!(solver.solve().unwrap().is_none());
}

#[test]
fn s3_trivially_empty_system_has_the_empty_solution() {
    // Zero variables, one equation that's already `0 = 0`.
    let input = "1 0\n0\n";
    let system = parser::parse(input.as_bytes()).unwrap();
    let mut solver = Solver::new(system);
    let solution = solver.solve().unwrap().expect("trivially solvable");
    assert!(solution.assignments.is_empty());
}

#[test]
fn s4_zero_coefficient_equals_nonzero_constant_has_no_solution() {
    // 0*x0 = 1
    let input = "1 1\n1 0 0\n";
    let mut system = parser::parse(input.as_bytes()).unwrap();
    // The lone term pairs coefficient 0 with variable-id 0, which the file
    // format reserves for the right-hand constant -- so push the intended
    // left-hand term directly to exercise "0*x0 = 1" rather than "0 = 0".
    system.equations_mut()[0] = diophantine::Equation::new(
        diophantine::Sum::new(vec![diophantine::Term::new(BigInt::from(0), 0usize.into())]),
        BigInt::from(1),
    );
    let mut solver = Solver::new(system);
    assert!(solver.solve().unwrap().is_none());
}

#[test]
fn validator_rejects_a_solution_with_a_flipped_sign() {
    let input = "1 2\n2 3 1 5 2\n";
    let system = parser::parse(input.as_bytes()).unwrap();
    let mut solver = Solver::new(system.clone());
    let mut solution = solver.solve().unwrap().expect("solvable");
    solution.assignments[0].value = &solution.assignments[0].value + &BigInt::from(1);

    let validator = Validator::new(system);
    assert!(!validator.is_valid_solution(&solution));
}
