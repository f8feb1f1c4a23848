/*!

Reads the plain-text problem format into an [`EquationSystem`]:

```text
n_equations n_variables
n_terms c1 v1 c2 v2 ... c_k v_k
...
```

Variable-id 0 in a term pair means "contributes to the right-hand
constant"; variable-ids `1..=n_variables` are the left-hand variables,
stored internally with id shifted down by one.

*/

use std::io::{BufRead, BufReader, Read};

use log::warn;

use crate::bigint::BigInt;
use crate::equation::Equation;
use crate::error::{Error, Result};
use crate::sum::Sum;
use crate::system::EquationSystem;
use crate::term::Term;
use crate::variable::VariableId;

/// Parses a problem file from any `Read`er (typically an opened file).
pub fn parse<R: Read>(reader: R) -> Result<EquationSystem> {
    let mut lines = BufReader::new(reader).lines();

    let header = loop {
        match lines.next() {
            None => return Err(Error::Parse("empty input: missing header line".into())),
            Some(line) => {
                let line = line.map_err(|e| Error::Parse(format!("could not read header: {e}")))?;
                if line.trim().is_empty() {
                    warn!("skipping blank line before header");
                    continue;
                }
                break line;
            }
        }
    };

    let mut header_tokens = header.split_whitespace();
    let n_equations = parse_count(&mut header_tokens, "n_equations")?;
    let n_variables = parse_count(&mut header_tokens, "n_variables")?;

    let mut system = EquationSystem::new(n_variables, Vec::new());
    let mut line_number = 1usize;
    let mut equations_read = 0usize;

    for line in lines {
        line_number += 1;
        let line = line.map_err(|e| Error::Parse(format!("line {line_number}: {e}")))?;

        if line.trim().is_empty() {
            warn!("line {line_number}: skipping blank line");
            continue;
        }

        if equations_read >= n_equations {
            warn!(
                "line {line_number}: more equations in file than the declared {n_equations}, ignoring"
            );
            continue;
        }

        let equation = parse_equation_line(&line, line_number, n_variables)?;
        system.push_equation(equation);
        equations_read += 1;
    }

    Ok(system)
}

fn parse_count(tokens: &mut std::str::SplitWhitespace<'_>, field: &str) -> Result<usize> {
    let token = tokens
        .next()
        .ok_or_else(|| Error::Parse(format!("header: missing {field}")))?;
    token
        .parse::<usize>()
        .map_err(|e| Error::Parse(format!("header: {field} is not a nonnegative integer: {e}")))
}

fn parse_equation_line(line: &str, line_number: usize, n_variables: usize) -> Result<Equation> {
    let mut tokens = line.split_whitespace();

    let n_terms = tokens
        .next()
        .ok_or_else(|| Error::Parse(format!("line {line_number}: missing term count")))?
        .parse::<usize>()
        .map_err(|e| Error::Parse(format!("line {line_number}: term count is not an integer: {e}")))?;

    let mut pairs = Vec::new();
    loop {
        let Some(coefficient_token) = tokens.next() else { break };
        let variable_token = tokens
            .next()
            .ok_or_else(|| Error::Parse(format!("line {line_number}: coefficient with no paired variable id")))?;

        let coefficient: BigInt = coefficient_token
            .parse()
            .map_err(|_| Error::Parse(format!("line {line_number}: '{coefficient_token}' is not an integer")))?;
        let raw_variable: usize = variable_token
            .parse()
            .map_err(|_| Error::Parse(format!("line {line_number}: '{variable_token}' is not a variable id")))?;

        pairs.push((coefficient, raw_variable));
    }

    if pairs.len() != n_terms {
        warn!(
            "line {line_number}: declared {n_terms} term(s) but found {}, using what was found",
            pairs.len()
        );
    }

    let mut right_side = BigInt::zero();
    let mut left_terms = Vec::with_capacity(pairs.len());
    for (coefficient, raw_variable) in pairs {
        if raw_variable == 0 {
            right_side = &right_side + &coefficient;
        } else {
            if raw_variable > n_variables {
                warn!(
                    "line {line_number}: variable id {raw_variable} exceeds declared count {n_variables}"
                );
            }
            left_terms.push(Term::new(coefficient, VariableId(raw_variable - 1)));
        }
    }
    left_terms.sort_by_key(|t| t.variable.index());

    Ok(Equation::new(Sum::new(left_terms), right_side))
}
