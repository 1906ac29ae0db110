//! Canonical rendering of compiled statements and syntax errors.

use insta::assert_snapshot;
use strider::{Instruction, Literal, Program};

fn render_all(statements: &[&str]) -> String {
    statements
        .iter()
        .map(|statement| match Program::compile(statement) {
            Ok(program) => format!("{statement} => {program}"),
            Err(err) => format!("{statement} => error: {err}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_snapshots_canonical_forms() {
    let output = render_all(&[
        "a.b.c",
        r#"{"some funky label"}.x"#,
        r#"a[0]["key"]"#,
        "items[ kind = 'leaf' ][0].name",
        "[= 3]",
        r"a\.b",
        "[-2.50]",
        "[1.0]",
        r#"[x.y[0] = "a\"b"]"#,
        "日本.語",
    ]);

    assert_snapshot!("canonical_forms", output);
}

#[test]
fn test_snapshots_syntax_errors() {
    let output = render_all(&["[0", "{a}", r#"["foo]"#, "[a=~]"]);

    assert_snapshot!("syntax_errors", output);
}

#[test]
fn test_rendered_program_compiles_to_itself() {
    let program = Program::compile(r#"items[ kind = 'leaf' ][0].{"x y"}"#).unwrap();
    let again: Program = program.to_string().parse().unwrap();
    assert_eq!(again, program);
}

#[test]
fn test_hand_built_float_keys_round_trip() {
    let program = Program::from_instructions(vec![
        Instruction::index(1.0),
        Instruction::index(-2.5),
        Instruction::rule(vec![Instruction::member("w")], Literal::from(3.0)),
    ]);
    assert_eq!(program.to_string(), "[1][-2.5][w = 3]");

    let again: Program = program.to_string().parse().unwrap();
    assert_eq!(again, program);
}
