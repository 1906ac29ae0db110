//! Statement parsing: instruction shapes and syntax error offsets.

use strider::{parse, Instruction, Literal, Parser};

fn kinds(instructions: &[Instruction]) -> String {
    instructions
        .iter()
        .map(|i| match i {
            Instruction::Member(_) => 'M',
            Instruction::Index(_) => 'I',
            Instruction::Rule(_) => 'R',
        })
        .collect()
}

fn member_names(instructions: &[Instruction]) -> Vec<&str> {
    instructions
        .iter()
        .filter_map(|i| match i {
            Instruction::Member(m) => Some(m.name()),
            _ => None,
        })
        .collect()
}

#[test]
fn single_member() {
    let instructions = parse("a").unwrap();
    assert_eq!(kinds(&instructions), "M");
    assert_eq!(member_names(&instructions), vec!["a"]);
}

#[test]
fn member_chain_in_source_order() {
    let instructions = parse("a.b.c.d").unwrap();
    assert_eq!(kinds(&instructions), "MMMM");
    assert_eq!(member_names(&instructions), vec!["a", "b", "c", "d"]);
}

#[test]
fn braced_members_decode_escapes() {
    let instructions = parse(r#"{"a"}.{"b\""}.{"'"}.{"d"}"#).unwrap();
    assert_eq!(kinds(&instructions), "MMMM");
    assert_eq!(member_names(&instructions), vec!["a", "b\"", "'", "d"]);
}

#[test]
fn index_chain() {
    let instructions = parse("[0]").unwrap();
    assert_eq!(kinds(&instructions), "I");

    let instructions = parse("[0][1][2][3]").unwrap();
    assert_eq!(kinds(&instructions), "IIII");
    let keys: Vec<_> = instructions
        .iter()
        .filter_map(|i| match i {
            Instruction::Index(index) => Some(index.key().clone()),
            _ => None,
        })
        .collect();
    assert_eq!(
        keys,
        vec![
            Literal::from(0i64),
            Literal::from(1i64),
            Literal::from(2i64),
            Literal::from(3i64)
        ]
    );
}

#[test]
fn single_rule() {
    let instructions = parse("[b = 1]").unwrap();
    assert_eq!(kinds(&instructions), "R");
    match &instructions[0] {
        Instruction::Rule(rule) => {
            assert_eq!(rule.lhs(), &[Instruction::member("b")]);
            assert_eq!(rule.rhs(), &Literal::from(1i64));
        }
        other => panic!("expected a rule, got {other:?}"),
    }
}

#[test]
fn mixed_statement() {
    let instructions = parse(r#"a.{"b"}[1][d.{"e"}[0].f = "something"]["c"].foo"#).unwrap();
    assert_eq!(instructions.len(), 6);
    assert_eq!(kinds(&instructions), "MMIRIM");

    match &instructions[3] {
        Instruction::Rule(rule) => {
            assert_eq!(kinds(rule.lhs()), "MMIM");
            assert_eq!(rule.rhs(), &Literal::from("something"));
        }
        other => panic!("expected a rule, got {other:?}"),
    }
}

#[test]
fn syntax_error_offsets() {
    let cases = [
        (r#""bar""#, 0),
        ("'bar'", 0),
        ("a.", 2),
        ("[a=~]", 3),
        (r#"a.{"b"}[1][ b = 1 ].foo"bar""#, 23),
        ("[", 1),
        (r#"["foo]"#, 6),
        (r#"{"foo}"#, 6),
    ];

    for (statement, offset) in cases {
        let err = parse(statement).unwrap_err();
        assert_eq!(err.offset(), offset, "statement {statement:?}: {err}");
    }
}

#[test]
fn offsets_count_code_points() {
    // three two-byte code points before the failure
    let err = parse("äöü.").unwrap_err();
    assert_eq!(err.offset(), 4);

    let err = parse(r#"{"日本"}["x]"#).unwrap_err();
    assert_eq!(err.offset(), 10);
}

#[test]
fn plus_sign_fails_on_the_sign() {
    assert_eq!(parse("[+1]").unwrap_err().offset(), 1);
}

#[test]
fn parsing_is_deterministic() {
    let statement = r#"a[x.y = "z"][0]"#;
    let mut parser = Parser::new(statement);
    let first = parser.parse().unwrap();

    // an unrelated parse in between changes nothing
    assert!(parse("[").is_err());
    let _ = Parser::new("b.c").parse().unwrap();

    assert_eq!(parser.parse().unwrap(), first);
    assert_eq!(parse(statement).unwrap(), first);
}

#[test]
fn next_instruction_steps_through() {
    let mut parser = Parser::new("a[0]");
    assert!(parser.next_instruction().unwrap().is_member());
    assert_eq!(parser.position(), 1);
    assert!(parser.next_instruction().unwrap().is_index());
    assert_eq!(parser.position(), 4);
}

#[test]
fn integral_numbers_with_negligible_fraction_are_integers() {
    let instructions = parse("[1.00000000000000000001]").unwrap();
    assert_eq!(instructions, vec![Instruction::index(1i64)]);

    let list = vec!["zero", "one"];
    let value = strider::select("[1.00000000000000000001]", &list).unwrap();
    assert_eq!(value.as_str(), Some("one"));
}

#[test]
fn deeply_nested_statement_fails_to_parse() {
    let err = parse(&"[".repeat(10_000)).unwrap_err();
    assert_eq!(err.message(), "statement nested too deeply");
}
