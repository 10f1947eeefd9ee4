use std::fs;

use trine::{
    error::{Diagnostic, Stage},
    interpreter::{
        evaluator::Env,
        ops::apply,
        trit::Trit::{self, Neg, Pos, Zero},
    },
    run_source,
};
use walkdir::WalkDir;

const ALL: [Trit; 3] = [Neg, Zero, Pos];

#[test]
fn demo_circuits_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "trine"))
    {
        let path = entry.path();
        let src =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = run_source(&src, None) {
            panic!("Demo circuit {path:?} failed:\n{e}");
        }
    }

    assert!(count > 0, "No demo circuits found in demos/");
}

fn assert_success(src: &str) -> Env {
    match run_source(src, None) {
        Ok(env) => env,
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str, stage: Stage, cause: &str) -> Diagnostic {
    match run_source(src, None) {
        Ok(_) => panic!("Script succeeded but was expected to fail with {cause}"),
        Err(e) => {
            assert_eq!(e.stage, stage, "wrong stage for: {e}");
            assert_eq!(e.cause.label(), cause, "wrong cause for: {e}");
            e
        },
    }
}

#[test]
fn unary_operator_algebra() {
    for x in ALL {
        let c1 = apply("C", &[x]).unwrap();
        let c2 = apply("C", &[c1]).unwrap();
        assert_eq!(apply("C", &[c2]), Ok(x));

        assert_eq!(apply("N", &[x]), Ok(Neg));
        assert_eq!(apply("A", &[x]), Ok(Pos));

        let not = apply("TNOT", &[x]).unwrap();
        assert_eq!(apply("TNOT", &[not]), Ok(x));
    }
    assert_eq!(apply("C", &[Neg]), Ok(Zero));
    assert_eq!(apply("C", &[Zero]), Ok(Pos));
    assert_eq!(apply("C", &[Pos]), Ok(Neg));
    assert_eq!(apply("TNOT", &[Zero]), Ok(Zero));
}

#[test]
fn binary_operators_are_min_max_and_their_negations() {
    for a in ALL {
        for b in ALL {
            assert_eq!(apply("TAND", &[a, b]), Ok(a.min(b)));
            assert_eq!(apply("TOR", &[a, b]), Ok(a.max(b)));
            assert_eq!(apply("TNAND", &[a, b]), Ok(-a.min(b)));
            assert_eq!(apply("TNOR", &[a, b]), Ok(-a.max(b)));

            // Commutativity.
            assert_eq!(apply("TAND", &[a, b]), apply("TAND", &[b, a]));
            assert_eq!(apply("TOR", &[a, b]), apply("TOR", &[b, a]));

            // Associativity.
            for c in ALL {
                let ab = apply("TAND", &[a, b]).unwrap();
                let bc = apply("TAND", &[b, c]).unwrap();
                assert_eq!(apply("TAND", &[ab, c]), apply("TAND", &[a, bc]));

                let ab = apply("TOR", &[a, b]).unwrap();
                let bc = apply("TOR", &[b, c]).unwrap();
                assert_eq!(apply("TOR", &[ab, c]), apply("TOR", &[a, bc]));
            }
        }
    }
}

#[test]
fn table_operators_match_their_definitions() {
    // Rows indexed by the first argument, columns by the second, in the
    // order -1, 0, +1.
    let txor = [[0, -1, 1], [-1, 0, -1], [1, -1, 0]];
    let tsum = [[0, -1, 0], [-1, 0, 1], [0, 1, 0]];
    let tcarry = [[-1, 0, 0], [0, 0, 0], [0, 0, 1]];

    for (i, a) in ALL.into_iter().enumerate() {
        for (j, b) in ALL.into_iter().enumerate() {
            assert_eq!(apply("TXOR", &[a, b]).unwrap().as_i8(), txor[i][j]);
            assert_eq!(apply("TSUM", &[a, b]).unwrap().as_i8(), tsum[i][j]);
            assert_eq!(apply("TCARRY", &[a, b]).unwrap().as_i8(), tcarry[i][j]);

            // All three are symmetric.
            assert_eq!(apply("TXOR", &[a, b]), apply("TXOR", &[b, a]));
            assert_eq!(apply("TSUM", &[a, b]), apply("TSUM", &[b, a]));
            assert_eq!(apply("TCARRY", &[a, b]), apply("TCARRY", &[b, a]));
        }
    }
}

#[test]
fn half_adder_program() {
    let env = assert_success("trit A, B, S, C;\nA = -1;\nB = +1;\nS = TSUM(A, B);\nC = TCARRY(A, B);");
    assert_eq!(env.get("A"), Some(Neg));
    assert_eq!(env.get("B"), Some(Pos));
    assert_eq!(env.get("S"), Some(Zero));
    assert_eq!(env.get("C"), Some(Zero));
    assert_eq!(env.len(), 4);
}

#[test]
fn declarations_default_to_zero() {
    let env = assert_success("trit A, B, C;");
    for name in ["A", "B", "C"] {
        assert_eq!(env.get(name), Some(Zero));
    }
}

#[test]
fn self_assignment_of_declared_default() {
    let env = assert_success("trit A; A = A;");
    assert_eq!(env.get("A"), Some(Zero));
}

#[test]
fn comments_and_whitespace_are_skipped() {
    let env = assert_success("// a full-line comment\ntrit A;\nA = +1; // trailing comment\n\n");
    assert_eq!(env.get("A"), Some(Pos));
}

#[test]
fn reruns_are_idempotent() {
    let src = "trit A, B, S;\nA = +1;\nB = C(A);\nS = TXOR(A, B);";
    let first = assert_success(src);
    let second = assert_success(src);
    assert_eq!(first.sorted(), second.sorted());
}

#[test]
fn chained_runs_share_an_environment() {
    let env = run_source("trit A; A = +1;", None).unwrap();
    let env = run_source("trit S; S = TNOT(A);", Some(env)).unwrap();
    assert_eq!(env.get("A"), Some(Pos));
    assert_eq!(env.get("S"), Some(Neg));

    // The first program's declarations persist, so redeclaring collides.
    let env = run_source("trit A; A = +1;", None).unwrap();
    let err = run_source("trit A;", Some(env)).unwrap_err();
    assert_eq!(err.cause.label(), "Redeclaration of Variable");
}

#[test]
fn lexer_rejects_bad_literals() {
    let e = assert_failure("trit X; X = 2;", Stage::Lex, "Invalid Trit Literal");
    assert_eq!((e.line, e.column), (1, 13));
    assert_eq!(e.line_text, "trit X; X = 2;");

    assert_failure("trit X; X = -5;", Stage::Lex, "Invalid Trit Literal");
    assert_failure("trit X; X = 01;", Stage::Lex, "Invalid Trit Literal");
    assert_failure("trit X; X = +;", Stage::Lex, "Invalid Trit Literal");
    assert_failure("trit X; X = -;", Stage::Lex, "Invalid Trit Literal");
}

#[test]
fn lexer_rejects_unknown_characters() {
    let e = assert_failure("trit A?;", Stage::Lex, "Unexpected Character");
    assert_eq!((e.line, e.column), (1, 7));
    assert!(e.description.contains('?'));
}

#[test]
fn parser_reports_missing_semicolon() {
    let e = assert_failure("trit A A = 0;", Stage::Parse, "Missing Semicolon");
    assert_eq!((e.line, e.column), (1, 8));
}

#[test]
fn parser_reports_statement_level_errors() {
    assert_failure("= 0;", Stage::Parse, "Unexpected Token at Statement Start");
    assert_failure("trit ;", Stage::Parse, "Expected Identifier in Declaration");
    assert_failure("trit A, ;", Stage::Parse, "Expected Identifier in Declaration");
    assert_failure("trit A; A 0;", Stage::Parse, "Expected '=' After Identifier");
}

#[test]
fn parser_reports_expression_level_errors() {
    assert_failure("trit A; A = ;", Stage::Parse, "Unexpected Token in Expression");
    let e = assert_failure("trit A; A = TNOT(A;", Stage::Parse, "Missing Closing Parenthesis");
    assert_eq!((e.line, e.column), (1, 19));
}

#[test]
fn positions_span_lines() {
    let e = assert_failure("trit A;\ntrit B;\nQ = 0;", Stage::Runtime,
                           "Assignment to Undeclared Variable");
    assert_eq!((e.line, e.column), (3, 1));
    assert_eq!(e.line_text, "Q = 0;");
    assert!(e.description.contains("'Q'"));
}

#[test]
fn runtime_rejects_undeclared_names() {
    assert_failure("trit A; B = 0;", Stage::Runtime, "Assignment to Undeclared Variable");
    let e = assert_failure("trit A; A = B;", Stage::Runtime, "Use of Undeclared Variable");
    assert!(e.description.contains("'B'"));
}

#[test]
fn runtime_rejects_redeclaration() {
    assert_failure("trit A; trit A;", Stage::Runtime, "Redeclaration of Variable");
    // Within a single comma list a repeated name is ordinary redeclaration.
    assert_failure("trit A, A;", Stage::Runtime, "Redeclaration of Variable");
}

#[test]
fn dispatcher_validates_calls() {
    let e = assert_failure("trit A; A = TAND(A);", Stage::Runtime, "Wrong Number of Arguments");
    assert!(e.description.contains("expects 2"));
    assert!(e.description.contains("1 was provided"));

    // Empty argument lists parse fine and fail here instead.
    let e = assert_failure("trit A; A = TAND();", Stage::Runtime, "Wrong Number of Arguments");
    assert!(e.description.contains("0 was provided"));

    let e = assert_failure("trit A; A = MAJ(A, A);", Stage::Runtime, "Unknown Function");
    assert!(e.description.contains("'MAJ'"));
}

#[test]
fn argument_evaluation_is_left_to_right() {
    // The failing first argument is reported, not the unknown name in the
    // second; later arguments are never evaluated.
    let e = assert_failure("trit A; A = TAND(B, Q);", Stage::Runtime, "Use of Undeclared Variable");
    assert!(e.description.contains("'B'"));
}

#[test]
fn diagnostics_format_for_display() {
    let e = run_source("trit X; X = 2;", None).unwrap_err();
    assert_eq!(e.to_string(),
               "Lexing Error: Invalid Trit Literal\n    in line 1: trit X; X = 2;\n    '2' is not a valid trit literal; expected -1, 0, or +1.");
}

#[test]
fn seeding_checks_the_domain() {
    let mut env = Env::new();
    env.seed("A", 1).unwrap();
    assert_eq!(env.get("A"), Some(Pos));

    let e = env.seed("B", 3).unwrap_err();
    assert_eq!(e.cause.label(), "Invalid Trit Value");
    assert!(env.get("B").is_none());
}
