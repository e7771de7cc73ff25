use gorb::{
    ast::Node,
    interpreter::{lexer::lex, parser::core::Parser},
};

fn parse(source: &str) -> (Node, Vec<String>) {
    let mut parser = Parser::new(lex(source, None));
    let program = parser.parse_program();
    (program, parser.errors().to_vec())
}

fn printed(source: &str) -> String {
    let (program, errors) = parse(source);
    assert!(errors.is_empty(), "unexpected parse errors for {source:?}: {errors:#?}");
    program.to_string()
}

fn errors(source: &str) -> Vec<String> {
    let (_, errors) = parse(source);
    assert!(!errors.is_empty(), "expected parse errors for {source:?}");
    errors
}

#[test]
fn operator_precedence_is_reflected_in_parenthesization() {
    let cases = [("-a * b", "((-a) * b)"),
                 ("!-a", "(!(-a))"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a + b - c", "((a + b) - c)"),
                 ("a * b * c", "((a * b) * c)"),
                 ("a + b / c", "(a + (b / c))"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                 ("true != false", "(true != false)"),
                 ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                 ("(5 + 5) * 2", "((5 + 5) * 2)"),
                 ("2 / (5 + 5)", "(2 / (5 + 5))"),
                 ("-(5 + 5)", "(-(5 + 5))"),
                 ("!(true == true)", "(!(true == true))"),
                 ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
                 ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                  "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))")];

    for (source, expected) in cases {
        assert_eq!(printed(source), expected, "for {source:?}");
    }
}

#[test]
fn call_arguments_parse_at_lowest_precedence() {
    assert_eq!(printed("add(a + b + c * d / f + g)"),
               "add((((a + b) + ((c * d) / f)) + g))");
}

#[test]
fn printing_is_stable_under_reparse() {
    let sources = ["-a * b",
                   "a + b * c + d / e - f",
                   "3 + 4 * 5 == 3 * 1 + 4 * 5",
                   "a * [1, 2, 3, 4][b * c] * d",
                   "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                   "so x = 1 + 2 * 3;",
                   "return a + b;"];

    for source in sources {
        let first = printed(source);
        assert_eq!(printed(&first), first, "for {source:?}");
    }
}

#[test]
fn statements_print_their_canonical_form() {
    assert_eq!(printed("so x = 1 + 2"), "so x = (1 + 2);");
    assert_eq!(printed("so x = 1 + 2;;;"), "so x = (1 + 2);");
    assert_eq!(printed("return 5"), "return 5;");
    assert_eq!(printed("x; y"), "xy");
    assert_eq!(printed(""), "");
}

#[test]
fn if_expressions_parse_with_and_without_else() {
    assert_eq!(printed("if (x < y) { x }"), "if (x < y) x");
    assert_eq!(printed("if (x < y) { x } else { y }"), "if (x < y) x else y");
}

#[test]
fn function_literals_and_calls_parse() {
    assert_eq!(printed("fn(x, y) { x + y }"), "fn(x, y){(x + y)}");
    assert_eq!(printed("fn() { 1 }"), "fn(){1}");
    assert_eq!(printed("add(1, 2 * 3)"), "add(1, (2 * 3))");
    assert_eq!(printed("fn(x) { x }(5)"), "fn(x){x}(5)");
}

#[test]
fn array_and_hash_literals_parse() {
    assert_eq!(printed("[1, 2 * 2, 3 + 3]"), "[1, (2 * 2), (3 + 3)]");
    assert_eq!(printed("[]"), "[]");
    assert_eq!(printed("a[1 + 1]"), "(a[(1 + 1)])");
    assert_eq!(printed("{}"), "{}");
    assert_eq!(printed("{\"one\": 1}"), "{one:1}");
    assert_eq!(printed("{\"a\": 1 + 1, \"b\": 2 * 2}"), "{a:(1 + 1), b:(2 * 2)}");
}

#[test]
fn errors_are_accumulated_not_aborting() {
    let found = errors("so = 5; so x 5;");
    assert!(found.len() >= 2, "got {found:#?}");
    assert!(found[0].contains("expected identifier, got ="), "got {:?}", found[0]);
    assert!(found.iter().any(|error| error.contains("expected =, got integer")),
            "got {found:#?}");
}

#[test]
fn a_token_that_cannot_start_an_expression_is_reported() {
    let found = errors("so x = 5; @");
    assert!(found.iter()
                 .any(|error| error.contains("no unary parse function for illegal found")),
            "got {found:#?}");
}

#[test]
fn integer_literals_outside_i32_are_reported() {
    let found = errors("99999999999");
    assert!(found[0].contains("could not parse '99999999999' as integer"),
            "got {:?}",
            found[0]);
}

#[test]
fn diagnostics_point_at_the_source_line() {
    let found = errors("so = 5;");

    assert!(found[0].starts_with("error: "), "got {:?}", found[0]);
    assert!(found[0].contains(":1:4"), "got {:?}", found[0]);
    assert!(found[0].contains("so = 5;"), "got {:?}", found[0]);
    assert!(found[0].contains("^ here"), "got {:?}", found[0]);
}
