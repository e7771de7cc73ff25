use std::fs;

use gorb::{
    RunError, run,
    interpreter::value::{core::Value, environment::Environment},
};
use walkdir::WalkDir;

fn eval_source(source: &str) -> Result<Value, RunError> {
    let env = Environment::new();
    run(source, None, &env, &mut std::io::sink())
}

fn inspect(source: &str) -> String {
    match eval_source(source) {
        Ok(value) => value.to_string(),
        Err(error) => panic!("script failed: {error}\nsource: {source}"),
    }
}

fn error_message(source: &str) -> String {
    match eval_source(source) {
        Err(RunError::Runtime(error)) => error.to_string(),
        Ok(value) => panic!("expected a runtime error, got {value} for {source:?}"),
        Err(RunError::Syntax(errors)) => panic!("unexpected syntax errors: {errors:#?}"),
    }
}

#[test]
fn integer_arithmetic() {
    assert_eq!(inspect("5"), "5");
    assert_eq!(inspect("-10"), "-10");
    assert_eq!(inspect("5 + 5 + 5 + 5 - 10"), "10");
    assert_eq!(inspect("2 * 2 * 2 * 2 * 2"), "32");
    assert_eq!(inspect("50 / 2 * 2 + 10"), "60");
    assert_eq!(inspect("3 * (3 * 3) + 10"), "37");
    assert_eq!(inspect("(5 + 10 * 2 + 15 / 3) * 2 + -10"), "50");
    assert_eq!(inspect("-7 / 2"), "-3");
}

#[test]
fn integer_arithmetic_wraps() {
    assert_eq!(inspect("2147483647 + 1"), "-2147483648");
    assert_eq!(inspect("0 - 2147483647 - 1"), "-2147483648");
    assert_eq!(inspect("-(0 - 2147483647 - 1)"), "-2147483648");
}

#[test]
fn string_concatenation() {
    assert_eq!(inspect(r#""Hello" + " " + "World!""#), "Hello World!");
    assert_eq!(inspect(r#""" + """#), "");
}

#[test]
fn boolean_operators() {
    assert_eq!(inspect("true"), "true");
    assert_eq!(inspect("1 < 2"), "true");
    assert_eq!(inspect("1 > 2"), "false");
    assert_eq!(inspect("1 == 1"), "true");
    assert_eq!(inspect("1 != 2"), "true");
    assert_eq!(inspect("true == true"), "true");
    assert_eq!(inspect("true != false"), "true");
    assert_eq!(inspect("(1 < 2) == true"), "true");
}

#[test]
fn equality_across_kinds_is_unequal_not_an_error() {
    assert_eq!(inspect("1 == true"), "false");
    assert_eq!(inspect("1 != true"), "true");
    assert_eq!(inspect(r#""1" != 1"#), "true");
    assert_eq!(inspect("[1] == [1]"), "true");
    assert_eq!(inspect("[1] == [2]"), "false");
}

#[test]
fn bang_booleanizes_truthiness() {
    assert_eq!(inspect("!true"), "false");
    assert_eq!(inspect("!false"), "true");
    assert_eq!(inspect("!5"), "false");
    assert_eq!(inspect("!!5"), "true");
    assert_eq!(inspect("!0"), "false");
    assert_eq!(inspect(r#"!"""#), "false");
    assert_eq!(inspect("![]"), "false");
    assert_eq!(inspect("!if (false) { 1 }"), "true");
}

#[test]
fn if_expressions() {
    assert_eq!(inspect("if (true) { 10 }"), "10");
    assert_eq!(inspect("if (false) { 10 }"), "null");
    assert_eq!(inspect("if (1) { 10 }"), "10");
    assert_eq!(inspect("if (1 > 2) { 10 } else { 20 }"), "20");
    assert_eq!(inspect("if (\"\") { 1 } else { 2 }"), "1");
    assert_eq!(inspect("if ([]) { 1 } else { 2 }"), "1");
}

#[test]
fn return_statements_unwind_blocks() {
    assert_eq!(inspect("return 10;"), "10");
    assert_eq!(inspect("return 10; 9;"), "10");
    assert_eq!(inspect("9; return 2 * 5; 9;"), "10");
    assert_eq!(inspect("if (10 > 1) { if (10 > 1) { return 10; } return 1; }"), "10");
}

#[test]
fn declarations_bind_names() {
    assert_eq!(inspect("so a = 5; a;"), "5");
    assert_eq!(inspect("so a = 5 * 5; a;"), "25");
    assert_eq!(inspect("so a = 5; so b = a; b;"), "5");
    assert_eq!(inspect("so a = 5; so b = a; so c = a + b + 5; c;"), "15");
    assert_eq!(inspect("so a = 1;"), "null");
}

#[test]
fn functions_and_closures() {
    assert_eq!(inspect("so identity = fn(x) { x; }; identity(5);"), "5");
    assert_eq!(inspect("so double = fn(x) { x * 2; }; double(5);"), "10");
    assert_eq!(inspect("so add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));"), "20");
    assert_eq!(inspect("fn(x) { x; }(5)"), "5");
    assert_eq!(inspect("so newAdder = fn(x) { fn(y) { x + y } }; so addTwo = newAdder(2); addTwo(2);"),
               "4");
    assert_eq!(inspect("so compose = fn(f, g) { fn(x) { g(f(x)) } }; \
                        so inc = fn(x) { x + 1 }; \
                        so double = fn(x) { x * 2 }; \
                        compose(inc, double)(5);"),
               "12");
}

#[test]
fn recursion_reaches_outer_bindings() {
    assert_eq!(inspect("so fib = fn(n) { if (n < 2) { return n; } fib(n - 1) + fib(n - 2); }; \
                        fib(10);"),
               "55");
}

#[test]
fn string_length_counts_bytes() {
    assert_eq!(inspect(r#"len("")"#), "0");
    assert_eq!(inspect(r#"len("four")"#), "4");
    assert_eq!(inspect(r#"len("йцукен")"#), "12");
}

#[test]
fn array_literals_and_indexing() {
    assert_eq!(inspect("[1, 2 * 2, 3 + 3]"), "[1, 4, 6]");
    assert_eq!(inspect("[]"), "[]");
    assert_eq!(inspect("[1, 2, 3][0]"), "1");
    assert_eq!(inspect("[1, 2, 3][1 + 1]"), "3");
    assert_eq!(inspect("so arr = [1, 2, 3]; arr[2];"), "3");
    assert_eq!(inspect("so arr = [1, 2, 3]; arr[0] + arr[1] + arr[2];"), "6");
}

#[test]
fn array_index_out_of_range_is_null() {
    assert_eq!(inspect("[1, 2, 3][3]"), "null");
    assert_eq!(inspect("[1, 2, 3][-1]"), "null");
    assert_eq!(inspect("[][0]"), "null");
}

#[test]
fn hash_literals_and_indexing() {
    assert_eq!(inspect(r#"{"one": 10 - 9, "two": 1 + 1}["two"]"#), "2");
    assert_eq!(inspect(r#"so key = "one"; {"one": 5}[key]"#), "5");
    assert_eq!(inspect("{true: 5}[true]"), "5");
    assert_eq!(inspect("{false: 5}[false]"), "5");
    assert_eq!(inspect("{5: 5}[5]"), "5");
    assert_eq!(inspect("{1 + 1: 2}[2]"), "2");
    assert_eq!(inspect(r#"{"a": 1}"#), "{a: 1}");
    assert_eq!(inspect("{}"), "{}");
}

#[test]
fn hash_misses_are_null() {
    assert_eq!(inspect(r#"{"foo": 5}["bar"]"#), "null");
    assert_eq!(inspect(r#"{}["foo"]"#), "null");
}

#[test]
fn duplicate_hash_keys_last_wins() {
    assert_eq!(inspect(r#"{"a": 1, "a": 2}["a"]"#), "2");
    assert_eq!(inspect(r#"{1: "x", 1: "y"}[1]"#), "y");
}

#[test]
fn builtin_array_functions() {
    assert_eq!(inspect("len([1, 2, 3])"), "3");
    assert_eq!(inspect("len([])"), "0");
    assert_eq!(inspect("first([1, 2, 3])"), "1");
    assert_eq!(inspect("first([])"), "null");
    assert_eq!(inspect("last([1, 2, 3])"), "3");
    assert_eq!(inspect("last([])"), "null");
    assert_eq!(inspect("rest([1, 2, 3])"), "[2, 3]");
    assert_eq!(inspect("rest(rest([1, 2, 3]))"), "[3]");
    assert_eq!(inspect("rest([1])"), "[]");
    assert_eq!(inspect("rest([])"), "null");
    assert_eq!(inspect("push([], 1)"), "[1]");
    assert_eq!(inspect("push([1], 2)"), "[1, 2]");
    assert_eq!(inspect("so a = [1]; push(a, 2); a;"), "[1]");
}

#[test]
fn user_bindings_shadow_builtins() {
    assert_eq!(inspect("so len = fn(x) { 0 }; len([1, 2, 3])"), "0");
}

#[test]
fn puts_writes_inspections_without_separator() {
    let env = Environment::new();
    let mut out = Vec::new();

    let value = run(r#"puts("a", 1, [1, 2], "\n")"#, None, &env, &mut out).unwrap();

    assert_eq!(value, Value::Null);
    assert_eq!(String::from_utf8(out).unwrap(), "a1[1, 2]\n");
}

#[test]
fn function_inspection_uses_the_printed_form() {
    assert_eq!(inspect("fn(x, y) { x + y; }"), "fn(x, y){(x + y)}");
    assert_eq!(inspect("len"), "builtin function");
}

#[test]
fn environment_persists_across_runs() {
    let env = Environment::new();
    let mut out = std::io::sink();

    run("so x = 1;", None, &env, &mut out).unwrap();
    let value = run("x + 1", None, &env, &mut out).unwrap();

    assert_eq!(value.to_string(), "2");
}

#[test]
fn runtime_error_taxonomy() {
    assert_eq!(error_message("5 + true;"), "type mismatch: [integer] + [boolean]");
    assert_eq!(error_message("5 + true; 5;"), "type mismatch: [integer] + [boolean]");
    assert_eq!(error_message("-true"), "unknown operation: -[boolean]");
    assert_eq!(error_message("true + false"), "unknown operation: [boolean] + [boolean]");
    assert_eq!(error_message("5; true + false; 5"),
               "unknown operation: [boolean] + [boolean]");
    assert_eq!(error_message(r#""Hello" - "World""#),
               "unknown operation: [string] - [string]");
    assert_eq!(error_message(r#""a" == "a""#), "unknown operation: [string] == [string]");
    assert_eq!(error_message("foobar"), "identifier 'foobar' not found");
    assert_eq!(error_message(r#"{"name": "M"}[fn(x){x}]"#),
               "[function] is unusable as hash key");
    assert_eq!(error_message("{[1]: 2}"), "[array] is unusable as hash key");
    assert_eq!(error_message("5[0]"), "index operator is not supported on [integer]");
    assert_eq!(error_message("[1, 2][\"a\"]"), "index operator is not supported on [array]");
    assert_eq!(error_message("so x = 5; x(1);"), "[integer] is not a function");
    assert_eq!(error_message("if (10 > 1) { true + false; }"),
               "unknown operation: [boolean] + [boolean]");
}

#[test]
fn arity_errors_pluralize_in_english() {
    assert_eq!(error_message("so f = fn(x, y) { x }; f(1);"), "expected 2 arguments, got 1");
    assert_eq!(error_message("fn(x) { x }()"), "expected 1 argument, got 0");
    assert_eq!(error_message(r#"len("one", "two")"#), "expected 1 argument, got 2");
    assert_eq!(error_message("push([1])"), "expected 2 arguments, got 1");
}

#[test]
fn builtin_argument_kind_errors() {
    assert_eq!(error_message("len(1)"), "'len' does not support [integer]");
    assert_eq!(error_message("first(1)"), "'first' does not support [integer]");
    assert_eq!(error_message("last(\"abc\")"), "'last' does not support [string]");
    assert_eq!(error_message("rest(true)"), "'rest' does not support [boolean]");
    assert_eq!(error_message("push(1, 1)"), "'push' does not support [integer]");
}

#[test]
fn argument_errors_short_circuit_calls() {
    assert_eq!(error_message("so f = fn(x, y) { x }; f(boom, 1);"),
               "identifier 'boom' not found");
    assert_eq!(error_message("[1, nope, 3]"), "identifier 'nope' not found");
}

#[test]
fn division_by_zero_is_reported_not_a_panic() {
    assert!(eval_source("1 / 0").is_err());
    assert!(eval_source("so x = 0; 10 / x").is_err());
}

#[test]
fn runtime_diagnostics_point_at_source() {
    let env = Environment::new();
    let error = run("so x = foo;", Some("script.gorb"), &env, &mut std::io::sink()).unwrap_err();
    let rendered = error.to_string();

    assert!(rendered.starts_with("error: identifier 'foo' not found"), "got {rendered}");
    assert!(rendered.contains("script.gorb:1:8"), "got {rendered}");
    assert!(rendered.contains("so x = foo;"), "got {rendered}");
    assert!(rendered.contains("^^^ here"), "got {rendered}");
}

#[test]
fn syntax_errors_skip_evaluation() {
    let env = Environment::new();
    let error = run("so = 5; boom()", None, &env, &mut std::io::sink()).unwrap_err();

    match error {
        RunError::Syntax(errors) => assert!(!errors.is_empty()),
        RunError::Runtime(error) => panic!("evaluation ran despite syntax errors: {error}"),
    }
}

#[test]
fn demo_scripts_run_cleanly() {
    let mut count = 0;

    for entry in WalkDir::new("demos").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| {
                                          e.path().extension().is_some_and(|ext| ext == "gorb")
                                      })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("failed to read {path:?}: {e}"));

        count += 1;
        let env = Environment::new();
        let mut out = Vec::new();
        if let Err(error) = run(&source, path.to_str(), &env, &mut out) {
            panic!("demo {path:?} failed:\n{error}");
        }
    }

    assert!(count > 0, "no demo scripts found in demos/");
}
