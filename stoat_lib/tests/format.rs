use stoat_lib::{
    config::Config,
    context::Context,
    types::err::{BuildError, ParseError},
};

fn read(instance: &str) -> (Context, Result<(), BuildError>) {
    let mut ctx = Context::from_config(Config::default());
    let result = ctx.read_ssat(instance.as_bytes());
    (ctx, result)
}

mod sections {
    use super::*;

    #[test]
    fn a_complete_instance() {
        let instance = "\
variables
1 -1
2 0.5

clauses
1 2 0
-1 -2 0
";
        let (mut ctx, result) = read(instance);
        assert!(result.is_ok());

        assert_eq!(ctx.variable_db.count(), 2);
        assert_eq!(ctx.formula.clause_count(), 2);
        assert_eq!(ctx.solve(), 0.5);
    }

    #[test]
    fn preamble_lines_are_ignored() {
        let instance = "\
a remark on the instance

variables
1 0.25

another remark

clauses
-1 0
";
        let (mut ctx, result) = read(instance);
        assert!(result.is_ok());

        assert_eq!(ctx.variable_db.count(), 1);
        assert_eq!(ctx.solve(), 0.75);
    }

    #[test]
    fn clauses_may_end_at_the_file() {
        let instance = "\
variables
1 -1

clauses
1 0";
        let (mut ctx, result) = read(instance);
        assert!(result.is_ok());

        assert_eq!(ctx.solve(), 1.0);
    }

    #[test]
    fn ragged_whitespace() {
        let instance = "\
variables
1    -1
2  0.5

clauses
  1   2   0
";
        let (ctx, result) = read(instance);
        assert!(result.is_ok());

        assert_eq!(ctx.variable_db.count(), 2);
        assert_eq!(ctx.formula.clause(0).size(), 2);
    }

    #[test]
    fn an_instance_without_clauses() {
        let instance = "\
variables
1 -1
2 0.9
";
        let (mut ctx, result) = read(instance);
        assert!(result.is_ok());

        assert_eq!(ctx.formula.clause_count(), 0);
        assert_eq!(ctx.solve(), 1.0);
    }
}

mod fail_fast {
    use super::*;

    #[test]
    fn a_variable_line_without_its_pair() {
        let (_, result) = read("variables\n1 -1\n2\n");
        assert_eq!(result, Err(BuildError::Parse(ParseError::VariableDeclaration(3))));
    }

    #[test]
    fn a_variable_line_with_a_stray_token() {
        let (_, result) = read("variables\n1 -1 extra\n");
        assert_eq!(result, Err(BuildError::Parse(ParseError::VariableDeclaration(2))));
    }

    #[test]
    fn a_non_numeric_probability() {
        let (_, result) = read("variables\n1 oops\n");
        assert_eq!(result, Err(BuildError::Parse(ParseError::VariableDeclaration(2))));
    }

    #[test]
    fn a_declaration_index_out_of_step() {
        let (_, result) = read("variables\n2 -1\n");
        assert_eq!(result, Err(BuildError::Parse(ParseError::VariableIndex(2))));
    }

    #[test]
    fn a_probability_out_of_range() {
        let (_, result) = read("variables\n1 1.5\n");
        assert_eq!(result, Err(BuildError::Parse(ParseError::ProbabilityRange(2))));

        let (_, result) = read("variables\n1 -0.5\n");
        assert_eq!(result, Err(BuildError::Parse(ParseError::ProbabilityRange(2))));
    }

    #[test]
    fn a_clause_line_without_its_zero() {
        let (_, result) = read("variables\n1 -1\n\nclauses\n1\n");
        assert_eq!(result, Err(BuildError::Parse(ParseError::MissingZero(5))));
    }

    #[test]
    fn a_clause_line_with_tokens_after_its_zero() {
        let (_, result) = read("variables\n1 -1\n\nclauses\n1 0 -1\n");
        assert_eq!(result, Err(BuildError::Parse(ParseError::TrailingToken(5))));
    }

    #[test]
    fn a_non_numeric_clause_token() {
        let (_, result) = read("variables\n1 -1\n\nclauses\n1 x 0\n");
        assert_eq!(result, Err(BuildError::Parse(ParseError::ClauseToken(5))));
    }

    #[test]
    fn a_literal_naming_no_variable() {
        let (_, result) = read("variables\n1 -1\n\nclauses\n1 2 0\n");
        assert_eq!(result, Err(BuildError::Parse(ParseError::LiteralRange(5))));
    }

    #[test]
    fn nothing_settles_after_a_failure() {
        let instance = "\
variables
1 -1
2 oops

clauses
1 0
";
        let (ctx, result) = read(instance);
        assert!(result.is_err());

        assert_eq!(ctx.variable_db.count(), 1);
        assert_eq!(ctx.formula.clause_count(), 0);
    }
}
