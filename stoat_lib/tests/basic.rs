use stoat_lib::{config::Config, context::Context, structures::literal::Literal};

fn close(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-12
}

mod basic {
    use super::*;

    #[test]
    fn forced_choice() {
        let mut ctx = Context::from_config(Config::default());
        let x = ctx.fresh_choice();

        assert!(ctx.add_clause(vec![Literal::new(x, true)]).is_ok());

        assert_eq!(ctx.solve(), 1.0);
    }

    #[test]
    fn forced_chance() {
        let mut ctx = Context::from_config(Config::default());
        let x = ctx.fresh_chance(0.3).expect("a probability");

        assert!(ctx.add_clause(vec![Literal::new(x, true)]).is_ok());

        assert_eq!(ctx.solve(), 0.3);
    }

    #[test]
    fn forced_chance_negative() {
        let mut ctx = Context::from_config(Config::default());
        let x = ctx.fresh_chance(0.3).expect("a probability");

        assert!(ctx.add_clause(vec![!Literal::new(x, true)]).is_ok());

        assert!(close(ctx.solve(), 0.7));
    }

    #[test]
    fn contradiction() {
        let mut ctx = Context::from_config(Config::default());
        let x = ctx.fresh_choice();

        assert!(ctx.add_clause(vec![Literal::new(x, true)]).is_ok());
        assert!(ctx.add_clause(vec![Literal::new(x, false)]).is_ok());

        assert_eq!(ctx.solve(), 0.0);
    }

    #[test]
    fn complementary_pair() {
        let mut ctx = Context::from_config(Config::default());
        let x = ctx.fresh_choice();
        let y = ctx.fresh_choice();

        assert!(ctx.add_clause(vec![Literal::new(x, true), Literal::new(y, true)]).is_ok());
        assert!(ctx.add_clause(vec![Literal::new(x, false), Literal::new(y, false)]).is_ok());

        assert_eq!(ctx.solve(), 1.0);
    }

    #[test]
    fn vacuous_satisfaction() {
        let mut ctx = Context::from_config(Config::default());
        ctx.fresh_choice();
        ctx.fresh_chance(0.1).expect("a probability");

        assert_eq!(ctx.solve(), 1.0);
    }

    #[test]
    fn vacuous_satisfaction_without_variables() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(ctx.solve(), 1.0);
    }

    #[test]
    fn empty_clause() {
        let mut ctx = Context::from_config(Config::default());
        ctx.fresh_choice();

        assert!(ctx.add_clause(vec![]).is_ok());

        assert_eq!(ctx.solve(), 0.0);
    }

    #[test]
    fn chance_pair_expectation() {
        let mut ctx = Context::from_config(Config::default());
        let x = ctx.fresh_chance(0.5).expect("a probability");
        let y = ctx.fresh_chance(0.5).expect("a probability");

        assert!(ctx.add_clause(vec![Literal::new(x, true), Literal::new(y, true)]).is_ok());

        // satisfied unless both resolve false
        assert_eq!(ctx.solve(), 0.75);
    }

    #[test]
    fn choice_observes_chance() {
        let mut ctx = Context::from_config(Config::default());
        let y = ctx.fresh_chance(0.25).expect("a probability");
        let x = ctx.fresh_choice();

        assert!(ctx.add_clause(vec![Literal::new(y, true), Literal::new(x, true)]).is_ok());

        // the choice variable is quantified after the chance variable, so valuing it true rescues every outcome
        assert_eq!(ctx.solve(), 1.0);
    }

    #[test]
    fn unit_forces_before_chance() {
        let mut ctx = Context::from_config(Config::default());
        let x = ctx.fresh_choice();
        let y = ctx.fresh_chance(0.4).expect("a probability");

        assert!(ctx.add_clause(vec![Literal::new(x, false)]).is_ok());
        assert!(ctx.add_clause(vec![Literal::new(x, true), Literal::new(y, true)]).is_ok());

        assert_eq!(ctx.solve(), 0.4);
    }

    #[test]
    fn repeat_solves_agree() {
        let mut ctx = Context::from_config(Config::default());
        let x = ctx.fresh_choice();
        let y = ctx.fresh_chance(0.6).expect("a probability");

        assert!(ctx.add_clause(vec![Literal::new(x, false), Literal::new(y, true)]).is_ok());
        assert!(ctx.add_clause(vec![Literal::new(x, true)]).is_ok());

        // a solve works on a clone of the pristine formula
        let first = ctx.solve();
        let second = ctx.solve();
        assert_eq!(first, second);
    }
}

mod build {
    use super::*;
    use stoat_lib::types::err;

    #[test]
    fn chance_probability_out_of_range() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(ctx.fresh_chance(1.5), Err(err::BuildError::ProbabilityRange));
        assert_eq!(ctx.fresh_chance(-0.5), Err(err::BuildError::ProbabilityRange));
    }

    #[test]
    fn clause_over_undeclared_variable() {
        let mut ctx = Context::from_config(Config::default());
        ctx.fresh_choice();

        assert_eq!(
            ctx.add_clause(vec![Literal::new(7, true)]),
            Err(err::BuildError::OutOfRangeAtom)
        );
    }

    #[test]
    fn duplicate_literals_collapse() {
        let mut ctx = Context::from_config(Config::default());
        let x = ctx.fresh_choice();

        let xs = vec![Literal::new(x, true), Literal::new(x, true)];
        assert!(ctx.add_clause(xs).is_ok());

        assert_eq!(ctx.formula.clause(0).size(), 1);
        assert_eq!(ctx.solve(), 1.0);
    }

    #[test]
    fn both_polarities_survive() {
        let mut ctx = Context::from_config(Config::default());
        let x = ctx.fresh_chance(0.2).expect("a probability");

        let tautology = vec![Literal::new(x, true), Literal::new(x, false)];
        assert!(ctx.add_clause(tautology).is_ok());

        assert_eq!(ctx.formula.clause(0).size(), 2);
        assert_eq!(ctx.solve(), 1.0);
    }
}
