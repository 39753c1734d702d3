use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use math_crunch::core::{config::DEFAULT_QUESTIONS_PER_LEVEL, QuizConfig};

pub fn cli() -> Command {
    Command::new("math_crunch")
        .about("A multiple-choice math quiz that gets harder as you go")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("seed")
            .short('s')
            .long("seed")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help("Seed for a reproducible quiz. Drawn from OS entropy if omitted."))

        .arg(Arg::new("questions_per_level")
            .short('q')
            .long("questions-per-level")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("Questions asked at each level before the difficulty ramps up.
Default: {DEFAULT_QUESTIONS_PER_LEVEL}")))

        .arg(Arg::new("verbose")
            .short('v')
            .long("verbose")
            .action(ArgAction::Count)
            .help("Log more to stderr. Repeat for more detail (info, debug, trace)."))
}

pub fn config_from_args(args: &ArgMatches) -> QuizConfig {
    let mut config = QuizConfig::default();

    if let Some(count) = args.get_one::<usize>("questions_per_level") {
        config = config.with_questions_per_level(*count);
    }

    if let Some(seed) = args.get_one::<u64>("seed") {
        config = config.with_seed(*seed);
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let matches = cli().get_matches_from(["math_crunch"]);
        let config = config_from_args(&matches);

        assert_eq!(config, QuizConfig::default());
        assert_eq!(matches.get_count("verbose"), 0);
    }

    #[test]
    fn test_overrides() {
        let matches = cli().get_matches_from(["math_crunch", "--seed", "42", "-q", "3", "-vv"]);
        let config = config_from_args(&matches);

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.questions_per_level, 3);
        assert_eq!(matches.get_count("verbose"), 2);
    }

    #[test]
    fn test_rejects_non_numeric_seed() {
        assert!(cli().try_get_matches_from(["math_crunch", "--seed", "abc"]).is_err());
    }

    #[test]
    fn test_huge_question_count_fails_validation() {
        let huge = usize::MAX.to_string();
        let matches = cli().get_matches_from(["math_crunch", "-q", huge.as_str()]);
        let config = config_from_args(&matches);

        assert_eq!(config.questions_per_level, usize::MAX);
        assert!(matches!(
            config.validate(),
            Err(math_crunch::QuizError::InvalidQuestionCount(usize::MAX))
        ));
    }
}
