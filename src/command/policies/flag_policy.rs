#[derive(Debug)]
pub enum FlagDecision {
    /// Stop execution and just print usage()
    ShortCircuitUsage,
    /// Continue command execution
    Continue,
    /// Turn into an error
    Error(crate::errors::Error),
}

pub trait FlagRule {
    fn check(&self, args: &[String]) -> FlagDecision;
}

pub fn is_help_flag(token: &str) -> bool {
    token == "-h" || token == "--help"
}

/// Help flag at a fixed argument position.
pub struct HelpAtIdx(pub usize);
impl FlagRule for HelpAtIdx {
    fn check(&self, args: &[String]) -> FlagDecision {
        match args.get(self.0) {
            Some(tok) if is_help_flag(tok) => FlagDecision::ShortCircuitUsage,
            _ => FlagDecision::Continue,
        }
    }
}

/// Any other `-x` / `--xyz` token is rejected rather than read as a value.
/// Negative numbers are left alone so value validation can report them.
pub struct RejectUnknownFlags;
impl FlagRule for RejectUnknownFlags {
    fn check(&self, args: &[String]) -> FlagDecision {
        let unknown = args.iter().find(|a| {
            let looks_like_flag = a
                .strip_prefix('-')
                .and_then(|rest| rest.chars().next())
                .is_some_and(|c| c.is_ascii_alphabetic() || c == '-');
            looks_like_flag && !is_help_flag(a)
        });
        match unknown {
            Some(flag) => FlagDecision::Error(crate::errors::Error::parse(format!(
                "Unknown flag '{flag}'. Only -h is supported."
            ))),
            None => FlagDecision::Continue,
        }
    }
}

pub struct FlagPolicy {
    rules: Vec<Box<dyn FlagRule>>,
}
impl FlagPolicy {
    pub fn new(rules: Vec<Box<dyn FlagRule>>) -> Self {
        Self { rules }
    }
    pub fn none() -> Self {
        Self { rules: vec![] }
    }

    /// Help at any of `help_positions`, then unknown flags.
    pub fn standard(help_positions: &[usize]) -> Self {
        let mut rules: Vec<Box<dyn FlagRule>> = help_positions
            .iter()
            .map(|&idx| Box::new(HelpAtIdx(idx)) as Box<dyn FlagRule>)
            .collect();
        rules.push(Box::new(RejectUnknownFlags));
        Self::new(rules)
    }

    pub fn evaluate(&self, args: &[String]) -> FlagDecision {
        // First matching short-circuit wins; otherwise Continue.
        for r in &self.rules {
            match r.check(args) {
                FlagDecision::Continue => continue,
                other => return other,
            }
        }
        FlagDecision::Continue
    }
}
