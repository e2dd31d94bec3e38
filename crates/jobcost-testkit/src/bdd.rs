//! Given/When/Then harness for suggestion workflow tests.
//!
//! Steps are plain function pointers sharing a [`ScenarioContext`]. A failing
//! `when` or `then` step stops the scenario and its message is prefixed with
//! the step that produced it.

use std::collections::HashMap;

/// State carried between the steps of one scenario.
#[derive(Debug, Default)]
pub struct ScenarioContext {
    /// Names, payloads, error text
    pub strings: HashMap<String, String>,
    /// Counts and numbers (sample number, call count, group count)
    pub numbers: HashMap<String, u64>,
    pub flags: HashMap<String, bool>,
}

impl ScenarioContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_string(mut self, key: &str, value: &str) -> Self {
        self.strings.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_number(mut self, key: &str, value: u64) -> Self {
        self.numbers.insert(key.to_string(), value);
        self
    }

    pub fn with_flag(mut self, key: &str, value: bool) -> Self {
        self.flags.insert(key.to_string(), value);
        self
    }

    pub fn string(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    pub fn number(&self, key: &str) -> Option<u64> {
        self.numbers.get(key).copied()
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        self.flags.get(key).copied()
    }
}

pub type GivenStep = fn(&mut ScenarioContext);
pub type WhenStep = fn(&mut ScenarioContext) -> Result<(), String>;
pub type ThenStep = fn(&ScenarioContext) -> Result<(), String>;

/// A named scenario built step by step.
pub struct Scenario {
    pub name: String,
    given: Vec<(&'static str, GivenStep)>,
    when: Vec<(&'static str, WhenStep)>,
    then: Vec<(&'static str, ThenStep)>,
}

impl Scenario {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            given: Vec::new(),
            when: Vec::new(),
            then: Vec::new(),
        }
    }

    pub fn given(mut self, description: &'static str, step: GivenStep) -> Self {
        self.given.push((description, step));
        self
    }

    pub fn when(mut self, description: &'static str, step: WhenStep) -> Self {
        self.when.push((description, step));
        self
    }

    pub fn then(mut self, description: &'static str, step: ThenStep) -> Self {
        self.then.push((description, step));
        self
    }

    /// Number of steps across all three phases.
    pub fn step_count(&self) -> usize {
        self.given.len() + self.when.len() + self.then.len()
    }

    /// Runs every step on a fresh context.
    pub fn run(&self) -> Result<(), String> {
        self.run_with(ScenarioContext::new()).map(|_| ())
    }

    /// Runs every step starting from `ctx` and returns the final context.
    pub fn run_with(&self, mut ctx: ScenarioContext) -> Result<ScenarioContext, String> {
        eprintln!("Scenario: {}", self.name);

        for (desc, step) in &self.given {
            eprintln!("  Given {desc}");
            step(&mut ctx);
        }
        for (desc, step) in &self.when {
            eprintln!("  When {desc}");
            step(&mut ctx).map_err(|e| format!("[{}] when {desc}: {e}", self.name))?;
        }
        for (desc, step) in &self.then {
            eprintln!("  Then {desc}");
            step(&ctx).map_err(|e| format!("[{}] then {desc}: {e}", self.name))?;
        }
        Ok(ctx)
    }
}

/// Assertion helpers returning step-friendly `Result<_, String>`.
pub mod assertions {
    use std::fmt::Debug;

    pub fn assert_present<T: Debug>(option: Option<T>, name: &str) -> Result<T, String> {
        option.ok_or_else(|| format!("expected {name} to be present"))
    }

    pub fn assert_eq<T: Debug + PartialEq>(actual: T, expected: T, name: &str) -> Result<(), String> {
        if actual == expected {
            Ok(())
        } else {
            Err(format!("expected {name} = {expected:?}, got {actual:?}"))
        }
    }

    pub fn assert_true(flag: bool, name: &str) -> Result<(), String> {
        if flag {
            Ok(())
        } else {
            Err(format!("expected {name} to hold"))
        }
    }

    pub fn assert_false(flag: bool, name: &str) -> Result<(), String> {
        assert_true(!flag, &format!("not {name}"))
    }

    pub fn assert_contains(haystack: &str, needle: &str, name: &str) -> Result<(), String> {
        if haystack.contains(needle) {
            Ok(())
        } else {
            Err(format!("expected {name} to contain {needle:?}; was {haystack:?}"))
        }
    }
}
