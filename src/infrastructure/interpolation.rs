// Template interpolation for gauge prefix/suffix
use crate::application::collaborators::TemplateInterpolator;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::OnceLock;

static VARIABLE_REGEX: OnceLock<Regex> = OnceLock::new();

fn variable_regex() -> &'static Regex {
    VARIABLE_REGEX.get_or_init(|| {
        Regex::new(r"\$\{(\w+)\}|\$(\w+)").expect("variable pattern is a valid regex")
    })
}

/// Replaces whole `${name}` and `$name` tokens with variable values in a
/// single pass. Unknown variables are left as written and substituted values
/// are never expanded again.
#[derive(Debug, Clone, Default)]
pub struct VariableInterpolator {
    vars: HashMap<String, String>,
}

impl VariableInterpolator {
    pub fn new(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }
}

impl TemplateInterpolator for VariableInterpolator {
    fn interpolate(&self, template: &str) -> String {
        variable_regex()
            .replace_all(template, |caps: &Captures| {
                let name = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
                match self.vars.get(name) {
                    Some(value) => value.clone(),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}
