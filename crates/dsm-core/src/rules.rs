use regex::Regex;

/// How a rule finds its target text.
#[derive(Debug, Clone)]
pub enum Pattern {
    Regex(Regex),
    Literal(String),
}

/// One substitution of the keyword migration: every occurrence of the
/// pattern becomes the fixed replacement string.
#[derive(Debug, Clone)]
pub struct RewriteRule {
    pattern: Pattern,
    replacement: String,
}

impl RewriteRule {
    pub fn regex(pattern: &str, replacement: &str) -> Result<Self, String> {
        let re = Regex::new(pattern).map_err(|e| e.to_string())?;
        Ok(Self {
            pattern: Pattern::Regex(re),
            replacement: replacement.to_string(),
        })
    }

    pub fn literal(needle: &str, replacement: &str) -> Self {
        Self {
            pattern: Pattern::Literal(needle.to_string()),
            replacement: replacement.to_string(),
        }
    }

    /// Replace every occurrence in `text`.
    pub fn apply(&self, text: &str) -> String {
        match &self.pattern {
            Pattern::Regex(re) => re.replace_all(text, self.replacement.as_str()).into_owned(),
            Pattern::Literal(needle) => text.replace(needle.as_str(), &self.replacement),
        }
    }
}

/// Apply `rules` to `text` in order, each as a global substitution.
pub fn apply_rules(text: &str, rules: &[RewriteRule]) -> String {
    let mut out = text.to_string();
    for rule in rules {
        out = rule.apply(&out);
    }
    out
}

/// The fixed keyword-migration rule set, in application order.
///
/// `RapidFire(<n>)` becomes `RapidFire(Set(1), "")`; the old numeric
/// argument is not carried into the replacement.
pub fn migration_rules() -> Result<Vec<RewriteRule>, String> {
    Ok(vec![RewriteRule::regex(
        r"RapidFire\([0-9]+\)",
        r#"RapidFire(Set(1), "")"#,
    )?])
}
