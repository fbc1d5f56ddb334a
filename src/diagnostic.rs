// Structured diagnostics with stable error codes
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Diagnostic {
    pub code: &'static str,
    pub title: String,
    pub fields: Vec<(String, String)>,
    pub hint: Option<String>,
}

impl Diagnostic {
    pub fn new(code: &'static str, title: String) -> Self {
        Self {
            code,
            title,
            fields: Vec::new(),
            hint: None,
        }
    }

    pub fn with_field(mut self, key: String, value: String) -> Self {
        self.fields.push((key, value));
        self
    }

    pub fn with_hint(mut self, hint: String) -> Self {
        self.hint = Some(hint);
        self
    }
}

pub fn format_diagnostic(diagnostic: &Diagnostic) -> String {
    let mut output = String::new();

    output.push_str(&format!("Error [{}]\n", diagnostic.code));
    output.push_str(&format!("{}\n", diagnostic.title));

    if !diagnostic.fields.is_empty() {
        output.push('\n');
        for (key, value) in &diagnostic.fields {
            output.push_str(&format!("{}: {}\n", key, value));
        }
    }

    if let Some(hint) = &diagnostic.hint {
        output.push('\n');
        output.push_str(&format!("hint: {}\n", hint));
    }

    output
}

pub fn print_diagnostic(diagnostic: &Diagnostic) {
    eprintln!("{}", format_diagnostic(diagnostic));
}
