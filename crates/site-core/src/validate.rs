//! Contact form validation. Nothing is submitted anywhere; the result only
//! says which fields to flag.

use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
}

#[derive(Clone, Debug)]
pub struct FormField {
    pub name: String,
    pub value: String,
    pub required: bool,
    pub kind: FieldKind,
}

impl FormField {
    pub fn new(name: &str, value: &str, required: bool, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            required,
            kind,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Indices of fields to flag, ascending.
    pub errors: SmallVec<[usize; 4]>,
    /// Indices of checked fields that passed and should lose any old flag.
    pub passed: SmallVec<[usize; 4]>,
}

impl ValidationReport {
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// `local@domain.tld`: exactly one `@`, no whitespace, non-empty local part,
/// and a `.` inside the domain with at least one character on each side.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

pub fn validate(fields: &[FormField]) -> ValidationReport {
    let mut report = ValidationReport::default();
    for (i, field) in fields.iter().enumerate() {
        if !field.required {
            continue;
        }
        if field.value.trim().is_empty() {
            report.errors.push(i);
        } else {
            report.passed.push(i);
        }
    }

    // Only the first email field is checked, and only when it has content.
    let email = fields
        .iter()
        .enumerate()
        .find(|(_, f)| f.kind == FieldKind::Email);
    if let Some((i, field)) = email {
        if !field.value.is_empty() {
            if is_valid_email(&field.value) {
                if !report.errors.contains(&i) && !report.passed.contains(&i) {
                    report.passed.push(i);
                }
            } else {
                report.passed.retain(|p| *p != i);
                if !report.errors.contains(&i) {
                    report.errors.push(i);
                }
            }
        }
    }

    report.errors.sort_unstable();
    report.passed.sort_unstable();
    report
}

/// Name/value pairs for logging a submission that passed validation.
pub fn form_summary(fields: &[FormField]) -> Vec<(&str, &str)> {
    fields
        .iter()
        .filter(|f| !f.name.is_empty())
        .map(|f| (f.name.as_str(), f.value.as_str()))
        .collect()
}
