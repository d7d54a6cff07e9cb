/// Resolves form-field codes against the column names of a loaded table.
///
/// Spreadsheets often label a box with its description, e.g.
/// `"A7 (Commencement Date / Incorporation Date)"`. An exact name wins;
/// otherwise the first column that starts with the code followed by a space
/// or `(` is used.
#[derive(Debug, Clone)]
pub struct ColumnLookup {
    names: Vec<String>,
}

impl ColumnLookup {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names.into_iter().map(|n| n.as_ref().to_string()).collect(),
        }
    }

    pub fn resolve(&self, code: &str) -> Option<&str> {
        if let Some(exact) = self.names.iter().find(|name| name.as_str() == code) {
            return Some(exact.as_str());
        }
        self.names
            .iter()
            .find(|name| {
                name.strip_prefix(code)
                    .is_some_and(|rest| rest.starts_with(' ') || rest.starts_with('('))
            })
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_name_wins_over_prefix() {
        let lookup = ColumnLookup::new(["A1 (Name)", "A1"]);
        assert_eq!(lookup.resolve("A1"), Some("A1"));
    }

    #[test]
    fn described_column_resolves_by_code() {
        let lookup = ColumnLookup::new(["A7 (Commencement Date / Incorporation Date)", "A10"]);
        assert_eq!(
            lookup.resolve("A7"),
            Some("A7 (Commencement Date / Incorporation Date)")
        );
    }

    #[test]
    fn longer_code_is_not_a_prefix_match() {
        let lookup = ColumnLookup::new(["A10", "A11 Basis period"]);
        assert_eq!(lookup.resolve("A1"), None);
        assert_eq!(lookup.resolve("A11"), Some("A11 Basis period"));
    }
}
