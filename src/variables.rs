use std::collections::HashMap;
use std::fmt;

/// Run-scoped mapping from identifier to its last assigned value.
///
/// Bindings are reported in the order their names were first assigned;
/// reassignment updates the value in place.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Variables {
    bindings: Vec<(String, i32)>,
    slots: HashMap<String, usize>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<i32> {
        self.slots.get(name).map(|&slot| self.bindings[slot].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    pub fn set(&mut self, name: &str, value: i32) {
        match self.slots.get(name) {
            Some(&slot) => self.bindings[slot].1 = value,
            None => {
                self.slots.insert(name.to_owned(), self.bindings.len());
                self.bindings.push((name.to_owned(), value));
            },
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl fmt::Display for Variables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.iter() {
            writeln!(f, "{name} = {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_unassigned() {
        let variables = Variables::new();
        assert_eq!(variables.get("x"), None);
        assert!(!variables.contains("x"));
        assert!(variables.is_empty());
    }

    #[test]
    fn test_reassignment_keeps_first_position() {
        let mut variables = Variables::new();
        variables.set("x", 2);
        variables.set("y", 5);
        variables.set("x", 5);

        let bindings: Vec<_> = variables.iter().collect();
        assert_eq!(bindings, vec![("x", 5), ("y", 5)]);
        assert_eq!(variables.len(), 2);
    }

    #[test]
    fn test_display() {
        let mut variables = Variables::new();
        variables.set("b", -1);
        variables.set("a", 3);
        assert_eq!(variables.to_string(), "b = -1\na = 3\n");
    }
}
