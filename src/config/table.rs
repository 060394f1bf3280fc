use std::num::NonZeroU32;

use super::types::SheetSpec;
use crate::error::CellboxError;

/// Validated mapping from sheet name to column count, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetTable {
    entries: Vec<(String, NonZeroU32)>,
}

impl SheetTable {
    /// Build a table, rejecting zero column counts and duplicate names
    pub fn new(specs: &[SheetSpec]) -> Result<Self, CellboxError> {
        let mut table = Self {
            entries: Vec::with_capacity(specs.len()),
        };
        for spec in specs {
            if table.entries.iter().any(|(name, _)| *name == spec.name) {
                return Err(CellboxError::DuplicateSheet(spec.name.clone()));
            }
            let columns = NonZeroU32::new(spec.columns)
                .ok_or_else(|| CellboxError::ZeroColumns(spec.name.clone()))?;
            table.entries.push((spec.name.clone(), columns));
        }
        Ok(table)
    }

    /// Column count for `name`
    pub fn columns(&self, name: &str) -> Result<NonZeroU32, CellboxError> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| *c)
            .ok_or_else(|| CellboxError::UnknownSheet(name.to_string()))
    }

    /// Add or replace an entry, keeping the position of a replaced one
    pub fn set(&mut self, name: &str, columns: NonZeroU32) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = columns,
            None => self.entries.push((name.to_string(), columns)),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_sheets;

    #[test]
    fn test_lookup_known_sheets() {
        let table = SheetTable::new(&default_sheets()).unwrap();

        assert_eq!(table.names().count(), 8);
        assert_eq!(table.columns("gloves").unwrap().get(), 5);
        assert_eq!(table.columns("helmets").unwrap().get(), 4);
    }

    #[test]
    fn test_unknown_sheet_is_error() {
        let table = SheetTable::new(&default_sheets()).unwrap();
        let err = table.columns("capes").unwrap_err();
        assert!(matches!(err, CellboxError::UnknownSheet(ref n) if n == "capes"));
    }

    #[test]
    fn test_zero_columns_rejected() {
        let err = SheetTable::new(&[SheetSpec::new("capes", 0)]).unwrap_err();
        assert!(matches!(err, CellboxError::ZeroColumns(ref n) if n == "capes"));
    }

    #[test]
    fn test_duplicate_rejected() {
        let specs = [SheetSpec::new("rings", 4), SheetSpec::new("rings", 5)];
        assert!(matches!(
            SheetTable::new(&specs),
            Err(CellboxError::DuplicateSheet(_))
        ));
    }

    #[test]
    fn test_set_overrides_in_place() {
        let mut table = SheetTable::new(&default_sheets()).unwrap();
        table.set("armors", NonZeroU32::new(6).unwrap());
        table.set("capes", NonZeroU32::new(3).unwrap());

        assert_eq!(table.columns("armors").unwrap().get(), 6);
        let names: Vec<_> = table.names().collect();
        assert_eq!(names[1], "armors");
        assert_eq!(names.last(), Some(&"capes"));
    }
}
