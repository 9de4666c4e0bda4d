//! Individuals and the roster.

use std::collections::HashMap;

use crate::config::Config;
use crate::error::DataIntegrityError;
use crate::table::Table;

/// One person on the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    /// Unique identifier (student number).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Category names, most preferred first.
    pub preferences: Vec<String>,
}

impl Individual {
    pub fn new<I, S>(id: impl Into<String>, name: impl Into<String>, preferences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            preferences: preferences.into_iter().map(Into::into).collect(),
        }
    }
}

/// Individuals in roster row order.
///
/// Row order matters: it is the first-come-first-served tie-break when a
/// limited category is oversubscribed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    individuals: Vec<Individual>,
}

impl Roster {
    /// Wraps individuals without validating them. [`Roster::validate`] (or
    /// the allocator) checks them against a configuration.
    pub fn new(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    /// Reads a roster table using the configuration's column bindings.
    ///
    /// Requires the name column, the identifier column, and one preference
    /// column per configured category. The result is validated.
    pub fn from_table(table: &Table, config: &Config) -> Result<Self, DataIntegrityError> {
        const TABLE: &str = "roster";
        let bindings = config.bindings();

        let name_col = table.require_column(TABLE, &bindings.name)?;
        let id_col = table.require_column(TABLE, &bindings.id)?;
        let pref_cols = (1..=config.category_count())
            .map(|rank| table.require_column(TABLE, &bindings.preference_column(rank)))
            .collect::<Result<Vec<_>, _>>()?;

        let individuals = table
            .rows()
            .iter()
            .map(|row| {
                Individual::new(
                    cell(row, id_col),
                    cell(row, name_col),
                    pref_cols.iter().map(|&col| cell(row, col)),
                )
            })
            .collect();

        let roster = Self { individuals };
        roster.validate(config)?;
        Ok(roster)
    }

    /// Individuals in row order.
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Checks identifiers and preferences against `config`.
    pub fn validate(&self, config: &Config) -> Result<(), DataIntegrityError> {
        self.preference_table(config).map(|_| ())
    }

    /// Resolves every preference to its category's position in
    /// configuration order, validating as it goes.
    ///
    /// Row `r`, column `k` of the result is the category index of
    /// individual `r`'s rank-`k+1` preference.
    pub(crate) fn preference_table(
        &self,
        config: &Config,
    ) -> Result<Vec<Vec<usize>>, DataIntegrityError> {
        let expected = config.category_count();
        let mut seen: HashMap<&str, usize> = HashMap::with_capacity(self.individuals.len());

        self.individuals
            .iter()
            .enumerate()
            .map(|(row, person)| {
                if person.id.trim().is_empty() {
                    return Err(DataIntegrityError::MissingIdentifier { table: "roster", row });
                }
                if let Some(&first_row) = seen.get(person.id.as_str()) {
                    return Err(DataIntegrityError::DuplicateIdentifier {
                        id: person.id.clone(),
                        first_row,
                        row,
                    });
                }
                seen.insert(person.id.as_str(), row);

                if person.preferences.len() != expected {
                    return Err(DataIntegrityError::PreferenceCount {
                        id: person.id.clone(),
                        expected,
                        actual: person.preferences.len(),
                    });
                }

                person
                    .preferences
                    .iter()
                    .enumerate()
                    .map(|(k, value)| {
                        let rank = k + 1;
                        if value.trim().is_empty() {
                            return Err(DataIntegrityError::BlankPreference {
                                id: person.id.clone(),
                                rank,
                            });
                        }
                        config.position(value).ok_or_else(|| {
                            DataIntegrityError::UnknownPreference {
                                id: person.id.clone(),
                                rank,
                                value: value.clone(),
                            }
                        })
                    })
                    .collect::<Result<Vec<usize>, _>>()
            })
            .collect()
    }
}

/// Trimmed cell text; out-of-range columns read as blank.
pub(crate) fn cell(row: &[String], col: usize) -> &str {
    row.get(col).map_or("", |s| s.trim())
}

impl FromIterator<Individual> for Roster {
    fn from_iter<T: IntoIterator<Item = Individual>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
