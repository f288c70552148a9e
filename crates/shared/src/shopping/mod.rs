use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};
use std::{collections::HashMap, fmt};

/// Ingredient name to measures, keeping first-insertion order for both names and measures.
///
/// Serialized as a JSON object whose key order is the insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IngredientList {
    entries: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl IngredientList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Measures of `name`, creating an empty list at the end when absent.
    pub fn entry(&mut self, name: impl Into<String>) -> &mut Vec<String> {
        let name = name.into();
        let position = match self.index.get(&name) {
            Some(position) => *position,
            None => {
                self.entries.push((name.to_owned(), Vec::new()));
                self.index.insert(name, self.entries.len() - 1);
                self.entries.len() - 1
            }
        };

        &mut self.entries[position].1
    }

    /// Ensures `name` exists and appends `measure` when it is non-blank and not already
    /// listed. The measure is trimmed; comparison is exact.
    pub fn merge(&mut self, name: impl Into<String>, measure: &str) {
        let measures = self.entry(name);
        let measure = measure.trim();
        if !measure.is_empty() && !measures.iter().any(|m| m == measure) {
            measures.push(measure.to_owned());
        }
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.index
            .get(name)
            .map(|position| self.entries[*position].1.as_slice())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        let position = self.index.remove(name)?;
        let (_, measures) = self.entries.remove(position);
        for (_, p) in self.index.iter_mut() {
            if *p > position {
                *p -= 1;
            }
        }

        Some(measures)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, measures)| (name.as_str(), measures.as_slice()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl IntoIterator for IngredientList {
    type Item = (String, Vec<String>);
    type IntoIter = std::vec::IntoIter<(String, Vec<String>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for IngredientList
where
    K: Into<String>,
    V: IntoIterator,
    V::Item: AsRef<str>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut list = Self::new();
        for (name, measures) in iter {
            let name = name.into();
            list.entry(name.to_owned());
            for measure in measures {
                list.merge(name.to_owned(), measure.as_ref());
            }
        }

        list
    }
}

impl Serialize for IngredientList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, measures) in &self.entries {
            map.serialize_entry(name, measures)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for IngredientList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ListVisitor;

        impl<'de> Visitor<'de> for ListVisitor {
            type Value = IngredientList;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of ingredient names to measure lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut list = IngredientList::new();
                while let Some((name, measures)) = access.next_entry::<String, Vec<String>>()? {
                    list.entry(name.to_owned());
                    for measure in measures {
                        list.merge(name.to_owned(), &measure);
                    }
                }

                Ok(list)
            }
        }

        deserializer.deserialize_map(ListVisitor)
    }
}
