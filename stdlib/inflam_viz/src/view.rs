use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered mapping from statistic name to its per-day values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewData {
    entries: Vec<(String, Vec<f64>)>,
}

impl ViewData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a statistic. An existing entry with the same name is replaced in place.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<f64>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = values,
            None => self.entries.push((name, values)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.entries
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<f64>)> for ViewData {
    fn from_iter<I: IntoIterator<Item = (S, Vec<f64>)>>(iter: I) -> Self {
        let mut view = ViewData::new();
        for (name, values) in iter {
            view.insert(name, values);
        }
        view
    }
}

impl Serialize for ViewData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, values) in &self.entries {
            map.serialize_entry(name, values)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order_and_replaces_in_place() {
        let mut view: ViewData = [("max", vec![1.0]), ("min", vec![0.0])]
            .into_iter()
            .collect();
        view.insert("max", vec![2.0]);
        view.insert("average", vec![0.5]);

        let names: Vec<&str> = view.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["max", "min", "average"]);
        assert_eq!(view.get("max"), Some(&[2.0][..]));
        assert_eq!(view.get("std_dev"), None);
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn serializes_as_ordered_object() {
        let view: ViewData = [("min", vec![1.0]), ("average", vec![f64::NAN])]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&view).unwrap();
        assert_eq!(json, r#"{"min":[1.0],"average":[null]}"#);
    }
}
