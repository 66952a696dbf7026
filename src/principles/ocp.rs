//! Open/closed: callers announce any collection through `LogItems` instead of
//! knowing how each collection stores its items.

use crate::domain::model::{Principle, Variant};
use crate::domain::ports::{Console, Demo, LogItems};
use crate::utils::error::Result;
use std::collections::BTreeMap;

/// Flawed: only works while the cities are stored as a sequence. Switching
/// to a country map means rewriting this function and every caller.
pub fn announce_sequence(cities: &[String], console: &dyn Console) {
    for city in cities {
        console.log(city);
    }
}

/// Improved: the collection decides how its items are announced.
pub fn announce(collection: &dyn LogItems, console: &dyn Console) {
    collection.log_items(console);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityList {
    items: Vec<String>,
}

impl CityList {
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }
}

impl LogItems for CityList {
    fn log_items(&self, console: &dyn Console) {
        for city in &self.items {
            console.log(city);
        }
    }
}

/// Cities keyed by country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityDirectory {
    items: BTreeMap<String, String>,
}

impl CityDirectory {
    pub fn new(items: BTreeMap<String, String>) -> Self {
        Self { items }
    }
}

impl LogItems for CityDirectory {
    fn log_items(&self, console: &dyn Console) {
        for (country, city) in &self.items {
            console.log(&format!("{}: {}", country, city));
        }
    }
}

pub struct OcpDemo {
    cities: Vec<String>,
    directory: BTreeMap<String, String>,
}

impl OcpDemo {
    pub fn new(cities: Vec<String>, directory: BTreeMap<String, String>) -> Self {
        Self { cities, directory }
    }
}

impl Demo for OcpDemo {
    fn principle(&self) -> Principle {
        Principle::Ocp
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Flawed, Variant::Improved]
    }

    fn run(&self, variant: Variant, console: &dyn Console) -> Result<()> {
        match variant {
            Variant::Flawed => announce_sequence(&self.cities, console),
            Variant::Improved => {
                let collections: [Box<dyn LogItems>; 2] = [
                    Box::new(CityList::new(self.cities.clone())),
                    Box::new(CityDirectory::new(self.directory.clone())),
                ];
                for collection in &collections {
                    announce(collection.as_ref(), console);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::RecordingConsole;

    fn cities() -> Vec<String> {
        vec!["London".to_string(), "Paris".to_string()]
    }

    #[test]
    fn test_announce_list_one_line_per_item() {
        let console = RecordingConsole::new();
        announce(&CityList::new(cities()), &console);
        assert_eq!(console.lines(), vec!["London", "Paris"]);
    }

    #[test]
    fn test_announce_directory_one_line_per_item() {
        let console = RecordingConsole::new();
        let directory: BTreeMap<String, String> = [
            ("Japan".to_string(), "Tokyo".to_string()),
            ("France".to_string(), "Paris".to_string()),
            ("Peru".to_string(), "Lima".to_string()),
        ]
        .into_iter()
        .collect();

        announce(&CityDirectory::new(directory), &console);

        assert_eq!(
            console.lines(),
            vec!["France: Paris", "Japan: Tokyo", "Peru: Lima"]
        );
    }

    #[test]
    fn test_announce_accepts_new_collection_types_unchanged() {
        struct Countdown(u8);

        impl LogItems for Countdown {
            fn log_items(&self, console: &dyn Console) {
                for n in (1..=self.0).rev() {
                    console.log(&n.to_string());
                }
            }
        }

        let console = RecordingConsole::new();
        announce(&Countdown(3), &console);
        assert_eq!(console.lines(), vec!["3", "2", "1"]);
    }

    #[test]
    fn test_flawed_and_improved_agree_on_sequences() {
        let flawed = RecordingConsole::new();
        let improved = RecordingConsole::new();

        announce_sequence(&cities(), &flawed);
        announce(&CityList::new(cities()), &improved);

        assert_eq!(flawed.lines(), improved.lines());
    }

    #[test]
    fn test_empty_collection_announces_nothing() {
        let console = RecordingConsole::new();
        announce(&CityDirectory::new(BTreeMap::new()), &console);
        assert!(console.lines().is_empty());
    }
}
