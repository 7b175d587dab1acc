use hashbrown::HashMap;

use crate::Error;

/// Maps station names to integer codes, assigned in sorted name order
#[derive(Debug, Clone, Default)]
pub struct StationEncoder {
    classes: Vec<String>,
    codes: HashMap<String, u32>,
}

impl StationEncoder {
    pub fn fit<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut classes: Vec<String> = names.into_iter().map(str::to_string).collect();
        classes.sort_unstable();
        classes.dedup();

        let codes = classes
            .iter()
            .enumerate()
            .map(|(code, name)| (name.clone(), code as u32))
            .collect();

        Self { classes, codes }
    }

    /// # Errors
    ///
    /// Returns `Error::UnknownStation` if the name was not seen during fitting
    pub fn encode(&self, name: &str) -> Result<u32, Error> {
        self.codes
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownStation(name.to_string()))
    }

    pub fn decode(&self, code: u32) -> Option<&str> {
        self.classes.get(code as usize).map(String::as_str)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_sorted_names() {
        let encoder = StationEncoder::fit(["Madera", "Bello", "Niquia", "Bello"]);
        assert_eq!(encoder.len(), 3);
        assert_eq!(encoder.encode("Bello").unwrap(), 0);
        assert_eq!(encoder.encode("Madera").unwrap(), 1);
        assert_eq!(encoder.encode("Niquia").unwrap(), 2);
    }

    #[test]
    fn round_trip_every_station() {
        let names = ["Niquia", "Bello", "Madera", "San Javier", "Estadio"];
        let encoder = StationEncoder::fit(names);
        for name in names {
            let code = encoder.encode(name).unwrap();
            assert_eq!(encoder.decode(code), Some(name));
        }
        assert_eq!(encoder.decode(5), None);
    }

    #[test]
    fn unknown_name_is_an_error() {
        let encoder = StationEncoder::fit(["Niquia"]);
        assert!(matches!(
            encoder.encode("Atlantis"),
            Err(Error::UnknownStation(name)) if name == "Atlantis"
        ));
    }
}
