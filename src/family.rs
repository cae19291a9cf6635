//! CAZy family identification
//!
//! A family page is addressed by a two-letter class and a number, e.g. `GH12`.
use std::fmt;
use std::str::FromStr;

/// The CAZy class a family belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FamilyType {
    /// Glycoside hydrolases
    GH,

    /// Glycosyltransferases
    GT,
}

impl FamilyType {
    /// Returns the two-letter prefix used in family names and page URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GH => "GH",
            Self::GT => "GT",
        }
    }
}

impl fmt::Display for FamilyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FamilyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GH" => Ok(Self::GH),
            "GT" => Ok(Self::GT),
            other => Err(format!("unknown family type '{}'", other)),
        }
    }
}

/// One family structure page to scrape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FamilyTarget {
    pub family_type: FamilyType,
    pub number: u32,
}

impl FamilyTarget {
    pub fn new(family_type: FamilyType, number: u32) -> Self {
        Self {
            family_type,
            number,
        }
    }

    /// Family name as written in the output table, e.g. `GH12`
    pub fn name(&self) -> String {
        format!("{}{}", self.family_type, self.number)
    }

    /// URL of the family's structure page under `base_url`
    ///
    /// # Example
    ///
    /// ```
    /// use cazy_harvest::{FamilyTarget, FamilyType};
    ///
    /// let target = FamilyTarget::new(FamilyType::GH, 12);
    /// assert_eq!(
    ///     target.page_url("https://www.cazy.org/"),
    ///     "https://www.cazy.org/GH12_structure.html"
    /// );
    /// ```
    pub fn page_url(&self, base_url: &str) -> String {
        format!(
            "{}/{}_structure.html",
            base_url.trim_end_matches('/'),
            self.name()
        )
    }
}

impl fmt::Display for FamilyTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.family_type, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_name() {
        assert_eq!(FamilyTarget::new(FamilyType::GH, 12).name(), "GH12");
        assert_eq!(FamilyTarget::new(FamilyType::GT, 1).name(), "GT1");
    }

    #[test]
    fn test_page_url() {
        let target = FamilyTarget::new(FamilyType::GT, 4);
        assert_eq!(
            target.page_url("https://www.cazy.org"),
            "https://www.cazy.org/GT4_structure.html"
        );
        assert_eq!(
            target.page_url("http://127.0.0.1:8080/"),
            "http://127.0.0.1:8080/GT4_structure.html"
        );
    }

    #[test]
    fn test_family_type_from_str() {
        assert_eq!("GH".parse::<FamilyType>(), Ok(FamilyType::GH));
        assert_eq!("gt".parse::<FamilyType>(), Ok(FamilyType::GT));
        assert!("CBM".parse::<FamilyType>().is_err());
    }
}
