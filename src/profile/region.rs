use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Region codes understood by the profile service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Br,
    Eune,
    Euw,
    Jp,
    Kr,
    Lan,
    Las,
    Me,
    Na,
    Oce,
    Ph,
    Ru,
    Sg,
    Th,
    Tr,
    Tw,
    Vn,
}

impl Region {
    /// Selector order.
    pub const ALL: [Region; 17] = [
        Self::Br,
        Self::Eune,
        Self::Euw,
        Self::Jp,
        Self::Kr,
        Self::Lan,
        Self::Las,
        Self::Me,
        Self::Na,
        Self::Oce,
        Self::Ph,
        Self::Ru,
        Self::Sg,
        Self::Th,
        Self::Tr,
        Self::Tw,
        Self::Vn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Br => "br",
            Self::Eune => "eune",
            Self::Euw => "euw",
            Self::Jp => "jp",
            Self::Kr => "kr",
            Self::Lan => "lan",
            Self::Las => "las",
            Self::Me => "me",
            Self::Na => "na",
            Self::Oce => "oce",
            Self::Ph => "ph",
            Self::Ru => "ru",
            Self::Sg => "sg",
            Self::Th => "th",
            Self::Tr => "tr",
            Self::Tw => "tw",
            Self::Vn => "vn",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Br => "Brazil",
            Self::Eune => "EU Nordic & East",
            Self::Euw => "EU West",
            Self::Jp => "Japan",
            Self::Kr => "Korea",
            Self::Lan => "Latin America North",
            Self::Las => "Latin America South",
            Self::Me => "Middle East",
            Self::Na => "North America",
            Self::Oce => "Oceania",
            Self::Ph => "Philippines",
            Self::Ru => "Russia",
            Self::Sg => "Singapore",
            Self::Th => "Thailand",
            Self::Tr => "Turkey",
            Self::Tw => "Taiwan",
            Self::Vn => "Vietnam",
        }
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|r| r == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }
}

impl FromStr for Region {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BR" | "BR1" => Ok(Self::Br),
            "EUNE" | "EUN" | "EUN1" => Ok(Self::Eune),
            "EUW" | "EUW1" => Ok(Self::Euw),
            "JP" | "JP1" => Ok(Self::Jp),
            "KR" => Ok(Self::Kr),
            "LAN" | "LA1" => Ok(Self::Lan),
            "LAS" | "LA2" => Ok(Self::Las),
            "ME" | "ME1" => Ok(Self::Me),
            "NA" | "NA1" => Ok(Self::Na),
            "OCE" | "OC" | "OC1" => Ok(Self::Oce),
            "PH" | "PH2" => Ok(Self::Ph),
            "RU" => Ok(Self::Ru),
            "SG" | "SG2" => Ok(Self::Sg),
            "TH" | "TH2" => Ok(Self::Th),
            "TR" | "TR1" => Ok(Self::Tr),
            "TW" | "TW2" => Ok(Self::Tw),
            "VN" | "VN2" => Ok(Self::Vn),
            _ => Err(AppError::InvalidRegion(s.to_string())),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_and_platform_aliases() {
        assert_eq!("las".parse::<Region>().unwrap(), Region::Las);
        assert_eq!("LA2".parse::<Region>().unwrap(), Region::Las);
        assert_eq!("euw1".parse::<Region>().unwrap(), Region::Euw);
        assert_eq!(" Kr ".parse::<Region>().unwrap(), Region::Kr);
    }

    #[test]
    fn unknown_region_is_rejected() {
        assert!(matches!(
            "atlantis".parse::<Region>(),
            Err(AppError::InvalidRegion(code)) if code == "atlantis"
        ));
    }

    #[test]
    fn every_code_round_trips_through_from_str() {
        for region in Region::ALL {
            assert_eq!(region.as_str().parse::<Region>().unwrap(), region);
        }
    }

    #[test]
    fn selector_cycles_in_both_directions() {
        assert_eq!(Region::Br.previous(), Region::Vn);
        assert_eq!(Region::Vn.next(), Region::Br);
        assert_eq!(Region::Las.next(), Region::Me);
        assert_eq!(Region::Las.next().previous(), Region::Las);
    }

    #[test]
    fn display_is_upper_case_code() {
        assert_eq!(Region::Eune.to_string(), "EUNE");
        assert_eq!(Region::Las.display_name(), "Latin America South");
    }
}
