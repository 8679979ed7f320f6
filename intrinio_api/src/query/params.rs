//! Enumerated query parameter values shared across resources.

use std::str::FromStr;

use super::QueryValue;

/// Sampling frequency for price and historical-data series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}
impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Frequency::Daily => "daily",
                Frequency::Weekly => "weekly",
                Frequency::Monthly => "monthly",
                Frequency::Quarterly => "quarterly",
                Frequency::Yearly => "yearly",
            }
        )
    }
}
impl FromStr for Frequency {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            "quarterly" => Ok(Frequency::Quarterly),
            "yearly" => Ok(Frequency::Yearly),
            _ => Err(()),
        }
    }
}
impl QueryValue for Frequency {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

/// Sort order for historical data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    /// Newest first. This is the API default.
    #[default]
    Desc,
}
impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        })
    }
}
impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(()),
        }
    }
}
impl QueryValue for SortOrder {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

/// Option contract side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    Call,
    Put,
}
impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        })
    }
}
impl FromStr for OptionType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(()),
        }
    }
}
impl QueryValue for OptionType {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

/// Price feed to read realtime or delayed quotes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceSource {
    Iex,
    Bats,
    BatsDelayed,
    Utp,
    Cta,
    Otc,
    Realtime,
    Delayed,
}
impl std::fmt::Display for PriceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            PriceSource::Iex => "iex",
            PriceSource::Bats => "bats",
            PriceSource::BatsDelayed => "bats_delayed",
            PriceSource::Utp => "utp_delayed",
            PriceSource::Cta => "cta_delayed",
            PriceSource::Otc => "otc_delayed",
            PriceSource::Realtime => "realtime",
            PriceSource::Delayed => "delayed",
        })
    }
}
impl FromStr for PriceSource {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "iex" => Ok(PriceSource::Iex),
            "bats" => Ok(PriceSource::Bats),
            "bats_delayed" => Ok(PriceSource::BatsDelayed),
            "utp_delayed" => Ok(PriceSource::Utp),
            "cta_delayed" => Ok(PriceSource::Cta),
            "otc_delayed" => Ok(PriceSource::Otc),
            "realtime" => Ok(PriceSource::Realtime),
            "delayed" => Ok(PriceSource::Delayed),
            _ => Err(()),
        }
    }
}
impl QueryValue for PriceSource {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse_agree() {
        for f in [
            Frequency::Daily,
            Frequency::Weekly,
            Frequency::Monthly,
            Frequency::Quarterly,
            Frequency::Yearly,
        ] {
            assert_eq!(f.to_string().parse::<Frequency>(), Ok(f));
        }
        assert_eq!("asc".parse::<SortOrder>(), Ok(SortOrder::Asc));
        assert_eq!("put".parse::<OptionType>(), Ok(OptionType::Put));
        assert_eq!("bats_delayed".parse::<PriceSource>(), Ok(PriceSource::BatsDelayed));
    }

    #[test]
    fn unknown_values_are_rejected() {
        assert!("hourly".parse::<Frequency>().is_err());
        assert!("straddle".parse::<OptionType>().is_err());
    }
}
