//! Horoscope entries.
//!
//! Stored in the `horoscope` collection. Entries are written once and only
//! ever read back through the filtered listing endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::define_literal_enum;

define_literal_enum! {
    /// The twelve zodiac signs. Only the lower-case spelling is accepted.
    ZodiacSign {
        Aries => "aries",
        Taurus => "taurus",
        Gemini => "gemini",
        Cancer => "cancer",
        Leo => "leo",
        Virgo => "virgo",
        Libra => "libra",
        Scorpio => "scorpio",
        Sagittarius => "sagittarius",
        Capricorn => "capricorn",
        Aquarius => "aquarius",
        Pisces => "pisces",
    }
}

define_literal_enum! {
    /// Span of time a horoscope covers.
    HoroscopePeriod {
        Daily => "daily",
        Weekly => "weekly",
        Monthly => "monthly",
    }
}

/// A published horoscope.
///
/// `date_from` and `date_to` are independent optional bounds; no ordering
/// between them is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Horoscope {
    /// Zodiac sign
    pub sign: ZodiacSign,
    /// Horoscope period type
    pub period: HoroscopePeriod,
    /// Short title or headline
    pub title: String,
    /// Horoscope text content
    pub content: String,
    /// Start date for this horoscope period
    #[serde(default)]
    pub date_from: Option<NaiveDate>,
    /// End date for this horoscope period
    #[serde(default)]
    pub date_to: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sign_literals_are_lowercase() {
        assert_eq!(ZodiacSign::ALL.len(), 12);
        for sign in ZodiacSign::ALL {
            assert_eq!(sign.as_str(), sign.as_str().to_lowercase());
            assert_eq!(sign.as_str().parse::<ZodiacSign>().unwrap(), *sign);
        }
    }

    #[test]
    fn test_mixed_case_sign_is_rejected() {
        assert!("Aries".parse::<ZodiacSign>().is_err());

        let result: Result<Horoscope, _> = serde_json::from_value(json!({
            "sign": "Aries",
            "period": "daily",
            "title": "t",
            "content": "c"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_optional_dates_default_to_none() {
        let h: Horoscope = serde_json::from_value(json!({
            "sign": "leo",
            "period": "weekly",
            "title": "Roar",
            "content": "A bold week."
        }))
        .unwrap();

        assert_eq!(h.sign, ZodiacSign::Leo);
        assert_eq!(h.period, HoroscopePeriod::Weekly);
        assert!(h.date_from.is_none());
        assert!(h.date_to.is_none());
    }

    #[test]
    fn test_dates_serialize_as_iso_strings() {
        let h = Horoscope {
            sign: ZodiacSign::Pisces,
            period: HoroscopePeriod::Monthly,
            title: "Tides".to_string(),
            content: "Flow.".to_string(),
            date_from: NaiveDate::from_ymd_opt(2024, 3, 1),
            date_to: None,
        };

        let value = serde_json::to_value(&h).unwrap();
        assert_eq!(value["date_from"], "2024-03-01");
        assert!(value["date_to"].is_null());
        assert_eq!(value["sign"], "pisces");
    }

    #[test]
    fn test_date_range_is_not_cross_validated() {
        let h: Horoscope = serde_json::from_value(json!({
            "sign": "virgo",
            "period": "daily",
            "title": "t",
            "content": "c",
            "date_from": "2024-05-10",
            "date_to": "2024-05-01"
        }))
        .unwrap();

        assert!(h.date_from > h.date_to);
    }
}
