use serde::{Deserialize, Serialize};

use crate::model::Grouping;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    En,
    Ru,
}

impl Default for Locale {
    fn default() -> Self {
        Self::En
    }
}

impl Locale {
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "en" => Some(Self::En),
            "ru" => Some(Self::Ru),
            _ => None,
        }
    }
}

pub fn grouping_label(grouping: &Grouping, locale: Locale) -> &'static str {
    match (grouping, locale) {
        (Grouping::Region, Locale::En) => "Region",
        (Grouping::Region, Locale::Ru) => "Регион",
        (Grouping::AgeGroup, Locale::En) => "Age group",
        (Grouping::AgeGroup, Locale::Ru) => "Возрастная группа",
        (Grouping::Gender, Locale::En) => "Gender",
        (Grouping::Gender, Locale::Ru) => "Пол",
        (Grouping::SettlementType, Locale::En) => "Settlement type",
        (Grouping::SettlementType, Locale::Ru) => "Тип поселения",
        (Grouping::Other(_), Locale::En) => "Item",
        (Grouping::Other(_), Locale::Ru) => "Элемент",
    }
}

/// Fixed strings of the ranking card chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingLabels {
    pub title: &'static str,
    pub position: &'static str,
    pub score: &'static str,
    pub change: &'static str,
    pub no_data: &'static str,
}

impl RankingLabels {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => Self {
                title: "Ranking by year",
                position: "Rank",
                score: "Index",
                change: "Change",
                no_data: "—",
            },
            Locale::Ru => Self {
                title: "Рейтинг по годам",
                position: "Место",
                score: "Индекс",
                change: "Изменение",
                no_data: "—",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_grouping_gets_generic_label() {
        let other = Grouping::Other("Occupation".to_string());
        assert_eq!(grouping_label(&other, Locale::En), "Item");
        assert_eq!(grouping_label(&other, Locale::Ru), "Элемент");
    }

    #[test]
    fn known_groupings_are_localized() {
        assert_eq!(Grouping::AgeGroup.label(Locale::Ru), "Возрастная группа");
        assert_eq!(Grouping::SettlementType.label(Locale::En), "Settlement type");
    }

    #[test]
    fn locale_parse_rejects_unknown() {
        assert_eq!(Locale::parse("ru"), Some(Locale::Ru));
        assert_eq!(Locale::parse("de"), None);
    }
}
