//! Diacritic- and case-insensitive pinyin search over the card cache.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::model::card::Card;

/// Lowercases, decomposes (NFD) and drops combining marks, so `"Pīn"` becomes `"pin"`.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Cards whose normalized pinyin contains the normalized query.
///
/// An empty query means no filter is active and every card is returned.
pub fn filter<'a>(cards: &'a [Card], query: &str) -> Vec<&'a Card> {
    let needle = normalize(query);
    if needle.is_empty() {
        return cards.iter().collect();
    }
    cards
        .iter()
        .filter(|card| normalize(&card.pinyin).contains(&needle))
        .collect()
}

/// What the card grid shows: the filtered cards, or every card when the filter
/// matched nothing. A query with no hits therefore looks like no query at all.
pub fn visible<'a>(cards: &'a [Card], query: &str) -> Vec<&'a Card> {
    let filtered = filter(cards, query);
    if filtered.is_empty() {
        cards.iter().collect()
    } else {
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(character: &str, pinyin: &str) -> Card {
        Card {
            id: None,
            character: character.into(),
            pinyin: pinyin.into(),
            meaning: String::new(),
            connection: String::new(),
            created: None,
        }
    }

    #[test]
    fn normalize_strips_tone_marks_and_case() {
        assert_eq!(normalize("Shuǐ"), "shui");
        assert_eq!(normalize("lǜ"), "lu");
        assert_eq!(normalize("PĪN"), "pin");
    }

    #[test]
    fn query_ignores_diacritics_and_case() {
        let cards = vec![card("拼", "pīn"), card("品", "PIN"), card("水", "shuǐ")];

        let hits: Vec<_> = filter(&cards, "pin").iter().map(|c| c.character.as_str()).collect();
        assert_eq!(hits, vec!["拼", "品"]);
    }

    #[test]
    fn toned_query_matches_untoned_pinyin() {
        let cards = vec![card("水", "shui")];
        assert_eq!(filter(&cards, "shuǐ").len(), 1);
    }

    #[test]
    fn empty_query_returns_everything() {
        let cards = vec![card("拼", "pīn"), card("水", "shuǐ")];
        assert_eq!(filter(&cards, "").len(), 2);
        assert_eq!(visible(&cards, "").len(), 2);
    }

    #[test]
    fn no_hits_falls_back_to_full_list() {
        let cards = vec![card("拼", "pīn"), card("水", "shuǐ")];
        assert!(filter(&cards, "zzz").is_empty());
        assert_eq!(visible(&cards, "zzz").len(), 2);
    }

    #[test]
    fn whitespace_query_is_not_trimmed() {
        let cards = vec![card("测试", "cè shì"), card("水", "shuǐ")];

        let hits: Vec<_> = filter(&cards, " ").iter().map(|c| c.character.as_str()).collect();
        assert_eq!(hits, vec!["测试"]);
        assert!(filter(&cards, "shui ").is_empty());
    }

    #[test]
    fn substring_match_inside_multi_syllable_pinyin() {
        let cards = vec![card("测试", "cè shì")];
        assert_eq!(filter(&cards, "e sh").len(), 1);
    }
}
