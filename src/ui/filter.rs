use crate::content::{FaqCategory, FaqEntry};

/// Does one FAQ entry survive the active category chip and search box?
/// `category` of `None` means the "All Questions" chip; an empty or
/// whitespace query matches everything. Text matching is a case-insensitive
/// substring test against the question or the answer.
pub fn matches(entry: &FaqEntry, category: Option<FaqCategory>, query: &str) -> bool {
    let category_ok = category.map_or(true, |c| entry.category == c);
    if !category_ok {
        return false;
    }
    let needle = query.trim().to_lowercase();
    needle.is_empty()
        || entry.question.to_lowercase().contains(&needle)
        || entry.answer.to_lowercase().contains(&needle)
}

/// Filtered view over the FAQ table, preserving order.
pub fn filter_faqs<'a>(
    entries: impl IntoIterator<Item = &'a FaqEntry>,
    category: Option<FaqCategory>,
    query: &str,
) -> Vec<&'a FaqEntry> {
    entries
        .into_iter()
        .filter(|e| matches(e, category, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FAQS;

    #[test]
    fn all_and_empty_query_returns_everything() {
        assert_eq!(filter_faqs(FAQS, None, "").len(), FAQS.len());
        assert_eq!(filter_faqs(FAQS, None, "   ").len(), FAQS.len());
    }

    #[test]
    fn fees_category_selects_exactly_the_fee_entries() {
        let fees = filter_faqs(FAQS, Some(FaqCategory::Fees), "");
        assert_eq!(fees.len(), 2);
        assert!(fees.iter().all(|e| e.category == FaqCategory::Fees));
    }

    #[test]
    fn search_within_category_is_case_insensitive() {
        let hits = filter_faqs(FAQS, Some(FaqCategory::Fees), "TUITION");
        assert!(!hits.is_empty());
        for e in &hits {
            let hay = format!("{} {}", e.question, e.answer).to_lowercase();
            assert!(hay.contains("tuition"));
        }
    }

    #[test]
    fn result_is_a_subset_of_the_input() {
        let filtered = filter_faqs(FAQS, Some(FaqCategory::Schedule), "calendar");
        for e in &filtered {
            assert!(FAQS.iter().any(|orig| std::ptr::eq(orig, *e)));
        }
        assert!(filtered.len() <= FAQS.len());
    }

    #[test]
    fn filtering_is_idempotent() {
        for (cat, q) in [
            (None, ""),
            (None, "islamic"),
            (Some(FaqCategory::Admissions), ""),
            (Some(FaqCategory::Safety), "drill"),
            (Some(FaqCategory::Curriculum), "zzz-no-hit"),
        ] {
            let once = filter_faqs(FAQS, cat, q);
            let twice = filter_faqs(once.iter().copied(), cat, q);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn no_hits_for_nonsense_query() {
        assert!(filter_faqs(FAQS, None, "xylophone warp drive").is_empty());
    }
}
