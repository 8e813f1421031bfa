//! Small text helpers shared by the ingestion chain and the renderers.

/// Turn a repository slug into a display title.
///
/// Runs of `-` and `_` become single spaces, whitespace is collapsed and
/// every word is capitalised with the rest lower-cased.
///
/// ```
/// use shravfolio_models::title_case;
///
/// assert_eq!(title_case("retail_giant-sales__FORECASTING"), "Retail Giant Sales Forecasting");
/// ```
pub fn title_case(value: &str) -> String {
    value
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Shorten a label to fit a node: more than `max` characters are cut to
/// `max - 2` followed by `"..."`.
pub fn truncate_label(label: &str, max: usize) -> String {
    if label.chars().count() > max {
        let keep: String = label.chars().take(max.saturating_sub(2)).collect();
        format!("{keep}...")
    } else {
        label.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_basic() {
        assert_eq!(title_case("plant-disease-scanner"), "Plant Disease Scanner");
        assert_eq!(title_case("asset_return_simulation"), "Asset Return Simulation");
    }

    #[test]
    fn title_case_collapses_separators_and_whitespace() {
        assert_eq!(title_case("  a--b__c   d "), "A B C D");
    }

    #[test]
    fn title_case_empty() {
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("-_-"), "");
    }

    #[test]
    fn truncate_short_label_untouched() {
        assert_eq!(truncate_label("Immigame", 18), "Immigame");
        assert_eq!(truncate_label("exactly-eighteen-c", 18), "exactly-eighteen-c");
    }

    #[test]
    fn truncate_long_label() {
        assert_eq!(
            truncate_label("Credit Card Fraud Detection", 18),
            "Credit Card Frau..."
        );
    }
}
