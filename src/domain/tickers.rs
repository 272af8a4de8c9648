//! Ticker list parsing for the manual create form.

/// Splits a free-text comma-separated ticker field into an ordered list.
///
/// Each token is trimmed and empty tokens are discarded, so stray commas
/// and whitespace never produce empty entries. Order is preserved exactly
/// as entered.
#[must_use]
pub fn parse_tickers(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_trims_and_drops_empties() {
        assert_eq!(
            parse_tickers("AAPL, TSLA ,  , BTC"),
            vec!["AAPL", "TSLA", "BTC"]
        );
    }

    #[test]
    fn empty_input_yields_empty_list() {
        assert!(parse_tickers("").is_empty());
        assert!(parse_tickers(" , , ").is_empty());
    }

    #[test]
    fn preserves_order() {
        assert_eq!(parse_tickers("ZZZ,AAA"), vec!["ZZZ", "AAA"]);
    }

    #[test]
    fn parsing_is_idempotent() {
        let once = parse_tickers("AAPL, TSLA ,  , BTC");
        let again = parse_tickers(&once.join(","));
        assert_eq!(once, again);
    }
}
