#![no_main]

use libfuzzer_sys::fuzz_target;
use pdfpages::pages::{PageIndexSet, PageToken, parse_tokens};

/// Bounds the index set the way a loaded document would.
const MAX_PAGES: usize = 10_000;

fuzz_target!(|data: &[u8]| {
    let s = std::str::from_utf8(data).unwrap_or("");

    if let Ok(token) = PageToken::parse(s) {
        assert!(token.first_page() >= 1);
        assert!(token.first_page() <= token.last_page());
        assert_eq!(token.to_string().parse::<PageToken>().ok(), Some(token));
        assert_eq!(PageToken::from(token.span()), token);
    }

    if let Ok(tokens) = parse_tokens(s.split_whitespace())
        && tokens.iter().all(|token| token.last_page() <= MAX_PAGES)
    {
        let set = PageIndexSet::from_tokens(&tokens);
        let indices = set.to_vec();
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }
});
