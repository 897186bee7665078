#![no_main]

extern crate draw_poker;
extern crate libfuzzer_sys;

use draw_poker::core::{Card, Hand};

use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    if let Ok(cards) = Card::parse_cards(text) {
        // Whatever parsed must round-trip through the display form.
        let rendered: String = cards.iter().map(|c| c.to_string()).collect();
        let reparsed = Card::parse_cards(&rendered).expect("display form must reparse");
        assert_eq!(cards, reparsed);

        if cards.len() == 5 {
            if let Ok(hand) = Hand::new(cards) {
                // Classification is total and canonical order is stable.
                let reparsed =
                    Hand::new_from_str(&hand.to_string()).expect("canonical form must reparse");
                assert_eq!(hand.rank(), reparsed.rank());
                assert_eq!(hand.to_string(), reparsed.to_string());
            }
        }
    }
});
