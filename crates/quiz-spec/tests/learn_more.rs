use quiz_spec::{LearnMoreDeck, NextAction, OnboardingContent};
use serde_json::json;

fn three_slides() -> LearnMoreDeck {
    let slides = (1..=3)
        .map(|id| {
            json!({
                "id": id,
                "assetID": format!("asset-{id}"),
                "title": format!("Slide {id}"),
                "header": "Header",
                "subtitle": "Subtitle",
                "image": format!("https://example.com/{id}.png"),
            })
        })
        .collect::<Vec<_>>();
    LearnMoreDeck::from_json(&json!({ "data": slides }).to_string()).expect("deck")
}

#[test]
fn next_action_advances_until_the_last_slide() {
    let deck = three_slides();

    assert_eq!(
        deck.next_action(0),
        NextAction {
            is_last: false,
            next_index: 1
        }
    );
    assert_eq!(deck.next_action(1).next_index, 2);
    assert_eq!(
        deck.next_action(2),
        NextAction {
            is_last: true,
            next_index: 2
        }
    );
    assert!(deck.is_last_screen(2));
    assert!(!deck.is_last_screen(1));
}

#[test]
fn next_action_past_the_end_stays_put() {
    let deck = three_slides();
    assert_eq!(
        deck.next_action(7),
        NextAction {
            is_last: true,
            next_index: 7
        }
    );
    assert!(deck.item(7).is_none());
}

#[test]
fn builtin_deck_ends_on_its_last_slide() {
    let deck = LearnMoreDeck::builtin().expect("builtin deck");
    let last = deck.total_items() - 1;
    assert!(deck.next_action(last).is_last);
    assert_eq!(deck.image_source(0), deck.item(0).map(|item| item.image.as_str()));
}

#[test]
fn onboarding_copy_loads_from_camel_case_keys() {
    let content = OnboardingContent::builtin().expect("builtin onboarding");
    assert_eq!(content.heading1, "Be good");
    assert_eq!(content.heading2, "to yourself");
    assert_eq!(content.learn_more_text, "Learn more");
    assert_eq!(content.button_text, "Take the quiz");
}

#[test]
fn onboarding_copy_rejects_missing_fields() {
    assert!(OnboardingContent::from_json(r#"{"heading1":"Hi"}"#).is_err());
}
