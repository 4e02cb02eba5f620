use crate::models::{ActionType, BotReply, CardAction, CardImage, CardItem, HeroCard, ItemId};

const CARD_SUBTITLE: &str = "Sample recommendation";
const CARD_TEXT: &str = "Tap 'View' to open a placeholder link.";
const VIEW_BUTTON: &str = "View";

pub fn hero_card(item: &CardItem) -> HeroCard {
    HeroCard {
        title: item.title.clone(),
        subtitle: CARD_SUBTITLE.to_string(),
        text: CARD_TEXT.to_string(),
        images: vec![CardImage {
            url: item.image_url.clone(),
        }],
        buttons: vec![CardAction {
            action_type: ActionType::OpenUrl,
            title: VIEW_BUTTON.to_string(),
            value: item.link.clone(),
        }],
    }
}

/// Renders one card per item id
///
/// A single card is sent as a plain attachment; anything else as a carousel.
pub fn render_cards(item_ids: &[ItemId]) -> BotReply {
    let mut cards: Vec<HeroCard> = item_ids
        .iter()
        .map(|id| hero_card(&CardItem::from_id(*id)))
        .collect();

    if cards.len() == 1 {
        if let Some(card) = cards.pop() {
            return BotReply::Attachment(card);
        }
    }

    BotReply::Carousel(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_item_is_attachment() {
        match render_cards(&[101]) {
            BotReply::Attachment(card) => {
                assert_eq!(card.title, "Recommended item #101");
                assert_eq!(card.subtitle, CARD_SUBTITLE);
                assert_eq!(card.images[0].url, "https://picsum.photos/seed/101/400/220");
                assert_eq!(card.buttons[0].value, "https://example.org/items/101");
                assert_eq!(card.buttons[0].title, "View");
            }
            other => panic!("expected a single attachment, got {:?}", other),
        }
    }

    #[test]
    fn test_multiple_items_are_carousel_in_order() {
        match render_cards(&[103, 101, 107]) {
            BotReply::Carousel(cards) => {
                let titles: Vec<&str> = cards.iter().map(|c| c.title.as_str()).collect();
                assert_eq!(
                    titles,
                    vec![
                        "Recommended item #103",
                        "Recommended item #101",
                        "Recommended item #107"
                    ]
                );
            }
            other => panic!("expected a carousel, got {:?}", other),
        }
    }

    #[test]
    fn test_card_count_matches_ids() {
        for n in 1..=10 {
            let ids: Vec<ItemId> = (101..101 + n).collect();
            assert_eq!(render_cards(&ids).card_count(), ids.len());
        }
    }
}
