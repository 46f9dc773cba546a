use super::*;
use crate::model::crop::RotateDeg;

#[test]
fn player_card_parses_with_flattened_details() {
    let card = Card::from_json(
        r#"{
            "id": "c1",
            "tournamentId": "usqc-2026",
            "cardType": "player",
            "status": "submitted",
            "firstName": "Jordan",
            "lastName": "Lopez",
            "teamId": "bos",
            "position": "Keeper",
            "jerseyNumber": "7",
            "photographer": "A. Shooter",
            "photo": {"crop": {"x": 0.1, "y": 0, "w": 0.5, "h": 1, "rotateDeg": 90}},
            "createdAt": "2026-01-01T00:00:00Z",
            "updatedAt": "2026-01-01T00:00:00Z"
        }"#,
    )
    .unwrap();

    assert_eq!(card.card_type(), CardType::Player);
    assert_eq!(card.status, CardStatus::Submitted);
    assert_eq!(card.person().first_name(), Some("Jordan"));
    assert_eq!(card.person().jersey_number(), Some("7"));
    assert_eq!(card.crop().rotate_deg, RotateDeg::R90);
    assert_eq!(card.photographer(), Some("A. Shooter"));
}

#[test]
fn rare_card_keeps_editorial_and_person_fields() {
    let card = Card::from_json(
        r#"{"cardType":"super-rare","title":"MVP","caption":"Great catch","firstName":"Sam","position":"Seeker","jerseyNumber":"00"}"#,
    )
    .unwrap();
    assert_eq!(card.card_type(), CardType::SuperRare);
    let rare = card.details.rare().unwrap();
    assert_eq!(rare.title.as_deref(), Some("MVP"));
    assert_eq!(rare.caption.as_deref(), Some("Great catch"));
    assert_eq!(card.person().first_name(), Some("Sam"));
    assert_eq!(card.person().position(), Some("Seeker"));
}

#[test]
fn empty_strings_count_as_absent_and_missing_crop_is_full() {
    let card = Card::from_json(r#"{"cardType":"media","firstName":"","templateId":""}"#).unwrap();
    assert_eq!(card.person().first_name(), None);
    assert_eq!(card.template_id(), None);
    assert_eq!(card.crop(), CropRect::FULL);
}

#[test]
fn unknown_card_type_is_rejected() {
    assert!(Card::from_json(r#"{"cardType":"mascot"}"#).is_err());
}

#[test]
fn card_type_wire_names_round_trip() {
    for t in CardType::ALL {
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, format!("\"{}\"", t.as_str()));
        assert_eq!(CardType::parse(t.as_str()), Some(t));
    }
    assert!(CardType::Official.shows_position_in_bottom_bar());
    assert!(!CardType::Player.shows_position_in_bottom_bar());
}

#[test]
fn serialized_card_carries_type_tag() {
    let card = Card::new(CardDetails::NationalTeam(PersonDetails {
        last_name: Some("Kim".into()),
        ..PersonDetails::default()
    }));
    let v = serde_json::to_value(&card).unwrap();
    assert_eq!(v["cardType"], "national-team");
    assert_eq!(v["lastName"], "Kim");
    let back: Card = serde_json::from_value(v).unwrap();
    assert_eq!(back, card);
}
