use std::sync::LazyLock;

use crate::layout::merge::Merge;
use crate::layout::schema::*;

/// Canonical base layout for tournament cards.
pub static USQC26_LAYOUT: LazyLock<CardLayout> = LazyLock::new(usqc26_layout);

/// National championship reskin: dark primary, burgundy secondary, square photo window.
pub static QCN26_LAYOUT: LazyLock<CardLayout> = LazyLock::new(|| {
    USQC26_LAYOUT.merged(LayoutPatch {
        palette: Some(PalettePatch {
            primary: Some("#1f1f1f".into()),
            secondary: Some("#8a1f2f".into()),
            ..PalettePatch::default()
        }),
        frame: Some(FrameLayoutPatch {
            inner_radius: Some(0.0),
            ..FrameLayoutPatch::default()
        }),
        ..LayoutPatch::default()
    })
});

/// Look up a built-in layout by name.
pub fn preset(name: &str) -> Option<&'static CardLayout> {
    match name {
        "usqc26" => Some(&USQC26_LAYOUT),
        "qcn26" => Some(&QCN26_LAYOUT),
        _ => None,
    }
}

fn usqc26_layout() -> CardLayout {
    CardLayout {
        kind: LAYOUT_KIND.to_string(),
        palette: Palette {
            primary: "#1b4278".into(),
            secondary: "#c8d7e9".into(),
            white: "#ffffff".into(),
            number_overlay: "rgba(255, 255, 255, 0.67)".into(),
        },
        typography: Typography {
            font_family: r#""Amifer", "Avenir Next", "Helvetica Neue", sans-serif"#.into(),
        },
        frame: FrameLayout {
            outer_radius: 0.0,
            inner_x: 56.0,
            inner_y: 91.0,
            inner_width: 713.0,
            inner_height: 937.0,
            inner_radius: 29.0,
        },
        name: NameLayout {
            rotation: -6.0,
            max_width: 550.0,
            first_name_box: NameBox {
                width: 1000.0,
                height: 46.0,
                border_width: 3.0,
                stroke_width: 8.0,
            },
            last_name_box: NameBox {
                width: 1000.0,
                height: 80.0,
                border_width: 3.0,
                stroke_width: 8.0,
            },
            anchor_x: 754.0,
            anchor_y: 844.0,
            first_name_size: 43.0,
            last_name_size: 60.0,
            letter_spacing: NamePair {
                first_name: 4.3,
                last_name: 6.0,
            },
            left_padding: 8.0,
            right_padding: 8.0,
            box_extension: 100.0,
            text_y_offset: 2.0,
            box_offsets: NamePair {
                first_name: 8.0,
                last_name: 3.0,
            },
            text_offsets: NamePair {
                first_name: 12.0,
                last_name: 10.0,
            },
        },
        event_badge: EventBadgeLayout {
            x: 679.0,
            y: 64.0,
            width: 76.0,
            height: 20.0,
            border_radius: 6.0,
            border_width: 2.0,
            font_size: 17.0,
            text_y_offset: 1.0,
        },
        position_number: PositionNumberLayout {
            center_x: 698.0,
            top_y: 111.0,
            position_font_size: 24.0,
            number_font_size: 85.0,
            position_letter_spacing: 1.92,
            number_letter_spacing: -1.68,
            position_stroke_width: 5.0,
            number_stroke_width: 8.0,
            number_x_offset: -2.0,
        },
        team_logo: TeamLogoLayout {
            x: 75.0,
            y: 64.0,
            max_width: 101.0,
            max_height: 100.0,
            stroke_width: 1.0,
            stroke_color: "#ffffff".into(),
        },
        bottom_bar: BottomBarLayout {
            y: 1036.0,
            height: 26.0,
            text_y_offset: 14.0,
            camera_icon: IconBox {
                x: 74.0,
                y: 1040.0,
                width: 22.0,
                height: 15.0,
            },
            photographer_x: 107.0,
            rarity_x: 403.0,
            rarity_size: 20.0,
            rarity_gap: 4.0,
            team_name_x: 750.0,
            font_size: 20.0,
            letter_spacing: BottomBarSpacing {
                photographer: 0.8,
                team_name: 0.6,
            },
        },
        rare_card: RareCardLayout {
            rotation: -6.0,
            anchor_x: 754.0,
            anchor_y: 794.0,
            max_width: 678.0,
            title_text_offset_x: 10.0,
            caption_text_offset_x: 12.0,
            title_letter_spacing: 0.0,
            caption_letter_spacing: 0.0,
        },
        super_rare: SuperRareLayout {
            center_x: 412.5,
            first_name_y: 853.0,
            last_name_y: 914.0,
            first_name_size: 56.0,
            last_name_size: 81.0,
        },
        national_team: NationalTeamLayout {
            rotation: -6.0,
            anchor_x: 180.0,
            anchor_y: 78.0,
            box_width: 500.0,
            box_height: 50.0,
            box_border_width: 3.0,
            text_padding_x: 16.0,
            name_font_size: 49.0,
            logo: LogoBox {
                x: 75.0,
                y: 64.0,
                max_width: 101.0,
                max_height: 100.0,
            },
        },
    }
}
