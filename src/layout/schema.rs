//! The `usqc26-v1` card layout: every coordinate, size and color the compositor reads.
//!
//! Coordinates are canvas pixels. Rotations are degrees; negative values tilt
//! counter-clockwise.

use crate::layout::merge::mergeable;

/// Layout kind tag accepted by this renderer.
pub const LAYOUT_KIND: &str = "usqc26-v1";

mergeable! {
    pub struct Palette => PalettePatch {
        pub primary: String,
        pub secondary: String,
        pub white: String,
        /// Fill color of the jersey number.
        pub number_overlay: String,
    }
}

mergeable! {
    pub struct Typography => TypographyPatch {
        /// CSS font-family list, first match wins.
        pub font_family: String,
    }
}

mergeable! {
    /// The opaque border around the photo window.
    pub struct FrameLayout => FrameLayoutPatch {
        pub outer_radius: f64,
        pub inner_x: f64,
        pub inner_y: f64,
        pub inner_width: f64,
        pub inner_height: f64,
        pub inner_radius: f64,
    }
}

mergeable! {
    pub struct NameBox => NameBoxPatch {
        pub width: f64,
        pub height: f64,
        pub border_width: f64,
        pub stroke_width: f64,
    }
}

mergeable! {
    /// A value given separately for the first-name and last-name rows.
    pub struct NamePair => NamePairPatch {
        pub first_name: f64,
        pub last_name: f64,
    }
}

mergeable! {
    /// Angled first/last name boxes, anchored at their right edge.
    pub struct NameLayout => NameLayoutPatch {
        pub rotation: f64,
        pub max_width: f64,
        pub first_name_box: NameBox,
        pub last_name_box: NameBox,
        pub anchor_x: f64,
        pub anchor_y: f64,
        pub first_name_size: f64,
        pub last_name_size: f64,
        pub letter_spacing: NamePair,
        pub left_padding: f64,
        pub right_padding: f64,
        pub box_extension: f64,
        pub text_y_offset: f64,
        pub box_offsets: NamePair,
        pub text_offsets: NamePair,
    }
}

mergeable! {
    pub struct EventBadgeLayout => EventBadgeLayoutPatch {
        pub x: f64,
        pub y: f64,
        pub width: f64,
        pub height: f64,
        pub border_radius: f64,
        pub border_width: f64,
        pub font_size: f64,
        pub text_y_offset: f64,
    }
}

mergeable! {
    pub struct PositionNumberLayout => PositionNumberLayoutPatch {
        pub center_x: f64,
        pub top_y: f64,
        pub position_font_size: f64,
        pub number_font_size: f64,
        pub position_letter_spacing: f64,
        pub number_letter_spacing: f64,
        pub position_stroke_width: f64,
        pub number_stroke_width: f64,
        pub number_x_offset: f64,
    }
}

mergeable! {
    pub struct TeamLogoLayout => TeamLogoLayoutPatch {
        pub x: f64,
        pub y: f64,
        pub max_width: f64,
        pub max_height: f64,
        /// Outline thickness in pixels; zero disables the outline.
        pub stroke_width: f64,
        pub stroke_color: String,
    }
}

mergeable! {
    pub struct IconBox => IconBoxPatch {
        pub x: f64,
        pub y: f64,
        pub width: f64,
        pub height: f64,
    }
}

mergeable! {
    pub struct BottomBarSpacing => BottomBarSpacingPatch {
        pub photographer: f64,
        pub team_name: f64,
    }
}

mergeable! {
    /// Photographer credit, rarity mark and team/role text along the bottom edge.
    pub struct BottomBarLayout => BottomBarLayoutPatch {
        pub y: f64,
        pub height: f64,
        pub text_y_offset: f64,
        pub camera_icon: IconBox,
        pub photographer_x: f64,
        pub rarity_x: f64,
        pub rarity_size: f64,
        pub rarity_gap: f64,
        pub team_name_x: f64,
        pub font_size: f64,
        pub letter_spacing: BottomBarSpacing,
    }
}

mergeable! {
    pub struct RareCardLayout => RareCardLayoutPatch {
        pub rotation: f64,
        pub anchor_x: f64,
        pub anchor_y: f64,
        pub max_width: f64,
        pub title_text_offset_x: f64,
        pub caption_text_offset_x: f64,
        pub title_letter_spacing: f64,
        pub caption_letter_spacing: f64,
    }
}

mergeable! {
    pub struct SuperRareLayout => SuperRareLayoutPatch {
        pub center_x: f64,
        pub first_name_y: f64,
        pub last_name_y: f64,
        pub first_name_size: f64,
        pub last_name_size: f64,
    }
}

mergeable! {
    pub struct LogoBox => LogoBoxPatch {
        pub x: f64,
        pub y: f64,
        pub max_width: f64,
        pub max_height: f64,
    }
}

mergeable! {
    pub struct NationalTeamLayout => NationalTeamLayoutPatch {
        pub rotation: f64,
        pub anchor_x: f64,
        pub anchor_y: f64,
        pub box_width: f64,
        pub box_height: f64,
        pub box_border_width: f64,
        pub text_padding_x: f64,
        pub name_font_size: f64,
        pub logo: LogoBox,
    }
}

mergeable! {
    /// Complete card layout. `kind` is always [`LAYOUT_KIND`] once resolved.
    pub struct CardLayout => LayoutPatch {
        pub kind: String,
        pub palette: Palette,
        pub typography: Typography,
        pub frame: FrameLayout,
        pub name: NameLayout,
        pub event_badge: EventBadgeLayout,
        pub position_number: PositionNumberLayout,
        pub team_logo: TeamLogoLayout,
        pub bottom_bar: BottomBarLayout,
        pub rare_card: RareCardLayout,
        pub super_rare: SuperRareLayout,
        pub national_team: NationalTeamLayout,
    }
}

impl CardLayout {
    /// Whether the compositor can draw this layout.
    pub fn is_supported(&self) -> bool {
        self.kind == LAYOUT_KIND
    }
}

impl LayoutPatch {
    /// Read an override from arbitrary JSON. Never fails: anything that is not an object
    /// yields an empty patch.
    pub fn from_value(value: serde_json::Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}
