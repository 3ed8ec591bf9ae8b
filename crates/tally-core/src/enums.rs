//! Form status and block type enums.
//!
//! `FormStatus` is closed: an unrecognised value fails decoding so schema
//! drift surfaces immediately. `BlockType` is open: the known catalogue is
//! matched exactly, anything else is carried verbatim in [`BlockType::Other`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// FormStatus
// ---------------------------------------------------------------------------

/// Publication status of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormStatus {
    Blank,
    Draft,
    Published,
    Deleted,
}

impl FormStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blank => "BLANK",
            Self::Draft => "DRAFT",
            Self::Published => "PUBLISHED",
            Self::Deleted => "DELETED",
        }
    }
}

impl fmt::Display for FormStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// BlockType
// ---------------------------------------------------------------------------

macro_rules! block_types {
    ($($variant:ident => $tag:literal,)+) => {
        /// Type tag of a form block.
        ///
        /// Also used for `groupType`, which names the block type that owns a
        /// group of blocks sharing one `groupUuid`.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum BlockType {
            $($variant,)+
            /// A tag outside the known catalogue, kept exactly as received.
            Other(String),
        }

        impl BlockType {
            /// Every tag in the known catalogue, in wire order.
            pub const KNOWN: &'static [Self] = &[$(Self::$variant,)+];

            /// Wire tag for this block type.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $tag,)+
                    Self::Other(tag) => tag,
                }
            }

            /// Map a wire tag onto the catalogue, falling back to `Other`.
            #[must_use]
            pub fn from_wire(tag: &str) -> Self {
                match tag {
                    $($tag => Self::$variant,)+
                    other => Self::Other(other.to_string()),
                }
            }
        }
    };
}

block_types! {
    FormTitle => "FORM_TITLE",
    Text => "TEXT",
    Label => "LABEL",
    Title => "TITLE",
    Heading1 => "HEADING_1",
    Heading2 => "HEADING_2",
    Heading3 => "HEADING_3",
    Divider => "DIVIDER",
    PageBreak => "PAGE_BREAK",
    ThankYouPage => "THANK_YOU_PAGE",
    Image => "IMAGE",
    Embed => "EMBED",
    EmbedVideo => "EMBED_VIDEO",
    EmbedAudio => "EMBED_AUDIO",
    Question => "QUESTION",
    Matrix => "MATRIX",
    InputText => "INPUT_TEXT",
    InputNumber => "INPUT_NUMBER",
    InputEmail => "INPUT_EMAIL",
    InputLink => "INPUT_LINK",
    InputPhoneNumber => "INPUT_PHONE_NUMBER",
    InputDate => "INPUT_DATE",
    InputTime => "INPUT_TIME",
    Textarea => "TEXTAREA",
    FileUpload => "FILE_UPLOAD",
    LinearScale => "LINEAR_SCALE",
    Rating => "RATING",
    HiddenFields => "HIDDEN_FIELDS",
    MultipleChoiceOption => "MULTIPLE_CHOICE_OPTION",
    Checkbox => "CHECKBOX",
    DropdownOption => "DROPDOWN_OPTION",
    RankingOption => "RANKING_OPTION",
    MultiSelectOption => "MULTI_SELECT_OPTION",
    Payment => "PAYMENT",
    Signature => "SIGNATURE",
    MatrixRow => "MATRIX_ROW",
    MatrixColumn => "MATRIX_COLUMN",
    WalletConnect => "WALLET_CONNECT",
    ConditionalLogic => "CONDITIONAL_LOGIC",
    CalculatedFields => "CALCULATED_FIELDS",
    Captcha => "CAPTCHA",
    RespondentCountry => "RESPONDENT_COUNTRY",
}

impl BlockType {
    /// Whether this tag belongs to the known catalogue.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_wire(s))
    }
}

impl From<&str> for BlockType {
    fn from(tag: &str) -> Self {
        Self::from_wire(tag)
    }
}

impl Serialize for BlockType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BlockType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(status_blank, FormStatus, FormStatus::Blank, "BLANK");
    test_serde_roundtrip!(status_published, FormStatus, FormStatus::Published, "PUBLISHED");
    test_serde_roundtrip!(block_heading_2, BlockType, BlockType::Heading2, "HEADING_2");
    test_serde_roundtrip!(
        block_phone,
        BlockType,
        BlockType::InputPhoneNumber,
        "INPUT_PHONE_NUMBER"
    );
    test_serde_roundtrip!(
        block_unknown_passthrough,
        BlockType,
        BlockType::Other("HOLOGRAM".into()),
        "HOLOGRAM"
    );

    #[rstest]
    #[case("ARCHIVED")]
    #[case("draft")]
    #[case("")]
    fn status_rejects_values_outside_catalogue(#[case] raw: &str) {
        let result = serde_json::from_value::<FormStatus>(serde_json::json!(raw));
        assert!(result.is_err(), "{raw:?} should not decode");
    }

    #[test]
    fn status_as_str_matches_serde() {
        for status in [
            FormStatus::Blank,
            FormStatus::Draft,
            FormStatus::Published,
            FormStatus::Deleted,
        ] {
            let json = serde_json::to_value(status).unwrap();
            assert_eq!(json, status.as_str());
        }
    }

    #[test]
    fn every_known_tag_maps_back_to_itself() {
        assert_eq!(BlockType::KNOWN.len(), 42);
        for block_type in BlockType::KNOWN {
            assert!(block_type.is_known());
            assert_eq!(&BlockType::from_wire(block_type.as_str()), block_type);
        }
    }

    #[test]
    fn unknown_tag_keeps_raw_string() {
        let parsed: BlockType = "SOME_FUTURE_TYPE".parse().unwrap();
        assert_eq!(parsed, BlockType::Other("SOME_FUTURE_TYPE".into()));
        assert!(!parsed.is_known());
        assert_eq!(parsed.to_string(), "SOME_FUTURE_TYPE");
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert_eq!(
            BlockType::from("text"),
            BlockType::Other("text".to_string())
        );
    }
}
