//! Block payload shapes.
//!
//! Each known [`BlockType`] has one payload shape. Every field is a
//! [`Nullable`], so a missing key and an explicit `null` are both written
//! back exactly as received. Every shape carries the four layout fields in
//! [`BasePayload`] plus an `extra` map holding keys the shape does not model.
//! Encoding writes `extra` back out, so fields the service adds later survive
//! a read-modify-write cycle.
//!
//! The shape is picked from the block's `type` tag in [`BlockPayload::decode`],
//! never from the payload's contents. Tags outside the catalogue decode into
//! [`BlockPayload::Unstructured`] as raw JSON of any kind, without validation.
//!
//! Numbers go through `f64`/`u64`/`i64`, so a literal such as `1e3` is
//! written back as `1000.0`. Keys, key order, strings, booleans, `null`, and
//! canonically written numbers re-encode unchanged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::enums::BlockType;
use crate::errors::PayloadError;
use crate::nullable::Nullable;

/// Layout fields shared by every payload.
///
/// Blocks placed side by side share a `columnListUuid`; each column has its
/// own `columnUuid` and a width ratio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasePayload {
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub is_hidden: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub column_list_uuid: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub column_uuid: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub column_ratio: Nullable<f64>,
}

macro_rules! payload_shape {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$field_meta:meta])* $field:ident: $ty:ty,)* }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            #[serde(flatten)]
            pub base: BasePayload,
            $(
                $(#[$field_meta])*
                #[serde(default, skip_serializing_if = "Nullable::is_unset")]
                pub $field: Nullable<$ty>,
            )*
            /// Keys not modelled by this shape.
            #[serde(flatten)]
            pub extra: Map<String, Value>,
        }
    };
}

payload_shape! {
    /// Payload carrying only the layout fields (dividers, signatures, ...).
    EmptyPayload {}
}

payload_shape! {
    /// Rich-text payload for titles, headings, labels, and page breaks.
    HtmlPayload {
        html: String,
    }
}

payload_shape! {
    ImagePayload {
        url: String,
        alt: String,
        width: f64,
        height: f64,
    }
}

payload_shape! {
    EmbedPayload {
        html: String,
        url: String,
    }
}

payload_shape! {
    /// Embedded video or audio.
    MediaPayload {
        url: String,
    }
}

payload_shape! {
    QuestionPayload {
        html: String,
        required: bool,
        description: String,
    }
}

payload_shape! {
    MatrixPayload {
        html: String,
        required: bool,
    }
}

payload_shape! {
    InputTextPayload {
        placeholder: String,
        default_value: String,
        min_length: u32,
        max_length: u32,
    }
}

payload_shape! {
    InputNumberPayload {
        placeholder: String,
        default_value: f64,
        min: f64,
        max: f64,
    }
}

payload_shape! {
    /// Single-line inputs without length bounds (email, link, phone).
    InputPayload {
        placeholder: String,
        default_value: String,
    }
}

payload_shape! {
    /// Date and time pickers.
    DateTimeInputPayload {
        format: String,
        default_value: String,
    }
}

payload_shape! {
    TextareaPayload {
        placeholder: String,
        default_value: String,
        min_length: u32,
        max_length: u32,
        rows: u32,
    }
}

payload_shape! {
    FileUploadPayload {
        /// Accepted MIME types or extensions, comma separated.
        accept: String,
        /// Maximum upload size in bytes.
        max_size: u64,
        multiple: bool,
    }
}

payload_shape! {
    LinearScalePayload {
        min: i64,
        max: i64,
        min_label: String,
        max_label: String,
    }
}

payload_shape! {
    RatingPayload {
        max: u32,
        icon: String,
    }
}

payload_shape! {
    HiddenFieldsPayload {
        fields: BTreeMap<String, String>,
    }
}

payload_shape! {
    /// One option of a choice question (multiple choice, checkbox, dropdown,
    /// ranking, multi-select).
    OptionPayload {
        label: String,
        value: String,
    }
}

payload_shape! {
    PaymentPayload {
        amount: f64,
        currency: String,
        description: String,
    }
}

payload_shape! {
    /// Row or column label of a matrix question.
    MatrixLabelPayload {
        label: String,
    }
}

payload_shape! {
    WalletConnectPayload {
        chains: Vec<String>,
    }
}

payload_shape! {
    ConditionalLogicPayload {
        conditions: Vec<Value>,
        actions: Vec<Value>,
    }
}

payload_shape! {
    CalculatedFieldsPayload {
        formula: String,
    }
}

payload_shape! {
    CaptchaPayload {
        provider: String,
    }
}

macro_rules! block_payloads {
    ($($variant:ident($shape:ident),)+) => {
        /// Type-specific configuration of a block.
        #[derive(Debug, Clone, PartialEq)]
        pub enum BlockPayload {
            $($variant($shape),)+
            /// Payload of a block type this client does not know, kept as-is.
            Unstructured(Value),
        }

        impl BlockPayload {
            /// Decode `raw` into the shape registered for `block_type`.
            ///
            /// # Errors
            ///
            /// Returns [`PayloadError`] if a known shape receives something
            /// other than a JSON object or a modelled field has the wrong type.
            pub fn decode(block_type: &BlockType, raw: Value) -> Result<Self, PayloadError> {
                let decoded = match block_type {
                    $(BlockType::$variant => serde_json::from_value(raw).map(Self::$variant),)+
                    BlockType::Other(_) => Ok(Self::Unstructured(raw)),
                };
                decoded.map_err(|source| PayloadError {
                    block_type: block_type.to_string(),
                    source,
                })
            }

            /// Block type this payload was built for, or `None` when unstructured.
            #[must_use]
            pub fn block_type(&self) -> Option<BlockType> {
                match self {
                    $(Self::$variant(_) => Some(BlockType::$variant),)+
                    Self::Unstructured(_) => None,
                }
            }

            /// Layout fields, when the payload has a modelled shape.
            #[must_use]
            pub fn base(&self) -> Option<&BasePayload> {
                match self {
                    $(Self::$variant(shape) => Some(&shape.base),)+
                    Self::Unstructured(_) => None,
                }
            }
        }

        impl Serialize for BlockPayload {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                match self {
                    $(Self::$variant(shape) => shape.serialize(serializer),)+
                    Self::Unstructured(value) => value.serialize(serializer),
                }
            }
        }
    };
}

block_payloads! {
    FormTitle(HtmlPayload),
    Text(HtmlPayload),
    Label(HtmlPayload),
    Title(HtmlPayload),
    Heading1(HtmlPayload),
    Heading2(HtmlPayload),
    Heading3(HtmlPayload),
    Divider(EmptyPayload),
    PageBreak(HtmlPayload),
    ThankYouPage(HtmlPayload),
    Image(ImagePayload),
    Embed(EmbedPayload),
    EmbedVideo(MediaPayload),
    EmbedAudio(MediaPayload),
    Question(QuestionPayload),
    Matrix(MatrixPayload),
    InputText(InputTextPayload),
    InputNumber(InputNumberPayload),
    InputEmail(InputPayload),
    InputLink(InputPayload),
    InputPhoneNumber(InputPayload),
    InputDate(DateTimeInputPayload),
    InputTime(DateTimeInputPayload),
    Textarea(TextareaPayload),
    FileUpload(FileUploadPayload),
    LinearScale(LinearScalePayload),
    Rating(RatingPayload),
    HiddenFields(HiddenFieldsPayload),
    MultipleChoiceOption(OptionPayload),
    Checkbox(OptionPayload),
    DropdownOption(OptionPayload),
    RankingOption(OptionPayload),
    MultiSelectOption(OptionPayload),
    Payment(PaymentPayload),
    Signature(EmptyPayload),
    MatrixRow(MatrixLabelPayload),
    MatrixColumn(MatrixLabelPayload),
    WalletConnect(WalletConnectPayload),
    ConditionalLogic(ConditionalLogicPayload),
    CalculatedFields(CalculatedFieldsPayload),
    Captcha(CaptchaPayload),
    RespondentCountry(EmptyPayload),
}

impl BlockPayload {
    /// Serialize into the JSON object sent on the wire.
    ///
    /// # Errors
    ///
    /// Returns the serde error if a value cannot be represented as JSON
    /// (e.g. a non-finite float).
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
